use serde_json::json;
use serde_snbt::{
    compound, from_reader, from_str, from_str_with_options, normalize, tag_to_string, to_string,
    to_string_with_options, to_writer, Compound, Document, FoldRule, FoldTable, SnbtOptions, Tag,
};
use std::io::Cursor;

const SWORD: &str = "{id:'minecraft:diamond_sword',Count:1b,tag:{Damage:0s,Unbreakable:1b,\
display:{Name:'Excalibur',Lore:['Forged in fire','Sharp']},\
Enchantments:[{id:'minecraft:sharpness',lvl:5s},{id:'minecraft:looting',lvl:3s}],\
AttributeModifiers:[{Amount:7.5d,UUID:[I;1,2,3,4]}]}}";

fn assert_reparse(doc: &Document) {
    let snbt = to_string(doc);
    let back = from_str(&snbt).unwrap();
    assert_eq!(normalize(back), normalize(doc.clone()), "snbt: {snbt}");
}

#[test]
fn test_item_document() {
    let doc = from_str(SWORD).unwrap();
    println!("Item SNBT: {}", to_string(&doc));

    let tag = doc.get("tag").unwrap();
    assert_eq!(tag.get("Damage"), Some(&Tag::Short(0)));

    let lore = tag.get("display").and_then(|d| d.get("Lore")).unwrap();
    assert_eq!(
        lore,
        &Tag::List(vec![Tag::from("Forged in fire"), Tag::from("Sharp")])
    );

    let enchantments = tag.get("Enchantments").and_then(Tag::as_list).unwrap();
    assert_eq!(enchantments.len(), 2);
    assert_eq!(enchantments[1].get("lvl"), Some(&Tag::Short(3)));

    let uuid = tag
        .get("AttributeModifiers")
        .and_then(Tag::as_list)
        .and_then(|l| l.first())
        .and_then(|m| m.get("UUID"))
        .unwrap();
    assert_eq!(uuid, &Tag::IntArray(vec![1, 2, 3, 4]));

    assert_reparse(&doc);
}

#[test]
fn test_canonical_output_is_stable() {
    let doc = from_str("{ a : 1 , b : 'plain' , c : [ 1.5f , 2.5d ] }").unwrap();
    let once = to_string(&doc);
    assert_eq!(once, "{a:1i,b:plain,c:[1.5f,2.5d]}");

    let twice = to_string(&from_str(&once).unwrap());
    assert_eq!(once, twice);
}

#[test]
fn test_typed_arrays_written_unsuffixed() {
    let doc = Document::from(compound! {
        "b" => Tag::ByteArray(vec![-128, 0, 127]),
        "i" => Tag::IntArray(vec![i32::MIN, i32::MAX]),
        "l" => Tag::LongArray(vec![i64::MIN]),
    });
    let snbt = to_string(&doc);
    assert_eq!(
        snbt,
        "{b:[B;-128,0,127],i:[I;-2147483648,2147483647],l:[L;-9223372036854775808]}"
    );
    assert_reparse(&doc);
}

#[test]
fn test_strings_that_look_like_numbers_are_quoted() {
    let doc = Document::from(compound! {
        "a" => "5",
        "b" => "1.5f",
        "c" => "-3b",
        "d" => "5x",
        "e" => "",
        "f" => "B;oops",
    });
    let snbt = to_string(&doc);
    assert_eq!(snbt, "{a:'5',b:'1.5f',c:'-3b',d:5x,e:'',f:'B;oops'}");
    assert_reparse(&doc);

    let list = Document::Named {
        name: "l".to_string(),
        tag: Tag::List(vec![Tag::from("B;x")]),
    };
    assert_reparse(&list);
}

#[test]
fn test_floats_round_trip() {
    let doc = Document::from(compound! {
        "f" => Tag::Float(0.1),
        "tiny" => Tag::Float(f32::MIN_POSITIVE),
        "huge" => Tag::Float(f32::MAX),
        "d" => Tag::Double(1.0 / 3.0),
        "neg" => Tag::Double(-2.5e-300),
    });
    assert_reparse(&doc);
}

#[test]
fn test_special_keys_fold_and_unfold() {
    let lock = compound! { "mode" => "lock_in_slot" };
    let doc = Document::from(compound! {
        "minecraft:item_lock" => lock.clone(),
        "minecraft:keep_on_death" => compound! { "mode" => "keep" },
    });

    let snbt = to_string(&doc);
    assert_eq!(snbt, r"{minecraft\:item_lock:slot,minecraft\:keep_on_death:keep}");

    let back = from_str(&snbt).unwrap();
    assert_eq!(back.get("minecraft:item_lock"), Some(&Tag::Compound(lock)));
    assert_eq!(back, doc);
}

#[test]
fn test_plain_string_under_special_key_stays_string() {
    let doc = Document::from(compound! {
        "minecraft:item_lock" => "slot",
        "x" => 1i32,
    });

    let snbt = to_string(&doc);
    assert_eq!(snbt, r"{minecraft\:item_lock:'slot',x:1i}");

    let back = from_str(&snbt).unwrap();
    assert_eq!(back.get("minecraft:item_lock"), Some(&Tag::from("slot")));
    assert_eq!(back, doc);
    assert_eq!(to_string(&back), snbt);
}

#[test]
fn test_special_key_with_extra_fields_is_not_folded() {
    let doc = Document::from(compound! {
        "minecraft:item_lock" => compound! { "mode" => "lock_in_slot", "extra" => 1i8 },
        "other" => 1i8,
    });
    let snbt = to_string(&doc);
    assert!(snbt.contains("{mode:lock_in_slot,extra:1b}"));
    assert_reparse(&doc);
}

#[test]
fn test_custom_fold_rule() {
    let table = FoldTable::default().with_rule(
        FoldRule::new("mod:glow", "state")
            .with_form("always_on", "on")
            .with_form("always_off", "off"),
    );
    let options = SnbtOptions::new().with_fold_table(table);

    let doc = from_str_with_options("{mod\\:glow:on,n:1}", &options).unwrap();
    assert_eq!(
        doc.get("mod:glow"),
        Some(&Tag::Compound(compound! { "state" => "always_on" }))
    );
    assert_eq!(to_string_with_options(&doc, &options), r"{mod\:glow:on,n:1i}");

    // default options know nothing about this key
    assert_eq!(to_string(&doc), r"{mod\:glow:{state:always_on},n:1i}");
}

#[test]
fn test_plain_options() {
    let options = SnbtOptions::plain();
    let doc = Document::from(compound! {
        "text" => "line one\nline two",
        "minecraft:keep_on_death" => compound! { "mode" => "keep" },
    });
    let snbt = to_string_with_options(&doc, &options);
    assert_eq!(
        snbt,
        "{text:'line one\nline two',minecraft\\:keep_on_death:{mode:keep}}"
    );
    assert_eq!(from_str_with_options(&snbt, &options).unwrap(), doc);
}

#[test]
fn test_keys_with_edge_whitespace_round_trip() {
    let doc = Document::from(compound! {
        "a " => 1i32,
        "a" => 2i32,
        " b" => 3i32,
        " " => 4i32,
    });

    let snbt = to_string(&doc);
    assert_eq!(snbt, r"{a\ :1i,a:2i,\ b:3i,\ :4i}");

    let back = from_str(&snbt).unwrap();
    assert_eq!(back, doc);
    assert_eq!(back.get("a "), Some(&Tag::Int(1)));
    assert_eq!(back.get("a"), Some(&Tag::Int(2)));
}

#[test]
#[should_panic(expected = "non-finite TAG_Float")]
fn test_nan_float_is_not_written_as_string() {
    let doc = Document::from(compound! { "a" => f32::NAN });
    let _ = to_string(&doc);
}

#[test]
#[should_panic(expected = "non-finite TAG_Double")]
fn test_infinite_double_is_not_written_as_string() {
    let doc = Document::from(compound! { "b" => f64::INFINITY, "c" => 1i32 });
    let _ = to_string(&doc);
}

#[test]
fn test_bare_document_round_trip() {
    let doc = Document::Named {
        name: "minecraft:custom_name".to_string(),
        tag: Tag::from("Blade of Night"),
    };
    let snbt = to_string(&doc);
    assert_eq!(snbt, "minecraft:custom_name:'Blade of Night'");
    assert_eq!(from_str(&snbt).unwrap(), doc);

    let odd = Document::Named {
        name: "has space".to_string(),
        tag: Tag::Int(1),
    };
    assert_eq!(to_string(&odd), "{has space:1i}");
    assert_reparse(&odd);
}

#[test]
fn test_reader_and_writer() {
    let doc = from_reader(Cursor::new(SWORD.as_bytes())).unwrap();
    let mut buffer = Vec::new();
    to_writer(&mut buffer, &doc).unwrap();
    let written = String::from_utf8(buffer).unwrap();
    assert_eq!(from_str(&written).unwrap(), doc);
}

#[test]
fn test_api_bridge_round_trip() {
    let doc = from_str(SWORD).unwrap();
    let host = serde_json::to_value(&doc).unwrap();

    assert_eq!(host["Count"], json!({"__type__": 1, "__value__": 1}));
    assert_eq!(host["tag"]["display"]["Lore"][0], json!({"__type__": 8, "__value__": "Forged in fire"}));
    assert_eq!(
        host["tag"]["AttributeModifiers"][0]["UUID"],
        json!({"__type__": 11, "__value__": [1, 2, 3, 4]})
    );

    let back: Document = serde_json::from_value(host).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_api_bridge_from_host_primitives() {
    let host = json!({
        "name": "Steve",
        "level": 30,
        "xp": 0.25,
        "score": 10_000_000_000i64,
        "flags": {"__type__": 7, "__value__": [1, 0, 1]},
        "inventory": [
            {"id": "minecraft:apple", "Count": {"__type__": 1, "__value__": 3}}
        ]
    });
    let doc: Document = serde_json::from_value(host).unwrap();

    assert_eq!(doc.get("level"), Some(&Tag::Int(30)));
    assert_eq!(doc.get("xp"), Some(&Tag::Double(0.25)));
    assert_eq!(doc.get("score"), Some(&Tag::Long(10_000_000_000)));
    assert_eq!(doc.get("flags"), Some(&Tag::ByteArray(vec![1, 0, 1])));

    assert_eq!(
        to_string(&doc),
        "{name:Steve,level:30i,xp:0.25d,score:10000000000l,flags:[B;1,0,1],\
inventory:[{id:'minecraft:apple',Count:3b}]}"
    );
}

#[test]
fn test_api_bridge_rejects_bad_wrappers() {
    let result: Result<Tag, _> = serde_json::from_value(json!({"__type__": 2, "__value__": 70000}));
    assert!(result.is_err());

    let result: Result<Tag, _> = serde_json::from_value(json!({"__type__": "Int", "__value__": 1}));
    assert!(result.is_err());
}

#[test]
fn test_tag_to_string() {
    let mut c = Compound::new();
    c.insert("k".to_string(), Tag::List(vec![]));
    assert_eq!(tag_to_string(&Tag::Compound(c)), "{k:[]}");
    assert_eq!(tag_to_string(&Tag::ByteArray(vec![])), "[B;]");
}

#[test]
fn test_depth_limit() {
    let deep = format!("{{a:{}1{}}}", "[".repeat(600), "]".repeat(600));
    let err = from_str(&deep).unwrap_err();
    assert!(matches!(
        err,
        serde_snbt::Error::DepthLimitExceeded { limit: 512, .. }
    ));

    let options = SnbtOptions::new().with_max_depth(1000);
    assert!(from_str_with_options(&deep, &options).is_ok());
}
