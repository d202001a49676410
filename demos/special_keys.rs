//! Short forms for well-known component keys.
//!
//! Run with: cargo run --example special_keys

use serde_snbt::{
    compound, from_str_with_options, to_string, to_string_with_options, Document, FoldRule,
    FoldTable, SnbtOptions,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let doc = Document::from(compound! {
        "minecraft:item_lock" => compound! { "mode" => "lock_in_inventory" },
        "minecraft:keep_on_death" => compound! { "mode" => "keep" },
    });

    println!("Folded:   {}", to_string(&doc));
    println!("Expanded: {}", to_string_with_options(&doc, &SnbtOptions::plain()));

    // Teach the table a new key
    let table = FoldTable::default().with_rule(
        FoldRule::new("mymod:glow", "mode")
            .with_form("always", "on")
            .with_form("never", "off"),
    );
    let options = SnbtOptions::new().with_fold_table(table);

    let parsed = from_str_with_options(r"{mymod\:glow:on}", &options)?;
    println!("Custom:   {:?}", parsed.get("mymod:glow"));
    println!("Written:  {}", to_string_with_options(&parsed, &options));

    Ok(())
}
