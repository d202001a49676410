//! Parse, inspect and write an SNBT document.
//!
//! Run with: cargo run --example simple

use serde_snbt::{from_str, to_string, Tag};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let text = "{ id: 'minecraft:diamond_sword', Count: 1b,
               tag: { Damage: 12s, display: { Name: 'Excalibur' },
                      Enchantments: [ { id: sharpness, lvl: 5s } ] } }";

    // Parse readable text into a typed tree
    let doc = from_str(text)?;
    if let Some(Tag::Byte(count)) = doc.get("Count") {
        println!("Count: {count}");
    }
    if let Some(damage) = doc.get("tag").and_then(|t| t.get("Damage")) {
        println!("Damage: {damage} ({})", damage.tag_type());
    }

    // Write it back in canonical form
    let snbt = to_string(&doc);
    println!("Canonical SNBT:\n{}\n", snbt);

    assert_eq!(from_str(&snbt)?, doc);
    println!("✓ Round-trip successful");

    // Errors carry the byte offset where parsing stopped
    match from_str("{Ids:[B;1b,2i]}") {
        Ok(_) => unreachable!(),
        Err(e) => println!("Rejected: {} (position {:?})", e, e.position()),
    }

    Ok(())
}
