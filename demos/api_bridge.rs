//! Converting between SNBT and the host's typed JSON shape.
//!
//! Every scalar and typed array crosses the boundary as
//! `{"__type__": id, "__value__": value}`.
//!
//! Run with: cargo run --example api_bridge

use serde_snbt::{from_str, normalize, to_string, Document};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Readable -> API
    let doc = from_str("Items:[{Slot:0b,id:'minecraft:apple',Count:3b}]")?;
    let host = serde_json::to_string_pretty(&doc)?;
    println!("Host tree:\n{}\n", host);

    // API -> readable; bare host numbers and strings are accepted too
    let incoming = r#"{
        "Health": {"__type__": 5, "__value__": 20.0},
        "Level": 7,
        "Name": "Steve",
        "Seeds": {"__type__": 12, "__value__": [1, 2, 3]}
    }"#;
    let player: Document = serde_json::from_str(incoming)?;
    println!("Readable: {}", to_string(&player));

    // The round trip through the host keeps the tree intact
    let back: Document = serde_json::from_str(&host)?;
    assert_eq!(normalize(back), normalize(doc));
    println!("✓ Host round-trip successful");

    Ok(())
}
