//! # serde_snbt
//!
//! A parser, canonical serializer and Serde bridge for readable SNBT tag trees.
//!
//! ## What is SNBT?
//!
//! SNBT is the human-typed spelling of a typed tag tree: compounds of named
//! entries, heterogeneous lists, homogeneous typed arrays and numeric scalars
//! whose type is carried by a one-letter suffix.
//!
//! ```text
//! {Count:1b,id:'minecraft:stone',Lore:[a,'b c'],Ids:[I;1,2,3]}
//! ```
//!
//! ## Key Features
//!
//! - **Typed Tree**: [`Tag`] stores each value in its native Rust type, so ranges and
//!   typed-array homogeneity hold by construction
//! - **Precise Errors**: every parse failure is a single [`Error`] carrying a byte offset
//! - **Canonical Output**: the serializer writes one spelling per tree, and re-parsing it
//!   yields the same tree
//! - **Special Keys**: well-known component keys fold into short forms via a data-driven
//!   [`FoldTable`]
//! - **Serde Bridge**: [`Tag`] and [`Document`] serialize to the host runtime's
//!   `{"__type__", "__value__"}` shape with any serde format
//! - **No Unsafe Code**: Written entirely in safe Rust with zero unsafe blocks
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_snbt = "0.1"
//! ```
//!
//! ### Parsing and Serializing
//!
//! ```rust
//! use serde_snbt::{from_str, to_string, Tag};
//!
//! let doc = from_str("{Count: 5b, Name: 'Diamond Sword', Tags: [a, b]}").unwrap();
//! assert_eq!(doc.get("Count"), Some(&Tag::Byte(5)));
//!
//! let text = to_string(&doc);
//! assert_eq!(text, "{Count:5b,Name:'Diamond Sword',Tags:[a,b]}");
//! assert_eq!(from_str(&text).unwrap(), doc);
//! ```
//!
//! ### Building Trees with compound!
//!
//! ```rust
//! use serde_snbt::{compound, tag_to_string, Tag};
//!
//! let item = compound! {
//!     "id" => "minecraft:apple",
//!     "Count" => 3i8,
//! };
//! assert_eq!(tag_to_string(&Tag::Compound(item)), "{id:'minecraft:apple',Count:3b}");
//! ```
//!
//! ### Talking to the Host
//!
//! ```rust
//! use serde_snbt::{from_str, Document};
//!
//! let doc = from_str("{Count:5b}").unwrap();
//! let host = serde_json::to_string(&doc).unwrap();
//! assert_eq!(host, r#"{"Count":{"__type__":1,"__value__":5}}"#);
//!
//! let back: Document = serde_json::from_str(&host).unwrap();
//! assert_eq!(back, doc);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: single pass over the input, one method per grammar rule
//! - **Serialization**: O(n) into a pre-allocated buffer
//! - **Nesting**: bounded by [`SnbtOptions::max_depth`], so hostile input cannot exhaust the stack
//!
//! ## Syntax Reference
//!
//! See the [`syntax`] module for the grammar as implemented by this library.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Parse, inspect and write a document
//! - **`api_bridge.rs`** - Convert between SNBT and the host's JSON shape
//! - **`special_keys.rs`** - Short forms for well-known keys and custom fold rules
//!
//! Run any example with: `cargo run --example <name>`

pub mod api;
pub mod de;
pub mod error;
pub mod fold;
mod literal;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod syntax;
pub mod tag;

pub use api::normalize;
pub use de::Parser;
pub use error::{Error, Result};
pub use fold::{FoldRule, FoldTable};
pub use map::Compound;
pub use options::SnbtOptions;
pub use ser::Serializer;
pub use tag::{Document, Tag, TagType};

use std::io;

/// Parse a document from SNBT text.
///
/// The text is either a bare `key:value` pair or a brace-wrapped compound.
/// Blank input is an empty document.
///
/// # Examples
///
/// ```rust
/// use serde_snbt::{from_str, Document, Tag};
///
/// let doc = from_str("Items:[1,2]").unwrap();
/// assert_eq!(
///     doc,
///     Document::Named {
///         name: "Items".to_string(),
///         tag: Tag::List(vec![Tag::Int(1), Tag::Int(2)]),
///     }
/// );
/// ```
///
/// # Errors
///
/// Returns the first syntax, range or typing error with its byte offset.
pub fn from_str(s: &str) -> Result<Document> {
    Parser::from_str(s).parse_document()
}

/// Parse a document from SNBT text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_snbt::{from_str_with_options, SnbtOptions, Tag};
///
/// // Without folding the short form stays a plain string
/// let options = SnbtOptions::new().with_fold_special_keys(false);
/// let doc = from_str_with_options(r"{minecraft\:keep_on_death:keep}", &options).unwrap();
/// assert_eq!(doc.get("minecraft:keep_on_death"), Some(&Tag::from("keep")));
/// ```
///
/// # Errors
///
/// Returns the first syntax, range or typing error with its byte offset.
pub fn from_str_with_options(s: &str, options: &SnbtOptions) -> Result<Document> {
    Parser::with_options(s, options.clone()).parse_document()
}

/// Parse a document from UTF-8 bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not valid SNBT.
pub fn from_slice(v: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Parse a document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use serde_snbt::{from_reader, Tag};
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"{a:1s}")).unwrap();
/// assert_eq!(doc.get("a"), Some(&Tag::Short(1)));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid SNBT.
pub fn from_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Serialize a document to canonical SNBT text.
///
/// # Panics
///
/// Panics if the tree holds a non-finite `Float` or `Double`.
///
/// # Examples
///
/// ```rust
/// use serde_snbt::{compound, to_string, Document};
///
/// let doc = Document::from(compound! { "a" => 1i32, "b" => "x y" });
/// assert_eq!(to_string(&doc), "{a:1i,b:'x y'}");
/// ```
#[must_use]
pub fn to_string(document: &Document) -> String {
    to_string_with_options(document, &SnbtOptions::default())
}

/// Serialize a document with custom options.
#[must_use]
pub fn to_string_with_options(document: &Document, options: &SnbtOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.serialize_document(document);
    serializer.into_inner()
}

/// Serialize a single tag to SNBT text with default options.
///
/// # Examples
///
/// ```rust
/// use serde_snbt::{tag_to_string, Tag};
///
/// assert_eq!(tag_to_string(&Tag::LongArray(vec![1, 2])), "[L;1,2]");
/// ```
#[must_use]
pub fn tag_to_string(tag: &Tag) -> String {
    let mut serializer = Serializer::new(SnbtOptions::default());
    serializer.serialize_tag(tag);
    serializer.into_inner()
}

/// Serialize a document to a writer.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer<W>(mut writer: W, document: &Document) -> Result<()>
where
    W: io::Write,
{
    writer
        .write_all(to_string(document).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_item() {
        let text = "{id:'minecraft:diamond_sword',Count:1b,tag:{Damage:0i,Enchantments:[{id:sharpness,lvl:5s}]}}";
        let doc = from_str(text).unwrap();
        assert_eq!(to_string(&doc), text);
    }

    #[test]
    fn test_top_level_forms_normalize_equal() {
        let bare = from_str("Items:[1,2]").unwrap();
        let braced = from_str("{Items:[1,2]}").unwrap();
        assert_ne!(bare, braced);
        assert_eq!(normalize(bare), normalize(braced));
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        assert!(matches!(from_slice(&[0xff, 0xfe]), Err(Error::Custom(_))));
        assert_eq!(from_slice(b"a:1b").unwrap().get("a"), Some(&Tag::Byte(1)));
    }

    #[test]
    fn test_to_writer() {
        let doc = from_str("{a:[B;1,2]}").unwrap();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &doc).unwrap();
        assert_eq!(buffer, b"a:[B;1,2]");
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::Double(1.5).to_string(), "1.5d");
        assert_eq!(Tag::from("two words").to_string(), "'two words'");
    }

    #[test]
    fn test_options_are_honored_both_ways() {
        let options = SnbtOptions::plain();
        let doc = from_str_with_options(r"{minecraft\:item_lock:slot}", &options).unwrap();
        assert_eq!(doc.get("minecraft:item_lock"), Some(&Tag::from("slot")));
        assert_eq!(
            to_string_with_options(&doc, &options),
            "minecraft:item_lock:slot"
        );

        let folded = from_str(r"{minecraft\:item_lock:slot}").unwrap();
        assert!(folded.get("minecraft:item_lock").unwrap().is_compound());
        assert_eq!(to_string(&folded), "minecraft:item_lock:slot");
    }
}
