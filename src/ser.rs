//! SNBT serialization.
//!
//! This module provides the [`Serializer`] that writes a typed tag tree back
//! to readable SNBT text.
//!
//! ## Overview
//!
//! The output is canonical for a given tree and options:
//!
//! - **Typed numbers**: every numeric scalar carries its lower-case suffix (`5b`, `2.5f`, `7i`)
//! - **Typed arrays**: `[B;1,2,3]` with unsuffixed elements
//! - **Quote minimization**: strings are unquoted unless they would read back differently
//! - **Key escaping**: reserved characters in compound keys are backslash-escaped
//! - **Special-key folding**: well-known keys are written in their short form
//!
//! ## Usage
//!
//! ```rust
//! use serde_snbt::{from_str, to_string};
//!
//! let doc = from_str("{ name : 'hello world', tags : [ a , b ] }").unwrap();
//! assert_eq!(to_string(&doc), "{name:'hello world',tags:[a,b]}");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_snbt::{Serializer, SnbtOptions, Tag};
//!
//! let mut serializer = Serializer::new(SnbtOptions::new());
//! serializer.serialize_tag(&Tag::List(vec![Tag::Int(1), Tag::Byte(2)]));
//! assert_eq!(serializer.into_inner(), "[1i,2b]");
//! ```

use crate::literal;
use crate::{Compound, Document, SnbtOptions, Tag};
use std::fmt::Write;

/// The SNBT serializer.
///
/// Writing returns no errors. Every well-formed tree has a spelling.
///
/// # Panics
///
/// A `Float` or `Double` holding `NaN` or an infinity has no spelling that
/// reads back as a number, so writing one panics instead of producing text
/// that would parse as a string.
pub struct Serializer {
    output: String,
    options: SnbtOptions,
}

impl Serializer {
    pub fn new(options: SnbtOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes a document.
    ///
    /// A single entry whose key fits the bare top-level grammar is written as
    /// `key:value`; anything else is written as a brace-wrapped compound.
    pub fn serialize_document(&mut self, document: &Document) {
        match document {
            Document::Named { name, tag } if is_bare_key(name) => {
                self.write_entry(name, tag, false);
            }
            Document::Named { name, tag } => {
                self.output.push('{');
                self.write_entry(name, tag, true);
                self.output.push('}');
            }
            Document::Unnamed(compound) => match compound.iter().next() {
                Some((name, tag)) if compound.len() == 1 && is_bare_key(name) => {
                    self.write_entry(name, tag, false);
                }
                _ => self.write_compound(compound),
            },
        }
    }

    /// Writes a single tag.
    pub fn serialize_tag(&mut self, tag: &Tag) {
        match tag {
            Tag::Byte(v) => self.write_number(v, 'b'),
            Tag::Short(v) => self.write_number(v, 's'),
            Tag::Int(v) => self.write_number(v, 'i'),
            Tag::Long(v) => self.write_number(v, 'l'),
            Tag::Float(v) => {
                assert!(v.is_finite(), "non-finite TAG_Float {v} has no SNBT spelling");
                self.write_number(v, 'f');
            }
            Tag::Double(v) => {
                assert!(v.is_finite(), "non-finite TAG_Double {v} has no SNBT spelling");
                self.write_number(v, 'd');
            }
            Tag::String(s) => self.write_string(s),
            Tag::List(items) => {
                self.output.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.output.push(',');
                    }
                    self.serialize_tag(item);
                }
                self.output.push(']');
            }
            Tag::Compound(compound) => self.write_compound(compound),
            Tag::ByteArray(values) => self.write_array("B;", values),
            Tag::IntArray(values) => self.write_array("I;", values),
            Tag::LongArray(values) => self.write_array("L;", values),
        }
    }

    fn write_number<T: std::fmt::Display>(&mut self, value: T, suffix: char) {
        // writing into a String cannot fail
        let _ = write!(self.output, "{value}{suffix}");
    }

    #[inline]
    fn write_string(&mut self, s: &str) {
        if literal::needs_quotes(s) {
            literal::write_quoted(&mut self.output, s, self.options.escape_control_chars);
        } else {
            self.output.push_str(s);
        }
    }

    fn write_array<T: std::fmt::Display>(&mut self, prefix: &str, values: &[T]) {
        self.output.push('[');
        self.output.push_str(prefix);
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            let _ = write!(self.output, "{value}");
        }
        self.output.push(']');
    }

    fn write_compound(&mut self, compound: &Compound) {
        self.output.push('{');
        for (i, (key, value)) in compound.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_entry(key, value, true);
        }
        self.output.push('}');
    }

    fn write_entry(&mut self, key: &str, value: &Tag, escape: bool) {
        if escape {
            self.output.push_str(&literal::escape_key(key));
        } else {
            self.output.push_str(key);
        }
        self.output.push(':');

        let folding = self.options.folding();
        let short = folding
            .and_then(|table| table.fold(key, value))
            .map(str::to_string);
        let shadows_short_form = match (folding, value) {
            (Some(table), Tag::String(s)) => table.is_short_form(key, s),
            _ => false,
        };

        match (short, value) {
            (Some(short), _) => {
                log::trace!("folded special key {key:?} to {short:?}");
                self.output.push_str(&short);
            }
            (None, Tag::String(s)) if shadows_short_form => {
                literal::write_quoted(&mut self.output, s, self.options.escape_control_chars);
            }
            (None, _) => self.serialize_tag(value),
        }
    }
}

/// Keys the top-level grammar reads back verbatim: `[A-Za-z0-9_:]+`.
fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ser(tag: &Tag) -> String {
        let mut serializer = Serializer::new(SnbtOptions::default());
        serializer.serialize_tag(tag);
        serializer.into_inner()
    }

    fn ser_doc(doc: &Document) -> String {
        let mut serializer = Serializer::new(SnbtOptions::default());
        serializer.serialize_document(doc);
        serializer.into_inner()
    }

    fn compound(entries: &[(&str, Tag)]) -> Compound {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_numeric_suffixes() {
        assert_eq!(ser(&Tag::Byte(-5)), "-5b");
        assert_eq!(ser(&Tag::Short(300)), "300s");
        assert_eq!(ser(&Tag::Int(7)), "7i");
        assert_eq!(ser(&Tag::Long(1 << 40)), "1099511627776l");
        assert_eq!(ser(&Tag::Float(2.5)), "2.5f");
        assert_eq!(ser(&Tag::Double(0.1)), "0.1d");
        assert_eq!(ser(&Tag::Float(5.0)), "5f");
    }

    #[test]
    fn test_string_quoting() {
        assert_eq!(ser(&Tag::from("hello")), "hello");
        assert_eq!(ser(&Tag::from("hello world")), "'hello world'");
        assert_eq!(ser(&Tag::from("it's")), r"'it\'s'");
        assert_eq!(ser(&Tag::from("a\\b")), r"'a\\b'");
        assert_eq!(ser(&Tag::from("line\nbreak")), r"'line\nbreak'");
        assert_eq!(ser(&Tag::from("")), "''");
        assert_eq!(ser(&Tag::from("12")), "'12'");
    }

    #[test]
    fn test_plain_options_keep_control_chars() {
        let mut serializer = Serializer::new(SnbtOptions::plain());
        serializer.serialize_tag(&Tag::from("a\tb"));
        assert_eq!(serializer.into_inner(), "'a\tb'");
    }

    #[test]
    fn test_arrays_and_lists() {
        assert_eq!(ser(&Tag::ByteArray(vec![1, 2, 3])), "[B;1,2,3]");
        assert_eq!(ser(&Tag::IntArray(vec![])), "[I;]");
        assert_eq!(ser(&Tag::LongArray(vec![-1])), "[L;-1]");
        assert_eq!(
            ser(&Tag::List(vec![Tag::Int(1), Tag::from("a"), Tag::Float(2.0)])),
            "[1i,a,2f]"
        );
    }

    #[test]
    fn test_compound_key_escaping() {
        let c = compound(&[("minecraft:name", Tag::from("x")), ("{odd}", Tag::Int(1))]);
        assert_eq!(
            ser(&Tag::Compound(c)),
            r"{minecraft\:name:x,\{odd\}:1i}"
        );
    }

    #[test]
    fn test_document_shapes() {
        let named = Document::Named {
            name: "Items".to_string(),
            tag: Tag::List(vec![Tag::Int(1)]),
        };
        assert_eq!(ser_doc(&named), "Items:[1i]");

        let single = Document::Unnamed(compound(&[("Count", Tag::Byte(1))]));
        assert_eq!(ser_doc(&single), "Count:1b");

        let odd_key = Document::Unnamed(compound(&[("my key", Tag::Byte(1))]));
        assert_eq!(ser_doc(&odd_key), "{my key:1b}");

        let many = Document::Unnamed(compound(&[("a", Tag::Int(1)), ("b", Tag::Int(2))]));
        assert_eq!(ser_doc(&many), "{a:1i,b:2i}");

        assert_eq!(ser_doc(&Document::empty()), "{}");
    }

    #[test]
    fn test_special_key_folding() {
        let lock = Tag::Compound(compound(&[("mode", Tag::from("lock_in_inventory"))]));
        let item = Tag::Compound(compound(&[
            ("minecraft:item_lock", lock.clone()),
            ("Count", Tag::Byte(1)),
        ]));
        assert_eq!(ser(&item), r"{minecraft\:item_lock:inventory,Count:1b}");

        // folding only applies to direct children of the special key's compound
        let nested = Tag::Compound(compound(&[("wrapper", lock.clone())]));
        assert_eq!(ser(&nested), "{wrapper:{mode:lock_in_inventory}}");

        let mut plain = Serializer::new(SnbtOptions::plain());
        plain.serialize_tag(&item);
        assert_eq!(
            plain.into_inner(),
            r"{minecraft\:item_lock:{mode:lock_in_inventory},Count:1b}"
        );
    }

    #[test]
    fn test_plain_string_under_special_key_is_quoted() {
        let item = Tag::Compound(compound(&[
            ("minecraft:item_lock", Tag::from("slot")),
            ("x", Tag::Int(1)),
        ]));
        assert_eq!(ser(&item), r"{minecraft\:item_lock:'slot',x:1i}");

        let named = Document::Named {
            name: "minecraft:keep_on_death".to_string(),
            tag: Tag::from("keep"),
        };
        assert_eq!(ser_doc(&named), "minecraft:keep_on_death:'keep'");

        let mut plain = Serializer::new(SnbtOptions::plain());
        plain.serialize_tag(&item);
        assert_eq!(plain.into_inner(), r"{minecraft\:item_lock:slot,x:1i}");
    }

    #[test]
    fn test_key_edge_whitespace_escaped() {
        let c = compound(&[("a ", Tag::Int(1)), (" b c", Tag::Int(2)), (" ", Tag::Int(3))]);
        assert_eq!(ser(&Tag::Compound(c)), r"{a\ :1i,\ b c:2i,\ :3i}");
    }

    #[test]
    #[should_panic(expected = "non-finite TAG_Float")]
    fn test_nan_float_panics() {
        ser(&Tag::Float(f32::NAN));
    }

    #[test]
    #[should_panic(expected = "non-finite TAG_Double")]
    fn test_infinite_double_panics() {
        ser(&Tag::List(vec![Tag::Double(f64::INFINITY)]));
    }

    #[test]
    fn test_bare_key_grammar() {
        assert!(is_bare_key("minecraft:item_lock"));
        assert!(is_bare_key("Items_2"));
        assert!(!is_bare_key(""));
        assert!(!is_bare_key("a b"));
        assert!(!is_bare_key("a-b"));
    }
}
