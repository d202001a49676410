//! Bridge between the tag tree and the host runtime's typed API shape.
//!
//! The host represents a tag tree with plain structured data, where each
//! scalar and typed array is wrapped with its type id:
//!
//! ```json
//! { "Count": { "__type__": 1, "__value__": 5 },
//!   "Lore":  ["a", "b"],
//!   "Ids":   { "__type__": 11, "__value__": [1, 2] } }
//! ```
//!
//! Compounds are maps and lists are sequences. [`Tag`] and [`Document`]
//! implement `serde::Serialize` and `serde::Deserialize` in this shape, so any
//! serde data format can carry a tree across the boundary.
//!
//! Deserialization also accepts bare primitives: an integer becomes `Int`
//! (or `Long` when it does not fit), a float becomes `Double`, a string
//! becomes `String` and a boolean becomes a `Byte` of 0 or 1.
//!
//! A map whose only keys are `__type__` and `__value__` is always read as a
//! wrapper, never as a compound.

use crate::literal;
use crate::{Compound, Document, Tag, TagType};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

const TYPE_FIELD: &str = "__type__";
const VALUE_FIELD: &str = "__value__";

fn wrapped<S, V>(serializer: S, tag_type: TagType, value: &V) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize + ?Sized,
{
    let mut map = serializer.serialize_map(Some(2))?;
    map.serialize_entry(TYPE_FIELD, &tag_type.id())?;
    map.serialize_entry(VALUE_FIELD, value)?;
    map.end()
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let tag_type = self.tag_type();
        match self {
            Tag::Byte(v) => wrapped(serializer, tag_type, v),
            Tag::Short(v) => wrapped(serializer, tag_type, v),
            Tag::Int(v) => wrapped(serializer, tag_type, v),
            Tag::Long(v) => wrapped(serializer, tag_type, v),
            Tag::Float(v) => wrapped(serializer, tag_type, v),
            Tag::Double(v) => wrapped(serializer, tag_type, v),
            Tag::String(s) => wrapped(serializer, tag_type, s),
            Tag::ByteArray(values) => wrapped(serializer, tag_type, values),
            Tag::IntArray(values) => wrapped(serializer, tag_type, values),
            Tag::LongArray(values) => wrapped(serializer, tag_type, values),
            Tag::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Tag::Compound(compound) => compound.serialize(serializer),
        }
    }
}

impl Serialize for Compound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TagVisitor;

        impl<'de> Visitor<'de> for TagVisitor {
            type Value = Tag;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a tag wrapper, primitive, sequence or map")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Tag::Byte(i8::from(value)))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(i32::try_from(value).map_or(Tag::Long(value), Tag::Int))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let value = i64::try_from(value)
                    .map_err(|_| E::custom(format!("integer {value} does not fit TAG_Long")))?;
                self.visit_i64(value)
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Tag::Double(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Tag::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Tag::String(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Tag::List(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Compound::new();
                while let Some((key, value)) = map.next_entry::<String, Tag>()? {
                    entries.insert(key, value);
                }

                let is_wrapper = entries.len() == 2
                    && entries.contains_key(TYPE_FIELD)
                    && entries.contains_key(VALUE_FIELD);
                if !is_wrapper {
                    return Ok(Tag::Compound(entries));
                }

                let id = entries.get(TYPE_FIELD).and_then(Tag::as_i64);
                let value = entries.remove(VALUE_FIELD);
                match (id, value) {
                    (Some(id), Some(value)) => unwrap_typed(id, value).map_err(de::Error::custom),
                    _ => Err(de::Error::custom("__type__ must be an integer type id")),
                }
            }
        }

        deserializer.deserialize_any(TagVisitor)
    }
}

impl<'de> Deserialize<'de> for Document {
    /// Reads a map of top-level entries as an unnamed document.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Tag::deserialize(deserializer)? {
            Tag::Compound(compound) => Ok(Document::Unnamed(compound)),
            other => Err(de::Error::custom(format!(
                "a document must be a compound, found {}",
                other.tag_type()
            ))),
        }
    }
}

/// Rebuilds a typed node from a `__type__`/`__value__` pair.
fn unwrap_typed(id: i64, value: Tag) -> Result<Tag, String> {
    let tag_type = u8::try_from(id)
        .ok()
        .and_then(TagType::from_id)
        .ok_or_else(|| format!("unknown type id {id}"))?;

    match tag_type {
        TagType::Byte | TagType::Short | TagType::Int | TagType::Long => value
            .as_i64()
            .and_then(|v| literal::integral_tag(v, tag_type))
            .ok_or_else(|| mismatch(&value, tag_type)),
        TagType::Float => number(&value)
            .map(|v| v as f32)
            .filter(|v| v.is_finite())
            .map(Tag::Float)
            .ok_or_else(|| mismatch(&value, tag_type)),
        TagType::Double => number(&value)
            .map(Tag::Double)
            .ok_or_else(|| mismatch(&value, tag_type)),
        TagType::ByteArray => elements(&value, tag_type, |t| match t {
            Tag::Byte(v) => Some(v),
            _ => None,
        })
        .map(Tag::ByteArray)
        .ok_or_else(|| mismatch(&value, tag_type)),
        TagType::IntArray => elements(&value, tag_type, |t| match t {
            Tag::Int(v) => Some(v),
            _ => None,
        })
        .map(Tag::IntArray)
        .ok_or_else(|| mismatch(&value, tag_type)),
        TagType::LongArray => elements(&value, tag_type, |t| match t {
            Tag::Long(v) => Some(v),
            _ => None,
        })
        .map(Tag::LongArray)
        .ok_or_else(|| mismatch(&value, tag_type)),
        TagType::String | TagType::List | TagType::Compound => {
            if value.tag_type() == tag_type {
                Ok(value)
            } else {
                Err(mismatch(&value, tag_type))
            }
        }
        TagType::End => Err(format!("{tag_type} cannot carry a value")),
    }
}

fn mismatch(value: &Tag, tag_type: TagType) -> String {
    format!("__value__ {value:?} is not a valid {tag_type}")
}

/// Any numeric scalar as `f64`; hosts often drop the fraction of whole floats.
fn number(value: &Tag) -> Option<f64> {
    value.as_f64().or_else(|| value.as_i64().map(|v| v as f64))
}

/// Narrows a sequence of integers into a typed array's element type.
fn elements<T>(value: &Tag, array: TagType, extract: impl Fn(Tag) -> Option<T>) -> Option<Vec<T>> {
    let element = array.element_type()?;
    value
        .as_list()?
        .iter()
        .map(|item| {
            item.as_i64()
                .and_then(|v| literal::integral_tag(v, element))
                .and_then(&extract)
        })
        .collect()
}

/// Canonical top-level shape of a document.
///
/// An unnamed document with exactly one entry becomes the named form; every
/// other document is returned unchanged. Both top-level spellings of the same
/// entry therefore normalize to equal values.
///
/// # Examples
///
/// ```rust
/// use serde_snbt::{from_str, normalize, Document, Tag};
///
/// let doc = normalize(from_str("{Items:[1,2]}").unwrap());
/// assert!(matches!(doc, Document::Named { ref name, .. } if name == "Items"));
/// ```
#[must_use]
pub fn normalize(document: Document) -> Document {
    match document {
        Document::Unnamed(compound) if compound.len() == 1 => {
            match compound.into_iter().next() {
                Some((name, tag)) => Document::Named { name, tag },
                None => Document::empty(),
            }
        }
        other => other,
    }
}
