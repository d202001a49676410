//! Typed tag tree representation.
//!
//! This module provides the [`Tag`] enum, the closed set of node variants a
//! tag tree is built from, together with [`TagType`] (the 13 type ids of the
//! format) and [`Document`] (the two accepted top-level shapes).
//!
//! ## Core Types
//!
//! - [`Tag`]: scalars (`Byte`, `Short`, `Int`, `Long`, `Float`, `Double`, `String`),
//!   containers (`List`, `Compound`) and typed arrays (`ByteArray`, `IntArray`, `LongArray`)
//! - [`TagType`]: type ids, diagnostic names and numeric suffixes
//! - [`Document`]: a single named tag or an unnamed compound
//!
//! Each variant stores its native Rust type, so a typed array can never hold a
//! value of another type and a `Byte` can never leave `[-128, 127]`.
//!
//! ## Examples
//!
//! ```rust
//! use serde_snbt::{Tag, TagType};
//!
//! let count = Tag::from(5i8);
//! assert_eq!(count.tag_type(), TagType::Byte);
//! assert_eq!(count.tag_type().name(), "TAG_Byte");
//!
//! let ids = Tag::IntArray(vec![1, 2, 3]);
//! assert_eq!(ids.tag_type().id(), 11);
//! ```

use crate::Compound;
use std::fmt;

/// The 13 type ids of the tagged-value format.
///
/// `End` and the container ids are structural; only the six numeric ids and
/// `String` ever describe a scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagType {
    End,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    ByteArray,
    String,
    List,
    Compound,
    IntArray,
    LongArray,
}

impl TagType {
    const ALL: [TagType; 13] = [
        TagType::End,
        TagType::Byte,
        TagType::Short,
        TagType::Int,
        TagType::Long,
        TagType::Float,
        TagType::Double,
        TagType::ByteArray,
        TagType::String,
        TagType::List,
        TagType::Compound,
        TagType::IntArray,
        TagType::LongArray,
    ];

    /// Numeric id used by the host runtime (`__type__`).
    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a type by its numeric id.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_snbt::TagType;
    ///
    /// assert_eq!(TagType::from_id(8), Some(TagType::String));
    /// assert_eq!(TagType::from_id(13), None);
    /// ```
    #[must_use]
    pub fn from_id(id: u8) -> Option<TagType> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// Diagnostic name, e.g. `TAG_Int_Array`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TagType::End => "TAG_End",
            TagType::Byte => "TAG_Byte",
            TagType::Short => "TAG_Short",
            TagType::Int => "TAG_Int",
            TagType::Long => "TAG_Long",
            TagType::Float => "TAG_Float",
            TagType::Double => "TAG_Double",
            TagType::ByteArray => "TAG_Byte_Array",
            TagType::String => "TAG_String",
            TagType::List => "TAG_List",
            TagType::Compound => "TAG_Compound",
            TagType::IntArray => "TAG_Int_Array",
            TagType::LongArray => "TAG_Long_Array",
        }
    }

    /// Lower-case literal suffix for numeric scalar types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_snbt::TagType;
    ///
    /// assert_eq!(TagType::Short.suffix(), Some('s'));
    /// assert_eq!(TagType::String.suffix(), None);
    /// ```
    #[must_use]
    pub const fn suffix(self) -> Option<char> {
        match self {
            TagType::Byte => Some('b'),
            TagType::Short => Some('s'),
            TagType::Int => Some('i'),
            TagType::Long => Some('l'),
            TagType::Float => Some('f'),
            TagType::Double => Some('d'),
            _ => None,
        }
    }

    /// Maps a literal suffix (either case) back to its numeric type.
    #[must_use]
    pub fn from_suffix(suffix: char) -> Option<TagType> {
        match suffix.to_ascii_lowercase() {
            'b' => Some(TagType::Byte),
            's' => Some(TagType::Short),
            'i' => Some(TagType::Int),
            'l' => Some(TagType::Long),
            'f' => Some(TagType::Float),
            'd' => Some(TagType::Double),
            _ => None,
        }
    }

    /// Element type of a typed array type.
    #[must_use]
    pub const fn element_type(self) -> Option<TagType> {
        match self {
            TagType::ByteArray => Some(TagType::Byte),
            TagType::IntArray => Some(TagType::Int),
            TagType::LongArray => Some(TagType::Long),
            _ => None,
        }
    }

    /// Returns `true` for the integral scalar types.
    #[inline]
    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            TagType::Byte | TagType::Short | TagType::Int | TagType::Long
        )
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the typed tag tree.
///
/// # Examples
///
/// ```rust
/// use serde_snbt::{Compound, Tag};
///
/// let mut item = Compound::new();
/// item.insert("id".to_string(), Tag::from("minecraft:apple"));
/// item.insert("Count".to_string(), Tag::Byte(3));
///
/// let tag = Tag::Compound(item);
/// assert!(tag.is_compound());
/// assert_eq!(tag.get("Count").and_then(Tag::as_i64), Some(3));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    List(Vec<Tag>),
    Compound(Compound),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    /// The type id of this node.
    #[must_use]
    pub const fn tag_type(&self) -> TagType {
        match self {
            Tag::Byte(_) => TagType::Byte,
            Tag::Short(_) => TagType::Short,
            Tag::Int(_) => TagType::Int,
            Tag::Long(_) => TagType::Long,
            Tag::Float(_) => TagType::Float,
            Tag::Double(_) => TagType::Double,
            Tag::String(_) => TagType::String,
            Tag::List(_) => TagType::List,
            Tag::Compound(_) => TagType::Compound,
            Tag::ByteArray(_) => TagType::ByteArray,
            Tag::IntArray(_) => TagType::IntArray,
            Tag::LongArray(_) => TagType::LongArray,
        }
    }

    /// Returns `true` for leaf values (numbers and strings).
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(
            self,
            Tag::List(_) | Tag::Compound(_) | Tag::ByteArray(_) | Tag::IntArray(_) | Tag::LongArray(_)
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(self, Tag::Compound(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Tag::List(_))
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    /// Widens any integral scalar to `i64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_snbt::Tag;
    ///
    /// assert_eq!(Tag::Short(-7).as_i64(), Some(-7));
    /// assert_eq!(Tag::Float(1.0).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Tag::Byte(v) => Some(i64::from(*v)),
            Tag::Short(v) => Some(i64::from(*v)),
            Tag::Int(v) => Some(i64::from(*v)),
            Tag::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Widens any floating-point scalar to `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Tag::Float(v) => Some(f64::from(*v)),
            Tag::Double(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Tag>> {
        match self {
            Tag::List(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a direct child of a compound.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.as_compound().and_then(|c| c.get(key))
    }
}

impl From<i8> for Tag {
    fn from(value: i8) -> Self {
        Tag::Byte(value)
    }
}

impl From<i16> for Tag {
    fn from(value: i16) -> Self {
        Tag::Short(value)
    }
}

impl From<i32> for Tag {
    fn from(value: i32) -> Self {
        Tag::Int(value)
    }
}

impl From<i64> for Tag {
    fn from(value: i64) -> Self {
        Tag::Long(value)
    }
}

impl From<f32> for Tag {
    fn from(value: f32) -> Self {
        Tag::Float(value)
    }
}

impl From<f64> for Tag {
    fn from(value: f64) -> Self {
        Tag::Double(value)
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Tag::String(value)
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::String(value.to_string())
    }
}

impl From<Vec<Tag>> for Tag {
    fn from(value: Vec<Tag>) -> Self {
        Tag::List(value)
    }
}

impl From<Compound> for Tag {
    fn from(value: Compound) -> Self {
        Tag::Compound(value)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::tag_to_string(self))
    }
}

/// A complete top-level document.
///
/// The readable syntax accepts either a bare `key:value` pair or a
/// brace-wrapped compound; both become a `Document`.
///
/// # Examples
///
/// ```rust
/// use serde_snbt::{from_str, normalize};
///
/// let bare = from_str("Items:[1,2]").unwrap();
/// let wrapped = from_str("{Items:[1,2]}").unwrap();
/// assert_eq!(normalize(bare), normalize(wrapped));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Document {
    Named { name: String, tag: Tag },
    Unnamed(Compound),
}

impl Document {
    /// An empty unnamed document, what blank input parses to.
    #[must_use]
    pub fn empty() -> Self {
        Document::Unnamed(Compound::new())
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Document::Named { .. } => 1,
            Document::Unnamed(c) => c.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a top-level entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Tag> {
        match self {
            Document::Named { name, tag } => (name == key).then_some(tag),
            Document::Unnamed(c) => c.get(key),
        }
    }

    /// Iterates top-level entries in order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&String, &Tag)> + '_> {
        match self {
            Document::Named { name, tag } => Box::new(std::iter::once((name, tag))),
            Document::Unnamed(c) => Box::new(c.iter()),
        }
    }

    /// Flattens either shape into its entries as a compound.
    #[must_use]
    pub fn into_compound(self) -> Compound {
        match self {
            Document::Named { name, tag } => {
                let mut c = Compound::with_capacity(1);
                c.insert(name, tag);
                c
            }
            Document::Unnamed(c) => c,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Compound> for Document {
    fn from(value: Compound) -> Self {
        Document::Unnamed(value)
    }
}
