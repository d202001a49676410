//! Ordered map type for compound tags.
//!
//! [`Compound`] wraps an [`IndexMap`] so entries keep their insertion order,
//! which keeps serialized output deterministic: a compound is written back in
//! the order its keys were read.
//!
//! ## Examples
//!
//! ```rust
//! use serde_snbt::{Compound, Tag};
//!
//! let mut map = Compound::new();
//! map.insert("id".to_string(), Tag::from("minecraft:stone"));
//! map.insert("Count".to_string(), Tag::Byte(64));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("id").and_then(Tag::as_str), Some("minecraft:stone"));
//! ```

use crate::Tag;
use indexmap::IndexMap;

/// An ordered map of string keys to tags.
///
/// # Examples
///
/// ```rust
/// use serde_snbt::{Compound, Tag};
///
/// let mut map = Compound::new();
/// map.insert("first".to_string(), Tag::Int(1));
/// map.insert("second".to_string(), Tag::Int(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound(IndexMap<String, Tag>);

impl Compound {
    #[must_use]
    pub fn new() -> Self {
        Compound(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Compound(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in place
    /// (keeping the original position) and the old value is returned.
    pub fn insert(&mut self, key: String, value: Tag) -> Option<Tag> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Tag> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Tag> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Tag> {
        self.0.iter()
    }
}

impl IntoIterator for Compound {
    type Item = (String, Tag);
    type IntoIter = indexmap::map::IntoIter<String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Tag);
    type IntoIter = indexmap::map::Iter<'a, String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Tag)> for Compound {
    fn from_iter<T: IntoIterator<Item = (String, Tag)>>(iter: T) -> Self {
        Compound(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = Compound::new();
        map.insert("a".to_string(), Tag::Int(1));
        map.insert("b".to_string(), Tag::Int(2));
        assert_eq!(map.insert("a".to_string(), Tag::Int(3)), Some(Tag::Int(1)));

        let entries: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
        assert_eq!(entries, vec![("a", Tag::Int(3)), ("b", Tag::Int(2))]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut map: Compound = ["x", "y", "z"]
            .iter()
            .map(|k| (k.to_string(), Tag::from(*k)))
            .collect();
        map.remove("x");
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["y", "z"]);
        assert!(!map.contains_key("x"));
    }
}
