//! Special-key folding.
//!
//! A few well-known component keys carry a nested compound whose only content
//! is a "mode" string, e.g. `minecraft:item_lock:{mode:lock_in_slot}`. The
//! serializer spells such entries with a short token instead
//! (`minecraft:item_lock:slot`) and the parser expands the token back.
//!
//! Folding is presentation only: the typed tree never changes. It applies to
//! direct keys of a compound and only when the nested compound holds the mode
//! field and nothing else, so no data can be lost by folding. Only unquoted
//! tokens are expanded, so a plain string equal to a short form is written
//! quoted and reads back as a string.
//!
//! The table is plain data. Extend it with [`FoldTable::with_rule`]:
//!
//! ```rust
//! use serde_snbt::{FoldRule, FoldTable, SnbtOptions};
//!
//! let table = FoldTable::default().with_rule(
//!     FoldRule::new("mod:glow", "mode").with_form("always", "on"),
//! );
//! let options = SnbtOptions::new().with_fold_table(table);
//! assert!(options.fold_table.rule("mod:glow").is_some());
//! ```

use crate::literal;
use crate::{Compound, Tag};

/// Folding rule for one special key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoldRule {
    pub key: String,
    /// Name of the string field inside the nested compound that selects the form.
    pub mode_field: String,
    /// `(mode value, short form)` pairs, matched in order.
    pub forms: Vec<(String, String)>,
}

impl FoldRule {
    #[must_use]
    pub fn new(key: &str, mode_field: &str) -> Self {
        FoldRule {
            key: key.to_string(),
            mode_field: mode_field.to_string(),
            forms: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_form(mut self, mode: &str, short: &str) -> Self {
        self.forms.push((mode.to_string(), short.to_string()));
        self
    }

    /// Short form for a value, if the value is foldable under this rule.
    ///
    /// A short form that would need quotes cannot be expanded again and is
    /// never used.
    fn fold<'a>(&'a self, value: &Tag) -> Option<&'a str> {
        let compound = value.as_compound()?;
        if compound.len() != 1 {
            return None;
        }
        let mode = compound.get(&self.mode_field)?.as_str()?;
        self.forms
            .iter()
            .find(|(m, _)| m == mode)
            .map(|(_, short)| short.as_str())
            .filter(|short| !literal::needs_quotes(short))
    }

    fn is_short_form(&self, text: &str) -> bool {
        self.forms.iter().any(|(_, short)| short == text)
    }

    /// Full nested compound for a short form, if the value is one.
    fn unfold(&self, value: &Tag) -> Option<Tag> {
        let short = value.as_str()?;
        let (mode, _) = self.forms.iter().find(|(_, s)| s == short)?;
        let mut compound = Compound::with_capacity(1);
        compound.insert(self.mode_field.clone(), Tag::String(mode.clone()));
        Some(Tag::Compound(compound))
    }
}

/// Ordered set of [`FoldRule`]s, looked up by key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoldTable {
    rules: Vec<FoldRule>,
}

impl FoldTable {
    /// A table with no rules; folding becomes a no-op.
    #[must_use]
    pub fn empty() -> Self {
        FoldTable { rules: Vec::new() }
    }

    /// Adds a rule. A rule for a key already in the table replaces it.
    #[must_use]
    pub fn with_rule(mut self, rule: FoldRule) -> Self {
        self.rules.retain(|r| r.key != rule.key);
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn rule(&self, key: &str) -> Option<&FoldRule> {
        self.rules.iter().find(|r| r.key == key)
    }

    /// Short token to write for `key:value`, if any.
    #[must_use]
    pub fn fold(&self, key: &str, value: &Tag) -> Option<&str> {
        self.rule(key)?.fold(value)
    }

    /// Whether `text` under `key` would read back as a short form if written
    /// unquoted.
    #[must_use]
    pub fn is_short_form(&self, key: &str, text: &str) -> bool {
        self.rule(key).is_some_and(|rule| rule.is_short_form(text))
    }

    /// Expanded value for a parsed `key:value`, if `value` is a short token.
    #[must_use]
    pub fn unfold(&self, key: &str, value: &Tag) -> Option<Tag> {
        self.rule(key)?.unfold(value)
    }
}

impl Default for FoldTable {
    fn default() -> Self {
        FoldTable::empty()
            .with_rule(
                FoldRule::new("minecraft:item_lock", "mode")
                    .with_form("lock_in_slot", "slot")
                    .with_form("lock_in_inventory", "inventory"),
            )
            .with_rule(FoldRule::new("minecraft:keep_on_death", "mode").with_form("keep", "keep"))
    }
}
