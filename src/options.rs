//! Configuration options for SNBT conversion.
//!
//! [`SnbtOptions`] is shared by both directions: the parser reads the nesting
//! limit and the fold table, the serializer reads the fold table and the
//! escaping style.
//!
//! ## Examples
//!
//! ```rust
//! use serde_snbt::{from_str_with_options, SnbtOptions};
//!
//! // Refuse anything nested deeper than 8 levels
//! let options = SnbtOptions::new().with_max_depth(8);
//! let deep = format!("a:{}{}", "[".repeat(9), "]".repeat(9));
//! assert!(from_str_with_options(&deep, &options).is_err());
//! ```

use crate::FoldTable;

/// Default nesting limit for compounds, lists and arrays.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration options for parsing and serialization.
///
/// # Examples
///
/// ```rust
/// use serde_snbt::SnbtOptions;
///
/// let options = SnbtOptions::new();
/// assert!(options.fold_special_keys);
/// assert!(options.escape_control_chars);
///
/// // Plain spelling, no short forms, minimal escaping
/// let options = SnbtOptions::plain();
/// assert!(!options.fold_special_keys);
/// ```
#[derive(Clone, Debug)]
pub struct SnbtOptions {
    /// Fold well-known keys into short forms and expand them when parsing.
    pub fold_special_keys: bool,
    pub fold_table: FoldTable,
    /// Write newline, tab and carriage return as `\n`, `\t`, `\r` inside quoted strings.
    pub escape_control_chars: bool,
    pub max_depth: usize,
}

impl Default for SnbtOptions {
    fn default() -> Self {
        SnbtOptions {
            fold_special_keys: true,
            fold_table: FoldTable::default(),
            escape_control_chars: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SnbtOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options without folding and with only `\\` and `\'` escapes.
    #[must_use]
    pub fn plain() -> Self {
        SnbtOptions {
            fold_special_keys: false,
            escape_control_chars: false,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_fold_special_keys(mut self, fold: bool) -> Self {
        self.fold_special_keys = fold;
        self
    }

    /// Replaces the fold table.
    #[must_use]
    pub fn with_fold_table(mut self, table: FoldTable) -> Self {
        self.fold_table = table;
        self
    }

    #[must_use]
    pub fn with_escape_control_chars(mut self, escape: bool) -> Self {
        self.escape_control_chars = escape;
        self
    }

    /// Sets the maximum nesting depth accepted by the parser.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_snbt::SnbtOptions;
    ///
    /// let options = SnbtOptions::new().with_max_depth(16);
    /// assert_eq!(options.max_depth, 16);
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The active fold table, or `None` when folding is switched off.
    pub(crate) fn folding(&self) -> Option<&FoldTable> {
        self.fold_special_keys.then_some(&self.fold_table)
    }
}
