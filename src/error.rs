//! Error types for SNBT parsing and the host API bridge.
//!
//! Every parse failure carries the byte offset into the original input where
//! parsing stopped, plus the offending text where there is one. There is no
//! recovery mode: a malformed document yields a single error and no tree.
//!
//! ## Error Categories
//!
//! - **Shape errors**: the top level is neither `key:value` nor `{...}`
//! - **Unterminated input**: a string, compound, list or array never closed
//! - **Structure errors**: missing separators, missing key colons, named tags in lists
//! - **Type errors**: typed array mismatches and numeric range violations
//! - **I/O and bridge errors**: reader failures and malformed host API trees
//!
//! ## Examples
//!
//! ```rust
//! use serde_snbt::{from_str, Error};
//!
//! let err = from_str("[B;1b,2i]").unwrap_err();
//! assert!(matches!(err, Error::InvalidTopLevelShape { .. }));
//!
//! let err = from_str("{data:[B;1b,2i]}").unwrap_err();
//! assert!(matches!(err, Error::ArrayTypeMismatch { .. }));
//! assert_eq!(err.position(), Some(12));
//! ```

use crate::tag::TagType;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced while converting SNBT.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input is neither a bare `key:value` pair nor a brace-wrapped compound
    #[error("invalid top-level shape at position {position}: expected `key:value` or `{{...}}`")]
    InvalidTopLevelShape { position: usize },

    #[error("unterminated string at position {position}")]
    UnterminatedString { position: usize },

    #[error("unterminated compound starting at position {position}")]
    UnterminatedCompound { position: usize },

    #[error("unterminated list starting at position {position}")]
    UnterminatedList { position: usize },

    #[error("unterminated array starting at position {position}")]
    UnterminatedArray { position: usize },

    /// Expected `,` or the closing bracket/brace
    #[error("missing separator or closing {closer} at position {position}, found {found:?}")]
    MissingSeparator {
        position: usize,
        closer: char,
        found: char,
    },

    #[error("missing `:` after compound key at position {position}")]
    MissingKeyColon { position: usize },

    #[error("named tag not allowed inside list at position {position}")]
    NamedTagInList { position: usize },

    #[error("unknown array prefix {prefix:?} at position {position}")]
    UnknownArrayPrefix { position: usize, prefix: String },

    #[error("array element {text:?} at position {position}: expected {expected}, found {found}")]
    ArrayTypeMismatch {
        position: usize,
        expected: TagType,
        found: TagType,
        text: String,
    },

    #[error("numeric literal {text:?} at position {position} is out of range for {tag_type}")]
    NumericRangeError {
        position: usize,
        tag_type: TagType,
        text: String,
    },

    #[error("invalid token at position {position}")]
    InvalidToken { position: usize },

    #[error("duplicate compound key {key:?} at position {position}")]
    DuplicateKey { position: usize, key: String },

    #[error("unexpected trailing characters at position {position}")]
    TrailingCharacters { position: usize },

    #[error("nesting deeper than {limit} levels at position {position}")]
    DepthLimitExceeded { position: usize, limit: usize },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed host API tree or other bridge failure
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Byte offset into the parsed input where the error was detected.
    ///
    /// Returns `None` for errors that do not originate in the text parser.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_snbt::from_str;
    ///
    /// let err = from_str("{name:'Steve}").unwrap_err();
    /// assert_eq!(err.position(), Some(6));
    /// ```
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::InvalidTopLevelShape { position }
            | Error::UnterminatedString { position }
            | Error::UnterminatedCompound { position }
            | Error::UnterminatedList { position }
            | Error::UnterminatedArray { position }
            | Error::MissingSeparator { position, .. }
            | Error::MissingKeyColon { position }
            | Error::NamedTagInList { position }
            | Error::UnknownArrayPrefix { position, .. }
            | Error::ArrayTypeMismatch { position, .. }
            | Error::NumericRangeError { position, .. }
            | Error::InvalidToken { position }
            | Error::DuplicateKey { position, .. }
            | Error::TrailingCharacters { position }
            | Error::DepthLimitExceeded { position, .. } => Some(*position),
            Error::Io(_) | Error::Custom(_) => None,
        }
    }

    /// Returns `true` for errors caused by running out of input.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(
            self,
            Error::UnterminatedString { .. }
                | Error::UnterminatedCompound { .. }
                | Error::UnterminatedList { .. }
                | Error::UnterminatedArray { .. }
        )
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_snbt::Error;
    ///
    /// let err = Error::custom("unknown __type__ 42");
    /// assert!(err.to_string().contains("unknown __type__ 42"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    pub(crate) fn numeric_range(position: usize, tag_type: TagType, text: &str) -> Self {
        Error::NumericRangeError {
            position,
            tag_type,
            text: text.to_string(),
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
