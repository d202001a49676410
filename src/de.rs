//! SNBT parsing.
//!
//! This module provides the [`Parser`] that turns readable SNBT text into a
//! typed [`Document`].
//!
//! ## Overview
//!
//! The parser is a small recursive-descent parser over a byte cursor:
//!
//! - **Value dispatch**: the first non-whitespace character picks the rule
//!   (`{` compound, `[` list or typed array, `'` quoted string, anything else
//!   an unquoted scalar)
//! - **Typed arrays**: `[B;...]`, `[I;...]` and `[L;...]` must be homogeneous
//! - **Positions**: every error reports the byte offset into the original input
//! - **Depth guard**: nesting beyond [`SnbtOptions::max_depth`] is rejected
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_snbt::{from_str, Tag};
//!
//! let doc = from_str("Items:[{id:'minecraft:apple',Count:3b}]").unwrap();
//! let items = doc.get("Items").and_then(Tag::as_list).unwrap();
//! assert_eq!(items[0].get("Count"), Some(&Tag::Byte(3)));
//! ```

use crate::literal;
use crate::{Compound, Document, Error, Result, SnbtOptions, Tag, TagType};

/// The SNBT parser.
///
/// Holds the input, a cursor and the current nesting depth. A parser is used
/// for one document; it keeps no state beyond that.
pub struct Parser<'de> {
    input: &'de str,
    position: usize,
    depth: usize,
    options: SnbtOptions,
}

impl<'de> Parser<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Self::with_options(input, SnbtOptions::default())
    }

    pub fn with_options(input: &'de str, options: SnbtOptions) -> Self {
        Parser {
            input,
            position: 0,
            depth: 0,
            options,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn descend(&mut self, position: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(Error::DepthLimitExceeded {
                position,
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// Parses the whole input as a document.
    ///
    /// Accepts blank input (an empty document), a bare `key:value` pair, or a
    /// brace-wrapped compound. Only whitespace may follow the document.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered, positioned in the original input.
    pub fn parse_document(&mut self) -> Result<Document> {
        log::debug!("parsing SNBT document ({} bytes)", self.input.len());

        self.skip_whitespace();
        let end = self.input.trim_end().len();
        if self.position >= end {
            return Ok(Document::empty());
        }

        if let Some((name, value_start)) = self.bare_key() {
            self.position = value_start;
            let tag = self.parse_entry_value(name)?;
            self.expect_end()?;
            log::trace!("parsed named document {name:?}");
            return Ok(Document::Named {
                name: name.to_string(),
                tag,
            });
        }

        let open = self.position;
        if self.peek_char() == Some('{') && self.input[..end].ends_with('}') {
            self.next_char();
            let compound = self.parse_compound(open)?;
            self.expect_end()?;
            log::trace!("parsed unnamed document with {} entries", compound.len());
            return Ok(Document::Unnamed(compound));
        }

        Err(Error::InvalidTopLevelShape { position: open })
    }

    /// Matches `[A-Za-z0-9_:]+` immediately followed by `:` at the cursor.
    ///
    /// Like a backtracking regex, the longest such key wins. Returns the key
    /// and the index just past its colon.
    fn bare_key(&self) -> Option<(&'de str, usize)> {
        let rest = &self.input[self.position..];
        let run = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == ':'))
            .unwrap_or(rest.len());
        let colon = rest[..run].rfind(':')?;
        if colon == 0 {
            return None;
        }
        Some((&rest[..colon], self.position + colon + 1))
    }

    fn expect_end(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.position < self.input.len() {
            return Err(Error::TrailingCharacters {
                position: self.position,
            });
        }
        Ok(())
    }

    /// Parses one value of any kind at the cursor.
    pub fn parse_value(&mut self) -> Result<Tag> {
        self.skip_whitespace();
        let start = self.position;

        match self.peek_char() {
            Some('{') => {
                self.next_char();
                Ok(Tag::Compound(self.parse_compound(start)?))
            }
            Some('[') => {
                self.next_char();
                match self.array_prefix()? {
                    Some(element) => self.parse_array(start, element),
                    None => self.parse_list(start),
                }
            }
            Some('\'') => {
                let (value, end) = literal::scan_quoted(self.input, start)?;
                self.position = end;
                Ok(Tag::String(value))
            }
            _ => {
                let (text, text_start) = self.scan_token()?;
                literal::parse_scalar(text, text_start)
            }
        }
    }

    /// Consumes an unquoted token up to `,`, `}`, `]` or an unescaped `:`.
    ///
    /// Returns the trimmed text and where it starts.
    fn scan_token(&mut self) -> Result<(&'de str, usize)> {
        let start = self.position;
        let bytes = self.input.as_bytes();
        let mut end = start;

        while end < bytes.len() {
            match bytes[end] {
                b'\\' if bytes.get(end + 1) == Some(&b':') => end += 2,
                b',' | b'}' | b']' | b':' => break,
                _ => end += 1,
            }
        }
        self.position = end;

        let raw = &self.input[start..end];
        let text = raw.trim();
        if text.is_empty() {
            return Err(Error::InvalidToken { position: start });
        }
        let text_start = start + (raw.len() - raw.trim_start().len());
        Ok((text, text_start))
    }

    /// Looks past `[` for a typed array prefix without consuming it.
    fn array_prefix(&self) -> Result<Option<TagType>> {
        let rest = self.input[self.position..].trim_start();
        let mut chars = rest.chars();
        let (Some(letter), Some(';')) = (chars.next(), chars.next()) else {
            return Ok(None);
        };

        match letter {
            'B' => Ok(Some(TagType::Byte)),
            'I' => Ok(Some(TagType::Int)),
            'L' => Ok(Some(TagType::Long)),
            other if other.is_ascii_uppercase() => Err(Error::UnknownArrayPrefix {
                position: self.input.len() - rest.len(),
                prefix: format!("{other};"),
            }),
            _ => Ok(None),
        }
    }

    /// Compound rule; the opening `{` at `open` is already consumed.
    fn parse_compound(&mut self, open: usize) -> Result<Compound> {
        self.descend(open)?;
        let mut compound = Compound::new();

        loop {
            self.skip_whitespace();
            match self.peek_char() {
                None => return Err(Error::UnterminatedCompound { position: open }),
                Some('}') => {
                    self.next_char();
                    break;
                }
                Some(_) => {}
            }

            let key_start = self.position;
            let key = self.scan_key()?;
            let value = self.parse_entry_value(&key)?;

            if compound.contains_key(&key) {
                return Err(Error::DuplicateKey {
                    position: key_start,
                    key,
                });
            }
            compound.insert(key, value);

            self.skip_whitespace();
            let at = self.position;
            match self.next_char() {
                Some('}') => break,
                Some(',') => continue,
                Some(found) => {
                    return Err(Error::MissingSeparator {
                        position: at,
                        closer: '}',
                        found,
                    })
                }
                None => return Err(Error::UnterminatedCompound { position: open }),
            }
        }

        self.ascend();
        Ok(compound)
    }

    /// Scans a compound key through its unescaped `:` and unescapes it.
    fn scan_key(&mut self) -> Result<String> {
        let start = self.position;
        let bytes = self.input.as_bytes();
        let mut end = start;

        loop {
            match bytes.get(end) {
                Some(b'\\')
                    if bytes
                        .get(end + 1)
                        .is_some_and(|b| literal::KEY_ESCAPES.contains(&char::from(*b))) =>
                {
                    end += 2;
                }
                Some(b':') => break,
                Some(b'}') | None => return Err(Error::MissingKeyColon { position: start }),
                Some(_) => end += 1,
            }
        }

        self.position = end + 1;
        Ok(literal::unescape_key(literal::trim_key_end(&self.input[start..end])))
    }

    /// List rule; the opening `[` at `open` is already consumed.
    fn parse_list(&mut self, open: usize) -> Result<Tag> {
        self.descend(open)?;
        let mut items = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek_char() {
                None => return Err(Error::UnterminatedList { position: open }),
                Some(']') => {
                    self.next_char();
                    break;
                }
                Some(_) => {}
            }

            let element_start = self.position;
            let item = self.parse_value()?;

            self.skip_whitespace();
            let at = self.position;
            match self.next_char() {
                Some(':') => {
                    return Err(Error::NamedTagInList {
                        position: element_start,
                    })
                }
                Some(']') => {
                    items.push(item);
                    break;
                }
                Some(',') => items.push(item),
                Some(found) => {
                    return Err(Error::MissingSeparator {
                        position: at,
                        closer: ']',
                        found,
                    })
                }
                None => return Err(Error::UnterminatedList { position: open }),
            }
        }

        self.ascend();
        Ok(Tag::List(items))
    }

    /// Typed array rule; `[` is consumed and the prefix has been peeked.
    fn parse_array(&mut self, open: usize, element: TagType) -> Result<Tag> {
        self.descend(open)?;
        self.skip_whitespace();
        self.position += 2;

        let mut builder = ArrayBuilder::new(element);
        let bytes = self.input.as_bytes();

        loop {
            self.skip_whitespace();
            match self.peek_char() {
                None => return Err(Error::UnterminatedArray { position: open }),
                Some(']') => {
                    self.next_char();
                    break;
                }
                Some(_) => {}
            }

            let start = self.position;
            let end = match bytes[start..].iter().position(|&b| b == b',' || b == b']') {
                Some(offset) => start + offset,
                None => return Err(Error::UnterminatedArray { position: open }),
            };

            let text = self.input[start..end].trim_end();
            if text.is_empty() {
                return Err(Error::InvalidToken { position: start });
            }
            let tag = literal::parse_array_element(text, start, element)?;
            builder.push(tag, start, text)?;

            self.position = end + 1;
            if bytes[end] == b']' {
                break;
            }
        }

        self.ascend();
        Ok(builder.finish())
    }

    /// Parses the value of a `key:value` entry.
    ///
    /// An unquoted short form under a special key expands to its compound; a
    /// quoted one stays a string.
    fn parse_entry_value(&mut self, key: &str) -> Result<Tag> {
        self.skip_whitespace();
        let quoted = self.peek_char() == Some('\'');
        let value = self.parse_value()?;
        if quoted {
            return Ok(value);
        }

        match self
            .options
            .folding()
            .and_then(|table| table.unfold(key, &value))
        {
            Some(expanded) => {
                log::trace!("expanded short form for special key {key:?}");
                Ok(expanded)
            }
            None => Ok(value),
        }
    }
}

/// Accumulates typed array elements in their native representation.
enum ArrayBuilder {
    Byte(Vec<i8>),
    Int(Vec<i32>),
    Long(Vec<i64>),
}

impl ArrayBuilder {
    fn new(element: TagType) -> Self {
        match element {
            TagType::Byte => ArrayBuilder::Byte(Vec::new()),
            TagType::Long => ArrayBuilder::Long(Vec::new()),
            _ => ArrayBuilder::Int(Vec::new()),
        }
    }

    fn element(&self) -> TagType {
        match self {
            ArrayBuilder::Byte(_) => TagType::Byte,
            ArrayBuilder::Int(_) => TagType::Int,
            ArrayBuilder::Long(_) => TagType::Long,
        }
    }

    fn push(&mut self, tag: Tag, position: usize, text: &str) -> Result<()> {
        let expected = self.element();
        match (self, tag) {
            (ArrayBuilder::Byte(values), Tag::Byte(v)) => values.push(v),
            (ArrayBuilder::Int(values), Tag::Int(v)) => values.push(v),
            (ArrayBuilder::Long(values), Tag::Long(v)) => values.push(v),
            (_, other) => {
                return Err(Error::ArrayTypeMismatch {
                    position,
                    expected,
                    found: other.tag_type(),
                    text: text.to_string(),
                })
            }
        }
        Ok(())
    }

    fn finish(self) -> Tag {
        match self {
            ArrayBuilder::Byte(values) => Tag::ByteArray(values),
            ArrayBuilder::Int(values) => Tag::IntArray(values),
            ArrayBuilder::Long(values) => Tag::LongArray(values),
        }
    }
}
