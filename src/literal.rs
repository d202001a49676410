//! Lexical rules shared by the parser and the serializer.
//!
//! - the scalar-literal rule that turns an unquoted token into a typed scalar
//! - the single-quoted string rule
//! - key escaping and the quoting test used when writing strings
//!
//! The scalar-literal rule tries, in order: a numeric type suffix, a plain
//! integer (`Int`), a plain decimal (`Float`), and finally falls back to the
//! raw text as a `String`:
//!
//! ```rust
//! use serde_snbt::{from_str, Tag};
//!
//! let doc = from_str("{a:5b,b:5,c:5.0,d:5x}").unwrap();
//! assert_eq!(doc.get("a"), Some(&Tag::Byte(5)));
//! assert_eq!(doc.get("b"), Some(&Tag::Int(5)));
//! assert_eq!(doc.get("c"), Some(&Tag::Float(5.0)));
//! assert_eq!(doc.get("d"), Some(&Tag::from("5x")));
//! ```

use crate::{Error, Result, Tag, TagType};
use std::borrow::Cow;

/// Characters a serialized compound key escapes with a backslash.
pub(crate) const KEY_ESCAPES: [char; 8] = ['\\', ':', '{', '}', '[', ']', '\'', '"'];

/// Characters that force a string value into single quotes. `;` keeps a
/// leading list element such as `B;x` from reading back as an array prefix.
const VALUE_RESERVED: [char; 10] = [',', ':', ';', '{', '}', '[', ']', '\'', '"', '\\'];

/// Applies the scalar-literal rule to an already trimmed token.
///
/// `position` is where the token starts in the input and is only used for
/// error reporting.
pub(crate) fn parse_scalar(text: &str, position: usize) -> Result<Tag> {
    if let Some(tag) = parse_suffixed(text, position)? {
        return Ok(tag);
    }

    if is_integer_syntax(text) {
        let value = parse_i64(text, TagType::Int, position)?;
        return integral_tag(value, TagType::Int)
            .ok_or_else(|| Error::numeric_range(position, TagType::Int, text));
    }

    if is_float_syntax(text) {
        return float_tag(text, TagType::Float, position, text);
    }

    Ok(Tag::String(text.to_string()))
}

/// Parses one typed-array element.
///
/// An unsuffixed integer adopts the array's element type; anything else must
/// produce exactly that type through the scalar-literal rule.
pub(crate) fn parse_array_element(text: &str, position: usize, element: TagType) -> Result<Tag> {
    if is_integer_syntax(text) {
        let value = parse_i64(text, element, position)?;
        return integral_tag(value, element)
            .ok_or_else(|| Error::numeric_range(position, element, text));
    }

    let tag = parse_scalar(text, position)?;
    if tag.tag_type() != element {
        return Err(Error::ArrayTypeMismatch {
            position,
            expected: element,
            found: tag.tag_type(),
            text: text.to_string(),
        });
    }
    Ok(tag)
}

/// Rule 1: a trailing type suffix over a numeric body.
///
/// Returns `Ok(None)` when the token does not look like a suffixed number so
/// the caller can fall through to the next rule.
fn parse_suffixed(text: &str, position: usize) -> Result<Option<Tag>> {
    let Some(last) = text.chars().last() else {
        return Ok(None);
    };
    let Some(tag_type) = TagType::from_suffix(last) else {
        return Ok(None);
    };

    let body = &text[..text.len() - last.len_utf8()];
    if !is_float_syntax(body) {
        return Ok(None);
    }

    if tag_type.is_integral() {
        if !is_integer_syntax(body) {
            // a fractional or exponent body can never fit an integral type
            return Err(Error::numeric_range(position, tag_type, text));
        }
        let value = parse_i64(body, tag_type, position)?;
        return integral_tag(value, tag_type)
            .map(Some)
            .ok_or_else(|| Error::numeric_range(position, tag_type, text));
    }

    float_tag(body, tag_type, position, text).map(Some)
}

fn parse_i64(digits: &str, tag_type: TagType, position: usize) -> Result<i64> {
    digits
        .parse::<i64>()
        .map_err(|_| Error::numeric_range(position, tag_type, digits))
}

/// Narrows an `i64` into the integral tag type, `None` when it does not fit.
pub(crate) fn integral_tag(value: i64, tag_type: TagType) -> Option<Tag> {
    match tag_type {
        TagType::Byte => i8::try_from(value).ok().map(Tag::Byte),
        TagType::Short => i16::try_from(value).ok().map(Tag::Short),
        TagType::Int => i32::try_from(value).ok().map(Tag::Int),
        TagType::Long => Some(Tag::Long(value)),
        _ => None,
    }
}

/// Parses in the target precision directly, so a shortest `f32` spelling
/// reads back to the same `f32`.
fn float_tag(body: &str, tag_type: TagType, position: usize, text: &str) -> Result<Tag> {
    let out_of_range = || Error::numeric_range(position, tag_type, text);
    match tag_type {
        TagType::Float => match body.parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(Tag::Float(v)),
            _ => Err(out_of_range()),
        },
        _ => match body.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Tag::Double(v)),
            _ => Err(out_of_range()),
        },
    }
}

/// `[+-]?[0-9]+`
fn is_integer_syntax(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `[+-]?(digits[.digits?] | .digits)([eE][+-]?digits)?`
///
/// Words such as `nan` or `inf` are deliberately not numbers.
fn is_float_syntax(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => is_integer_syntax(exp),
    }
}

/// Reads a single-quoted string starting at the opening quote at `start`.
///
/// Returns the unescaped content and the index just past the closing quote.
pub(crate) fn scan_quoted(input: &str, start: usize) -> Result<(String, usize)> {
    let mut value = String::new();
    let mut chars = input[start + 1..].char_indices();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '\'' => return Ok((value, start + 1 + offset + 1)),
            '\\' => match chars.next() {
                Some((_, 'n')) => value.push('\n'),
                Some((_, 't')) => value.push('\t'),
                Some((_, 'r')) => value.push('\r'),
                // quotes, backslash and anything else pass through literally
                Some((_, other)) => value.push(other),
                None => break,
            },
            other => value.push(other),
        }
    }

    Err(Error::UnterminatedString { position: start })
}

/// Prefixes every reserved key character with a backslash.
///
/// Leading and trailing whitespace is escaped as well, since the parser trims
/// unescaped whitespace around a key.
pub(crate) fn escape_key(key: &str) -> Cow<'_, str> {
    let core = key.trim();
    if !key.contains(KEY_ESCAPES) && core.len() == key.len() {
        return Cow::Borrowed(key);
    }

    let lead = key.len() - key.trim_start().len();
    let tail = core.len() + lead;
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.char_indices() {
        let edge = ch.is_whitespace() && (i < lead || i >= tail);
        if edge || KEY_ESCAPES.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    Cow::Owned(out)
}

/// Reverses [`escape_key`]. A backslash before any other character is kept.
pub(crate) fn unescape_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(&next) = chars.peek() {
                if KEY_ESCAPES.contains(&next) || next.is_whitespace() {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

/// Trims trailing whitespace from raw key text, keeping an escaped whitespace
/// character at the very end.
pub(crate) fn trim_key_end(raw: &str) -> &str {
    let trimmed = raw.trim_end();
    let slashes = trimmed.bytes().rev().take_while(|&b| b == b'\\').count();
    if slashes % 2 == 0 {
        return trimmed;
    }
    match raw[trimmed.len()..].chars().next() {
        Some(escaped) => &raw[..trimmed.len() + escaped.len_utf8()],
        None => trimmed,
    }
}

/// Whether a string value must be written single-quoted to read back unchanged.
pub(crate) fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s.chars().any(char::is_whitespace)
        || s.contains(VALUE_RESERVED)
        || !matches!(parse_scalar(s, 0), Ok(Tag::String(_)))
}

/// Writes `s` single-quoted with backslash escapes.
pub(crate) fn write_quoted(out: &mut String, s: &str, escape_control_chars: bool) {
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' if escape_control_chars => out.push_str("\\n"),
            '\t' if escape_control_chars => out.push_str("\\t"),
            '\r' if escape_control_chars => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}
