//! SNBT Syntax Reference
//!
//! This module documents the readable tag-tree syntax as implemented by this
//! library.
//!
//! # Overview
//!
//! A document is a tree of typed tags. Every scalar has one of six numeric
//! types or is a string; containers are compounds (named entries), lists
//! (any elements) and typed arrays (one numeric element type).
//!
//! # Top Level
//!
//! Two shapes are accepted, surrounded by optional whitespace:
//!
//! ```text
//! Items:[1,2]          # bare pair, key matches [A-Za-z0-9_:]+
//! {Items:[1,2]}        # brace-wrapped compound
//! ```
//!
//! The bare key takes the longest run of key characters that ends in a colon,
//! so `minecraft:custom_name:Blade` names the key `minecraft:custom_name`.
//! Blank input is an empty document. Anything after the document other than
//! whitespace is an error.
//!
//! Both shapes of the same single entry normalize to the same document; see
//! [`normalize`](crate::normalize).
//!
//! # Scalars
//!
//! An unquoted token runs up to the next `,`, `}`, `]` or unescaped `:` and is
//! trimmed. The token is read by the first rule that applies:
//!
//! | Rule | Example | Result |
//! |------|---------|--------|
//! | Numeric body + suffix | `5b`, `-3s`, `7i`, `9L`, `1.5f`, `2d` | Byte, Short, Int, Long, Float, Double |
//! | Plain integer | `5` | Int |
//! | Plain decimal | `5.0`, `.25`, `1e3` | Float |
//! | Anything else | `5x`, `stone`, `nan` | String |
//!
//! Suffixes are case-insensitive. A numeric body that does not fit its type
//! (`200b`, `1.5b`, `3000000000`) is a range error, never a silent widening.
//!
//! # Strings
//!
//! Single quotes delimit a string that may contain any character:
//!
//! ```text
//! 'hello world'
//! 'it\'s'              # \' is a quote
//! 'C:\\temp'           # \\ is a backslash
//! 'two\nlines'         # \n, \t, \r are control characters
//! ```
//!
//! Any other escaped character stands for itself.
//!
//! When writing, a string stays unquoted unless it is empty, contains
//! whitespace, contains one of `, : ; { } [ ] ' " \`, or would read back as a
//! number.
//!
//! # Compounds
//!
//! ```text
//! {id:'minecraft:stone',Count:64b,display:{Name:Rock}}
//! ```
//!
//! A key runs up to its first unescaped colon. Inside keys, the characters
//! `\ : { } [ ] ' "` are written with a backslash:
//!
//! ```text
//! {minecraft\:custom_data:{}}
//! ```
//!
//! Whitespace around a key is not part of it. A key that starts or ends with
//! whitespace escapes that whitespace too (`{\ a\ :1i}` has the key `" a "`).
//!
//! Keys are unique within a compound; a repeated key is an error. Entry order
//! is preserved. A trailing comma before `}` is accepted.
//!
//! # Lists
//!
//! ```text
//! [1,'a',2.0f]         # elements may have different types
//! [{id:a},{id:b}]
//! ```
//!
//! An element written as `key:value` is an error.
//!
//! # Typed Arrays
//!
//! ```text
//! [B;1b,2b,3b]         # Byte array
//! [I;1,2,3]            # Int array
//! [L;10l,20]           # Long array
//! ```
//!
//! Unsuffixed integers take the array's element type. A suffixed element of
//! another type (`[B;1b,2i]`) is a type mismatch reported at that element.
//! Other upper-case prefixes such as `[X;...]` are rejected.
//!
//! # Special Keys
//!
//! Some well-known keys hold a compound whose only field selects a mode. With
//! folding enabled these are written and read in a short form:
//!
//! | Key | Full form | Short form |
//! |-----|-----------|------------|
//! | `minecraft:item_lock` | `{mode:lock_in_slot}` | `slot` |
//! | `minecraft:item_lock` | `{mode:lock_in_inventory}` | `inventory` |
//! | `minecraft:keep_on_death` | `{mode:keep}` | `keep` |
//!
//! Only an unquoted token is expanded. A plain string that happens to equal a
//! short form is written quoted (`minecraft:item_lock:'slot'`) and stays a
//! string.
//!
//! The table is extensible; see [`FoldTable`](crate::FoldTable).
//!
//! # Errors
//!
//! Parsing stops at the first problem and reports it with the byte offset
//! where it was detected. There is no partial result.
//!
//! # Limitations
//!
//! - **Non-finite floats**: `NaN` and infinities have no spelling; `nan` reads as a string,
//!   and serializing a tree that holds one panics
//! - **Comments**: Not supported in the syntax
