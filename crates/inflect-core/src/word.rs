// Word values and the read-only view the inflection engine works on

use std::borrow::Cow;
use std::fmt;

use crate::character::{is_upper, reversed_lower};
use crate::exclusion::ExclusionSet;

/// Error raised when raw input cannot be turned into a word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// The input bytes are not valid UTF-8.
    #[error("word is not valid UTF-8 (invalid sequence at byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

// ---------------------------------------------------------------------------
// WordView
// ---------------------------------------------------------------------------

/// The minimal capability the inflection engine needs from a word.
///
/// Suffix matching walks the lower-cased, reversed character sequence from
/// offset 0, so a suffix of the word is a prefix of that sequence. Offsets
/// and lengths are in characters, never bytes.
///
/// Implementors only provide the text, the reversed form and a way to derive
/// a new value of the same type; everything else has a default in terms of
/// those.
pub trait WordView {
    /// The original text, casing untouched.
    fn text(&self) -> &str;

    /// The text lower-cased and reversed, one character per input character.
    fn reversed_lower(&self) -> Cow<'_, [char]>;

    /// Build a new word of the same kind from inflected text.
    fn derive(&self, text: String) -> Self
    where
        Self: Sized;

    /// Length in characters.
    fn char_len(&self) -> usize {
        self.text().chars().count()
    }

    /// The lower-cased character at `offset` counted from the end of the word.
    fn reversed_char_at(&self, offset: usize) -> Option<char> {
        self.reversed_lower().get(offset).copied()
    }

    /// Slice of the original text between two character positions.
    ///
    /// Positions past the end are clamped, an inverted range yields "".
    fn slice(&self, start: usize, end: usize) -> &str {
        let text = self.text();
        let start = byte_offset(text, start);
        let end = byte_offset(text, end).max(start);
        &text[start..end]
    }

    /// Whether the original character at `offset` counted from the end is
    /// an upper-case letter.
    fn is_upper_at_reversed(&self, offset: usize) -> bool {
        self.text().chars().rev().nth(offset).is_some_and(is_upper)
    }

    /// Whether the whole word is in `set` (case-insensitive).
    fn is_excluded(&self, set: &ExclusionSet) -> bool {
        set.contains_reversed(&self.reversed_lower())
    }
}

/// Byte offset of the character at `char_idx`, or the text length when the
/// index is past the end.
fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(i, _)| i)
}

impl WordView for String {
    fn text(&self) -> &str {
        self
    }

    fn reversed_lower(&self) -> Cow<'_, [char]> {
        Cow::Owned(reversed_lower(self))
    }

    fn derive(&self, text: String) -> Self {
        text
    }
}

// ---------------------------------------------------------------------------
// Word
// ---------------------------------------------------------------------------

/// An immutable word with its reversed, lower-cased form computed up front.
///
/// Use this when the same word is inflected more than once, or when raw
/// bytes need validating first ([`Word::from_utf8`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    reversed: Vec<char>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let reversed = reversed_lower(&text);
        Self { text, reversed }
    }

    /// Validate raw bytes and build a word from them.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, WordError> {
        std::str::from_utf8(bytes)
            .map(Self::new)
            .map_err(|e| WordError::InvalidUtf8 {
                valid_up_to: e.valid_up_to(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.reversed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reversed.is_empty()
    }
}

impl WordView for Word {
    fn text(&self) -> &str {
        &self.text
    }

    fn reversed_lower(&self) -> Cow<'_, [char]> {
        Cow::Borrowed(&self.reversed)
    }

    fn derive(&self, text: String) -> Self {
        Word::new(text)
    }

    fn char_len(&self) -> usize {
        self.reversed.len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Word::new(text)
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Word::new(text)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Word {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}
