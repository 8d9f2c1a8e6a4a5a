//! Dictionary word representation
//!
//! A Word is a lower-cased dictionary entry. It may contain separators (a space
//! between the parts of a multi-word entry) and other literal punctuation, but
//! never the symbols reserved for pattern display.

use super::letter::Charset;
use super::pattern::{HIDDEN, SEPARATOR_SYMBOL};
use std::fmt;

/// A candidate secret word
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    len: usize,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    ReservedSymbol(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::ReservedSymbol(c) => {
                write!(f, "Word must not contain the display symbol '{c}'")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - It contains the hidden placeholder or the displayed separator symbol
    ///
    /// # Examples
    /// ```
    /// use adaptive_hangman::core::Word;
    ///
    /// let word = Word::new("Ice Cream").unwrap();
    /// assert_eq!(word.text(), "ice cream");
    /// assert_eq!(word.len(), 9);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("a_b").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(c) = text
            .chars()
            .find(|&c| c == HIDDEN || c == SEPARATOR_SYMBOL)
        {
            return Err(WordError::ReservedSymbol(c));
        }

        let len = text.chars().count();
        Ok(Self { text, len })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of character positions (not bytes)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; a Word has at least one character
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if at least one position is hidden under `charset`
    #[must_use]
    pub fn has_guessable(&self, charset: Charset) -> bool {
        self.text.chars().any(|c| charset.is_guessable(c))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_lowercases() {
        let word = Word::new("CAT").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_counts_characters_not_bytes() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_keeps_separators_and_punctuation() {
        let word = Word::new("jack-in-the-box").unwrap();
        assert_eq!(word.text(), "jack-in-the-box");

        let phrase = Word::new("hot dog").unwrap();
        assert_eq!(phrase.len(), 7);
    }

    #[test]
    fn word_rejects_reserved_symbols() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("c_t"), Err(WordError::ReservedSymbol('_')));
        assert_eq!(Word::new("and/or"), Err(WordError::ReservedSymbol('/')));
    }

    #[test]
    fn word_has_guessable() {
        assert!(Word::new("r2d2").unwrap().has_guessable(Charset::Alphabetic));
        assert!(!Word::new("1984").unwrap().has_guessable(Charset::Alphabetic));
        assert!(Word::new("1984").unwrap().has_guessable(Charset::Alphanumeric));
    }

    #[test]
    fn word_display() {
        let word = Word::new("Crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
