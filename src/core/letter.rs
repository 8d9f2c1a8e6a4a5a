//! Guessable letters and the set of letters guessed so far
//!
//! A `Letter` is a single case-folded character that the player is allowed to
//! guess. Which characters are guessable is decided by a `Charset`.

use std::collections::BTreeSet;
use std::fmt;

/// The class of characters that are hidden and may be guessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Charset {
    /// Letters only (every dictionary-backed mode)
    #[default]
    Alphabetic,
    /// Letters and digits (two-player games whose secret contains digits)
    Alphanumeric,
}

impl Charset {
    /// Check whether `c` is hidden and guessable under this charset
    #[inline]
    #[must_use]
    pub fn is_guessable(self, c: char) -> bool {
        match self {
            Self::Alphabetic => c.is_alphabetic(),
            Self::Alphanumeric => c.is_alphanumeric(),
        }
    }

    /// Largest sensible wrong-guess budget: one per guessable ASCII symbol
    #[must_use]
    pub const fn max_budget(self) -> usize {
        match self {
            Self::Alphabetic => 26,
            Self::Alphanumeric => 36,
        }
    }
}

/// Case-fold a single character for letter identity
#[inline]
pub(crate) fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Input was blank
    Empty,
    /// Input held more than one character
    NotSingleCharacter(usize),
    /// The character is not guessable under the game's charset
    NotGuessable(char),
    /// The letter was guessed earlier in this game
    AlreadyGuessed(Letter),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Guess must not be empty"),
            Self::NotSingleCharacter(len) => {
                write!(f, "Guess must be a single character, got {len}")
            }
            Self::NotGuessable(c) => write!(f, "'{c}' is not a guessable letter"),
            Self::AlreadyGuessed(letter) => write!(f, "'{letter}' was already guessed"),
        }
    }
}

impl std::error::Error for GuessError {}

/// A single guessable character, stored lower-cased
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// Create a letter from a character
    ///
    /// # Errors
    /// Returns `GuessError::NotGuessable` if `c` is outside `charset`.
    ///
    /// # Examples
    /// ```
    /// use adaptive_hangman::core::{Charset, Letter};
    ///
    /// let letter = Letter::new('Q', Charset::Alphabetic).unwrap();
    /// assert_eq!(letter.as_char(), 'q');
    /// assert!(Letter::new('7', Charset::Alphabetic).is_err());
    /// assert!(Letter::new('7', Charset::Alphanumeric).is_ok());
    /// ```
    pub fn new(c: char, charset: Charset) -> Result<Self, GuessError> {
        if charset.is_guessable(c) {
            Ok(Self(fold(c)))
        } else {
            Err(GuessError::NotGuessable(c))
        }
    }

    /// Parse a letter from a line of user input
    ///
    /// Surrounding whitespace is ignored; exactly one character must remain.
    ///
    /// # Errors
    /// Returns `GuessError` if the input is blank, longer than one character,
    /// or not guessable under `charset`.
    pub fn parse(input: &str, charset: Charset) -> Result<Self, GuessError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();

        match (chars.next(), chars.next()) {
            (None, _) => Err(GuessError::Empty),
            (Some(c), None) => Self::new(c, charset),
            (Some(_), Some(_)) => Err(GuessError::NotSingleCharacter(trimmed.chars().count())),
        }
    }

    /// Get the underlying lower-cased character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Letters guessed so far in one game
///
/// Grows monotonically. Iteration is alphabetical, which is also the order
/// used for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessSet(BTreeSet<Letter>);

impl GuessSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a letter, returning `false` if it was already present
    pub fn insert(&mut self, letter: Letter) -> bool {
        self.0.insert(letter)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(&letter)
    }

    /// Check a raw character against the set, case-insensitively
    #[inline]
    #[must_use]
    pub fn contains_char(&self, c: char) -> bool {
        self.0.contains(&Letter(fold(c)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Letter> for GuessSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for GuessSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, letter) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{letter}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_is_lowercased() {
        let letter = Letter::new('E', Charset::Alphabetic).unwrap();
        assert_eq!(letter.as_char(), 'e');
        assert_eq!(letter, Letter::new('e', Charset::Alphabetic).unwrap());
    }

    #[test]
    fn letter_rejects_non_alphabetic() {
        assert_eq!(
            Letter::new('3', Charset::Alphabetic),
            Err(GuessError::NotGuessable('3'))
        );
        assert!(Letter::new(' ', Charset::Alphabetic).is_err());
        assert!(Letter::new('-', Charset::Alphanumeric).is_err());
    }

    #[test]
    fn parse_trims_input() {
        let letter = Letter::parse("  k\n", Charset::Alphabetic).unwrap();
        assert_eq!(letter.as_char(), 'k');
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Letter::parse("", Charset::Alphabetic), Err(GuessError::Empty));
        assert_eq!(Letter::parse("   ", Charset::Alphabetic), Err(GuessError::Empty));
        assert_eq!(
            Letter::parse("ab", Charset::Alphabetic),
            Err(GuessError::NotSingleCharacter(2))
        );
        assert_eq!(
            Letter::parse("?", Charset::Alphabetic),
            Err(GuessError::NotGuessable('?'))
        );
    }

    #[test]
    fn charset_budgets() {
        assert_eq!(Charset::Alphabetic.max_budget(), 26);
        assert_eq!(Charset::Alphanumeric.max_budget(), 36);
    }

    #[test]
    fn guess_set_grows_without_duplicates() {
        let mut guesses = GuessSet::new();
        let a = Letter::new('a', Charset::Alphabetic).unwrap();

        assert!(guesses.insert(a));
        assert!(!guesses.insert(a));
        assert_eq!(guesses.len(), 1);
        assert!(guesses.contains(a));
        assert!(guesses.contains_char('A'));
        assert!(!guesses.contains_char('b'));
    }

    #[test]
    fn guess_set_displays_sorted() {
        let guesses: GuessSet = "tea"
            .chars()
            .map(|c| Letter::new(c, Charset::Alphabetic).unwrap())
            .collect();

        assert_eq!(guesses.to_string(), "[a, e, t]");
        assert_eq!(GuessSet::new().to_string(), "[]");
    }
}
