//! Reveal patterns
//!
//! A pattern is what the player sees of the secret: one symbol per character
//! position of the word. Each symbol is either
//! - the character itself, once its letter has been guessed
//! - `/` where the word has a separator (space)
//! - `_` for a guessable character that has not been guessed yet
//! - any other character unchanged (punctuation is always visible)
//!
//! Patterns double as partition keys in the adaptive managers, so they order
//! and hash by their text.

use super::letter::{Charset, GuessSet, Letter};
use std::fmt;

/// Placeholder shown for a hidden character
pub const HIDDEN: char = '_';

/// Separator between the parts of a multi-word dictionary entry
pub const SEPARATOR: char = ' ';

/// Symbol displayed in place of `SEPARATOR`
pub const SEPARATOR_SYMBOL: char = '/';

/// The positional reveal state of a word
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(String);

impl Pattern {
    /// Compute the pattern `word` shows once `guesses` have been made
    ///
    /// Pure and deterministic; the result has exactly one symbol per
    /// character of `word`.
    ///
    /// # Examples
    /// ```
    /// use adaptive_hangman::core::{Charset, GuessSet, Letter, Pattern};
    ///
    /// let mut guesses = GuessSet::new();
    /// guesses.insert(Letter::new('e', Charset::Alphabetic).unwrap());
    ///
    /// let pattern = Pattern::reveal("free time", &guesses, Charset::Alphabetic);
    /// assert_eq!(pattern.as_str(), "__ee/___e");
    /// assert!(!pattern.is_revealed());
    /// ```
    #[must_use]
    pub fn reveal(word: &str, guesses: &GuessSet, charset: Charset) -> Self {
        word.chars()
            .map(|c| {
                if guesses.contains_char(c) {
                    c
                } else if c == SEPARATOR {
                    SEPARATOR_SYMBOL
                } else if charset.is_guessable(c) {
                    HIDDEN
                } else {
                    c
                }
            })
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols (equals the word length)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether no hidden placeholder remains
    #[inline]
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        !self.0.contains(HIDDEN)
    }

    /// Number of hidden positions
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.0.chars().filter(|&c| c == HIDDEN).count()
    }

    /// Check whether `letter` is shown anywhere in the pattern
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(letter.as_char())
    }

    /// Number of positions showing `letter`
    #[must_use]
    pub fn count(&self, letter: Letter) -> usize {
        self.0.chars().filter(|&c| c == letter.as_char()).count()
    }

    /// Render with a space between symbols, the usual way to show hangman
    #[must_use]
    pub fn spaced(&self) -> String {
        let mut result = String::with_capacity(self.0.len() * 2);
        for (i, c) in self.0.chars().enumerate() {
            if i > 0 {
                result.push(' ');
            }
            result.push(c);
        }
        result
    }
}

impl FromIterator<char> for Pattern {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guesses(letters: &str) -> GuessSet {
        letters
            .chars()
            .map(|c| Letter::new(c, Charset::Alphabetic).unwrap())
            .collect()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c, Charset::Alphabetic).unwrap()
    }

    #[test]
    fn nothing_guessed_hides_every_letter() {
        let pattern = Pattern::reveal("cat", &GuessSet::new(), Charset::Alphabetic);
        assert_eq!(pattern.as_str(), "___");
        assert_eq!(pattern.hidden_count(), 3);
    }

    #[test]
    fn guessed_letters_are_shown_in_every_position() {
        let pattern = Pattern::reveal("banana", &guesses("a"), Charset::Alphabetic);
        assert_eq!(pattern.as_str(), "_a_a_a");
        assert_eq!(pattern.count(letter('a')), 3);
        assert!(pattern.contains(letter('a')));
        assert!(!pattern.contains(letter('b')));
    }

    #[test]
    fn separators_and_punctuation_are_visible() {
        let pattern = Pattern::reveal("rock 'n' roll", &GuessSet::new(), Charset::Alphabetic);
        assert_eq!(pattern.as_str(), "____/'_'/____");
    }

    #[test]
    fn digits_follow_the_charset() {
        let word = "r2d2";
        assert_eq!(
            Pattern::reveal(word, &GuessSet::new(), Charset::Alphabetic).as_str(),
            "_2_2"
        );
        assert_eq!(
            Pattern::reveal(word, &GuessSet::new(), Charset::Alphanumeric).as_str(),
            "____"
        );
    }

    #[test]
    fn uppercase_text_matches_lowercase_guess() {
        let pattern = Pattern::reveal("Paris", &guesses("p"), Charset::Alphabetic);
        assert_eq!(pattern.as_str(), "P____");
    }

    #[test]
    fn pattern_length_matches_word() {
        let set = guesses("aeiou");
        for word in ["a", "queue", "ice cream", "naïve", "x-ray"] {
            let pattern = Pattern::reveal(word, &set, Charset::Alphabetic);
            assert_eq!(pattern.len(), word.chars().count(), "{word}");
        }
    }

    #[test]
    fn revealed_once_every_letter_guessed() {
        let pattern = Pattern::reveal("ice cream", &guesses("icream"), Charset::Alphabetic);
        assert_eq!(pattern.as_str(), "ice/cream");
        assert!(pattern.is_revealed());
        assert_eq!(pattern.hidden_count(), 0);
    }

    #[test]
    fn spaced_rendering() {
        let pattern = Pattern::reveal("cat", &guesses("c"), Charset::Alphabetic);
        assert_eq!(pattern.spaced(), "c _ _");
    }

    #[test]
    fn patterns_order_by_text() {
        let a: Pattern = "ca_".chars().collect();
        let b: Pattern = "c__".chars().collect();
        assert!(a < b);
    }
}
