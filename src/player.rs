//! Automated guesser
//!
//! A simple letter-frequency player used to drive games without a human:
//! benchmarks, and tests that play whole games.

use crate::core::{Charset, GuessSet, Letter, Pattern, Word};
use rustc_hash::FxHashMap;

/// Fallback guessing order when no known word fits the pattern
const ENGLISH_FREQUENCY: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Guesses the unguessed letter found in the most words that still fit
///
/// The player only sees what a human would: the visible pattern and the
/// letters guessed so far. A word fits when it shows the same pattern under
/// those guesses, which also rules out words containing a missed letter.
pub struct FrequencyPlayer<'a> {
    words: &'a [Word],
}

impl<'a> FrequencyPlayer<'a> {
    #[must_use]
    pub const fn new(words: &'a [Word]) -> Self {
        Self { words }
    }

    /// Words from the player's vocabulary that fit the visible state
    pub fn consistent<'p>(
        &'p self,
        pattern: &'p Pattern,
        guesses: &'p GuessSet,
        charset: Charset,
    ) -> impl Iterator<Item = &'a Word> + 'p {
        self.words.iter().filter(move |w| {
            w.len() == pattern.len() && Pattern::reveal(w.text(), guesses, charset) == *pattern
        })
    }

    /// Pick the next letter
    ///
    /// Ties go to the alphabetically first letter. Returns `None` only when
    /// every guessable letter has been tried.
    ///
    /// # Examples
    /// ```
    /// use adaptive_hangman::core::{Charset, GuessSet, Pattern, Word};
    /// use adaptive_hangman::player::FrequencyPlayer;
    ///
    /// let words: Vec<Word> = ["cat", "cot", "car"].iter().map(|w| Word::new(*w).unwrap()).collect();
    /// let player = FrequencyPlayer::new(&words);
    /// let pattern: Pattern = "___".chars().collect();
    ///
    /// let guess = player.next_guess(&pattern, &GuessSet::new(), Charset::Alphabetic).unwrap();
    /// assert_eq!(guess.as_char(), 'c');
    /// ```
    #[must_use]
    pub fn next_guess(
        &self,
        pattern: &Pattern,
        guesses: &GuessSet,
        charset: Charset,
    ) -> Option<Letter> {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();

        for word in self.consistent(pattern, guesses, charset) {
            let mut seen: Vec<char> = word
                .text()
                .chars()
                .filter(|&c| charset.is_guessable(c) && !guesses.contains_char(c))
                .collect();
            seen.sort_unstable();
            seen.dedup();

            for c in seen {
                *counts.entry(c).or_insert(0) += 1;
            }
        }

        let best = counts
            .into_iter()
            .max_by(|(a, count_a), (b, count_b)| count_a.cmp(count_b).then(b.cmp(a)))
            .map(|(c, _)| c);

        best.or_else(|| {
            ENGLISH_FREQUENCY
                .chars()
                .chain('0'..='9')
                .find(|&c| charset.is_guessable(c) && !guesses.contains_char(c))
        })
        .and_then(|c| Letter::new(c, charset).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn guesses(letters: &str) -> GuessSet {
        letters
            .chars()
            .map(|c| Letter::new(c, Charset::Alphabetic).unwrap())
            .collect()
    }

    #[test]
    fn picks_most_common_letter() {
        let vocab = words(&["bat", "cat", "hat", "dog"]);
        let player = FrequencyPlayer::new(&vocab);
        let pattern: Pattern = "___".chars().collect();

        let guess = player.next_guess(&pattern, &GuessSet::new(), Charset::Alphabetic);
        assert_eq!(guess.map(Letter::as_char), Some('a'));
    }

    #[test]
    fn ties_break_alphabetically() {
        let vocab = words(&["ab", "cd"]);
        let player = FrequencyPlayer::new(&vocab);
        let pattern: Pattern = "__".chars().collect();

        let guess = player.next_guess(&pattern, &GuessSet::new(), Charset::Alphabetic);
        assert_eq!(guess.map(Letter::as_char), Some('a'));
    }

    #[test]
    fn misses_rule_out_words() {
        let vocab = words(&["bat", "cat", "cot"]);
        let player = FrequencyPlayer::new(&vocab);
        let guessed = guesses("a");
        let pattern: Pattern = "___".chars().collect();

        let fitting: Vec<&str> = player
            .consistent(&pattern, &guessed, Charset::Alphabetic)
            .map(Word::text)
            .collect();
        assert_eq!(fitting, ["cot"]);

        let guess = player.next_guess(&pattern, &guessed, Charset::Alphabetic);
        assert_eq!(guess.map(Letter::as_char), Some('c'));
    }

    #[test]
    fn falls_back_to_english_frequency() {
        let vocab = words(&["dog"]);
        let player = FrequencyPlayer::new(&vocab);
        let pattern: Pattern = "_____".chars().collect();

        let guess = player.next_guess(&pattern, &guesses("e"), Charset::Alphabetic);
        assert_eq!(guess.map(Letter::as_char), Some('t'));
    }

    #[test]
    fn exhausted_alphabet_returns_none() {
        let vocab = words(&["dog"]);
        let player = FrequencyPlayer::new(&vocab);
        let pattern: Pattern = "___".chars().collect();
        let all = guesses(ENGLISH_FREQUENCY);

        assert!(player.next_guess(&pattern, &all, Charset::Alphabetic).is_none());
    }
}
