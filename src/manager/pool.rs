//! Candidate pool
//!
//! The words an adaptive manager could still claim to have chosen.

use crate::core::{Charset, GuessSet, Pattern, Word};

/// Words still consistent with everything revealed so far
///
/// All words share one length. The pool only ever shrinks. Duplicate entries
/// are kept as independent candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Collect every dictionary word with `len` characters, in dictionary order
    ///
    /// # Examples
    /// ```
    /// use adaptive_hangman::core::Word;
    /// use adaptive_hangman::manager::CandidatePool;
    ///
    /// let dictionary: Vec<Word> = ["cat", "horse", "dog"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let pool = CandidatePool::of_length(&dictionary, 3);
    /// assert_eq!(pool.len(), 2);
    /// ```
    #[must_use]
    pub fn of_length(dictionary: &[Word], len: usize) -> Self {
        Self::new(
            dictionary
                .iter()
                .filter(|w| w.len() == len)
                .cloned()
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// First remaining candidate in pool order
    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.words.first()
    }

    /// Keep only the words that show exactly `pattern` under `guesses`
    ///
    /// Returns the number of words removed.
    pub fn retain_matching(
        &mut self,
        pattern: &Pattern,
        guesses: &GuessSet,
        charset: Charset,
    ) -> usize {
        let before = self.words.len();
        self.words.retain(|w| Pattern::reveal(w.text(), guesses, charset) == *pattern);
        before - self.words.len()
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn of_length_keeps_dictionary_order() {
        let dictionary = words(&["cot", "horse", "cat", "ox", "car"]);
        let pool = CandidatePool::of_length(&dictionary, 3);

        let texts: Vec<&str> = pool.iter().map(Word::text).collect();
        assert_eq!(texts, ["cot", "cat", "car"]);
        assert_eq!(pool.first().map(Word::text), Some("cot"));
    }

    #[test]
    fn of_length_keeps_duplicates() {
        let dictionary = words(&["cat", "cat", "dog"]);
        assert_eq!(CandidatePool::of_length(&dictionary, 3).len(), 3);
    }

    #[test]
    fn retain_matching_filters_exactly() {
        let mut pool = CandidatePool::new(words(&["cat", "cot", "car"]));
        let mut guesses = GuessSet::new();
        guesses.insert(Letter::new('a', Charset::Alphabetic).unwrap());
        let pattern: Pattern = "_a_".chars().collect();

        let removed = pool.retain_matching(&pattern, &guesses, Charset::Alphabetic);

        assert_eq!(removed, 1);
        assert_eq!(pool.len(), 2);
        assert!(pool.iter().all(|w| w.text() != "cot"));
    }

    #[test]
    fn empty_pool() {
        let pool = CandidatePool::default();
        assert!(pool.is_empty());
        assert!(pool.first().is_none());
    }
}
