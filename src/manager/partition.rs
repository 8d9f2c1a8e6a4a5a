//! Partitioning the candidate pool by outcome
//!
//! Every candidate would show some pattern once the pending guess is revealed.
//! Candidates showing the same pattern form one class; the selection policies
//! choose between those classes.

use super::pool::CandidatePool;
use crate::core::{Charset, GuessSet, Pattern};
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::btree_map;

/// Metadata for one class of candidates sharing a pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionClass {
    /// Number of candidates in the class
    pub count: usize,
    /// Guessable letters in the members that have not been guessed yet
    pub letters: BTreeSet<char>,
}

impl PartitionClass {
    /// Number of distinct letters the player still has to find in this class
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }
}

/// Candidate classes keyed by pattern
///
/// Iteration is in ascending pattern order, which is the enumeration order the
/// selection policies fall back on for ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    classes: BTreeMap<Pattern, PartitionClass>,
}

impl Partition {
    /// Group `pool` by the pattern each word shows under `guesses`
    ///
    /// `guesses` must already include the pending guess, so that each key is
    /// one possible outcome of that guess. Rebuilt from scratch on every call;
    /// an empty pool yields an empty partition.
    ///
    /// # Examples
    /// ```
    /// use adaptive_hangman::core::{Charset, GuessSet, Letter, Word};
    /// use adaptive_hangman::manager::{CandidatePool, Partition};
    ///
    /// let pool = CandidatePool::new(
    ///     ["cat", "cot", "car"].iter().map(|w| Word::new(*w).unwrap()).collect(),
    /// );
    /// let mut guesses = GuessSet::new();
    /// guesses.insert(Letter::new('t', Charset::Alphabetic).unwrap());
    ///
    /// let partition = Partition::build(&pool, &guesses, Charset::Alphabetic);
    /// assert_eq!(partition.len(), 2);
    /// assert_eq!(partition.total(), 3);
    /// ```
    #[must_use]
    pub fn build(pool: &CandidatePool, guesses: &GuessSet, charset: Charset) -> Self {
        let mut classes: BTreeMap<Pattern, PartitionClass> = BTreeMap::new();

        for word in pool {
            let key = Pattern::reveal(word.text(), guesses, charset);
            let class = classes.entry(key).or_default();
            class.count += 1;
            class.letters.extend(
                word.text()
                    .chars()
                    .filter(|&c| charset.is_guessable(c) && !guesses.contains_char(c)),
            );
        }

        Self { classes }
    }

    #[must_use]
    pub fn get(&self, key: &Pattern) -> Option<&PartitionClass> {
        self.classes.get(key)
    }

    /// Number of classes
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Total candidates across all classes
    #[must_use]
    pub fn total(&self) -> usize {
        self.classes.values().map(|c| c.count).sum()
    }

    /// Size of the largest class
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.classes.values().map(|c| c.count).max().unwrap_or(0)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Pattern, PartitionClass> {
        self.classes.iter()
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = (&'a Pattern, &'a PartitionClass);
    type IntoIter = btree_map::Iter<'a, Pattern, PartitionClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(Pattern, PartitionClass)> for Partition {
    fn from_iter<I: IntoIterator<Item = (Pattern, PartitionClass)>>(iter: I) -> Self {
        Self {
            classes: iter.into_iter().collect(),
        }
    }
}
