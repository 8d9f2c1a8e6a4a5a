//! Selection policies
//!
//! Defines the `SelectionPolicy` trait and the concrete policies that decide
//! which outcome of a guess the manager reports.

use super::partition::Partition;
use crate::core::{Letter, Pattern};
use std::fmt;

/// A rule for choosing one class of a partition as the outcome of a guess
pub trait SelectionPolicy {
    /// Choose the key of the class to keep after `guess`
    ///
    /// Returns `None` only if the partition is empty.
    fn select<'p>(&self, partition: &'p Partition, guess: Letter) -> Option<&'p Pattern>;
}

/// Enum wrapper for all policy types
///
/// Allows runtime selection of policy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Adversarial: keep the game as hard as possible
    Harden(Harden),
    /// Cooperative: make the game as easy as possible
    Soften(Soften),
    /// Committed to a single word from the start
    Fixed(Fixed),
}

impl SelectionPolicy for Policy {
    fn select<'p>(&self, partition: &'p Partition, guess: Letter) -> Option<&'p Pattern> {
        match self {
            Self::Harden(p) => p.select(partition, guess),
            Self::Soften(p) => p.select(partition, guess),
            Self::Fixed(p) => p.select(partition, guess),
        }
    }
}

impl Policy {
    /// Whether the manager defers its choice of word
    #[must_use]
    pub const fn is_adaptive(self) -> bool {
        !matches!(self, Self::Fixed(_))
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Harden(_) => "harden",
            Self::Soften(_) => "soften",
            Self::Fixed(_) => "fixed",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Adversarial policy
///
/// Picks the largest class. Among classes of equal size it prefers one whose
/// key does not show the guessed letter, so ties are reported as misses. Any
/// tie left after that goes to the last class in key order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Harden;

impl SelectionPolicy for Harden {
    fn select<'p>(&self, partition: &'p Partition, guess: Letter) -> Option<&'p Pattern> {
        partition
            .iter()
            .max_by_key(|(key, class)| (class.count, !key.contains(guess)))
            .map(|(key, _)| key)
    }
}

/// Cooperative policy
///
/// Returns a fully revealed class immediately if one exists. Otherwise ranks
/// classes by, in order:
/// 1. most distinct letters left to find in the class
/// 2. most positions showing the guessed letter
/// 3. most candidates
///
/// Classes are visited in ascending key order. A class that shows the guess
/// always outranks an otherwise tied class that does not, so a confirmed
/// guess is never given up on a tie. Exact ties go to the last class visited,
/// which is the greatest key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Soften;

impl SelectionPolicy for Soften {
    fn select<'p>(&self, partition: &'p Partition, guess: Letter) -> Option<&'p Pattern> {
        if let Some((key, _)) = partition.iter().find(|(key, _)| key.is_revealed()) {
            return Some(key);
        }

        partition
            .iter()
            .max_by_key(|(key, class)| (class.letter_count(), key.count(guess), class.count))
            .map(|(key, _)| key)
    }
}

/// Non-adaptive policy
///
/// Used with a pool holding the one committed word, which always partitions
/// into a single class. Takes the first class in key order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fixed;

impl SelectionPolicy for Fixed {
    fn select<'p>(&self, partition: &'p Partition, _guess: Letter) -> Option<&'p Pattern> {
        partition.iter().next().map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Charset;
    use crate::manager::partition::PartitionClass;

    fn letter(c: char) -> Letter {
        Letter::new(c, Charset::Alphabetic).unwrap()
    }

    fn class(count: usize, letters: &str) -> PartitionClass {
        PartitionClass {
            count,
            letters: letters.chars().collect(),
        }
    }

    fn partition(classes: &[(&str, PartitionClass)]) -> Partition {
        classes
            .iter()
            .map(|(key, class)| (key.chars().collect(), class.clone()))
            .collect()
    }

    #[test]
    fn harden_picks_largest_class() {
        let p = partition(&[
            ("a__", class(1, "bc")),
            ("__a", class(5, "bcd")),
            ("___", class(3, "bcde")),
        ]);

        let chosen = Harden.select(&p, letter('a')).unwrap();
        assert_eq!(chosen.as_str(), "__a");
    }

    #[test]
    fn harden_tie_prefers_miss() {
        // "___" sorts before "a__", so the miss wins even though it comes first
        let p = partition(&[("___", class(2, "bc")), ("a__", class(2, "bc"))]);
        assert_eq!(Harden.select(&p, letter('a')).unwrap().as_str(), "___");

        let p = partition(&[("_a_", class(2, "bc")), ("b__", class(2, "cd"))]);
        assert_eq!(Harden.select(&p, letter('a')).unwrap().as_str(), "b__");
    }

    #[test]
    fn harden_remaining_tie_goes_to_last() {
        let p = partition(&[
            ("_a_", class(2, "b")),
            ("a__", class(2, "b")),
            ("aa_", class(1, "b")),
        ]);
        assert_eq!(Harden.select(&p, letter('a')).unwrap().as_str(), "a__");
    }

    #[test]
    fn harden_never_picks_smaller_class() {
        let p = partition(&[("___", class(1, "b")), ("a__", class(2, "b"))]);
        let chosen = Harden.select(&p, letter('a')).unwrap();
        assert_eq!(p.get(chosen).unwrap().count, p.max_count());
    }

    #[test]
    fn soften_short_circuits_on_win() {
        let p = partition(&[
            ("ca_", class(10, "bdefgh")),
            ("cat", class(1, "")),
        ]);
        let chosen = Soften.select(&p, letter('t')).unwrap();
        assert!(chosen.is_revealed());
    }

    #[test]
    fn soften_prefers_more_letters() {
        let p = partition(&[
            ("___", class(10, "bc")),
            ("a__", class(1, "bcde")),
        ]);
        assert_eq!(Soften.select(&p, letter('a')).unwrap().as_str(), "a__");

        let p = partition(&[
            ("___", class(1, "bcdef")),
            ("a__", class(10, "bc")),
        ]);
        assert_eq!(Soften.select(&p, letter('a')).unwrap().as_str(), "___");
    }

    #[test]
    fn soften_tie_prefers_more_occurrences_of_guess() {
        let p = partition(&[
            ("___", class(5, "bc")),
            ("_a_", class(1, "bc")),
            ("a_a", class(1, "bc")),
        ]);
        assert_eq!(Soften.select(&p, letter('a')).unwrap().as_str(), "a_a");
    }

    #[test]
    fn soften_never_gives_up_a_confirmed_guess_on_a_tie() {
        let p = partition(&[("_a_", class(1, "bc")), ("b__", class(4, "cd"))]);
        assert_eq!(Soften.select(&p, letter('a')).unwrap().as_str(), "_a_");
    }

    #[test]
    fn soften_then_prefers_larger_class() {
        let p = partition(&[("_a_", class(2, "bc")), ("a__", class(3, "bd"))]);
        assert_eq!(Soften.select(&p, letter('a')).unwrap().as_str(), "a__");
    }

    #[test]
    fn soften_exact_tie_goes_to_greatest_key() {
        let p = partition(&[
            ("_a_", class(2, "bc")),
            ("a__", class(2, "bd")),
            ("___", class(9, "b")),
        ]);
        assert_eq!(Soften.select(&p, letter('a')).unwrap().as_str(), "a__");
    }

    #[test]
    fn fixed_takes_only_class() {
        let p = partition(&[("_a_", class(1, "bc"))]);
        assert_eq!(Fixed.select(&p, letter('a')).unwrap().as_str(), "_a_");
    }

    #[test]
    fn empty_partition_selects_nothing() {
        let p = Partition::default();
        assert!(Harden.select(&p, letter('a')).is_none());
        assert!(Soften.select(&p, letter('a')).is_none());
        assert!(Fixed.select(&p, letter('a')).is_none());
    }

    #[test]
    fn policy_dispatch_and_names() {
        let p = partition(&[("___", class(2, "b")), ("a__", class(1, "b"))]);
        let harden = Policy::Harden(Harden);
        let soften = Policy::Soften(Soften);

        assert_eq!(harden.select(&p, letter('a')).unwrap().as_str(), "___");
        assert!(harden.is_adaptive());
        assert!(soften.is_adaptive());
        assert!(!Policy::Fixed(Fixed).is_adaptive());
        assert_eq!(soften.to_string(), "soften");
    }
}
