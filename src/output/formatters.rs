//! Formatting utilities for terminal output

use crate::core::{GuessSet, Letter, Pattern};

/// Render a pattern for display: upper-cased, one space between symbols
///
/// # Examples
/// ```
/// use adaptive_hangman::core::Pattern;
/// use adaptive_hangman::output::formatters::display_pattern;
///
/// let pattern: Pattern = "c_t".chars().collect();
/// assert_eq!(display_pattern(&pattern), "C _ T");
/// ```
#[must_use]
pub fn display_pattern(pattern: &Pattern) -> String {
    pattern.spaced().to_uppercase()
}

/// Split guessed letters into those shown in `pattern` and those that missed
#[must_use]
pub fn split_guesses(guesses: &GuessSet, pattern: &Pattern) -> (Vec<Letter>, Vec<Letter>) {
    guesses.iter().partition(|&letter| pattern.contains(letter))
}

/// Join letters as an upper-cased, space-separated list
#[must_use]
pub fn letter_list(letters: &[Letter]) -> String {
    letters
        .iter()
        .map(|l| l.as_char().to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a bar showing `value` out of `max`
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { (value * width / max).min(width) };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a fraction as a percentage with one decimal
#[must_use]
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
