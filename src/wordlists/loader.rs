//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or use embedded constants.

use crate::core::{Charset, Word};
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One entry per line. Blank lines and lines starting with `#` are skipped,
/// as are entries that are not valid words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use adaptive_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse dictionary text, one entry per line
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content.lines().filter_map(parse_entry).collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use adaptive_hangman::wordlists::loader::words_from_slice;
/// use adaptive_hangman::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| parse_entry(s)).collect()
}

fn parse_entry(line: &str) -> Option<Word> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    match Word::new(trimmed) {
        Ok(word) if word.has_guessable(Charset::Alphabetic) => Some(word),
        Ok(_) => {
            warn!("skipping dictionary entry '{trimmed}': no letters to guess");
            None
        }
        Err(e) => {
            warn!("skipping dictionary entry '{trimmed}': {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["cat", "Horse", "ice cream"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "horse");
        assert_eq!(words[2].text(), "ice cream");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["cat", "", "1984", "c_t", "dog"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "dog");
    }

    #[test]
    fn parse_words_skips_comments_and_blank_lines() {
        let content = "# animals\ncat\n\n  dog  \n#bird\nsea lion\r\n";
        let words = parse_words(content);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat", "dog", "sea lion"]);
    }

    #[test]
    fn parse_words_keeps_duplicates() {
        assert_eq!(parse_words("cat\ncat\n").len(), 2);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(load_from_file("definitely/not/a/dictionary.txt").is_err());
    }

    #[test]
    fn load_from_embedded_dictionary() {
        use crate::wordlists::DICTIONARY;

        let words = words_from_slice(DICTIONARY);
        assert_eq!(words.len(), DICTIONARY.len());
    }
}
