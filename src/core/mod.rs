//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable in isolation.

mod letter;
mod pattern;
mod word;

pub use letter::{Charset, GuessError, GuessSet, Letter};
pub use pattern::{HIDDEN, Pattern, SEPARATOR, SEPARATOR_SYMBOL};
pub use word::{Word, WordError};
