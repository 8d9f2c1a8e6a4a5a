//! Dictionary sources
//!
//! Provides the embedded default dictionary and loading from text files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
