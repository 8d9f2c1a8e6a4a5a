//! Adaptive Hangman
//!
//! Hangman where the game manager need not pick its word up front. The
//! adversarial manager keeps every dictionary word that fits what has been
//! revealed and answers each guess with the largest consistent group; the
//! cooperative manager steers towards the words that are easiest to finish.
//!
//! # Quick Start
//!
//! ```rust
//! use adaptive_hangman::core::Word;
//! use adaptive_hangman::manager::{Game, GameState, Mode};
//!
//! let dictionary: Vec<Word> = ["cat", "cot", "car"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let mut game = Game::start_with_seed_word(&dictionary, &dictionary[0], Mode::Hard.into()).unwrap();
//! for guess in ["c", "a", "t"] {
//!     game.guess_input(guess).unwrap();
//! }
//!
//! // "cat" was never committed to: the manager dodged the 't'
//! assert_eq!(game.pattern().as_str(), "ca_");
//! assert_eq!(game.state(), GameState::Active);
//! assert_eq!(game.reveal_word().unwrap().text(), "car");
//! ```

// Core domain types
pub mod core;

// Game managers and selection policies
pub mod manager;

// Automated guesser
pub mod player;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
