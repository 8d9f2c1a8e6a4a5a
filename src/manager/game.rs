//! Turn controller
//!
//! A `Game` owns one game's candidate pool, guessed letters and visible
//! pattern, and applies its policy on every guess.

use super::mode::GameConfig;
use super::partition::Partition;
use super::policy::{Policy, SelectionPolicy};
use super::pool::CandidatePool;
use crate::core::{Charset, GuessError, GuessSet, Letter, Pattern, Word};
use log::{debug, error, info};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Active,
    Won,
    Lost,
}

/// Error type for game operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guess was rejected; the game is unchanged
    InvalidGuess(GuessError),
    /// A guess arrived after the game ended
    GameOver,
    /// No word to draw, or none of the seed word's length
    EmptyDictionary,
    /// The secret has no hidden characters under the charset
    NothingToGuess(Word),
    /// Budget outside `1..=max`
    InvalidBudget { budget: usize, max: usize },
    /// The engine reached a state it must never reach; the game is aborted
    InvariantViolation(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(e) => write!(f, "Invalid guess: {e}"),
            Self::GameOver => write!(f, "The game is already over"),
            Self::EmptyDictionary => write!(f, "The dictionary has no usable words"),
            Self::NothingToGuess(word) => {
                write!(f, "Secret word '{word}' has nothing to guess")
            }
            Self::InvalidBudget { budget, max } => {
                write!(f, "Budget must be between 1 and {max}, got {budget}")
            }
            Self::InvariantViolation(msg) => write!(f, "Internal invariant violated: {msg}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<GuessError> for GameError {
    fn from(e: GuessError) -> Self {
        Self::InvalidGuess(e)
    }
}

/// What happened on one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub letter: Letter,
    pub hit: bool,
    /// The pattern now shown
    pub pattern: Pattern,
    /// Number of outcome classes the pool split into
    pub classes: usize,
    pub pool_before: usize,
    pub pool_after: usize,
}

/// A single game of Hangman
#[derive(Debug, Clone)]
pub struct Game {
    policy: Policy,
    charset: Charset,
    budget: usize,
    guesses_left: usize,
    guesses: GuessSet,
    pattern: Pattern,
    pool: CandidatePool,
    fault: Option<String>,
}

impl Game {
    /// Start a game whose seed word is drawn uniformly from `dictionary`
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if `dictionary` is empty, or
    /// `GameError::InvalidBudget` for a bad budget.
    pub fn start<R: Rng + ?Sized>(
        dictionary: &[Word],
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let seed = dictionary.choose(rng).ok_or(GameError::EmptyDictionary)?;
        Self::start_with_seed_word(dictionary, seed, config)
    }

    /// Start a game with an injected seed word
    ///
    /// Adaptive policies take every dictionary word of the seed's length (and
    /// with separators in the same places) as candidates; the fixed policy
    /// commits to the seed itself.
    ///
    /// # Errors
    /// Returns `GameError` if the budget is invalid, the seed has nothing to
    /// guess, or no dictionary word has the seed's length.
    ///
    /// # Examples
    /// ```
    /// use adaptive_hangman::core::{Letter, Charset, Word};
    /// use adaptive_hangman::manager::{Game, GameConfig, GameState, Mode};
    ///
    /// let dictionary: Vec<Word> = ["cat", "cot", "car"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let mut game =
    ///     Game::start_with_seed_word(&dictionary, &dictionary[0], Mode::Hard.into()).unwrap();
    /// assert_eq!(game.pattern().as_str(), "___");
    ///
    /// let report = game.make_guess(Letter::new('c', Charset::Alphabetic).unwrap()).unwrap();
    /// assert!(report.hit);
    /// assert_eq!(game.pattern().as_str(), "c__");
    /// assert_eq!(game.state(), GameState::Active);
    /// ```
    pub fn start_with_seed_word(
        dictionary: &[Word],
        seed: &Word,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        let pool = if config.policy.is_adaptive() {
            // Only words that look like the seed before any guess, so the
            // opening pattern is realizable by every candidate
            let nothing = GuessSet::new();
            let opening = Pattern::reveal(seed.text(), &nothing, config.charset);
            let mut pool = CandidatePool::of_length(dictionary, seed.len());
            pool.retain_matching(&opening, &nothing, config.charset);
            pool
        } else {
            CandidatePool::new(vec![seed.clone()])
        };

        if pool.is_empty() {
            return Err(GameError::EmptyDictionary);
        }

        Self::new(pool, seed, config)
    }

    /// Start a game committed to `secret`, as in two-player mode
    ///
    /// # Errors
    /// Returns `GameError` if the budget is invalid or the secret has nothing
    /// to guess under `config.charset`.
    pub fn with_secret(secret: Word, config: GameConfig) -> Result<Self, GameError> {
        let pool = CandidatePool::new(vec![secret.clone()]);
        Self::new(pool, &secret, config)
    }

    fn new(pool: CandidatePool, seed: &Word, config: GameConfig) -> Result<Self, GameError> {
        if !config.budget_is_valid() {
            return Err(GameError::InvalidBudget {
                budget: config.budget,
                max: config.charset.max_budget(),
            });
        }

        if !seed.has_guessable(config.charset) {
            return Err(GameError::NothingToGuess(seed.clone()));
        }

        let guesses = GuessSet::new();
        let pattern = Pattern::reveal(seed.text(), &guesses, config.charset);

        info!(
            "starting {} game: {} candidate(s) of length {}, budget {}",
            config.policy,
            pool.len(),
            seed.len(),
            config.budget
        );

        Ok(Self {
            policy: config.policy,
            charset: config.charset,
            budget: config.budget,
            guesses_left: config.budget,
            guesses,
            pattern,
            pool,
            fault: None,
        })
    }

    /// Partition the pool by the outcomes of guessing `letter`
    ///
    /// Does not change the game. `letter` should not have been guessed yet;
    /// if it has, the partition is the single current pattern.
    #[must_use]
    pub fn outcomes(&self, letter: Letter) -> Partition {
        let mut guesses = self.guesses.clone();
        guesses.insert(letter);
        Partition::build(&self.pool, &guesses, self.charset)
    }

    /// Play one guess
    ///
    /// The pool is partitioned by outcome, the policy picks a class, the pool
    /// narrows to that class and its key becomes the visible pattern. A miss
    /// costs one guess from the budget.
    ///
    /// # Errors
    /// - `GameError::InvalidGuess` if the letter is outside the charset or was
    ///   already guessed (the game is unchanged)
    /// - `GameError::GameOver` if the game has ended
    /// - `GameError::InvariantViolation` if the pool is, or would become,
    ///   empty; the game refuses every later guess
    pub fn make_guess(&mut self, letter: Letter) -> Result<TurnReport, GameError> {
        if let Some(msg) = &self.fault {
            return Err(GameError::InvariantViolation(msg.clone()));
        }

        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        if !self.charset.is_guessable(letter.as_char()) {
            return Err(GuessError::NotGuessable(letter.as_char()).into());
        }

        if self.guesses.contains(letter) {
            return Err(GuessError::AlreadyGuessed(letter).into());
        }

        if self.pool.is_empty() {
            return Err(self.abort("partition requested on an empty candidate pool"));
        }

        self.guesses.insert(letter);

        let pool_before = self.pool.len();
        let partition = Partition::build(&self.pool, &self.guesses, self.charset);
        let Some(chosen) = self.policy.select(&partition, letter).cloned() else {
            return Err(self.abort("policy selected no outcome"));
        };

        debug!(
            "guess '{letter}': {} class(es) over {pool_before} candidate(s), {} chose '{chosen}'",
            partition.len(),
            self.policy
        );

        self.pool.retain_matching(&chosen, &self.guesses, self.charset);

        if self.pool.is_empty() {
            return Err(self.abort("candidate pool emptied by narrowing"));
        }

        let hit = chosen.contains(letter);
        if !hit {
            self.guesses_left = self.guesses_left.saturating_sub(1);
        }
        self.pattern = chosen;

        Ok(TurnReport {
            letter,
            hit,
            pattern: self.pattern.clone(),
            classes: partition.len(),
            pool_before,
            pool_after: self.pool.len(),
        })
    }

    /// Parse `input` as a letter and play it
    ///
    /// # Errors
    /// Same as `make_guess`, plus `GameError::InvalidGuess` for input that is
    /// not a single guessable character.
    pub fn guess_input(&mut self, input: &str) -> Result<TurnReport, GameError> {
        let letter = Letter::parse(input, self.charset)?;
        self.make_guess(letter)
    }

    fn abort(&mut self, msg: &str) -> GameError {
        error!("aborting game: {msg}");
        self.fault = Some(msg.to_string());
        GameError::InvariantViolation(msg.to_string())
    }

    /// Current state; a spent budget counts as a loss before a full reveal
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.guesses_left == 0 {
            GameState::Lost
        } else if self.pattern.is_revealed() {
            GameState::Won
        } else {
            GameState::Active
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state() != GameState::Active
    }

    /// The word the manager "had" all along
    ///
    /// For adaptive games this is the first remaining candidate in dictionary
    /// order.
    #[must_use]
    pub fn reveal_word(&self) -> Option<&Word> {
        self.pool.first()
    }

    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        self.guesses_left
    }

    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// Wrong guesses made so far
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.budget - self.guesses_left
    }

    #[must_use]
    pub const fn guesses(&self) -> &GuessSet {
        &self.guesses
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    #[must_use]
    pub const fn policy(&self) -> Policy {
        self.policy
    }

    #[must_use]
    pub const fn charset(&self) -> Charset {
        self.charset
    }

    /// Whether the game was aborted by an invariant violation
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        self.fault.is_some()
    }
}
