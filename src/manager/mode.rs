//! Game modes and their configuration
//!
//! A mode is just a policy plus a wrong-guess budget.

use super::policy::{Fixed, Harden, Policy, Soften};
use crate::core::Charset;
use std::fmt;

/// Wrong guesses allowed against the cooperative manager
pub const EASY_BUDGET: usize = 4;

/// Wrong guesses allowed against a manager committed to one word
pub const NORMAL_BUDGET: usize = 7;

/// Wrong guesses allowed against the adversarial manager
pub const HARD_BUDGET: usize = 14;

/// The kind of manager the player faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Cooperative manager
    Easy,
    /// Random word, chosen up front
    Normal,
    /// Adversarial manager
    Hard,
    /// A second human supplies the word and the budget
    TwoPlayer,
}

impl Mode {
    /// The modes that draw their word from the dictionary
    pub const SINGLE_PLAYER: [Self; 3] = [Self::Easy, Self::Normal, Self::Hard];

    /// Create a mode from its name
    ///
    /// Supported names: "easy", "normal", "hard", "two-player" (plus a few
    /// aliases). Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "easy" | "soften" | "1" => Some(Self::Easy),
            "normal" | "fixed" | "2" => Some(Self::Normal),
            "hard" | "harden" | "evil" | "3" => Some(Self::Hard),
            "two-player" | "two" | "2p" | "versus" => Some(Self::TwoPlayer),
            _ => None,
        }
    }

    #[must_use]
    pub const fn policy(self) -> Policy {
        match self {
            Self::Easy => Policy::Soften(Soften),
            Self::Hard => Policy::Harden(Harden),
            Self::Normal | Self::TwoPlayer => Policy::Fixed(Fixed),
        }
    }

    /// Default wrong-guess budget
    ///
    /// Two-player games ask the word setter instead; this is only the
    /// suggested value there.
    #[must_use]
    pub const fn budget(self) -> usize {
        match self {
            Self::Easy => EASY_BUDGET,
            Self::Hard => HARD_BUDGET,
            Self::Normal | Self::TwoPlayer => NORMAL_BUDGET,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::TwoPlayer => "two-player",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a game needs besides its words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub policy: Policy,
    pub budget: usize,
    pub charset: Charset,
}

impl GameConfig {
    /// Default configuration for `mode`
    #[must_use]
    pub const fn for_mode(mode: Mode) -> Self {
        Self {
            policy: mode.policy(),
            budget: mode.budget(),
            charset: Charset::Alphabetic,
        }
    }

    /// Replace the budget
    #[must_use]
    pub const fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    #[must_use]
    pub const fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Check that the budget is between 1 and the charset's maximum
    #[must_use]
    pub const fn budget_is_valid(&self) -> bool {
        self.budget > 0 && self.budget <= self.charset.max_budget()
    }
}

impl From<Mode> for GameConfig {
    fn from(mode: Mode) -> Self {
        Self::for_mode(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_budgets() {
        assert_eq!(Mode::Easy.budget(), 4);
        assert_eq!(Mode::Normal.budget(), 7);
        assert_eq!(Mode::Hard.budget(), 14);
    }

    #[test]
    fn modes_map_to_policies() {
        assert_eq!(Mode::Easy.policy(), Policy::Soften(Soften));
        assert_eq!(Mode::Hard.policy(), Policy::Harden(Harden));
        assert_eq!(Mode::Normal.policy(), Policy::Fixed(Fixed));
        assert!(!Mode::TwoPlayer.policy().is_adaptive());
    }

    #[test]
    fn from_name_round_trips_names() {
        for mode in [Mode::Easy, Mode::Normal, Mode::Hard, Mode::TwoPlayer] {
            assert_eq!(Mode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(Mode::from_name("EVIL"), Some(Mode::Hard));
        assert_eq!(Mode::from_name("impossible"), None);
    }

    #[test]
    fn budget_validation_follows_charset() {
        let config = GameConfig::for_mode(Mode::TwoPlayer);
        assert!(config.budget_is_valid());
        assert!(!config.with_budget(0).budget_is_valid());
        assert!(!config.with_budget(30).budget_is_valid());
        assert!(
            config
                .with_budget(30)
                .with_charset(Charset::Alphanumeric)
                .budget_is_valid()
        );
    }
}
