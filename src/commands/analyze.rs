//! Analyze command
//!
//! Replays a sequence of guesses against a fixed seed word and records every
//! turn's partition, to show how a policy picks its outcomes.

use crate::core::{Letter, Pattern, Word};
use crate::manager::{Game, GameConfig, GameState, Mode, PartitionClass};

/// One replayed turn
pub struct TurnAnalysis {
    pub letter: Letter,
    /// Every class, in key order
    pub classes: Vec<(Pattern, PartitionClass)>,
    pub chosen: Pattern,
    pub hit: bool,
    pub pool_after: usize,
    pub guesses_left: usize,
}

/// Result of replaying a game
pub struct AnalysisResult {
    pub mode: Mode,
    pub seed_word: String,
    pub initial_pool: usize,
    pub turns: Vec<TurnAnalysis>,
    pub state: GameState,
    pub final_word: Option<String>,
}

/// Replay `guesses` (one letter per character) under `config`
///
/// `mode` is only recorded for display. Replay stops early once the game
/// ends; whitespace between letters is ignored.
///
/// # Errors
///
/// Returns an error if the seed word is invalid, the game cannot start, or
/// a guess is rejected.
pub fn analyze_game(
    words: &[Word],
    mode: Mode,
    config: GameConfig,
    seed_word: &str,
    guesses: &str,
) -> Result<AnalysisResult, String> {
    let seed = Word::new(seed_word).map_err(|e| format!("Invalid seed word: {e}"))?;
    let mut game = if config.policy.is_adaptive() {
        Game::start_with_seed_word(words, &seed, config)
    } else {
        Game::with_secret(seed.clone(), config)
    }
    .map_err(|e| e.to_string())?;

    let initial_pool = game.pool().len();
    let mut turns = Vec::new();

    for c in guesses.chars().filter(|c| !c.is_whitespace()) {
        if game.is_terminal() {
            break;
        }

        let letter = Letter::new(c, game.charset()).map_err(|e| e.to_string())?;
        let classes = game
            .outcomes(letter)
            .iter()
            .map(|(key, class)| (key.clone(), class.clone()))
            .collect();

        let report = game.make_guess(letter).map_err(|e| e.to_string())?;

        turns.push(TurnAnalysis {
            letter,
            classes,
            chosen: report.pattern,
            hit: report.hit,
            pool_after: report.pool_after,
            guesses_left: game.guesses_left(),
        });
    }

    Ok(AnalysisResult {
        mode,
        seed_word: seed.text().to_string(),
        initial_pool,
        turns,
        state: game.state(),
        final_word: game.reveal_word().map(|w| w.text().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Vec<Word> {
        words_from_slice(&["cat", "cot", "car", "horse"])
    }

    #[test]
    fn analyze_records_each_turn() {
        let words = dictionary();
        let result = analyze_game(&words, Mode::Hard, Mode::Hard.into(), "cat", "c a t").unwrap();

        assert_eq!(result.initial_pool, 3);
        assert_eq!(result.turns.len(), 3);

        let second = &result.turns[1];
        assert_eq!(second.classes.len(), 2);
        assert_eq!(second.chosen.as_str(), "ca_");
        assert!(second.hit);

        let third = &result.turns[2];
        assert!(!third.hit);
        assert_eq!(third.guesses_left, 13);
        assert_eq!(result.final_word.as_deref(), Some("car"));
        assert_eq!(result.state, GameState::Active);
    }

    #[test]
    fn analyze_stops_when_game_ends() {
        let words = dictionary();
        let result = analyze_game(&words, Mode::Easy, Mode::Easy.into(), "cat", "catxyz").unwrap();

        assert_eq!(result.turns.len(), 3);
        assert_eq!(result.state, GameState::Won);
        assert_eq!(result.final_word.as_deref(), Some("cat"));
    }

    #[test]
    fn analyze_normal_mode_uses_seed_as_secret() {
        let words = dictionary();
        let result =
            analyze_game(&words, Mode::Normal, Mode::Normal.into(), "horse", "e").unwrap();

        assert_eq!(result.initial_pool, 1);
        assert_eq!(result.turns[0].chosen.as_str(), "____e");
    }

    #[test]
    fn analyze_rejects_repeated_letters() {
        let words = dictionary();
        assert!(analyze_game(&words, Mode::Hard, Mode::Hard.into(), "cat", "cc").is_err());
    }

    #[test]
    fn analyze_rejects_bad_seed() {
        let words = dictionary();
        assert!(analyze_game(&words, Mode::Hard, Mode::Hard.into(), "", "a").is_err());
        assert!(analyze_game(&words, Mode::Hard, Mode::Hard.into(), "zebras", "a").is_err());
    }
}
