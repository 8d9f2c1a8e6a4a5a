//! Benchmark command
//!
//! Plays many games per mode with an automated guesser and measures how
//! hard each manager is to beat.

use crate::core::Word;
use crate::manager::{Game, GameConfig, GameError, GameState, Mode};
use crate::player::FrequencyPlayer;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Outcome of one automated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub won: bool,
    pub misses: usize,
    /// Candidates left when the game ended
    pub final_pool: usize,
}

/// Result of benchmarking one mode
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub mode: Mode,
    pub games: usize,
    pub wins: usize,
    pub total_misses: usize,
    pub total_final_pool: usize,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        ratio(self.wins, self.games)
    }

    #[must_use]
    pub fn average_misses(&self) -> f64 {
        ratio(self.total_misses, self.games)
    }

    #[must_use]
    pub fn average_final_pool(&self) -> f64 {
        ratio(self.total_final_pool, self.games)
    }

    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 { self.games as f64 / secs } else { 0.0 }
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Play one game to the end with the frequency player
///
/// # Errors
///
/// Returns an error if the game cannot start or aborts.
pub fn play_automated(
    words: &[Word],
    config: GameConfig,
    rng: &mut StdRng,
) -> Result<GameSummary, GameError> {
    let mut game = Game::start(words, config, rng)?;
    let player = FrequencyPlayer::new(words);

    while !game.is_terminal() {
        let Some(letter) = player.next_guess(game.pattern(), game.guesses(), game.charset())
        else {
            break;
        };
        game.make_guess(letter)?;
    }

    Ok(GameSummary {
        won: game.state() == GameState::Won,
        misses: game.misses(),
        final_pool: game.pool().len(),
    })
}

/// Run `games` automated games for each of `modes`
///
/// Game `i` of every mode draws its word from a generator seeded with
/// `seed + i`, so a fixed seed reproduces the whole run. Games run in
/// parallel.
///
/// # Errors
///
/// Returns the first game error encountered.
pub fn run_benchmark(
    words: &[Word],
    modes: &[Mode],
    games: usize,
    seed: Option<u64>,
    show_progress: bool,
) -> Result<Vec<BenchmarkResult>, GameError> {
    let base = seed.unwrap_or_else(rand::random);
    info!("benchmarking {games} game(s) per mode with seed {base}");

    let mut results = Vec::with_capacity(modes.len());

    for &mode in modes {
        let config = GameConfig::for_mode(mode);
        let pb = progress_bar(games, show_progress);
        pb.set_message(mode.name());

        let start = Instant::now();
        let summaries = (0..games)
            .into_par_iter()
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(base.wrapping_add(i as u64));
                let summary = play_automated(words, config, &mut rng);
                pb.inc(1);
                summary
            })
            .collect::<Result<Vec<_>, _>>()?;
        let duration = start.elapsed();

        pb.finish_with_message(format!("{mode} done"));

        results.push(BenchmarkResult {
            mode,
            games: summaries.len(),
            wins: summaries.iter().filter(|s| s.won).count(),
            total_misses: summaries.iter().map(|s| s.misses).sum(),
            total_final_pool: summaries.iter().map(|s| s.final_pool).sum(),
            duration,
        });
    }

    Ok(results)
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
