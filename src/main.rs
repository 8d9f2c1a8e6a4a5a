//! Adaptive Hangman - CLI
//!
//! Play Hangman against a fair, a helpful or an adversarial game manager, in
//! a TUI or on the plain command line, or measure the managers with an
//! automated guesser.

use adaptive_hangman::{
    commands::{SimpleOptions, analyze_game, run_benchmark, run_simple},
    core::Word,
    manager::{GameConfig, Mode},
    output::{print_analysis_result, print_benchmark_result},
    wordlists::{DICTIONARY, loader::words_from_slice},
};
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman against fair, helpful and adversarial game managers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Mode: easy, normal, hard or two-player (asked when omitted)
    #[arg(short, long, global = true, value_parser = parse_mode)]
    mode: Option<Mode>,

    /// Wordlist: 'builtin' (default) or path to a file with one entry per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Override the wrong-guess budget of the dictionary-backed modes
    #[arg(short, long, global = true)]
    budget: Option<usize>,

    /// Seed for reproducible word draws
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Show how many candidate words the manager still holds
        #[arg(long)]
        show_pool: bool,
    },

    /// Simple line-mode game without the TUI
    Simple,

    /// Replay guesses against a seed word and show every partition
    Analyze {
        /// Word the game starts from
        seed_word: String,

        /// Letters to guess, in order (e.g. "etaoin")
        guesses: String,
    },

    /// Play automated games and report how often the guesser wins
    Benchmark {
        /// Number of games per mode
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },
}

fn parse_mode(name: &str) -> Result<Mode, String> {
    Mode::from_name(name).ok_or_else(|| {
        format!("unknown mode '{name}' (expected easy, normal, hard or two-player)")
    })
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Vec<Word>> {
    use adaptive_hangman::wordlists::loader::load_from_file;

    let words = match wordlist {
        "builtin" => words_from_slice(DICTIONARY),
        path => load_from_file(path)?,
    };

    if words.is_empty() {
        bail!("Word list '{wordlist}' contains no usable words");
    }

    info!("loaded {} word(s) from {wordlist}", words.len());
    Ok(words)
}

fn check_budget(mode: Option<Mode>, budget: Option<usize>) -> Result<()> {
    let Some(budget) = budget else {
        return Ok(());
    };

    let config = GameConfig::for_mode(mode.unwrap_or(Mode::Normal)).with_budget(budget);
    if !config.budget_is_valid() {
        bail!(
            "Budget must be between 1 and {}, got {budget}",
            config.charset.max_budget()
        );
    }
    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = Cli::parse();
    check_budget(cli.mode, cli.budget)?;

    let words = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play { show_pool: false });

    match command {
        Commands::Play { show_pool } => run_play_command(&words, &cli, show_pool),
        Commands::Simple => {
            let options = SimpleOptions {
                mode: cli.mode,
                budget: cli.budget,
            };
            run_simple(&words, options, &mut make_rng(cli.seed))
        }
        Commands::Analyze { seed_word, guesses } => {
            run_analyze_command(&words, cli.mode, cli.budget, &seed_word, &guesses)
        }
        Commands::Benchmark { count } => run_benchmark_command(&words, cli.mode, count, cli.seed),
    }
}

fn run_play_command(words: &[Word], cli: &Cli, show_pool: bool) -> Result<()> {
    use adaptive_hangman::interactive::{App, AppOptions, run_tui};

    let options = AppOptions {
        mode: cli.mode,
        budget: cli.budget,
        show_pool,
    };
    let app = App::new(words, options, make_rng(cli.seed));
    run_tui(app)
}

fn run_analyze_command(
    words: &[Word],
    mode: Option<Mode>,
    budget: Option<usize>,
    seed_word: &str,
    guesses: &str,
) -> Result<()> {
    let mode = mode.unwrap_or(Mode::Hard);
    let mut config = GameConfig::for_mode(mode);
    if let Some(budget) = budget {
        config = config.with_budget(budget);
    }

    let result =
        analyze_game(words, mode, config, seed_word, guesses).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    words: &[Word],
    mode: Option<Mode>,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    let modes = match mode {
        Some(Mode::TwoPlayer) => bail!("The two-player mode cannot be benchmarked"),
        Some(mode) => vec![mode],
        None => Mode::SINGLE_PLAYER.to_vec(),
    };

    println!("Running {count} automated game(s) per mode...");
    let results = run_benchmark(words, &modes, count, seed, true)?;
    print_benchmark_result(&results);
    Ok(())
}
