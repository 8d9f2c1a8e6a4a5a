//! Display functions for command results

use super::formatters::{create_progress_bar, display_pattern, percent};
use crate::commands::{AnalysisResult, BenchmarkResult};
use crate::manager::GameState;
use colored::Colorize;

/// Print every replayed turn with its partition table
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ({} mode)",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.seed_word.to_uppercase().bright_yellow().bold(),
        result.mode
    );
    println!("{}", "═".repeat(60).cyan());
    println!("\nStarting with {} candidate(s)", result.initial_pool);

    for (i, turn) in result.turns.iter().enumerate() {
        println!(
            "\nTurn {}: guess {}",
            i + 1,
            turn.letter.to_string().to_uppercase().bright_white().bold()
        );
        println!("  {:<20} {:>6} {:>8}", "outcome", "words", "letters");

        for (key, class) in &turn.classes {
            let row = format!(
                "{:<20} {:>6} {:>8}",
                display_pattern(key),
                class.count,
                class.letter_count()
            );
            if *key == turn.chosen {
                println!("{} {}", "→".green(), row.green().bold());
            } else {
                println!("  {row}");
            }
        }

        let verdict = if turn.hit { "hit".green() } else { "miss".red() };
        println!(
            "  {verdict}: {} candidate(s) left, {} guess(es) left",
            turn.pool_after, turn.guesses_left
        );
    }

    println!();
    match result.state {
        GameState::Won => println!("{}", "Won".green().bold()),
        GameState::Lost => println!("{}", "Lost".red().bold()),
        GameState::Active => println!("{}", "Still in play".yellow()),
    }
    if let Some(word) = &result.final_word {
        println!("The word would be revealed as {}", word.bright_yellow());
    }
}

/// Print benchmark results, one block per mode
pub fn print_benchmark_result(results: &[BenchmarkResult]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for result in results {
        println!(
            "\n📊 {} (budget {})",
            result.mode.name().to_uppercase().bright_cyan().bold(),
            result.mode.budget()
        );
        println!("   Games played:     {}", result.games);

        let bar = create_progress_bar(result.wins, result.games, 30);
        println!(
            "   Win rate:         [{}] {}",
            bar.green(),
            percent(result.win_rate()).bright_yellow().bold()
        );
        println!("   Average misses:   {:.2}", result.average_misses());
        println!("   Final pool size:  {:.2}", result.average_final_pool());
        println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
        println!("   Games/second:     {:.1}", result.games_per_second());
    }
}
