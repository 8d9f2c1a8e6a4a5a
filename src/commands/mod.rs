//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;

pub use analyze::{AnalysisResult, TurnAnalysis, analyze_game};
pub use benchmark::{BenchmarkResult, GameSummary, play_automated, run_benchmark};
pub use simple::{Console, SimpleOptions, run_simple};
