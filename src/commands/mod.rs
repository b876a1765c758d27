//! Command implementations

pub mod benchmark;
pub mod score;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use score::{ScoreResult, score_codes};
pub use simple::{SimpleConfig, run_simple};
