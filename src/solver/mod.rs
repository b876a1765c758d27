//! Automatic code breaking
//!
//! Candidate elimination over the secret code space, used by the benchmark
//! command and the TUI hint key.

mod codes;
mod engine;
pub mod minimax;
pub mod strategy;

pub use codes::all_codes;
pub use engine::Solver;
pub use strategy::{FirstCandidateStrategy, MinimaxStrategy, Strategy, StrategyType};
