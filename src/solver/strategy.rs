//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::minimax::select_best_guess;
use crate::core::Code;

/// Above this many candidates minimax is too slow and the first candidate is used
pub const MINIMAX_CANDIDATE_LIMIT: usize = 1_500;

/// A strategy for selecting the next guess from the consistent candidates
pub trait Strategy {
    /// Select the next guess
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(&self, candidates: &[&'a Code]) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Minimax over the candidates (default)
    Minimax(MinimaxStrategy),
    /// First consistent candidate in numeric order
    First(FirstCandidateStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &[&'a Code]) -> Option<&'a Code> {
        match self {
            Self::Minimax(s) => s.select_guess(candidates),
            Self::First(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "first"
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" | "simple" => Self::First(FirstCandidateStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::First(_) => "first",
        }
    }
}

/// Always guesses the lowest-numbered consistent candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Code]) -> Option<&'a Code> {
        candidates.first().copied()
    }
}

/// Guesses the candidate that minimizes the worst-case remaining pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Code]) -> Option<&'a Code> {
        if candidates.len() > MINIMAX_CANDIDATE_LIMIT {
            return FirstCandidateStrategy.select_guess(candidates);
        }
        select_best_guess(candidates, candidates).map(|(guess, _)| guess)
    }
}
