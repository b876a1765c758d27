//! Minimax guess selection
//!
//! Picks the guess whose worst-case feedback leaves the fewest candidates.

use crate::core::{Code, Feedback};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Maximum number of candidates that share one feedback for `guess`
///
/// # Examples
/// ```
/// use codebreaker::core::Code;
/// use codebreaker::solver::minimax::calculate_max_remaining;
///
/// let guess: Code = "12".parse().unwrap();
/// let a: Code = "12".parse().unwrap();
/// let b: Code = "34".parse().unwrap();
///
/// assert_eq!(calculate_max_remaining(&guess, &[&a, &b]), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[&Code]) -> usize {
    group_by_feedback(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Group candidates by the feedback `guess` would earn against them
fn group_by_feedback(guess: &Code, candidates: &[&Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        // Candidates share the guess's length; mismatches are skipped
        if let Ok(feedback) = Feedback::score(candidate, guess) {
            *counts.entry(feedback).or_insert(0) += 1;
        }
    }

    counts
}

/// Select the guess from `guess_pool` minimizing worst-case remaining candidates
///
/// Ties go to the earliest guess in the pool. Returns the guess and its
/// worst case, or `None` for an empty pool.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Code],
    candidates: &[&Code],
) -> Option<(&'a Code, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(idx, &guess)| (calculate_max_remaining(guess, candidates), idx, guess))
        .min_by_key(|&(max, idx, _)| (max, idx))
        .map(|(max, _, guess)| (guess, max))
}
