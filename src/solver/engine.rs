//! Main solver interface

use super::strategy::Strategy;
use crate::core::{Code, Feedback};
use crate::game::Attempt;

/// Automatic code breaker
///
/// Keeps every code consistent with the attempts so far and asks its
/// strategy to pick among them.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    all_codes: &'a [Code],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver over a code space
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `all_codes`: Every code the secret could be (see `all_codes`)
    pub const fn new(strategy: S, all_codes: &'a [Code]) -> Self {
        Self {
            strategy,
            all_codes,
        }
    }

    /// Get the next guess given the attempts so far
    ///
    /// Returns None if no code is consistent with the history.
    pub fn next_guess(&self, history: &[Attempt]) -> Option<&'a Code> {
        let candidates = self.filter_candidates(history);

        match candidates.len() {
            0 => None,
            1 => Some(candidates[0]),
            _ => self.strategy.select_guess(&candidates),
        }
    }

    /// Codes that would have produced every recorded feedback
    fn filter_candidates(&self, history: &[Attempt]) -> Vec<&'a Code> {
        self.all_codes
            .iter()
            .filter(|&candidate| {
                history.iter().all(|attempt| {
                    Feedback::score(candidate, attempt.guess())
                        .is_ok_and(|feedback| feedback == *attempt.feedback())
                })
            })
            .collect()
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &[Attempt]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Get the current candidates (public accessor)
    pub fn get_candidates(&self, history: &[Attempt]) -> Vec<&'a Code> {
        self.filter_candidates(history)
    }
}
