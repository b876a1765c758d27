//! Per-round attempt history

use crate::core::{Code, Feedback};

/// One accepted guess and the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    ordinal: u32,
    raw_guess: u32,
    guess: Code,
    feedback: Feedback,
}

impl Attempt {
    pub(crate) const fn new(ordinal: u32, raw_guess: u32, guess: Code, feedback: Feedback) -> Self {
        Self {
            ordinal,
            raw_guess,
            guess,
            feedback,
        }
    }

    /// 1-based position of this attempt within its round
    #[must_use]
    pub const fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// The number exactly as the player entered it
    #[must_use]
    pub const fn raw_guess(&self) -> u32 {
        self.raw_guess
    }

    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Append-only log of a round's attempts
///
/// Only `GameState` writes to it; everything else reads through `replay`.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    attempts: Vec<Attempt>,
}

impl HistoryLog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, attempt: Attempt) {
        debug_assert_eq!(
            attempt.ordinal as usize,
            self.attempts.len() + 1,
            "attempts must be recorded in order"
        );
        self.attempts.push(attempt);
    }

    /// Every attempt so far, in submission order
    #[must_use]
    pub fn replay(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn last(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(ordinal: u32, raw: u32) -> Attempt {
        let secret = Code::parse_guess(1234, 4).unwrap();
        let guess = Code::parse_guess(raw, 4).unwrap();
        let feedback = Feedback::score(&secret, &guess).unwrap();
        Attempt::new(ordinal, raw, guess, feedback)
    }

    #[test]
    fn new_log_is_empty() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert!(log.replay().is_empty());
        assert!(log.last().is_none());
    }

    #[test]
    fn replay_preserves_submission_order() {
        let mut log = HistoryLog::new();
        log.record(attempt(1, 4321));
        log.record(attempt(2, 1111));
        log.record(attempt(3, 1234));

        let raws: Vec<u32> = log.replay().iter().map(Attempt::raw_guess).collect();
        assert_eq!(raws, vec![4321, 1111, 1234]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.last().map(Attempt::ordinal), Some(3));
        assert!(log.last().unwrap().feedback().is_win());
    }

    #[test]
    fn attempt_accessors() {
        let a = attempt(1, 1243);
        assert_eq!(a.ordinal(), 1);
        assert_eq!(a.raw_guess(), 1243);
        assert_eq!(a.guess().digits(), &[1, 2, 4, 3]);
        assert_eq!(a.feedback().to_string(), "[X] [X] [O] [O]");
    }
}
