//! Round state machine
//!
//! A `GameState` is one round: it owns the secret, counts accepted attempts,
//! records them in the history log and decides when the round is over.
//!
//! ```text
//! AwaitingGuess --out of range--> AwaitingGuess
//! AwaitingGuess --valid guess---> Won | Lost | AwaitingGuess
//! ```

use super::history::{Attempt, HistoryLog};
use crate::core::{
    Code, CodeError, DEFAULT_GUESS_LIMIT, Difficulty, DifficultyConfig, Feedback, SecretDigits,
};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while driving a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Recoverable: the guess was not counted and the player should re-enter it
    #[error("{raw} is not between {min} and {max}")]
    OutOfRange { raw: u32, min: u32, max: u32 },

    /// Recoverable: the round already reached a terminal state
    #[error("round is already over ({status:?})")]
    RoundOver { status: RoundStatus },

    #[error("guess limit must be at least 1")]
    InvalidGuessLimit,

    /// Fatal: secret and guess disagree on shape
    #[error("internal invariant violated: {0}")]
    Invariant(#[from] CodeError),
}

/// Where a round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    AwaitingGuess,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// Terminal flags as seen by front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalState {
    pub won: bool,
    pub lost: bool,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub attempt_number: u32,
    pub feedback: Feedback,
    pub status: RoundStatus,
}

/// Per-round settings that are not part of the difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOptions {
    pub guess_limit: u32,
    pub secret_digits: SecretDigits,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            guess_limit: DEFAULT_GUESS_LIMIT,
            secret_digits: SecretDigits::Classic,
        }
    }
}

/// One round of play
#[derive(Debug, Clone)]
pub struct GameState {
    difficulty: Difficulty,
    config: DifficultyConfig,
    secret: Code,
    attempt_number: u32,
    guess_limit: u32,
    won: bool,
    history: HistoryLog,
}

impl GameState {
    /// Start a round for a raw difficulty selection with a freshly drawn secret
    ///
    /// Unrecognized selections play as `Easy`.
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuessLimit` if `options.guess_limit` is zero.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::game::{GameState, RoundOptions, RoundStatus};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let state = GameState::new_round(2, &RoundOptions::default(), &mut rng).unwrap();
    ///
    /// assert_eq!(state.config().length, 5);
    /// assert_eq!(state.attempt_number(), 0);
    /// assert_eq!(state.status(), RoundStatus::AwaitingGuess);
    /// ```
    pub fn new_round<R: Rng>(
        difficulty_id: i64,
        options: &RoundOptions,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let difficulty = Difficulty::from_id(difficulty_id);
        let secret = Code::random(difficulty.config().length, options.secret_digits, rng);
        Self::with_secret(difficulty, secret, options.guess_limit)
    }

    /// Start a round with a known secret
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuessLimit` for a zero limit and
    /// `GameError::Invariant` if the secret length does not match the difficulty.
    pub fn with_secret(
        difficulty: Difficulty,
        secret: Code,
        guess_limit: u32,
    ) -> Result<Self, GameError> {
        if guess_limit == 0 {
            return Err(GameError::InvalidGuessLimit);
        }

        let config = difficulty.config();
        if secret.len() != config.length {
            return Err(CodeError::LengthMismatch {
                secret: secret.len(),
                guess: config.length,
            }
            .into());
        }

        debug!(
            difficulty = difficulty.name(),
            length = config.length,
            guess_limit,
            "new round"
        );

        Ok(Self {
            difficulty,
            config,
            secret,
            attempt_number: 0,
            guess_limit,
            won: false,
            history: HistoryLog::new(),
        })
    }

    /// Process one raw guess
    ///
    /// An out-of-range guess is rejected without touching the attempt counter
    /// or the history. An accepted guess is scored, recorded, and may end the
    /// round.
    ///
    /// # Errors
    /// - `GameError::OutOfRange` if `raw` is outside the difficulty's bounds
    /// - `GameError::RoundOver` if the round has already been won or lost
    /// - `GameError::Invariant` if the guess cannot be shaped like the secret
    pub fn submit_guess(&mut self, raw: u32) -> Result<TurnOutcome, GameError> {
        let status = self.status();
        if status.is_terminal() {
            return Err(GameError::RoundOver { status });
        }

        if !self.config.accepts(raw) {
            debug!(
                raw,
                attempt = self.attempt_number,
                "guess rejected: out of range"
            );
            return Err(GameError::OutOfRange {
                raw,
                min: self.config.min_range,
                max: self.config.max_range,
            });
        }

        let guess = Code::parse_guess(raw, self.config.length)?;
        let feedback = Feedback::score(&self.secret, &guess)?;

        self.attempt_number += 1;
        self.won = feedback.is_win();
        self.history.record(Attempt::new(
            self.attempt_number,
            raw,
            guess,
            feedback.clone(),
        ));

        let status = self.status();
        debug!(raw, attempt = self.attempt_number, %feedback, "guess scored");
        match status {
            RoundStatus::Won => info!(attempts = self.attempt_number, "round won"),
            RoundStatus::Lost => info!(attempts = self.attempt_number, "round lost"),
            RoundStatus::AwaitingGuess => {}
        }

        Ok(TurnOutcome {
            attempt_number: self.attempt_number,
            feedback,
            status,
        })
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        if self.won {
            RoundStatus::Won
        } else if self.attempt_number >= self.guess_limit {
            RoundStatus::Lost
        } else {
            RoundStatus::AwaitingGuess
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> TerminalState {
        match self.status() {
            RoundStatus::Won => TerminalState {
                won: true,
                lost: false,
            },
            RoundStatus::Lost => TerminalState {
                won: false,
                lost: true,
            },
            RoundStatus::AwaitingGuess => TerminalState {
                won: false,
                lost: false,
            },
        }
    }

    /// Accepted attempts in submission order
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        self.history.replay()
    }

    /// The secret, once the round is over
    #[must_use]
    pub const fn revealed_secret(&self) -> Option<&Code> {
        if self.status().is_terminal() {
            Some(&self.secret)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn attempt_number(&self) -> u32 {
        self.attempt_number
    }

    #[must_use]
    pub const fn guess_limit(&self) -> u32 {
        self.guess_limit
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.guess_limit.saturating_sub(self.attempt_number)
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn config(&self) -> DifficultyConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Peg;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn easy_round(secret: u32, limit: u32) -> GameState {
        let secret = Code::parse_guess(secret, 4).unwrap();
        GameState::with_secret(Difficulty::Easy, secret, limit).unwrap()
    }

    #[test]
    fn new_round_starts_fresh() {
        let mut rng = StdRng::seed_from_u64(42);
        let state = GameState::new_round(3, &RoundOptions::default(), &mut rng).unwrap();

        assert_eq!(state.difficulty(), Difficulty::Hard);
        assert_eq!(state.attempt_number(), 0);
        assert_eq!(state.guess_limit(), DEFAULT_GUESS_LIMIT);
        assert!(!state.is_won());
        assert!(state.history().is_empty());
        assert_eq!(state.status(), RoundStatus::AwaitingGuess);
        assert!(state.revealed_secret().is_none());
    }

    #[test]
    fn unrecognized_difficulty_plays_easy() {
        let mut rng = StdRng::seed_from_u64(42);
        let state = GameState::new_round(99, &RoundOptions::default(), &mut rng).unwrap();
        assert_eq!(state.difficulty(), Difficulty::Easy);
        assert_eq!(state.config().length, 4);
    }

    #[test]
    fn zero_guess_limit_is_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = RoundOptions {
            guess_limit: 0,
            ..RoundOptions::default()
        };
        assert_eq!(
            GameState::new_round(1, &options, &mut rng).unwrap_err(),
            GameError::InvalidGuessLimit
        );
    }

    #[test]
    fn secret_length_must_match_difficulty() {
        let secret = Code::parse_guess(12_345, 5).unwrap();
        let err = GameState::with_secret(Difficulty::Easy, secret, 10).unwrap_err();
        assert!(matches!(err, GameError::Invariant(CodeError::LengthMismatch { .. })));
    }

    #[test]
    fn out_of_range_guess_does_not_count() {
        let mut state = easy_round(1234, 10);

        for raw in [0, 1110, 6667, 12_345] {
            let err = state.submit_guess(raw).unwrap_err();
            assert_eq!(
                err,
                GameError::OutOfRange {
                    raw,
                    min: 1111,
                    max: 6666
                }
            );
        }

        assert_eq!(state.attempt_number(), 0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn accepted_guess_is_scored_and_recorded() {
        let mut state = easy_round(1234, 10);

        let outcome = state.submit_guess(4321).unwrap();
        assert_eq!(outcome.attempt_number, 1);
        assert_eq!(outcome.feedback.pegs(), &[Peg::Present; 4]);
        assert_eq!(outcome.status, RoundStatus::AwaitingGuess);

        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].raw_guess(), 4321);
        assert_eq!(state.attempts_remaining(), 9);
    }

    #[test]
    fn in_range_digits_above_six_are_scored() {
        let mut state = easy_round(1234, 10);
        let outcome = state.submit_guess(1789).unwrap();
        assert_eq!(
            outcome.feedback.pegs(),
            &[Peg::Exact, Peg::Absent, Peg::Absent, Peg::Absent]
        );
    }

    #[test]
    fn win_ends_round_with_attempts_left() {
        let mut state = easy_round(2234, 10);
        state.submit_guess(2222).unwrap();
        let outcome = state.submit_guess(2234).unwrap();

        assert_eq!(outcome.status, RoundStatus::Won);
        assert!(state.is_won());
        assert_eq!(
            state.is_terminal(),
            TerminalState {
                won: true,
                lost: false
            }
        );
        assert_eq!(state.attempts_remaining(), 8);
        assert_eq!(state.revealed_secret().map(Code::to_raw), Some(2234));
    }

    #[test]
    fn exhausting_guesses_loses() {
        let mut state = easy_round(5555, 3);

        assert_eq!(state.submit_guess(1111).unwrap().status, RoundStatus::AwaitingGuess);
        assert_eq!(state.submit_guess(2222).unwrap().status, RoundStatus::AwaitingGuess);
        assert_eq!(state.submit_guess(3333).unwrap().status, RoundStatus::Lost);
        assert_eq!(
            state.is_terminal(),
            TerminalState {
                won: false,
                lost: true
            }
        );
    }

    #[test]
    fn winning_on_last_guess_is_a_win() {
        let mut state = easy_round(5555, 2);
        state.submit_guess(1111).unwrap();
        assert_eq!(state.submit_guess(5555).unwrap().status, RoundStatus::Won);
    }

    #[test]
    fn rejected_guesses_do_not_burn_the_limit() {
        let mut state = easy_round(5555, 1);
        assert!(state.submit_guess(9999).is_err());
        assert!(state.submit_guess(42).is_err());
        assert_eq!(state.status(), RoundStatus::AwaitingGuess);
        assert_eq!(state.submit_guess(5555).unwrap().status, RoundStatus::Won);
    }

    #[test]
    fn finished_round_rejects_further_guesses() {
        let mut state = easy_round(1234, 10);
        state.submit_guess(1234).unwrap();

        let err = state.submit_guess(1111).unwrap_err();
        assert_eq!(
            err,
            GameError::RoundOver {
                status: RoundStatus::Won
            }
        );
        assert_eq!(state.attempt_number(), 1);
        assert_eq!(state.history().len(), 1);
    }

    proptest! {
        #[test]
        fn counter_and_history_track_accepted_guesses(
            raws in prop::collection::vec(0u32..10_000, 0..40)
        ) {
            let mut state = easy_round(6666, 100);
            let mut accepted = Vec::new();

            for raw in raws {
                let before = state.attempt_number();
                match state.submit_guess(raw) {
                    Ok(outcome) => {
                        prop_assert_eq!(outcome.attempt_number, before + 1);
                        accepted.push(raw);
                    }
                    Err(GameError::OutOfRange { .. }) => {
                        prop_assert_eq!(state.attempt_number(), before);
                    }
                    Err(GameError::RoundOver { .. }) => break,
                    Err(other) => prop_assert!(false, "unexpected error: {other}"),
                }
            }

            let recorded: Vec<u32> = state.history().iter().map(Attempt::raw_guess).collect();
            prop_assert_eq!(recorded, accepted);
            prop_assert_eq!(state.history().len() as u32, state.attempt_number());
        }

        #[test]
        fn lost_exactly_at_limit_without_win(limit in 1u32..12) {
            // A 6-free secret can never be matched by 6666
            let mut state = easy_round(1111, limit);
            for n in 1..=limit {
                let outcome = state.submit_guess(6666).unwrap();
                let expected = if n == limit { RoundStatus::Lost } else { RoundStatus::AwaitingGuess };
                prop_assert_eq!(outcome.status, expected);
            }
        }
    }
}
