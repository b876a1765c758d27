//! Score command
//!
//! Scores one guess against a given secret without playing a round.

use crate::core::{Code, CodeError, Feedback};

/// Result of scoring a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Parse two digit strings and score the guess against the secret
///
/// # Errors
///
/// Returns an error if either string contains a non-digit or is empty, or if
/// the two codes differ in length.
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreResult, CodeError> {
    let secret: Code = secret.parse()?;
    let guess: Code = guess.parse()?;
    let feedback = Feedback::score(&secret, &guess)?;

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}
