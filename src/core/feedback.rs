//! Guess feedback calculation and representation
//!
//! Feedback holds one peg per guess position:
//! - `Exact`   = right digit, right position
//! - `Present` = digit occurs elsewhere in the secret
//! - `Absent`  = digit not available in the secret
//!
//! Scoring is multiplicity-correct: a digit `d` earns at most
//! `min(count in secret, count in guess)` non-absent pegs.

use super::code::{Code, CodeError};
use std::fmt;

/// Per-position feedback symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    Exact,
    Present,
    Absent,
}

impl Peg {
    /// Bracketed symbol shown to the player
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Exact => "[X]",
            Self::Present => "[O]",
            Self::Absent => "[-]",
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Feedback for one guess, in guess position order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Peg>);

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the secret's pool
    /// 2. Second pass: left to right, mark remaining guess digits present while
    ///    the pool still holds that digit
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Code, Feedback, Peg};
    ///
    /// let secret = Code::from_digits([2, 2, 3, 4]).unwrap();
    /// let guess = Code::from_digits([2, 2, 2, 2]).unwrap();
    /// let feedback = Feedback::score(&secret, &guess).unwrap();
    ///
    /// assert_eq!(
    ///     feedback.pegs(),
    ///     &[Peg::Exact, Peg::Exact, Peg::Absent, Peg::Absent]
    /// );
    /// ```
    pub fn score(secret: &Code, guess: &Code) -> Result<Self, CodeError> {
        if secret.len() != guess.len() {
            return Err(CodeError::LengthMismatch {
                secret: secret.len(),
                guess: guess.len(),
            });
        }

        let mut pegs = vec![Peg::Absent; guess.len()];
        let mut secret_available = secret.digit_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess.digits().iter().zip(secret.digits()).enumerate() {
            if g == s {
                pegs[i] = Peg::Exact;
                if let Some(count) = secret_available.get_mut(&g) {
                    *count -= 1;
                }
            }
        }

        // Second pass: present elsewhere, from what the exact pass left over
        for (i, &g) in guess.digits().iter().enumerate() {
            if pegs[i] == Peg::Exact {
                continue;
            }
            if let Some(count) = secret_available.get_mut(&g)
                && *count > 0
            {
                pegs[i] = Peg::Present;
                *count -= 1;
            }
        }

        Ok(Self(pegs))
    }

    /// Pegs in guess position order
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True iff every peg is `Exact`
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&p| p == Peg::Exact)
    }

    /// Number of pegs of one kind
    #[must_use]
    pub fn count(&self, peg: Peg) -> usize {
        self.0.iter().filter(|&&p| p == peg).count()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, peg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}
