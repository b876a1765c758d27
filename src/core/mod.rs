//! Core domain types for the code-breaking game
//!
//! This module contains the fundamental domain types and performs no I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod difficulty;
mod feedback;

pub use code::{Code, CodeError, MAX_DIGIT, MIN_DIGIT, SecretDigits, parse_raw_guess};
pub use difficulty::{DEFAULT_GUESS_LIMIT, Difficulty, DifficultyConfig};
pub use feedback::{Feedback, Peg};
