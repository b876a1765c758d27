//! Codebreaker
//!
//! A digit code-breaking game: guess a secret code within a limited number of
//! attempts, guided by per-position feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use codebreaker::core::{Code, Difficulty};
//! use codebreaker::game::{GameState, RoundStatus};
//!
//! let secret: Code = "1234".parse().unwrap();
//! let mut round = GameState::with_secret(Difficulty::Easy, secret, 10).unwrap();
//!
//! let outcome = round.submit_guess(4321).unwrap();
//! println!("Feedback: {}", outcome.feedback);
//!
//! let outcome = round.submit_guess(1234).unwrap();
//! assert_eq!(outcome.status, RoundStatus::Won);
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Automatic solver
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
