//! Round orchestration
//!
//! `GameState` is the only writer of a round's history; front ends drive it
//! through `new_round`, `submit_guess`, `is_terminal` and `history`.

mod history;
mod state;

pub use history::{Attempt, HistoryLog};
pub use state::{GameError, GameState, RoundOptions, RoundStatus, TerminalState, TurnOutcome};
