//! Formatting utilities for terminal output

use crate::core::{Feedback, Peg};
use crate::game::Attempt;
use colored::{ColoredString, Colorize};

/// Color a single peg symbol
#[must_use]
pub fn colored_peg(peg: Peg) -> ColoredString {
    match peg {
        Peg::Exact => peg.symbol().green().bold(),
        Peg::Present => peg.symbol().yellow(),
        Peg::Absent => peg.symbol().bright_black(),
    }
}

/// Format feedback as space-separated colored symbols
#[must_use]
pub fn colored_feedback(feedback: &Feedback) -> String {
    feedback
        .pegs()
        .iter()
        .map(|&peg| colored_peg(peg).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One history line: `Attempt 2: 1234 - Result: [X] [O] [-] [-]`
#[must_use]
pub fn attempt_line(attempt: &Attempt) -> String {
    format!(
        "Attempt {}: {} - Result: {}",
        attempt.ordinal(),
        attempt.raw_guess(),
        attempt.feedback()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
