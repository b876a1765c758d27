//! Benchmark command
//!
//! Plays many rounds with the automatic solver and reports how it did.

use crate::core::Difficulty;
use crate::game::{GameState, RoundOptions};
use crate::solver::{Solver, Strategy, all_codes};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub difficulty: Difficulty,
    pub options: RoundOptions,
    pub rounds: usize,
    /// Base seed; round `i` uses `seed + i`. Random secrets when `None`.
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new(difficulty: Difficulty, rounds: usize) -> Self {
        Self {
            difficulty,
            options: RoundOptions::default(),
            rounds,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub difficulty: Difficulty,
    pub strategy: String,
    pub total_rounds: usize,
    pub won: usize,
    pub lost: usize,
    /// Mean attempts over won rounds
    pub average_attempts: f64,
    pub min_attempts: u32,
    pub max_attempts: u32,
    /// Won rounds keyed by attempts used
    pub distribution: BTreeMap<u32, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            self.won as f64 / self.total_rounds as f64
        }
    }
}

/// Outcome of one simulated round
struct RoundRecord {
    won: bool,
    attempts: u32,
}

/// Run the solver against `config.rounds` fresh rounds in parallel
///
/// Every guess goes through `GameState::submit_guess`, exactly as a player's
/// would.
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or a round cannot
/// be created or driven (for example a zero guess limit).
pub fn run_benchmark<S: Strategy + Sync>(
    config: &BenchmarkConfig,
    strategy: S,
    strategy_name: &str,
) -> Result<BenchmarkResult> {
    let codes = all_codes(
        config.difficulty.config().length,
        config.options.secret_digits,
    );
    let solver = Solver::new(strategy, &codes);

    let pb = if config.show_progress {
        ProgressBar::new(config.rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let records = (0..config.rounds)
        .into_par_iter()
        .map(|index| {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
                None => StdRng::from_os_rng(),
            };
            let record = play_round(&solver, config, &mut rng);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    Ok(summarize(config, strategy_name, &records, duration))
}

fn play_round<S: Strategy>(
    solver: &Solver<'_, S>,
    config: &BenchmarkConfig,
    rng: &mut StdRng,
) -> Result<RoundRecord> {
    let mut state = GameState::new_round(config.difficulty.id(), &config.options, rng)?;

    while !state.status().is_terminal() {
        let Some(guess) = solver.next_guess(state.history()) else {
            // Only happens when the secret lies outside the solver's code space
            debug!("solver ran out of candidates");
            break;
        };
        state.submit_guess(guess.to_raw())?;
    }

    Ok(RoundRecord {
        won: state.is_won(),
        attempts: state.attempt_number(),
    })
}

fn summarize(
    config: &BenchmarkConfig,
    strategy_name: &str,
    records: &[RoundRecord],
    duration: Duration,
) -> BenchmarkResult {
    let mut distribution = BTreeMap::new();
    for record in records.iter().filter(|r| r.won) {
        *distribution.entry(record.attempts).or_insert(0) += 1;
    }

    let won_attempts: Vec<u32> = records
        .iter()
        .filter(|r| r.won)
        .map(|r| r.attempts)
        .collect();
    let won = won_attempts.len();

    let average_attempts = if won > 0 {
        f64::from(won_attempts.iter().sum::<u32>()) / won as f64
    } else {
        0.0
    };

    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        difficulty: config.difficulty,
        strategy: strategy_name.to_string(),
        total_rounds: records.len(),
        won,
        lost: records.len() - won,
        average_attempts,
        min_attempts: won_attempts.iter().copied().min().unwrap_or(0),
        max_attempts: won_attempts.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        rounds_per_second: if seconds > 0.0 {
            records.len() as f64 / seconds
        } else {
            0.0
        },
    }
}
