//! Display functions for command results

use super::formatters::{colored_feedback, create_progress_bar};
use crate::commands::{BenchmarkResult, ScoreResult};
use colored::Colorize;

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Secret: {}", result.secret.to_string().bright_yellow().bold());
    println!("Guess:  {}", result.guess.to_string().bright_white().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("Result: {}", colored_feedback(&result.feedback));

    if result.feedback.is_win() {
        println!("{}", "✅ Exact match".green().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Difficulty:       {}", result.difficulty);
    println!("   Strategy:         {}", result.strategy);
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Rounds won:       {} {}",
        result.won,
        format!("({:.1}%)", result.win_rate() * 100.0).green()
    );
    if result.lost > 0 {
        println!("   Rounds lost:      {}", format!("{}", result.lost).red());
    }
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for (&attempts, &count) in &result.distribution {
        let pct = count as f64 / result.total_rounds.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {attempts:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
