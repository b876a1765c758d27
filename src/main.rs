//! Codebreaker - CLI
//!
//! Digit code-breaking game with TUI and console modes, plus a solver
//! benchmark.

use anyhow::Result;
use clap::{Parser, Subcommand};
use codebreaker::{
    commands::{BenchmarkConfig, SimpleConfig, run_benchmark, run_simple, score_codes},
    core::{DEFAULT_GUESS_LIMIT, Difficulty, SecretDigits},
    game::RoundOptions,
    output::{print_benchmark_result, print_score_result},
    solver::StrategyType,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "codebreaker",
    about = "Break the secret digit code before your guesses run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: 1 = Easy (4 digits), 2 = Moderate (5), 3 = Hard (6).
    /// Defaults to 1; `simple` shows a menu when omitted
    #[arg(short, long, global = true)]
    difficulty: Option<i64>,

    /// Guesses allowed per round
    #[arg(
        short = 'g',
        long,
        global = true,
        default_value_t = DEFAULT_GUESS_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_guesses: u32,

    /// Secret alphabet: 'classic' (digits 1-5, default) or 'full' (1-6)
    #[arg(
        long,
        global = true,
        default_value = "classic",
        value_parser = ["classic", "full"]
    )]
    secret_digits: String,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode without TUI
    Simple,

    /// Score a guess against a secret
    Score {
        /// The secret code, e.g. 1234
        secret: String,

        /// The guess, same length as the secret
        guess: String,
    },

    /// Benchmark the automatic solver
    Benchmark {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Strategy: minimax (default) or first
        #[arg(short, long, default_value = "minimax")]
        strategy: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn rng_from(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let options = RoundOptions {
        guess_limit: cli.max_guesses,
        secret_digits: SecretDigits::from_name(&cli.secret_digits),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.difficulty.unwrap_or(1), options, cli.seed),
        Commands::Simple => run_simple_command(cli.difficulty, options, cli.seed),
        Commands::Score { secret, guess } => {
            let result = score_codes(&secret, &guess)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, strategy } => run_benchmark_command(
            Difficulty::from_id(cli.difficulty.unwrap_or(1)),
            options,
            cli.seed,
            count,
            &strategy,
        ),
    }
}

fn run_benchmark_command(
    difficulty: Difficulty,
    options: RoundOptions,
    seed: Option<u64>,
    count: usize,
    strategy_name: &str,
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    println!(
        "Running benchmark: {count} {} rounds with {} strategy...",
        difficulty.name(),
        strategy.name()
    );

    let config = BenchmarkConfig {
        options,
        seed,
        ..BenchmarkConfig::new(difficulty, count)
    };
    let result = run_benchmark(&config, strategy, strategy.name())?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_simple_command(
    difficulty: Option<i64>,
    options: RoundOptions,
    seed: Option<u64>,
) -> Result<()> {
    let config = SimpleConfig {
        options,
        difficulty,
    };
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_simple(&config, &mut stdin.lock(), &mut stdout, &mut rng_from(seed))
}

fn run_play_command(difficulty: i64, options: RoundOptions, seed: Option<u64>) -> Result<()> {
    use codebreaker::interactive::{App, run_tui};

    let app = App::new(difficulty, options, rng_from(seed))?;
    run_tui(app)
}
