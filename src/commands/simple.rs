//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. Reads from any `BufRead` and writes to
//! any `Write` so the whole conversation can be scripted.

use crate::core::{Difficulty, parse_raw_guess};
use crate::game::{GameError, GameState, RoundOptions, RoundStatus};
use crate::output::formatters::{attempt_line, colored_feedback};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Configuration for a console session
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleConfig {
    pub options: RoundOptions,
    /// Fixed difficulty selection; the menu is shown every round when `None`
    pub difficulty: Option<i64>,
}

/// Why the session loop stopped reading
enum Flow {
    Continue,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// Plays rounds until the player declines another, types `quit`, or input
/// ends.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output,
/// or if a round hits an internal invariant violation.
pub fn run_simple<R, W, G>(
    config: &SimpleConfig,
    input: &mut R,
    output: &mut W,
    rng: &mut G,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    writeln!(output, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(output, "║              Codebreaker - Console           ║")?;
    writeln!(output, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(output, "Break the secret code. After each guess you'll see:")?;
    writeln!(output, "  [X] right digit in the right place")?;
    writeln!(output, "  [O] digit is in the code somewhere else")?;
    writeln!(output, "  [-] digit is not in the code")?;
    writeln!(output, "Type 'quit' at any prompt to leave.\n")?;

    loop {
        let difficulty_id = match config.difficulty {
            Some(id) => id,
            None => {
                writeln!(output, "Please select a difficulty:")?;
                for difficulty in Difficulty::ALL {
                    writeln!(
                        output,
                        "*** {:<22} - {}",
                        difficulty.to_string(),
                        difficulty.id()
                    )?;
                }
                let Some(choice) = prompt(input, output, "Difficulty")? else {
                    return farewell(output);
                };
                i64::from(parse_raw_guess(&choice))
            }
        };

        let mut state = GameState::new_round(difficulty_id, &config.options, rng)?;
        writeln!(
            output,
            "\n{} You have {} guesses.\n",
            format!("{} selected.", state.difficulty()).bright_cyan(),
            state.guess_limit()
        )?;

        if let Flow::Quit = play_round(&mut state, input, output)? {
            return farewell(output);
        }

        report_outcome(&state, output)?;

        let Some(answer) = prompt(
            input,
            output,
            "Would you like to view the full history of your attempts? (y/n)",
        )?
        else {
            return farewell(output);
        };
        if answer.eq_ignore_ascii_case("y") {
            writeln!(output, "\n***** FULL ATTEMPT HISTORY *****")?;
            for attempt in state.history() {
                writeln!(output, "{}", attempt_line(attempt))?;
            }
            writeln!(output)?;
        }

        let Some(answer) = prompt(input, output, "Do you want to play again? (y/n)")? else {
            return farewell(output);
        };
        match answer.to_lowercase().as_str() {
            "y" | "yes" => writeln!(output, "\n🔄 New game started!\n")?,
            "n" | "no" => return farewell(output),
            _ => {
                writeln!(output, "Invalid selection.")?;
                return farewell(output);
            }
        }
    }
}

/// Drive one round until it ends or the player quits
fn play_round<R: BufRead, W: Write>(
    state: &mut GameState,
    input: &mut R,
    output: &mut W,
) -> Result<Flow> {
    let config = state.config();

    while state.status() == RoundStatus::AwaitingGuess {
        let label = format!(
            "Guess number {} (a {} digit number between {} and {})",
            state.attempt_number() + 1,
            config.length,
            config.min_range,
            config.max_range
        );
        let Some(line) = prompt(input, output, &label)? else {
            return Ok(Flow::Quit);
        };

        let raw = parse_raw_guess(&line);
        match state.submit_guess(raw) {
            Ok(outcome) => {
                writeln!(output, "Attempt {} - {raw}", outcome.attempt_number)?;
                writeln!(output, "You guessed: {}\n", colored_feedback(&outcome.feedback))?;
            }
            Err(GameError::OutOfRange { .. }) => {
                writeln!(output, "{}\n", "Please enter a valid number".red())?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(Flow::Continue)
}

fn report_outcome<W: Write>(state: &GameState, output: &mut W) -> Result<()> {
    match state.status() {
        RoundStatus::Won => {
            writeln!(
                output,
                "{}",
                "***** ***** YOU WIN!! ***** *****".bright_green().bold()
            )?;
            let attempts = state.attempt_number();
            writeln!(
                output,
                "Solved in {attempts} {}.\n",
                if attempts == 1 { "guess" } else { "guesses" }
            )?;
        }
        RoundStatus::Lost => {
            writeln!(output, "{}", "***** Out of guesses! *****".red().bold())?;
            if let Some(secret) = state.revealed_secret() {
                writeln!(output, "The code was {}.\n", secret.to_string().bright_yellow())?;
            }
        }
        RoundStatus::AwaitingGuess => {}
    }
    Ok(())
}

fn farewell<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "\n👋 Thanks for playing.\n\n*****GAMEOVER*****")?;
    Ok(())
}

/// Prompt and read one trimmed line
///
/// Returns `None` at end of input or when the player asks to quit.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line.trim().to_string();
    if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
        return Ok(None);
    }

    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, SecretDigits};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn run(config: &SimpleConfig, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);
        run_simple(config, &mut input, &mut output, &mut rng).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn quits_from_difficulty_menu() {
        let out = run(&SimpleConfig::default(), "quit\n");
        assert!(out.contains("Please select a difficulty:"));
        assert!(out.contains("Easy (4 digits)"));
        assert!(out.contains("*****GAMEOVER*****"));
    }

    #[test]
    fn out_of_range_guess_reprompts_same_number() {
        let out = run(&SimpleConfig::default(), "1\n42\nabc\nq\n");
        assert_eq!(out.matches("Please enter a valid number").count(), 2);
        assert_eq!(out.matches("Guess number 1 ").count(), 3);
        assert!(!out.contains("Guess number 2 "));
    }

    #[test]
    fn unrecognized_difficulty_plays_easy() {
        let out = run(&SimpleConfig::default(), "banana\nq\n");
        assert!(out.contains("Easy (4 digits) selected."));
        assert!(out.contains("between 1111 and 6666"));
    }

    #[test]
    fn losing_round_reveals_secret_and_history() {
        // Classic secrets never contain 6, so 6666 can never win
        let config = SimpleConfig {
            options: RoundOptions {
                guess_limit: 2,
                ..RoundOptions::default()
            },
            difficulty: Some(1),
        };
        let out = run(&config, "6666\n6666\ny\nn\n");

        assert!(out.contains("Attempt 1 - 6666"));
        assert!(out.contains("Attempt 2 - 6666"));
        assert!(out.contains("Out of guesses!"));
        assert!(out.contains("The code was "));
        assert!(out.contains("***** FULL ATTEMPT HISTORY *****"));
        assert!(out.contains("Attempt 2: 6666 - Result: [-] [-] [-] [-]"));
        assert!(out.contains("*****GAMEOVER*****"));
    }

    #[test]
    fn winning_round_prints_victory_banner() {
        // Same seed as `run`, so this is the secret the round will draw
        let secret = Code::random(4, SecretDigits::Classic, &mut StdRng::seed_from_u64(3));
        let config = SimpleConfig {
            difficulty: Some(1),
            ..SimpleConfig::default()
        };
        let out = run(&config, &format!("{secret}\ny\nn\n"));

        assert!(out.contains("YOU WIN"));
        assert!(out.contains("Solved in 1 guess."));
        assert!(!out.contains("Out of guesses!"));
        assert!(out.contains(&format!("Attempt 1: {secret} - Result: [X] [X] [X] [X]")));
    }

    #[test]
    fn play_again_starts_a_new_round() {
        let config = SimpleConfig {
            options: RoundOptions {
                guess_limit: 1,
                ..RoundOptions::default()
            },
            difficulty: Some(3),
        };
        let out = run(&config, "666666\nn\ny\n666666\nn\nn\n");

        assert_eq!(out.matches("Hard (6 digits) selected.").count(), 2);
        assert_eq!(out.matches("Out of guesses!").count(), 2);
        assert!(out.contains("New game started!"));
    }

    #[test]
    fn invalid_play_again_answer_ends_session() {
        let config = SimpleConfig {
            options: RoundOptions {
                guess_limit: 1,
                ..RoundOptions::default()
            },
            difficulty: Some(1),
        };
        let out = run(&config, "6666\nn\nmaybe\n");
        assert!(out.contains("Invalid selection."));
        assert!(out.contains("*****GAMEOVER*****"));
    }

    #[test]
    fn end_of_input_ends_session_cleanly() {
        let out = run(&SimpleConfig::default(), "2\n");
        assert!(out.contains("Moderate (5 digits) selected."));
        assert!(out.contains("*****GAMEOVER*****"));
    }
}
