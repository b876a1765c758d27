//! TUI application state and logic

use crate::core::{Code, parse_raw_guess};
use crate::game::{GameError, GameState, RoundOptions, RoundStatus};
use crate::solver::{Solver, StrategyType, all_codes};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeMap;
use std::io;
use tracing::debug;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub state: GameState,
    pub options: RoundOptions,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub hint: Option<Hint>,
    codes: Vec<Code>,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

/// Solver suggestion for the current position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub remaining: usize,
    pub suggestion: Option<Code>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session tally, kept for the life of the process only
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Won rounds keyed by attempts used
    pub guess_distribution: BTreeMap<u32, usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64
        }
    }
}

impl App {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if the round options are invalid.
    pub fn new(
        difficulty_id: i64,
        options: RoundOptions,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let state = GameState::new_round(difficulty_id, &options, &mut rng)?;
        let codes = all_codes(state.config().length, options.secret_digits);

        let mut app = Self {
            state,
            options,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            hint: None,
            codes,
            rng,
        };
        app.announce_round();
        Ok(app)
    }

    fn announce_round(&mut self) {
        let config = self.state.config();
        self.add_message(
            &format!(
                "{} round: {} guesses, numbers {}-{}",
                self.state.difficulty().name(),
                self.state.guess_limit(),
                config.min_range,
                config.max_range
            ),
            MessageStyle::Info,
        );
    }

    /// Submit the input buffer as a guess
    pub fn submit_input(&mut self) {
        let raw = parse_raw_guess(&self.input_buffer);
        self.input_buffer.clear();

        match self.state.submit_guess(raw) {
            Ok(outcome) => {
                self.hint = None;
                match outcome.status {
                    RoundStatus::Won => {
                        self.record_result(true);
                        let attempts = outcome.attempt_number;
                        let celebration = match attempts {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                            2..=4 => format!("🔥 MAGNIFICENT! Cracked in {attempts}! 🔥"),
                            _ => format!("🎉 CRACKED in {attempts} guesses! 🎉"),
                        };
                        self.add_message(&celebration, MessageStyle::Success);
                        self.add_message(
                            "Press 1/2/3 for a new round at that difficulty, n to repeat, q to quit.",
                            MessageStyle::Info,
                        );
                    }
                    RoundStatus::Lost => {
                        self.record_result(false);
                        let secret = self
                            .state
                            .revealed_secret()
                            .map(ToString::to_string)
                            .unwrap_or_default();
                        self.add_message(
                            &format!("Out of guesses! The code was {secret}."),
                            MessageStyle::Error,
                        );
                        self.add_message(
                            "Press 1/2/3 for a new round at that difficulty, n to repeat, q to quit.",
                            MessageStyle::Info,
                        );
                    }
                    RoundStatus::AwaitingGuess => {
                        self.add_message(
                            &format!(
                                "Attempt {}: {raw} → {}",
                                outcome.attempt_number, outcome.feedback
                            ),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(GameError::OutOfRange { min, max, .. }) => {
                self.add_message(
                    &format!("Please enter a number between {min} and {max}"),
                    MessageStyle::Error,
                );
            }
            Err(GameError::RoundOver { .. }) => {
                self.input_mode = InputMode::RoundOver;
            }
            Err(err) => {
                debug!(error = %err, "round aborted");
                self.add_message(&format!("Round aborted: {err}"), MessageStyle::Error);
                self.input_mode = InputMode::RoundOver;
            }
        }
    }

    fn record_result(&mut self, won: bool) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            *self
                .stats
                .guess_distribution
                .entry(self.state.attempt_number())
                .or_insert(0) += 1;
        }
        self.input_mode = InputMode::RoundOver;
    }

    /// Replace the round with a fresh one
    pub fn new_round(&mut self, difficulty_id: i64) {
        match GameState::new_round(difficulty_id, &self.options, &mut self.rng) {
            Ok(state) => {
                if state.config().length != self.state.config().length {
                    self.codes = all_codes(state.config().length, self.options.secret_digits);
                }
                self.state = state;
                self.input_buffer.clear();
                self.hint = None;
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.announce_round();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Ask the solver how many codes remain and what it would guess
    pub fn request_hint(&mut self) {
        let solver = Solver::new(StrategyType::from_name("minimax"), &self.codes);
        let history = self.state.history();
        let hint = Hint {
            remaining: solver.count_candidates(history),
            suggestion: solver.next_guess(history).cloned(),
        };

        match &hint.suggestion {
            Some(code) => self.add_message(
                &format!("Hint: {} codes remain, try {code}", hint.remaining),
                MessageStyle::Info,
            ),
            None => self.add_message("Hint: no consistent code remains", MessageStyle::Error),
        }
        self.hint = Some(hint);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(self.state.difficulty().id()),
                KeyCode::Char(c @ '1'..='3') => self.new_round(i64::from(c as u8 - b'0')),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(self.state.difficulty().id()),
                KeyCode::Char('h') => self.request_hint(),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.input_buffer.len() < self.state.config().length {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use rand::SeedableRng;

    fn app(difficulty_id: i64, guess_limit: u32) -> App {
        let options = RoundOptions {
            guess_limit,
            ..RoundOptions::default()
        };
        App::new(difficulty_id, options, StdRng::seed_from_u64(5)).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_guess(app: &mut App, guess: &str) {
        for c in guess.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_is_limited_to_code_length_digits() {
        let mut app = app(1, 10);
        for c in "12x34567".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "1234");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "123");
    }

    #[test]
    fn out_of_range_guess_is_not_counted() {
        let mut app = app(1, 10);
        type_guess(&mut app, "99");

        assert_eq!(app.state.attempt_number(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn losing_round_updates_stats_and_mode() {
        let mut app = app(1, 2);
        type_guess(&mut app, "6666");
        type_guess(&mut app, "6666");

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("The code was")));
    }

    #[test]
    fn hint_guides_a_win() {
        let mut app = app(1, 10);

        while app.input_mode == InputMode::Guessing {
            press(&mut app, KeyCode::Char('h'));
            let guess = app
                .hint
                .as_ref()
                .and_then(|h| h.suggestion.clone())
                .expect("solver always has a suggestion for classic secrets");
            type_guess(&mut app, &guess.to_string());
        }

        assert!(app.state.is_won());
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution.values().sum::<usize>(), 1);
    }

    #[test]
    fn round_over_keys_start_new_round() {
        let mut app = app(1, 1);
        type_guess(&mut app, "6666");
        assert_eq!(app.input_mode, InputMode::RoundOver);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.state.difficulty(), Difficulty::Hard);
        assert_eq!(app.state.attempt_number(), 0);
        assert_eq!(app.codes.len(), 5usize.pow(6));

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn quit_keys() {
        let mut app = app(1, 10);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app2 = self::app(2, 10);
        press(&mut app2, KeyCode::Char('q'));
        assert!(app2.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(1, 10);
        for i in 0..20 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "m19");
    }
}
