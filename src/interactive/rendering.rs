//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Difficulty, Peg};
use crate::game::RoundStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let config = app.state.config();
    let title = format!(
        "🔐 CODEBREAKER - {} ({} digits, {}-{})",
        app.state.difficulty().name(),
        config.length,
        config.min_range,
        config.max_range
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn peg_style(peg: Peg) -> Style {
    match peg {
        Peg::Exact => Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
        Peg::Present => Style::new().fg(Color::Yellow),
        Peg::Absent => Style::new().fg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = app
        .state
        .history()
        .iter()
        .map(|attempt| {
            let mut spans = vec![
                Span::styled(
                    format!("{:>2}. ", attempt.ordinal()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    attempt.guess().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
            ];
            for &peg in attempt.feedback().pegs() {
                spans.push(Span::styled(peg.symbol(), peg_style(peg)));
                spans.push(Span::raw(" "));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    if let Some(secret) = app.state.revealed_secret() {
        let (label, color) = if app.state.is_won() {
            ("Cracked: ", Color::Green)
        } else {
            ("The code was: ", Color::Red)
        };
        items.push(ListItem::new(Line::from("")));
        items.push(ListItem::new(Line::from(vec![
            Span::raw(label),
            Span::styled(
                secret.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])));
    }

    let list = List::new(items).block(rounded(" Attempts "));
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Guess gauge
            Constraint::Min(6),    // Hint + stats
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_guess_gauge(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_guess_gauge(f: &mut Frame, app: &App, area: Rect) {
    let used = app.state.attempt_number();
    let limit = app.state.guess_limit();
    let ratio = if limit == 0 {
        0.0
    } else {
        (f64::from(used) / f64::from(limit)).min(1.0)
    };
    let color = match app.state.attempts_remaining() {
        0 | 1 => Color::Red,
        2 | 3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(rounded(" Guesses "))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{used}/{limit}"));
    f.render_widget(gauge, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![
        Line::from(format!("Rounds played: {}", stats.total_games)),
        Line::from(format!(
            "Won: {} ({:.0}%)",
            stats.games_won,
            stats.win_rate() * 100.0
        )),
    ];

    let max = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for (&attempts, &count) in &stats.guess_distribution {
        let bar_len = if max == 0 { 0 } else { count * 12 / max };
        lines.push(Line::from(vec![
            Span::raw(format!("{attempts:>2}: ")),
            Span::styled("█".repeat(bar_len.max(1)), Style::default().fg(Color::Cyan)),
            Span::raw(format!(" {count}")),
        ]));
    }

    if let Some(hint) = &app.hint {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Hint: "),
            Span::styled(
                hint.suggestion
                    .as_ref()
                    .map_or_else(|| "none".to_string(), ToString::to_string),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" ({} left)", hint.remaining)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(rounded(" Session "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.as_str()).style(style)
        })
        .collect();

    let list = List::new(items).block(rounded(" Messages "));
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, style) = match app.input_mode {
        InputMode::Guessing => {
            let length = app.state.config().length;
            let shown = format!(
                "{}{}",
                app.input_buffer,
                "_".repeat(length.saturating_sub(app.input_buffer.len()))
            );
            (
                format!(" Guess {} ", app.state.attempt_number() + 1),
                shown,
                Style::default().fg(Color::Yellow),
            )
        }
        InputMode::RoundOver => {
            let choices = Difficulty::ALL
                .iter()
                .map(|d| format!("{}={}", d.id(), d.name()))
                .collect::<Vec<_>>()
                .join("  ");
            let verdict = match app.state.status() {
                RoundStatus::Won => "You win!",
                RoundStatus::Lost => "Out of guesses.",
                RoundStatus::AwaitingGuess => "Round aborted.",
            };
            (
                " Round Over ".to_string(),
                format!("{verdict}  New round: {choices}  n=same"),
                Style::default().fg(Color::Cyan),
            )
        }
    };

    let paragraph = Paragraph::new(content)
        .style(style)
        .block(rounded(&title))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let keys = match app.input_mode {
        InputMode::Guessing => "0-9: type | Enter: guess | Backspace: delete | h: hint | n: new | q: quit",
        InputMode::RoundOver => "1/2/3: new round | n: same difficulty | q: quit",
    };

    let status = Paragraph::new(keys)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
