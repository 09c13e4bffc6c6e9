//! TUI rendering with ratatui
//!
//! Draws the guess board, the knowledge panel and the input line.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, WORD_LENGTH};
use crate::game::{GameState, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Knowledge and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 SLOVO - Guess the Hidden Word")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];

    for attempt in app.session.attempts() {
        let mut spans = vec![Span::raw("  ")];
        for (i, &c) in attempt.word().chars().iter().enumerate() {
            let style = match attempt.verdict().at(i) {
                Feedback::Exact => Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Feedback::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
                Feedback::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
            };
            spans.push(Span::styled(format!(" {} ", c.to_uppercase()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            attempt.verdict().to_string(),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Empty rows for the attempts still left
    for _ in app.session.attempts().len()..MAX_ATTEMPTS {
        let mut spans = vec![Span::raw("  ")];
        for _ in 0..WORD_LENGTH {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Knowledge
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_knowledge(f, app, chunks[0]);
    render_attempts_gauge(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_knowledge(f: &mut Frame, app: &App, area: Rect) {
    let constraints = app.session.constraints();

    let mut confirmed: Vec<char> = constraints.confirmed_letters().iter().copied().collect();
    confirmed.sort_unstable();
    let mut excluded: Vec<char> = constraints.excluded_letters().iter().copied().collect();
    excluded.sort_unstable();

    let pattern = app
        .session
        .known_pattern()
        .to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ");

    let content = vec![
        Line::from(vec![
            Span::raw("Pattern:   "),
            Span::styled(
                pattern,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("In word:   "),
            Span::styled(letter_row(&confirmed), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Ruled out: "),
            Span::styled(letter_row(&excluded), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Knowledge ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn letter_row(letters: &[char]) -> String {
    letters
        .iter()
        .map(|c| c.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_attempts_gauge(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.attempts().len();
    let remaining = app.session.remaining_attempts();
    let percent = (used * 100 / MAX_ATTEMPTS) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{MAX_ATTEMPTS} used | {remaining} left"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => {
            if app.session.state() == GameState::Won {
                (
                    " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
                    String::new(),
                    Color::Green,
                )
            } else {
                (
                    " Out of attempts | Press 'n' for new game or 'q' to quit ",
                    String::new(),
                    Color::Red,
                )
            }
        }
        InputMode::Guessing => (
            " Type a 5-letter word | Enter: submit | h: hint ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.session.state() {
        GameState::InProgress => format!(
            "Attempt {}/{MAX_ATTEMPTS}",
            app.session.attempts().len() + 1
        ),
        GameState::Won => "Victory!".to_string(),
        GameState::Lost => "Defeat".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let words_text = format!("Words: {}", app.dictionary.len());
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "q: Quit | n: New Game | h: Hint",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
