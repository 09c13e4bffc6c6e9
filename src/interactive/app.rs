//! TUI application state and logic

use crate::core::{WORD_LENGTH, is_alphabet_letter};
use crate::game::{GameSession, GameState, MAX_ATTEMPTS};
use crate::wordlist::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'d> {
    pub dictionary: &'d Dictionary,
    pub session: GameSession<'d>,
    pub rng: StdRng,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl<'d> App<'d> {
    #[must_use]
    pub fn new(dictionary: &'d Dictionary, mut rng: StdRng) -> Self {
        let session = GameSession::new(dictionary, &mut rng);

        Self {
            dictionary,
            session,
            rng,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! A random 5-letter Russian word is waiting.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter, or 'h' for a hint.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Append a typed character to the guess buffer
    ///
    /// Input is folded the same way submitted words are: uppercase is
    /// lowered and ё becomes е. Anything outside the game alphabet is
    /// ignored.
    pub fn push_letter(&mut self, c: char) {
        let c = c.to_lowercase().next().unwrap_or(c);
        let c = if c == 'ё' { 'е' } else { c };

        if is_alphabet_letter(c) && self.input_buffer.chars().count() < WORD_LENGTH {
            self.input_buffer.push(c);
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the current buffer as a guess
    pub fn submit_input(&mut self) {
        let input = self.input_buffer.clone();
        if input.is_empty() {
            return;
        }

        match self.session.submit_guess(&input) {
            Ok(_) => {
                self.input_buffer.clear();
                if self.session.state().is_over() {
                    self.finish_game();
                } else {
                    let remaining = self.session.remaining_attempts();
                    self.add_message(&format!("{remaining} attempts left"), MessageStyle::Info);
                }
            }
            // Keep the buffer so the player can fix the word
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        match self.session.state() {
            GameState::Won => {
                self.stats.games_won += 1;
                let attempts = self.session.attempts().len();
                if attempts <= MAX_ATTEMPTS {
                    self.stats.guess_distribution[attempts] += 1;
                }

                let celebration = match attempts {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it on the last try! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameState::Lost => {
                let reveal = format!(
                    "The word was {}",
                    self.session.target().text().to_uppercase()
                );
                self.add_message(&reveal, MessageStyle::Error);
            }
            GameState::InProgress => {}
        }

        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Ask for a word that is still consistent with the board
    pub fn request_hint(&mut self) {
        match self.session.request_hint(&mut self.rng) {
            Ok(Some(word)) => {
                let text = format!("💡 Try {}", word.text().to_uppercase());
                self.add_message(&text, MessageStyle::Info);
            }
            Ok(None) => self.add_message(
                "No hint left, only the answer itself still fits!",
                MessageStyle::Info,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.session = GameSession::new(self.dictionary, &mut self.rng);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! Type your first guess.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Between games only 'n' and 'q' mean anything
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char('h') => {
                        app.request_hint();
                    }
                    KeyCode::Char(c) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_letter();
                    }
                    KeyCode::Enter => {
                        app.submit_input();
                    }
                    _ => {}
                },
            }
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
    use rand::SeedableRng;

    fn one_word_dictionary() -> Dictionary {
        Dictionary::from_lines(["герой"]).unwrap()
    }

    #[test]
    fn push_letter_folds_and_filters() {
        let dictionary = one_word_dictionary();
        let mut app = App::new(&dictionary, StdRng::seed_from_u64(3));

        app.push_letter('Г');
        app.push_letter('Ё');
        app.push_letter('x');
        app.push_letter('1');
        app.push_letter('о');

        assert_eq!(app.input_buffer, "гео");
    }

    #[test]
    fn push_letter_caps_at_word_length() {
        let dictionary = one_word_dictionary();
        let mut app = App::new(&dictionary, StdRng::seed_from_u64(3));

        for c in "героический".chars() {
            app.push_letter(c);
        }

        assert_eq!(app.input_buffer, "герои");
    }

    #[test]
    fn winning_guess_updates_statistics() {
        // A one-word dictionary makes the target deterministic.
        let dictionary = one_word_dictionary();
        let mut app = App::new(&dictionary, StdRng::seed_from_u64(3));

        app.input_buffer = "герой".to_string();
        app.submit_input();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn rejected_guess_keeps_buffer() {
        let dictionary = one_word_dictionary();
        let mut app = App::new(&dictionary, StdRng::seed_from_u64(3));

        app.input_buffer = "гонец".to_string();
        app.submit_input();

        assert_eq!(app.input_buffer, "гонец");
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.stats.total_games, 0);
    }

    #[test]
    fn new_game_resets_board() {
        let dictionary = one_word_dictionary();
        let mut app = App::new(&dictionary, StdRng::seed_from_u64(3));

        app.input_buffer = "герой".to_string();
        app.submit_input();
        app.new_game();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.input_buffer.is_empty());
        assert!(app.session.attempts().is_empty());
        assert_eq!(app.stats.total_games, 1);
    }
}
