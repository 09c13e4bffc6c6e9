//! Simple console game mode
//!
//! Text-based game loop without the TUI. Optionally appends a plain
//! transcript of every game to a log file.

use crate::core::Word;
use crate::game::{Attempt, GameObserver, GameSession, GameState, MAX_ATTEMPTS};
use crate::output::formatters::verdict_cells;
use crate::output::print_attempt;
use crate::wordlist::Dictionary;
use colored::Colorize;
use rand::Rng;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Observer that appends a plain-text transcript of the game to a file
pub struct TranscriptLogger {
    file: File,
    guesses: usize,
}

impl TranscriptLogger {
    /// Open the transcript file in append mode, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file, guesses: 0 })
    }
}

impl GameObserver for TranscriptLogger {
    fn on_guess_scored(&mut self, attempt: &Attempt, remaining: usize) {
        self.guesses += 1;
        // Log writes must not interrupt play
        let _ = writeln!(
            self.file,
            "guess {}: {} {} ({remaining} left)",
            self.guesses,
            attempt.word(),
            attempt.verdict()
        );
    }

    fn on_game_finished(&mut self, state: GameState, target: &Word) {
        let result = match state {
            GameState::Won => format!("won in {}", self.guesses),
            GameState::Lost => "lost".to_string(),
            GameState::InProgress => return,
        };
        let _ = writeln!(self.file, "result: {result}, target was {target}");
    }
}

/// Run the console game mode
///
/// Each round picks a fresh random target. An empty input line asks for
/// a hint, 'quit' ends the session.
///
/// # Errors
///
/// Returns an error if reading user input fails or the transcript file
/// cannot be opened.
pub fn run_simple<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    rng: &mut R,
    log: Option<&Path>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Slovo - Guess the Hidden Word                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I picked a random 5-letter Russian word. You have {MAX_ATTEMPTS} attempts.");
    println!("After each guess every letter gets a mark:\n");
    println!("  + the letter sits in its exact place");
    println!("  ^ the letter is in the word, elsewhere");
    println!("  - the letter is not in the word\n");
    println!("Commands: empty line for a hint, 'quit' to exit\n");

    loop {
        let mut session = GameSession::new(dictionary, rng);
        if let Some(path) = log {
            let logger =
                TranscriptLogger::open(path).map_err(|e| format!("Cannot open log file: {e}"))?;
            session = session.with_observer(Box::new(logger));
        }

        if !play_session(&mut session, rng)? {
            return Ok(());
        }

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" | "да" => {
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Play a single game to completion
///
/// Returns `Ok(false)` if the player quit mid-game.
fn play_session<R: Rng + ?Sized>(
    session: &mut GameSession<'_>,
    rng: &mut R,
) -> Result<bool, String> {
    while session.state() == GameState::InProgress {
        let prompt = format!("Guess {}/{MAX_ATTEMPTS}", session.attempts().len() + 1);
        let input = get_user_input(&prompt)?;

        if input.is_empty() {
            match session.request_hint(rng) {
                Ok(Some(hint)) => {
                    println!("💡 Try: {}\n", hint.text().to_uppercase().bright_cyan().bold());
                }
                Ok(None) => println!("💡 No hint left, only the answer itself still fits!\n"),
                Err(e) => println!("❌ {e}\n"),
            }
            continue;
        }

        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit" | "стоп") {
            println!(
                "\nThe word was {}.",
                session.target().text().to_uppercase().bright_yellow().bold()
            );
            println!("👋 Thanks for playing!\n");
            return Ok(false);
        }

        match session.submit_guess(&input) {
            Ok(_) => {
                if let Some(attempt) = session.attempts().last() {
                    print_attempt(attempt.word(), attempt.verdict());
                }
                println!();
            }
            Err(e) => println!("❌ {e}\n"),
        }
    }

    print_game_result(session);
    Ok(true)
}

fn print_game_result(session: &GameSession<'_>) {
    match session.state() {
        GameState::Won => {
            let attempts = session.attempts().len();
            let performance = match attempts {
                1 => ("🏆 Perfect!", "First try, incredible!"),
                2 => ("⭐ Excellent!", "Outstanding deduction!"),
                3 => ("💫 Great!", "Very well played!"),
                4 => ("✨ Good!", "Nice work!"),
                5 => ("👍 Solved!", "Got it!"),
                _ => ("✓ Complete!", "Down to the wire!"),
            };

            println!("\n{}", "═".repeat(60).bright_cyan());
            println!("{}", "    🎉 You guessed the word! 🎉    ".bright_green().bold());
            println!("{}", "═".repeat(60).bright_cyan());
            println!("\n  {}", performance.0.bright_yellow().bold());
            println!("  {}", performance.1.bright_white());
            println!(
                "\n  Solved in {} {}",
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "guess" } else { "guesses" }
            );
        }
        GameState::Lost => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                format!(
                    "  ❌ Out of attempts! The word was {}.  ",
                    session.target().text().to_uppercase()
                )
                .red()
                .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
        }
        GameState::InProgress => {}
    }

    println!("\n  Guess history:");
    for (i, attempt) in session.attempts().iter().enumerate() {
        println!(
            "    {}. {}  {}",
            (i + 1).to_string().bright_black(),
            verdict_cells(attempt.word(), attempt.verdict()),
            attempt.verdict().to_string().bright_black()
        );
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn transcript_logger_records_session() {
        let path = std::env::temp_dir().join("slovo-transcript-test.log");
        let _ = fs::remove_file(&path);

        let dictionary = Dictionary::from_lines(["герой", "гонец"]).unwrap();
        {
            let logger = TranscriptLogger::open(&path).unwrap();
            let mut session =
                GameSession::with_target(&dictionary, Word::new("герой").unwrap())
                    .unwrap()
                    .with_observer(Box::new(logger));
            session.submit_guess("гонец").unwrap();
            session.submit_guess("герой").unwrap();
        }

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("guess 1: гонец +^-^- (5 left)"));
        assert!(text.contains("guess 2: герой +++++ (4 left)"));
        assert!(text.contains("result: won in 2, target was герой"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn transcript_logger_records_loss() {
        let path = std::env::temp_dir().join("slovo-transcript-loss-test.log");
        let _ = fs::remove_file(&path);

        let dictionary = Dictionary::from_lines([
            "герой", "гонец", "слово", "банан", "пчела", "банка", "абвгд",
        ])
        .unwrap();
        {
            let logger = TranscriptLogger::open(&path).unwrap();
            let mut session =
                GameSession::with_target(&dictionary, Word::new("абвгд").unwrap())
                    .unwrap()
                    .with_observer(Box::new(logger));
            for guess in ["герой", "гонец", "слово", "банан", "пчела", "банка"] {
                session.submit_guess(guess).unwrap();
            }
        }

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("guess 6: банка"));
        assert!(text.contains("result: lost, target was абвгд"));

        let _ = fs::remove_file(&path);
    }
}
