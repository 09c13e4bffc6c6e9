//! Game session state machine
//!
//! A session owns one hidden target word and scores up to six guesses
//! against it. Rejected guesses (invalid, duplicate, unknown) never cost
//! an attempt; every accepted guess feeds the constraint set that powers
//! hints and candidate listing.

use super::constraints::ConstraintSet;
use super::observer::{GameObserver, NoopObserver};
use crate::core::{Verdict, Word, WordError};
use crate::wordlist::Dictionary;
use rand::Rng;
use std::fmt;

/// Maximum number of guesses in one game
pub const MAX_ATTEMPTS: usize = 6;

/// Lifecycle of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Guesses are still being accepted
    InProgress,
    /// The target was guessed within the attempt budget
    Won,
    /// The attempt budget ran out
    Lost,
}

impl GameState {
    /// Check if the session stopped accepting guesses
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One accepted guess together with its verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    word: Word,
    verdict: Verdict,
}

impl Attempt {
    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// The verdict it scored
    #[inline]
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }
}

/// Error type for rejected guesses and hint requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidWord(WordError),
    NotInDictionary(String),
    DuplicateGuess(String),
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "Invalid word: {e}"),
            Self::NotInDictionary(word) => write!(f, "Word '{word}' is not in the dictionary"),
            Self::DuplicateGuess(word) => write!(f, "Word '{word}' was already guessed"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

/// A single game against one hidden target word
///
/// Borrows the dictionary it was created from; many sessions can share
/// one dictionary.
pub struct GameSession<'d> {
    dictionary: &'d Dictionary,
    target: Word,
    attempts: Vec<Attempt>,
    constraints: ConstraintSet,
    state: GameState,
    observer: Box<dyn GameObserver>,
}

impl<'d> GameSession<'d> {
    /// Start a session with a random target drawn from the dictionary
    pub fn new<R: Rng + ?Sized>(dictionary: &'d Dictionary, rng: &mut R) -> Self {
        let target = dictionary.random_word(rng).clone();
        Self::with_parts(dictionary, target)
    }

    /// Start a session with a fixed target word
    ///
    /// # Errors
    /// Returns `GameError::NotInDictionary` if the target is not a
    /// dictionary word.
    pub fn with_target(dictionary: &'d Dictionary, target: Word) -> Result<Self, GameError> {
        if !dictionary.contains(&target) {
            return Err(GameError::NotInDictionary(target.text().to_string()));
        }
        Ok(Self::with_parts(dictionary, target))
    }

    fn with_parts(dictionary: &'d Dictionary, target: Word) -> Self {
        Self {
            dictionary,
            target,
            attempts: Vec::new(),
            constraints: ConstraintSet::new(),
            state: GameState::InProgress,
            observer: Box::new(NoopObserver),
        }
    }

    /// Attach an observer receiving guess and completion events
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn GameObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Submit a raw guess for scoring
    ///
    /// The input goes through normalization and validation first; a
    /// rejected guess leaves the attempt budget and all state untouched.
    ///
    /// # Errors
    /// - `GameError::GameOver` if the session already ended
    /// - `GameError::InvalidWord` if the input is not a valid game word
    /// - `GameError::DuplicateGuess` if the word was already guessed
    /// - `GameError::NotInDictionary` if the word is unknown
    pub fn submit_guess(&mut self, raw: &str) -> Result<Verdict, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }

        let word = Word::new(raw)?;

        if self.attempts.iter().any(|a| a.word == word) {
            return Err(GameError::DuplicateGuess(word.text().to_string()));
        }

        if !self.dictionary.contains(&word) {
            return Err(GameError::NotInDictionary(word.text().to_string()));
        }

        let verdict = Verdict::analyze(&word, &self.target);
        self.constraints.update(&word, verdict);
        self.attempts.push(Attempt { word, verdict });

        if verdict.is_win() {
            self.state = GameState::Won;
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.state = GameState::Lost;
        }

        let remaining = self.remaining_attempts();
        if let Some(attempt) = self.attempts.last() {
            self.observer.on_guess_scored(attempt, remaining);
        }
        if self.state.is_over() {
            self.observer.on_game_finished(self.state, &self.target);
        }

        Ok(verdict)
    }

    /// Pick a random hint from the words still consistent with everything
    /// learned so far
    ///
    /// The pool excludes the target itself and every word already guessed.
    /// Returns `Ok(None)` when no such word remains; the session state is
    /// never modified.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the session already ended.
    pub fn request_hint<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Option<&'d Word>, GameError> {
        use rand::prelude::IndexedRandom;

        if self.state.is_over() {
            return Err(GameError::GameOver);
        }

        let pool: Vec<&'d Word> = self
            .dictionary
            .words()
            .iter()
            .filter(|w| self.constraints.matches(w))
            .filter(|&w| *w != self.target)
            .filter(|&w| !self.attempts.iter().any(|a| a.word == *w))
            .collect();

        Ok(pool.choose(rng).copied())
    }

    /// List the dictionary words consistent with the accumulated
    /// constraints, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> Vec<&'d Word> {
        self.dictionary
            .words()
            .iter()
            .filter(|w| self.constraints.matches(w))
            .collect()
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The hidden target word (for end-of-game display)
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Accepted guesses in submission order
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Guesses left before the game is lost
    #[inline]
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts.len())
    }

    /// Knowledge accumulated from the scored guesses
    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Display pattern of the pinned positions, e.g. `"г__о_"`
    #[must_use]
    pub fn known_pattern(&self) -> String {
        self.constraints.known_pattern()
    }
}
