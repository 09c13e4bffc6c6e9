//! Session event notifications
//!
//! The session reports scored guesses and game completion to an injected
//! observer instead of writing logs itself. The console shell plugs in a
//! transcript writer; everything else runs with the no-op default.

use super::session::{Attempt, GameState};
use crate::core::Word;

/// Receiver for session events
///
/// All hooks default to doing nothing, so implementations only override
/// the events they care about.
pub trait GameObserver {
    /// Called after a guess was accepted and scored
    fn on_guess_scored(&mut self, attempt: &Attempt, remaining: usize) {
        let _ = (attempt, remaining);
    }

    /// Called once when the session reaches a terminal state
    fn on_game_finished(&mut self, state: GameState, target: &Word) {
        let _ = (state, target);
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}
