//! Game session layer
//!
//! Ties the core scoring types to a dictionary: constraint accumulation,
//! the session state machine, and the observer seam for shells that want
//! to log or display game events.

mod constraints;
mod observer;
mod session;

pub use constraints::ConstraintSet;
pub use observer::{GameObserver, NoopObserver};
pub use session::{Attempt, GameError, GameSession, GameState, MAX_ATTEMPTS};
