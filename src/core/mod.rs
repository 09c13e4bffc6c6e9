//! Core domain types for the word-guessing game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod verdict;
mod word;

pub use verdict::{Feedback, Verdict};
pub use word::{WORD_LENGTH, Word, WordError, is_alphabet_letter, normalize};
