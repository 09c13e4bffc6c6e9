//! Slovo
//!
//! A guess-the-word game for 5-letter Russian words. A hidden target is
//! drawn from the dictionary and each guess is scored letter by letter:
//! `+` exact place, `^` elsewhere in the word, `-` not in the word.
//!
//! # Quick Start
//!
//! ```rust
//! use slovo::core::{Verdict, Word};
//!
//! let target = Word::new("герой").unwrap();
//! let guess = Word::new("гонец").unwrap();
//!
//! let verdict = Verdict::analyze(&guess, &target);
//! assert_eq!(verdict.to_string(), "+^-^-");
//! ```

// Core domain types
pub mod core;

// Game rules and session state
pub mod game;

// Word lists
pub mod wordlist;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
