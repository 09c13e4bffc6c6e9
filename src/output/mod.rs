//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis, print_attempt, print_letter_frequency, print_simulation_summary,
    print_suggestions,
};
