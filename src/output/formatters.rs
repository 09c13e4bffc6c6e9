//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict, Word};
use colored::Colorize;

/// Format a scored guess as colored letter cells
///
/// Exact letters get a green background, present letters yellow, absent
/// letters gray.
#[must_use]
pub fn verdict_cells(word: &Word, verdict: Verdict) -> String {
    let cells: Vec<String> = word
        .chars()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let cell = format!(" {} ", c.to_uppercase());
            match verdict.at(i) {
                Feedback::Exact => cell.white().bold().on_green().to_string(),
                Feedback::Present => cell.black().on_yellow().to_string(),
                Feedback::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect();

    cells.join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
