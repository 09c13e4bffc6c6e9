//! Verdict analysis command
//!
//! Scores one guess against a known target and explains the marks.

use crate::core::{Verdict, Word};

/// Result of scoring a guess against a target
#[derive(Debug)]
pub struct AnalysisResult {
    pub target: Word,
    pub guess: Word,
    pub verdict: Verdict,
}

/// Score `guess` against `target`
///
/// Both inputs only have to be valid game words; dictionary membership
/// is not required, so any pair can be compared.
///
/// # Errors
/// Returns an error if either input is not a valid 5-letter word.
pub fn analyze_pair(target: &str, guess: &str) -> Result<AnalysisResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let verdict = Verdict::analyze(&guess, &target);

    Ok(AnalysisResult {
        target,
        guess,
        verdict,
    })
}
