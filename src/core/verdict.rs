//! Guess feedback analysis
//!
//! A Verdict records per-position feedback for a guess scored against a
//! hidden target word:
//! - `+` Exact (letter in the target at this position)
//! - `^` Present (letter in the target at a different position)
//! - `-` Absent (no remaining occurrence of the letter in the target)
//!
//! Duplicate letters are handled with consume-once slots: each target
//! occurrence justifies at most one non-Absent mark, with Exact matches
//! claiming their slot first.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter is in the target at this exact position
    Exact,
    /// Letter is in the target, but at a different position
    Present,
    /// Letter has no remaining occurrence in the target
    Absent,
}

impl Feedback {
    /// The textual mark for this feedback: `+`, `^` or `-`
    #[inline]
    #[must_use]
    pub const fn mark(self) -> char {
        match self {
            Self::Exact => '+',
            Self::Present => '^',
            Self::Absent => '-',
        }
    }

    /// Parse a single feedback mark
    #[inline]
    #[must_use]
    pub const fn from_mark(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Exact),
            '^' => Some(Self::Present),
            '-' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback verdict for a full 5-letter guess
///
/// Displays as a 5-mark string such as `"+^-^-"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict([Feedback; WORD_LENGTH]);

impl Verdict {
    /// All exact matches (winning verdict)
    pub const WIN: Self = Self([Feedback::Exact; WORD_LENGTH]);

    /// Score `guess` against the hidden `target`
    ///
    /// Two passes over the letters:
    /// 1. Exact pass: every position where guess and target agree becomes
    ///    `Exact` and consumes that target slot.
    /// 2. Present pass: every remaining guess letter claims the first
    ///    unconsumed occurrence of itself in the target (scanning left to
    ///    right); with no slot left it becomes `Absent`.
    ///
    /// Both words are length-validated at construction, so scoring cannot
    /// fail.
    ///
    /// # Examples
    /// ```
    /// use slovo::core::{Verdict, Word};
    ///
    /// let target = Word::new("герой").unwrap();
    /// let guess = Word::new("гонец").unwrap();
    /// assert_eq!(Verdict::analyze(&guess, &target).to_string(), "+^-^-");
    /// ```
    #[must_use]
    pub fn analyze(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.chars().len(), target.chars().len());

        let guess_chars = guess.chars();
        let target_chars = target.chars();

        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut target_used = [false; WORD_LENGTH];

        // First pass: exact matches consume their own target slot
        // Allow: index addresses guess[i], target[i] and result[i] together
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess_chars[i] == target_chars[i] {
                result[i] = Feedback::Exact;
                target_used[i] = true;
            }
        }

        // Second pass: remaining letters claim the first unconsumed target
        // occurrence, left to right
        // Allow: index addresses guess[i] and result[i] together
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Feedback::Exact {
                continue;
            }
            for j in 0..WORD_LENGTH {
                if !target_used[j] && target_chars[j] == guess_chars[i] {
                    result[i] = Feedback::Present;
                    target_used[j] = true;
                    break;
                }
            }
        }

        Self(result)
    }

    /// Get the per-position feedback array
    #[inline]
    #[must_use]
    pub const fn symbols(self) -> [Feedback; WORD_LENGTH] {
        self.0
    }

    /// Get the feedback at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(self, position: usize) -> Feedback {
        self.0[position]
    }

    /// Check if this verdict means the guess equals the target
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::WIN
    }

    /// Count the exact-position matches
    #[must_use]
    pub fn exact_count(self) -> usize {
        self.0.iter().filter(|f| matches!(f, Feedback::Exact)).count()
    }

    /// Count the present-elsewhere matches
    #[must_use]
    pub fn present_count(self) -> usize {
        self.0
            .iter()
            .filter(|f| matches!(f, Feedback::Present))
            .count()
    }

    /// Parse a verdict from a 5-mark string like `"+^-^-"`
    ///
    /// # Examples
    /// ```
    /// use slovo::core::Verdict;
    ///
    /// let verdict = Verdict::from_str("+++++").unwrap();
    /// assert!(verdict.is_win());
    /// assert!(Verdict::from_str("+^-").is_none());
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [Feedback::Absent; WORD_LENGTH];
        for (i, c) in chars.into_iter().enumerate() {
            result[i] = Feedback::from_mark(c)?;
        }

        Some(Self(result))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in self.0 {
            write!(f, "{}", feedback.mark())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid verdict string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(guess: &str, target: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        Verdict::analyze(&guess, &target).to_string()
    }

    #[test]
    fn analyze_perfect_match() {
        assert_eq!(verdict("герой", "герой"), "+++++");
        assert_eq!(verdict("банан", "банан"), "+++++");
    }

    #[test]
    fn analyze_self_is_always_win() {
        for text in ["герой", "слово", "ааааа", "банан"] {
            let word = Word::new(text).unwrap();
            assert!(Verdict::analyze(&word, &word).is_win());
        }
    }

    #[test]
    fn analyze_mixed_feedback() {
        // г exact, о present (slot 3), н absent, е present (slot 1), ц absent
        assert_eq!(verdict("гонец", "герой"), "+^-^-");
    }

    #[test]
    fn analyze_single_present() {
        assert_eq!(verdict("герой", "абвгд"), "^----");
    }

    #[test]
    fn analyze_all_absent() {
        assert_eq!(verdict("пчела", "горох"), "-----");
    }

    #[test]
    fn analyze_duplicate_consumed_by_exact() {
        // Second 'н' of the guess finds its only target slot already
        // consumed by the exact match at position 2
        assert_eq!(verdict("банан", "банка"), "+++^-");
    }

    #[test]
    fn analyze_duplicate_present_after_exact() {
        // Trailing 'а' claims the unconsumed target slot 3
        assert_eq!(verdict("банка", "банан"), "+++-^");
    }

    #[test]
    fn analyze_duplicate_beyond_target_count() {
        // Guess repeats 'а' five times against a two-'а' target: the two
        // exact slots consume both occurrences, the rest are absent
        assert_eq!(verdict("ааввв", "ааббб"), "++---");
        assert_eq!(verdict("ааааа", "ааббб"), "++---");
    }

    #[test]
    fn analyze_present_limited_by_target_count() {
        // Target has two 'о' (slots 1 and 3); both are consumed by exact
        // matches, so the extra 'о' in the guess score absent
        assert_eq!(verdict("ооооо", "горох"), "-+-+-");
    }

    #[test]
    fn analyze_leftmost_guess_occurrence_claims_slot() {
        // Single 'о' in the target: the first 'о' of the guess claims it,
        // the trailing 'о' scores absent
        assert_eq!(verdict("осело", "гонец"), "^-^--");
    }

    #[test]
    fn counts() {
        let v = Verdict::from_str("+^-^-").unwrap();
        assert_eq!(v.exact_count(), 1);
        assert_eq!(v.present_count(), 2);
        assert!(!v.is_win());

        assert_eq!(Verdict::WIN.exact_count(), 5);
        assert_eq!(Verdict::WIN.present_count(), 0);
    }

    #[test]
    fn symbols_round_trip() {
        let v = Verdict::from_str("+^-^-").unwrap();
        assert_eq!(v.at(0), Feedback::Exact);
        assert_eq!(v.at(1), Feedback::Present);
        assert_eq!(v.at(2), Feedback::Absent);
        assert_eq!(v.symbols().len(), WORD_LENGTH);
        assert_eq!(Verdict::from_str(&v.to_string()), Some(v));
    }

    #[test]
    fn from_str_invalid() {
        assert!(Verdict::from_str("+^-^").is_none()); // Too short
        assert!(Verdict::from_str("+^-^--").is_none()); // Too long
        assert!(Verdict::from_str("+^x^-").is_none()); // Invalid mark
        assert!(Verdict::from_str("").is_none());
    }

    #[test]
    fn from_str_trait() {
        let parsed: Verdict = "+^-^-".parse().unwrap();
        assert_eq!(parsed.to_string(), "+^-^-");
        assert!("haha!".parse::<Verdict>().is_err());
    }
}
