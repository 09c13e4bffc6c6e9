//! Accumulated knowledge about the hidden target word
//!
//! A `ConstraintSet` digests verdicts into monotone fact sets: letters known
//! to be in the target, letters known to be out, slots pinned to a letter,
//! and per-slot letter exclusions. Facts only accumulate; feeding the same
//! verdict twice changes nothing.

use crate::core::{Feedback, Verdict, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// Knowledge accumulated from scored guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    confirmed_letters: FxHashSet<char>,
    excluded_letters: FxHashSet<char>,
    confirmed_positions: [Option<char>; WORD_LENGTH],
    excluded_positions: [FxHashSet<char>; WORD_LENGTH],
}

impl ConstraintSet {
    /// Create an empty constraint set (matches every word)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the accumulated knowledge
    ///
    /// Runs in two phases so that confirmation always wins: all `Exact` and
    /// `Present` marks are absorbed first, then `Absent` marks are checked
    /// against the full confirmed set. A guess with a duplicate letter can
    /// score it `Absent` at one slot and `Exact` at a later slot of the same
    /// verdict; the letter must end up confirmed, never excluded.
    pub fn update(&mut self, guess: &Word, verdict: Verdict) {
        let chars = guess.chars();

        // Phase one: confirmations and slot knowledge
        for (i, &letter) in chars.iter().enumerate() {
            match verdict.at(i) {
                Feedback::Exact => {
                    self.confirmed_letters.insert(letter);
                    self.confirmed_positions[i] = Some(letter);
                    self.excluded_positions[i].remove(&letter);
                    self.excluded_letters.remove(&letter);
                }
                Feedback::Present => {
                    self.confirmed_letters.insert(letter);
                    self.excluded_positions[i].insert(letter);
                    self.excluded_letters.remove(&letter);
                }
                Feedback::Absent => {}
            }
        }

        // Phase two: absences, skipping anything confirmed by now
        for (i, &letter) in chars.iter().enumerate() {
            if verdict.at(i) == Feedback::Absent && !self.confirmed_letters.contains(&letter) {
                self.excluded_letters.insert(letter);
            }
        }
    }

    /// Check whether a word is consistent with everything learned so far
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        // Pinned slots must hold their letter
        for (i, pinned) in self.confirmed_positions.iter().enumerate() {
            if let Some(letter) = pinned
                && word.char_at(i) != *letter
            {
                return false;
            }
        }

        // Every confirmed letter must appear somewhere
        if !self
            .confirmed_letters
            .iter()
            .all(|&letter| word.has_letter(letter))
        {
            return false;
        }

        // No excluded letter may appear
        if word
            .chars()
            .iter()
            .any(|c| self.excluded_letters.contains(c))
        {
            return false;
        }

        // No letter may sit in a slot it was ruled out of
        for (i, ruled_out) in self.excluded_positions.iter().enumerate() {
            if ruled_out.contains(&word.char_at(i)) {
                return false;
            }
        }

        true
    }

    /// Render the pinned positions as a display pattern
    ///
    /// Unknown slots show as `_`, e.g. `"г__о_"`.
    #[must_use]
    pub fn known_pattern(&self) -> String {
        self.confirmed_positions
            .iter()
            .map(|slot| slot.unwrap_or('_'))
            .collect()
    }

    /// Letters known to be in the target
    #[inline]
    #[must_use]
    pub const fn confirmed_letters(&self) -> &FxHashSet<char> {
        &self.confirmed_letters
    }

    /// Letters known not to be in the target
    #[inline]
    #[must_use]
    pub const fn excluded_letters(&self) -> &FxHashSet<char> {
        &self.excluded_letters
    }

    /// Slots pinned to a known letter
    #[inline]
    #[must_use]
    pub const fn confirmed_positions(&self) -> &[Option<char>; WORD_LENGTH] {
        &self.confirmed_positions
    }

    /// Letters ruled out for a specific slot (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub fn excluded_at(&self, position: usize) -> &FxHashSet<char> {
        &self.excluded_positions[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(constraints: &mut ConstraintSet, guess: &str, target: &str) -> Verdict {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        let verdict = Verdict::analyze(&guess, &target);
        constraints.update(&guess, verdict);
        verdict
    }

    #[test]
    fn empty_set_matches_everything() {
        let constraints = ConstraintSet::new();
        for text in ["герой", "слово", "ааааа"] {
            assert!(constraints.matches(&Word::new(text).unwrap()));
        }
        assert_eq!(constraints.known_pattern(), "_____");
    }

    #[test]
    fn exact_pins_position_and_confirms_letter() {
        let mut constraints = ConstraintSet::new();
        scored(&mut constraints, "гонец", "герой"); // "+^-^-"

        assert!(constraints.confirmed_letters().contains(&'г'));
        assert_eq!(constraints.confirmed_positions()[0], Some('г'));
        assert_eq!(constraints.known_pattern(), "г____");
    }

    #[test]
    fn present_confirms_letter_and_rules_out_slot() {
        let mut constraints = ConstraintSet::new();
        scored(&mut constraints, "гонец", "герой"); // "+^-^-"

        assert!(constraints.confirmed_letters().contains(&'о'));
        assert!(constraints.confirmed_letters().contains(&'е'));
        assert!(constraints.excluded_at(1).contains(&'о'));
        assert!(constraints.excluded_at(3).contains(&'е'));
    }

    #[test]
    fn absent_excludes_letter() {
        let mut constraints = ConstraintSet::new();
        scored(&mut constraints, "гонец", "герой"); // "+^-^-"

        assert!(constraints.excluded_letters().contains(&'н'));
        assert!(constraints.excluded_letters().contains(&'ц'));
    }

    #[test]
    fn confirmed_overrides_excluded_within_one_verdict() {
        // "банан" vs "банка" scores "+++^-": the trailing 'н' is absent,
        // but 'н' is exact at slot 2 and must stay confirmed
        let mut constraints = ConstraintSet::new();
        scored(&mut constraints, "банан", "банка");

        assert!(constraints.confirmed_letters().contains(&'н'));
        assert!(!constraints.excluded_letters().contains(&'н'));
        assert_eq!(constraints.known_pattern(), "бан__");
    }

    #[test]
    fn confirmed_overrides_excluded_with_absent_before_exact() {
        // "горох" vs "герой" scores "+-++-": 'о' is absent at slot 1 yet
        // exact at slot 3. Slot order must not leak 'о' into the exclusions.
        let mut constraints = ConstraintSet::new();
        let verdict = scored(&mut constraints, "горох", "герой");

        assert_eq!(verdict.to_string(), "+-++-");
        assert!(constraints.confirmed_letters().contains(&'о'));
        assert!(!constraints.excluded_letters().contains(&'о'));
        assert!(constraints.excluded_letters().contains(&'х'));
    }

    #[test]
    fn update_is_idempotent() {
        let guess = Word::new("гонец").unwrap();
        let target = Word::new("герой").unwrap();
        let verdict = Verdict::analyze(&guess, &target);

        let mut once = ConstraintSet::new();
        once.update(&guess, verdict);

        let mut twice = once.clone();
        twice.update(&guess, verdict);

        assert_eq!(once, twice);
    }

    #[test]
    fn knowledge_is_cumulative() {
        let mut constraints = ConstraintSet::new();
        scored(&mut constraints, "гонец", "герой");
        let after_first: Vec<char> = constraints.confirmed_letters().iter().copied().collect();

        scored(&mut constraints, "горох", "герой");

        // Everything learned from the first guess is still known
        for letter in after_first {
            assert!(constraints.confirmed_letters().contains(&letter));
        }
        assert!(constraints.excluded_letters().contains(&'н'));
        assert!(constraints.excluded_letters().contains(&'х'));
        assert_eq!(constraints.known_pattern(), "г_ро_");
    }

    #[test]
    fn matches_rejects_pinned_slot_mismatch() {
        let mut constraints = ConstraintSet::new();
        scored(&mut constraints, "гонец", "герой");

        // 'г' is pinned at slot 0
        assert!(!constraints.matches(&Word::new("погон").unwrap()));
    }

    #[test]
    fn matches_rejects_missing_confirmed_letter() {
        let mut constraints = ConstraintSet::new();
        scored(&mut constraints, "гонец", "герой");

        // Starts with 'г' but is missing the confirmed 'о' and 'е'
        assert!(!constraints.matches(&Word::new("гриба").unwrap()));
    }

    #[test]
    fn matches_rejects_excluded_letter() {
        let mut constraints = ConstraintSet::new();
        scored(&mut constraints, "гонец", "герой");

        // Guessed word itself carries the excluded 'н' and 'ц'
        assert!(!constraints.matches(&Word::new("гонец").unwrap()));
    }

    #[test]
    fn matches_rejects_slot_excluded_letter() {
        let mut constraints = ConstraintSet::new();
        scored(&mut constraints, "гонец", "герой");

        // Has every confirmed letter, nothing excluded, but 'о' sits in
        // slot 1 where Present ruled it out
        assert!(!constraints.matches(&Word::new("гоеаб").unwrap()));
    }

    #[test]
    fn matches_accepts_consistent_words() {
        let mut constraints = ConstraintSet::new();
        scored(&mut constraints, "гонец", "герой");

        assert!(constraints.matches(&Word::new("герой").unwrap()));
        assert!(constraints.matches(&Word::new("гаеой").unwrap()));
    }
}
