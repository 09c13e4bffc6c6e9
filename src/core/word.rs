//! Game word representation and normalization
//!
//! A Word stores a validated 5-letter Russian word. All words pass through
//! [`normalize`] first, so `Word` values compare equal regardless of case,
//! surrounding whitespace, or the ё/е spelling variant.

use std::fmt;

/// Number of letters in every game word
pub const WORD_LENGTH: usize = 5;

/// Normalize raw input into canonical dictionary form
///
/// Trims surrounding whitespace, lowercases, and folds 'ё' into 'е'.
/// Infallible; validation happens separately in [`Word::new`].
///
/// # Examples
/// ```
/// use slovo::core::normalize;
///
/// assert_eq!(normalize("  ГеРоЙ "), "герой");
/// assert_eq!(normalize("ЁЖИКА"), "ежика");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().replace('ё', "е")
}

/// Check whether a character belongs to the game alphabet
///
/// The alphabet is lowercase а-я. 'ё' is not part of it: normalization
/// folds it into 'е' before validation.
#[inline]
#[must_use]
pub const fn is_alphabet_letter(c: char) -> bool {
    matches!(c, 'а'..='я')
}

/// A 5-letter Russian word in normalized form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidLetter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidLetter(c) => {
                write!(f, "Word must use only Russian letters а-я, found '{c}'")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from raw input
    ///
    /// The input is normalized (trimmed, lowercased, ё folded into е)
    /// before validation, so `"ГЕРОЙ"` and `"герой"` produce equal words.
    ///
    /// # Errors
    /// Returns `WordError` if, after normalization:
    /// - the length is not exactly 5 letters
    /// - any character falls outside а-я
    ///
    /// # Examples
    /// ```
    /// use slovo::core::Word;
    ///
    /// let word = Word::new("Герой").unwrap();
    /// assert_eq!(word.text(), "герой");
    ///
    /// assert!(Word::new("слон").is_err()); // four letters
    /// assert!(Word::new("stole").is_err()); // wrong alphabet
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = normalize(&text.into());

        let chars: Vec<char> = text.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(chars.len()));
        }

        if let Some(&bad) = chars.iter().find(|c| !is_alphabet_letter(**c)) {
            return Err(WordError::InvalidLetter(bad));
        }

        // Convert to a fixed array - safe as we validated length == 5
        let chars: [char; WORD_LENGTH] = chars.try_into().expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  ГеРоЙ "), "герой");
        assert_eq!(normalize("\tслово\n"), "слово");
        assert_eq!(normalize("банан"), "банан");
    }

    #[test]
    fn normalize_folds_yo() {
        assert_eq!(normalize("ёжика"), "ежика");
        assert_eq!(normalize("ЁЖИКА"), "ежика");
        assert_eq!(normalize("полёт"), "полет");
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("герой").unwrap();
        assert_eq!(word.text(), "герой");
        assert_eq!(word.chars(), &['г', 'е', 'р', 'о', 'й']);
    }

    #[test]
    fn word_creation_normalizes() {
        let word = Word::new("  ГЕРОЙ ").unwrap();
        assert_eq!(word.text(), "герой");

        let word2 = Word::new("ГеРоЙ").unwrap();
        assert_eq!(word2.text(), "герой");
    }

    #[test]
    fn word_creation_folds_yo() {
        let word = Word::new("ЁЖИКА").unwrap();
        assert_eq!(word.text(), "ежика");
        assert_eq!(word, Word::new("ежика").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("слон"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(
            Word::new("второй"),
            Err(WordError::InvalidLength(6))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
        assert!(matches!(
            Word::new("   "),
            Err(WordError::InvalidLength(0))
        ));
    }

    #[test]
    fn word_creation_invalid_letters() {
        // Latin 'e' in place of Cyrillic 'е'
        assert!(matches!(
            Word::new("гeрой"),
            Err(WordError::InvalidLetter('e'))
        ));
        assert!(matches!(
            Word::new("гер0й"),
            Err(WordError::InvalidLetter('0'))
        ));
        assert!(Word::new("stole").is_err());
        assert!(Word::new("ге-ой").is_err());
    }

    #[test]
    fn alphabet_excludes_yo() {
        assert!(is_alphabet_letter('а'));
        assert!(is_alphabet_letter('я'));
        assert!(is_alphabet_letter('е'));
        assert!(!is_alphabet_letter('ё'));
        assert!(!is_alphabet_letter('e'));
        assert!(!is_alphabet_letter(' '));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("гонец").unwrap();
        assert_eq!(word.char_at(0), 'г');
        assert_eq!(word.char_at(1), 'о');
        assert_eq!(word.char_at(2), 'н');
        assert_eq!(word.char_at(3), 'е');
        assert_eq!(word.char_at(4), 'ц');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("герой").unwrap();
        assert!(word.has_letter('г'));
        assert!(word.has_letter('й'));
        assert!(!word.has_letter('ц'));
        assert!(!word.has_letter('ё'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("слово").unwrap();
        assert_eq!(format!("{word}"), "слово");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("герой").unwrap();
        let word2 = Word::new("герой").unwrap();
        let word3 = Word::new("ГЕРОЙ").unwrap();
        let word4 = Word::new("гонец").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }
}
