//! Word list loading utilities
//!
//! Loads dictionaries from plain text files (one word per line) or from
//! the embedded built-in list.

use super::dictionary::{Dictionary, DictionaryError};
use super::embedded::BUILTIN_RU;
use std::fs;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Lines that fail validation are skipped; surviving words are
/// deduplicated in first-seen order.
///
/// # Errors
/// Returns `DictionaryError::Io` if the file cannot be read, or
/// `DictionaryError::NoValidWords` if no line validates.
///
/// # Examples
/// ```no_run
/// use slovo::wordlist::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words_ru.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let content = fs::read_to_string(path)?;
    Dictionary::from_lines(content.lines())
}

/// Load the embedded built-in Russian word list
///
/// # Panics
/// Will not panic - the embedded list is known to contain valid words.
#[must_use]
pub fn load_builtin() -> Dictionary {
    Dictionary::from_lines(BUILTIN_RU.lines()).expect("embedded word list contains valid words")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn builtin_list_loads() {
        let dictionary = load_builtin();
        assert!(dictionary.len() > 300);

        for text in ["герой", "гонец", "слово", "банка", "клоун"] {
            assert!(dictionary.contains(&Word::new(text).unwrap()));
        }
    }

    #[test]
    fn builtin_list_is_already_normalized() {
        // Every embedded line must survive validation unchanged, so the
        // dictionary word count equals the line count
        let lines = BUILTIN_RU.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(load_builtin().len(), lines);
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = load_from_file("no/such/file.txt");
        assert!(matches!(result, Err(DictionaryError::Io(_))));
    }
}
