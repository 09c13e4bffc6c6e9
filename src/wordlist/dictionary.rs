//! Word dictionary
//!
//! An insertion-ordered, deduplicated collection of valid game words with
//! a membership index, letter statistics and an ad-hoc suggestion query.

use crate::core::{WORD_LENGTH, Word, WordError, is_alphabet_letter, normalize};
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::io;
use std::sync::OnceLock;

/// Error type for dictionary construction
#[derive(Debug)]
pub enum DictionaryError {
    Io(io::Error),
    NoValidWords,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::NoValidWords => write!(f, "Word list contains no valid words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Immutable, insertion-ordered collection of valid game words
///
/// Construction normalizes and validates every line, silently skipping
/// invalid ones and deduplicating the rest (first occurrence wins). A
/// constructed dictionary always holds at least one word.
#[derive(Debug)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
    letter_counts: OnceLock<FxHashMap<char, usize>>,
}

impl Dictionary {
    /// Build a dictionary from raw lines
    ///
    /// # Errors
    /// Returns `DictionaryError::NoValidWords` if no line survives
    /// validation.
    ///
    /// # Examples
    /// ```
    /// use slovo::wordlist::Dictionary;
    ///
    /// // "слон" is four letters, "ГЕРОЙ" duplicates "герой"
    /// let dictionary = Dictionary::from_lines(["герой", "слон", "ГЕРОЙ", "гонец"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for line in lines {
            if let Ok(word) = Word::new(line.as_ref())
                && index.insert(word.text().to_string())
            {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(DictionaryError::NoValidWords);
        }

        Ok(Self {
            words,
            index,
            letter_counts: OnceLock::new(),
        })
    }

    /// Check membership of an already validated word
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.text())
    }

    /// All words in first-seen order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw a uniformly random word
    ///
    /// # Panics
    /// Will not panic - construction guarantees at least one word.
    #[must_use]
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        use rand::prelude::IndexedRandom;

        self.words
            .choose(rng)
            .expect("dictionary is never empty by construction")
    }

    /// Count how often each letter occurs across all words
    ///
    /// Computed on first use and cached for the dictionary's lifetime.
    pub fn letter_frequency(&self) -> &FxHashMap<char, usize> {
        self.letter_counts.get_or_init(|| {
            let mut counts = FxHashMap::default();
            for word in &self.words {
                for &c in word.chars() {
                    *counts.entry(c).or_insert(0) += 1;
                }
            }
            counts
        })
    }

    /// The `count` most frequent letters with their occurrence counts
    ///
    /// Sorted by descending count; ties break alphabetically for a stable
    /// report.
    #[must_use]
    pub fn most_common_letters(&self, count: usize) -> Vec<(char, usize)> {
        let mut entries: Vec<(char, usize)> = self
            .letter_frequency()
            .iter()
            .map(|(&c, &n)| (c, n))
            .collect();

        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries.truncate(count);
        entries
    }

    /// Words matching an ad-hoc query, in dictionary order
    ///
    /// # Examples
    /// ```
    /// use slovo::wordlist::{Dictionary, WordQuery};
    ///
    /// let dictionary = Dictionary::from_lines(["герой", "гонец", "горох"]).unwrap();
    /// let query = WordQuery::new().containing("х").unwrap();
    /// let hits = dictionary.suggestions(&query);
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].text(), "горох");
    /// ```
    #[must_use]
    pub fn suggestions(&self, query: &WordQuery) -> Vec<&Word> {
        self.words.iter().filter(|w| query.matches(w)).collect()
    }
}

/// Ad-hoc candidate query over a dictionary
///
/// Combines required letters, forbidden letters and a positional pattern
/// with `_` wildcards. An empty query matches every word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordQuery {
    must_contain: FxHashSet<char>,
    must_exclude: FxHashSet<char>,
    pattern: [Option<char>; WORD_LENGTH],
}

impl WordQuery {
    /// Create an empty query matching every word
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require every given letter to appear somewhere in the word
    ///
    /// Letters may be separated by commas or whitespace; input is
    /// normalized like a word.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLetter` for characters outside а-я.
    pub fn containing(mut self, letters: &str) -> Result<Self, WordError> {
        for c in parse_letters(letters)? {
            self.must_contain.insert(c);
        }
        Ok(self)
    }

    /// Forbid every given letter from appearing in the word
    ///
    /// # Errors
    /// Returns `WordError::InvalidLetter` for characters outside а-я.
    pub fn excluding(mut self, letters: &str) -> Result<Self, WordError> {
        for c in parse_letters(letters)? {
            self.must_exclude.insert(c);
        }
        Ok(self)
    }

    /// Pin letters by position with a `_`-wildcard pattern like `"г___о"`
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the pattern is not exactly 5
    /// characters, or `WordError::InvalidLetter` for characters that are
    /// neither `_` nor in а-я.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, WordError> {
        let chars: Vec<char> = normalize(pattern).chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(chars.len()));
        }

        for (i, c) in chars.into_iter().enumerate() {
            if c == '_' {
                self.pattern[i] = None;
            } else if is_alphabet_letter(c) {
                self.pattern[i] = Some(c);
            } else {
                return Err(WordError::InvalidLetter(c));
            }
        }
        Ok(self)
    }

    /// Check a single word against the query
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if !self.must_contain.iter().all(|&c| word.has_letter(c)) {
            return false;
        }

        if word
            .chars()
            .iter()
            .any(|c| self.must_exclude.contains(c))
        {
            return false;
        }

        for (i, slot) in self.pattern.iter().enumerate() {
            if let Some(letter) = slot
                && word.char_at(i) != *letter
            {
                return false;
            }
        }

        true
    }
}

/// Parse a letter list like `"г,о"` or `"ГО"`, normalizing each letter
fn parse_letters(letters: &str) -> Result<Vec<char>, WordError> {
    let mut out = Vec::new();
    for c in normalize(letters).chars() {
        if c == ',' || c.is_whitespace() {
            continue;
        }
        if !is_alphabet_letter(c) {
            return Err(WordError::InvalidLetter(c));
        }
        out.push(c);
    }
    Ok(out)
}
