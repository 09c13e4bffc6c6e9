//! Suggestion query command
//!
//! Builds a [`WordQuery`] from raw command-line options and prints the
//! matching dictionary words.

use crate::output::print_suggestions;
use crate::wordlist::{Dictionary, WordQuery};

/// Build a query from raw option strings
///
/// Each option is independent; unset options leave the query
/// unconstrained in that dimension.
///
/// # Errors
/// Returns an error naming the offending option if any input contains
/// characters outside the game alphabet or a pattern of the wrong
/// length.
pub fn build_query(
    contains: Option<&str>,
    without: Option<&str>,
    pattern: Option<&str>,
) -> Result<WordQuery, String> {
    let mut query = WordQuery::new();

    if let Some(letters) = contains {
        query = query
            .containing(letters)
            .map_err(|e| format!("--contains: {e}"))?;
    }
    if let Some(letters) = without {
        query = query
            .excluding(letters)
            .map_err(|e| format!("--without: {e}"))?;
    }
    if let Some(text) = pattern {
        query = query
            .with_pattern(text)
            .map_err(|e| format!("--pattern: {e}"))?;
    }

    Ok(query)
}

/// Run the suggestion command end to end
///
/// # Errors
/// Returns an error if the query options cannot be parsed.
pub fn run_suggest(
    dictionary: &Dictionary,
    contains: Option<&str>,
    without: Option<&str>,
    pattern: Option<&str>,
) -> Result<(), String> {
    let query = build_query(contains, without, pattern)?;
    let hits = dictionary.suggestions(&query);
    print_suggestions(&hits);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn dictionary() -> Dictionary {
        Dictionary::from_lines(["герой", "гонец", "горох", "горка", "банан"]).unwrap()
    }

    #[test]
    fn build_query_combines_all_options() {
        let query = build_query(Some("г,о"), Some("й"), Some("г____")).unwrap();

        let dictionary = dictionary();
        let hits: Vec<&str> = dictionary
            .suggestions(&query)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(hits, vec!["гонец", "горох", "горка"]);
    }

    #[test]
    fn build_query_empty_matches_everything() {
        let query = build_query(None, None, None).unwrap();
        assert!(query.matches(&Word::new("банан").unwrap()));
    }

    #[test]
    fn build_query_names_offending_option() {
        let err = build_query(None, None, Some("гер")).unwrap_err();
        assert!(err.starts_with("--pattern"));

        let err = build_query(Some("x"), None, None).unwrap_err();
        assert!(err.starts_with("--contains"));
    }
}
