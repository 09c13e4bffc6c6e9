//! Embedded word list
//!
//! The built-in Russian dictionary shipped inside the binary. One word
//! per line, already normalized; the source file is `data/words_ru.txt`.

/// Built-in list of five-letter Russian words
pub const BUILTIN_RU: &str = include_str!("../../data/words_ru.txt");
