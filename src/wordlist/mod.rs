//! Dictionary construction and loading
//!
//! Provides the immutable word dictionary, the ad-hoc suggestion query,
//! and loaders for custom files and the embedded built-in list.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError, WordQuery};
pub use embedded::BUILTIN_RU;
