//! Word lists
//!
//! A small sample list is compiled into the binary; larger lists are loaded
//! from text files at runtime.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE_WORDS, SAMPLE_WORDS_COUNT};
pub use loader::{LoadError, load_from_file, parse_word_list};

use crate::core::Word;

/// The bundled sample list as words
#[must_use]
pub fn sample_words() -> Vec<Word> {
    loader::words_from_entries(SAMPLE_WORDS)
}
