//! Core domain types for Wordle
//!
//! Words, feedback and scoring weights. Nothing here touches I/O.

mod feedback;
pub mod weights;
mod word;

pub use feedback::{FeedbackError, GuessFeedback, GuessedLetter, LetterFeedback};
pub use weights::{ComponentScores, KNOWN_SCORE_LEVELS, WeightProfile};
pub use word::{Word, WordError, parse_letters, rebuild_frequency_scores};

pub(crate) use word::ratio;

/// Letters in a puzzle word
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed before a game is lost
pub const MAX_GUESSES: usize = 6;

/// Letters in the (uppercase ASCII) alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Index of an uppercase ASCII letter within the alphabet (A=0 .. Z=25)
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}
