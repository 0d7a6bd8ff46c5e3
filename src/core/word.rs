//! Dictionary word representation
//!
//! A `Word` stores an uppercase 5-letter word, its corpus frequency, and the
//! list-relative letter scores computed when a word list is (re)built.

use super::{ALPHABET_SIZE, WORD_LENGTH, WeightProfile, letter_index, weights};
use thiserror::Error;

/// A 5-letter dictionary entry with frequency-derived scores
///
/// The text and frequency are fixed at construction. The three letter scores
/// are filled in by [`rebuild_frequency_scores`] and stay constant until the
/// list is rebuilt.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
    frequency: f64,
    single_letter_score: f64,
    repeat_letter_score: f64,
    position_score: f64,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string and a corpus frequency
    ///
    /// The text is uppercased. Letter scores start at zero until the owning
    /// list is rebuilt.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_cheat::core::Word;
    ///
    /// let word = Word::new("crane", 120.0).unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long", 1.0).is_err());
    /// assert!(Word::new("sh0rt", 1.0).is_err());
    /// ```
    pub fn new(text: impl Into<String>, frequency: f64) -> Result<Self, WordError> {
        let letters = parse_letters(&text.into())?;

        Ok(Self {
            text: letters.iter().map(|&b| char::from(b)).collect(),
            letters,
            frequency,
            single_letter_score: 0.0,
            repeat_letter_score: 0.0,
            position_score: 0.0,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Corpus frequency of the word
    #[inline]
    #[must_use]
    pub const fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Letter-frequency score counting each distinct letter once (0-1)
    #[inline]
    #[must_use]
    pub const fn single_letter_score(&self) -> f64 {
        self.single_letter_score
    }

    /// Letter-frequency score counting repeated letters every time (0-1)
    #[inline]
    #[must_use]
    pub const fn repeat_letter_score(&self) -> f64 {
        self.repeat_letter_score
    }

    /// Per-position letter-frequency score (0-1)
    #[inline]
    #[must_use]
    pub const fn position_score(&self) -> f64 {
        self.position_score
    }

    /// Count of each letter in the word, indexed A=0..Z=25
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in &self.letters {
            counts[letter_index(letter)] += 1;
        }
        counts
    }

    /// Sum of the standard English frequencies of all five letters
    #[must_use]
    pub fn raw_letter_frequency(&self) -> f64 {
        self.letters
            .iter()
            .map(|&letter| weights::english_frequency(letter))
            .sum()
    }

    /// Ranking score against the whole list
    ///
    /// Uses the list-wide letter scores and the raw (not normalised) word
    /// frequency.
    #[must_use]
    pub fn weighted_score(&self, weights: &WeightProfile) -> f64 {
        weights.combine(&super::ComponentScores {
            repeat_letter: self.repeat_letter_score,
            single_letter: self.single_letter_score,
            letter_placement: self.position_score,
            word_frequency: self.frequency,
            raw_letter_frequency: self.raw_letter_frequency(),
        })
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Validate and uppercase a 5-letter word
///
/// # Errors
/// Returns `WordError` on wrong length or non-letter characters.
pub fn parse_letters(text: &str) -> Result<[u8; WORD_LENGTH], WordError> {
    let trimmed = text.trim();
    let char_count = trimmed.chars().count();
    if char_count != WORD_LENGTH {
        return Err(WordError::InvalidLength(char_count));
    }

    let mut letters = [0u8; WORD_LENGTH];
    for (slot, ch) in letters.iter_mut().zip(trimmed.chars()) {
        if !ch.is_ascii_alphabetic() {
            return Err(WordError::InvalidCharacters);
        }
        *slot = ch.to_ascii_uppercase() as u8;
    }
    Ok(letters)
}

/// Recompute the frequency-derived scores of every word in a list
///
/// Letter counts are taken over the whole list. For each word the distinct
/// letter total, the with-repeats total, and the per-position score
/// (0.2 x positional share per letter) are stored; the two letter totals are
/// then normalised against the list maxima.
pub fn rebuild_frequency_scores(words: &mut [Word]) {
    let mut total_counts = [0u32; ALPHABET_SIZE];
    let mut counts_by_position = [[0u32; ALPHABET_SIZE]; WORD_LENGTH];

    for word in words.iter() {
        for (position, &letter) in word.letters.iter().enumerate() {
            let idx = letter_index(letter);
            total_counts[idx] += 1;
            counts_by_position[position][idx] += 1;
        }
    }

    // Every word contributes one letter per position
    let per_position_total = words.len() as f64;

    let mut max_single = 0.0_f64;
    let mut max_repeat = 0.0_f64;

    for word in words.iter_mut() {
        let mut seen = [false; ALPHABET_SIZE];
        let mut single = 0u32;
        let mut repeat = 0u32;
        let mut position_score = 0.0;

        for (position, &letter) in word.letters.iter().enumerate() {
            let idx = letter_index(letter);
            repeat += total_counts[idx];
            if !seen[idx] {
                seen[idx] = true;
                single += total_counts[idx];
            }
            position_score +=
                0.2 * f64::from(counts_by_position[position][idx]) / per_position_total;
        }

        word.single_letter_score = f64::from(single);
        word.repeat_letter_score = f64::from(repeat);
        word.position_score = position_score;

        max_single = max_single.max(word.single_letter_score);
        max_repeat = max_repeat.max(word.repeat_letter_score);
    }

    for word in words.iter_mut() {
        word.single_letter_score = ratio(word.single_letter_score, max_single);
        word.repeat_letter_score = ratio(word.repeat_letter_score, max_repeat);
    }
}

/// Division that yields 0 for a zero denominator
#[inline]
pub(crate) fn ratio(value: f64, total: f64) -> f64 {
    if total > 0.0 { value / total } else { 0.0 }
}
