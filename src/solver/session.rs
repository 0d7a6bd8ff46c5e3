//! Solving session
//!
//! Tracks what a session has learned (confirmed letters, per-position
//! eliminations, required letter counts), picks a weight profile by how much
//! is known, and narrows the word set after every guess.

use super::word_set::{Suggestion, WordSet};
use crate::core::{
    GuessFeedback, LetterFeedback, WORD_LENGTH, WeightProfile, Word, WordError,
    letter_index,
};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised while suggesting words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The information level has no weight profile; constraint tracking is off
    #[error("known score {known_score} has no weight profile (table has {levels} levels)")]
    KnownScoreOutOfRange { known_score: usize, levels: usize },
    #[error("weight table must contain at least one profile")]
    EmptyWeightTable,
    #[error("invalid opening word: {0}")]
    OpeningWord(#[from] WordError),
}

/// Where a session is in its life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No guess recorded since the last reset
    Fresh,
    /// At least one guess recorded
    InProgress,
}

/// Set of uppercase letters as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterMask(u32);

impl LetterMask {
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= 1 << letter_index(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&letter| self.contains(letter))
    }
}

/// Letter constraints learned in a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    confirmed: [Option<u8>; WORD_LENGTH],
    eliminated: [LetterMask; WORD_LENGTH],
    required: FxHashMap<u8, u8>,
}

impl Constraints {
    /// Green letters by position
    #[must_use]
    pub const fn confirmed(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.confirmed
    }

    /// Letters ruled out at each position
    #[must_use]
    pub const fn eliminated(&self) -> &[LetterMask; WORD_LENGTH] {
        &self.eliminated
    }

    /// Minimum count of each letter known to be present
    #[must_use]
    pub const fn required(&self) -> &FxHashMap<u8, u8> {
        &self.required
    }

    /// Confirmed positions plus distinct required letters
    #[must_use]
    pub fn known_score(&self) -> usize {
        self.confirmed.iter().filter(|c| c.is_some()).count() + self.required.len()
    }

    /// True when every position is confirmed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.confirmed.iter().all(Option::is_some)
    }

    /// Fold one guess into the constraints
    ///
    /// Required counts are rebuilt from this guess alone; earlier guesses have
    /// already narrowed the subset, which never grows back.
    fn record(&mut self, guess: &GuessFeedback) {
        self.required.clear();

        for (i, guessed) in guess.letters().iter().enumerate() {
            let letter = guessed.letter();
            match guessed.feedback() {
                LetterFeedback::Correct => {
                    self.confirmed[i] = Some(letter);
                    *self.required.entry(letter).or_insert(0) += 1;
                }
                LetterFeedback::WrongPosition => {
                    self.eliminated[i].insert(letter);
                    *self.required.entry(letter).or_insert(0) += 1;
                }
                LetterFeedback::NotPresent => {}
            }
        }

        for (i, guessed) in guess.letters().iter().enumerate() {
            if guessed.feedback() != LetterFeedback::NotPresent {
                continue;
            }
            let letter = guessed.letter();
            if self.required.contains_key(&letter) {
                // Another copy is green/yellow: only this position is ruled out
                self.eliminated[i].insert(letter);
            } else {
                for mask in &mut self.eliminated {
                    mask.insert(letter);
                }
            }
        }
    }

    /// Check a candidate against every constraint
    ///
    /// Confirmed letters must match, no letter may sit at a position that
    /// eliminated it, and every required letter must appear at least its
    /// required number of times.
    #[must_use]
    pub fn is_word_match(&self, word: &Word) -> bool {
        for (i, &letter) in word.letters().iter().enumerate() {
            if self.confirmed[i].is_some_and(|confirmed| confirmed != letter) {
                return false;
            }
            if self.eliminated[i].contains(letter) {
                return false;
            }
        }

        let contained = word.letter_counts();
        self.required
            .iter()
            .all(|(&letter, &count)| contained[letter_index(letter)] >= count)
    }
}

/// One solving session over a word set
///
/// Clone it to run independent sessions on other threads: the base list is
/// shared, the subset and constraints are not.
#[derive(Debug, Clone)]
pub struct SolverSession {
    word_set: WordSet,
    weights: Vec<WeightProfile>,
    opening_word: Option<Word>,
    constraints: Constraints,
    guess_count: usize,
    known_score: usize,
}

impl SolverSession {
    /// Create a session over `word_set` using one weight profile per
    /// information level
    ///
    /// # Errors
    /// Returns `SolverError::EmptyWeightTable` if `weights` is empty.
    pub fn new(word_set: WordSet, weights: Vec<WeightProfile>) -> Result<Self, SolverError> {
        if weights.is_empty() {
            return Err(SolverError::EmptyWeightTable);
        }

        let mut session = Self {
            word_set,
            weights,
            opening_word: None,
            constraints: Constraints::default(),
            guess_count: 0,
            known_score: 0,
        };
        session.start_new_session();
        Ok(session)
    }

    /// Force `word` as the only suggestion before the first guess
    ///
    /// # Errors
    /// Returns `SolverError::OpeningWord` if `word` is not five letters.
    pub fn with_opening_word(mut self, word: &str) -> Result<Self, SolverError> {
        self.opening_word = Some(Word::new(word, 0.0)?);
        Ok(self)
    }

    /// Clear all constraints and make every word active again
    pub fn start_new_session(&mut self) {
        self.constraints = Constraints::default();
        self.guess_count = 0;
        self.known_score = 0;
        self.word_set.reset_subset();
    }

    /// Start over and record `guesses` in order
    pub fn replay<'a, I>(&mut self, guesses: I)
    where
        I: IntoIterator<Item = &'a GuessFeedback>,
    {
        self.start_new_session();
        for guess in guesses {
            self.record_guess(guess);
        }
    }

    /// Best suggestions for the current information level
    ///
    /// Returns the forced opening word alone (at full confidence) before the
    /// first guess, when one is configured.
    ///
    /// # Errors
    /// Returns `SolverError::KnownScoreOutOfRange` when the known score has no
    /// weight profile.
    pub fn suggest_matches(&self) -> Result<Vec<Suggestion>, SolverError> {
        let weights = self.select_weights()?;

        if self.guess_count == 0
            && let Some(opening) = &self.opening_word
        {
            return Ok(vec![Suggestion::new(opening.clone(), 1.0)]);
        }

        Ok(self.word_set.get_suggestions(weights))
    }

    fn select_weights(&self) -> Result<&WeightProfile, SolverError> {
        self.weights
            .get(self.known_score)
            .ok_or(SolverError::KnownScoreOutOfRange {
                known_score: self.known_score,
                levels: self.weights.len(),
            })
    }

    /// Learn from one guess and cull words that no longer fit
    pub fn record_guess(&mut self, guess: &GuessFeedback) {
        self.constraints.record(guess);
        self.known_score = self.constraints.known_score();
        self.guess_count += 1;

        let constraints = &self.constraints;
        self.word_set
            .cull_invalid(|word| constraints.is_word_match(word));

        log::trace!(
            "guess {} {}: known score {}, {} words remain",
            self.guess_count,
            guess,
            self.known_score,
            self.word_set.active_count()
        );
        if self.word_set.active_count() == 0 {
            log::debug!("no words match after {}", guess.word());
        }
    }

    /// Check a word against the current constraints
    #[must_use]
    pub fn is_word_match(&self, word: &Word) -> bool {
        self.constraints.is_word_match(word)
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.guess_count == 0 {
            SessionState::Fresh
        } else {
            SessionState::InProgress
        }
    }

    /// True when all five positions are confirmed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.constraints.is_complete()
    }

    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    #[must_use]
    pub const fn known_score(&self) -> usize {
        self.known_score
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Number of words still consistent with the session
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.word_set.active_count()
    }

    #[must_use]
    pub const fn word_set(&self) -> &WordSet {
        &self.word_set
    }

    #[must_use]
    pub fn weights(&self) -> &[WeightProfile] {
        &self.weights
    }
}
