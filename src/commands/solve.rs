//! Word solving command
//!
//! Plays one game against a known answer and returns every step.

use crate::core::{MAX_GUESSES, Word};
use crate::evolver::{GameStep, play_game};
use crate::solver::SolverSession;
use anyhow::{Context, Result};

/// Configuration for solving a word
pub struct SolveConfig {
    pub answer: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(answer: String) -> Self {
        Self {
            answer,
            max_guesses: MAX_GUESSES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GameStep>,
    pub answer: String,
    /// Whether the answer is in the word list at all
    pub in_word_list: bool,
}

/// Solve a specific word with the given session
///
/// # Errors
///
/// Returns an error if the answer is not a valid 5-letter word or the session
/// has no weight profile for a reached information level.
pub fn solve_word(config: SolveConfig, session: &mut SolverSession) -> Result<SolveResult> {
    let answer = Word::new(config.answer.as_str(), 0.0)
        .with_context(|| format!("Invalid answer word {:?}", config.answer))?;
    let in_word_list = session
        .word_set()
        .words()
        .iter()
        .any(|word| word.text() == answer.text());

    let record = play_game(session, &answer, config.max_guesses)?;

    Ok(SolveResult {
        success: record.solved,
        steps: record.steps,
        answer: record.answer,
        in_word_list,
    })
}
