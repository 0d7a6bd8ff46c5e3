//! Simulated self-play
//!
//! Plays full games against a known answer by always taking the session's top
//! suggestion and feeding back Wordle's colouring.

use crate::core::{GuessFeedback, Word};
use crate::solver::{SolverError, SolverSession};

/// One guess of a simulated game
#[derive(Debug, Clone, PartialEq)]
pub struct GameStep {
    /// The guess with its colouring
    pub feedback: GuessFeedback,
    /// Suggestion score the guess was chosen with
    pub score: f64,
    /// Words left in the subset after recording the guess
    pub remaining: usize,
}

/// Full record of a simulated game
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub answer: String,
    pub steps: Vec<GameStep>,
    pub solved: bool,
}

impl GameRecord {
    /// Guesses used
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.steps.len()
    }
}

/// Play one game from a fresh session
///
/// Stops when every position is confirmed, when `max_guesses` guesses have
/// been made, or when no suggestion is left.
///
/// # Errors
/// Propagates `SolverError` from suggestion lookups.
pub fn play_game(
    session: &mut SolverSession,
    answer: &Word,
    max_guesses: usize,
) -> Result<GameRecord, SolverError> {
    session.start_new_session();
    let mut steps = Vec::with_capacity(max_guesses);

    while session.guess_count() < max_guesses {
        let Some(top) = session.suggest_matches()?.into_iter().next() else {
            break;
        };

        let feedback = GuessFeedback::evaluate(top.word(), answer);
        session.record_guess(&feedback);
        steps.push(GameStep {
            feedback,
            score: top.score(),
            remaining: session.remaining(),
        });

        if session.is_solved() {
            break;
        }
    }

    Ok(GameRecord {
        answer: answer.text().to_string(),
        steps,
        solved: session.is_solved(),
    })
}

/// Guesses needed to solve `answer`, or `failure_penalty` if the game is lost
///
/// # Errors
/// Propagates `SolverError` from suggestion lookups.
pub fn simulate_game(
    session: &mut SolverSession,
    answer: &Word,
    max_guesses: usize,
    failure_penalty: u32,
) -> Result<u32, SolverError> {
    let record = play_game(session, answer, max_guesses)?;
    Ok(if record.solved {
        u32::try_from(record.guesses()).unwrap_or(failure_penalty)
    } else {
        failure_penalty
    })
}
