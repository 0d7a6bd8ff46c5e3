//! Suggestion engine
//!
//! `WordSet` narrows and ranks the word list; `SolverSession` turns guess
//! feedback into letter constraints and drives the word set.

pub mod ranking;
mod session;
mod word_set;

pub use session::{Constraints, LetterMask, SessionState, SolverError, SolverSession};
pub use word_set::{SUGGESTION_COUNT, Suggestion, WordSet};
