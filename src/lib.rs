//! Wordle Cheat
//!
//! A Wordle helper that narrows a frequency-weighted word list from guess
//! feedback and ranks the remaining candidates with a weighted letter score.
//! The scoring weights can be re-tuned by a genetic search over simulated
//! games.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_cheat::core::{GuessFeedback, WeightProfile};
//! use wordle_cheat::solver::{SolverSession, WordSet};
//! use wordle_cheat::wordlists::sample_words;
//!
//! let mut session = SolverSession::new(WordSet::new(sample_words()), WeightProfile::best()).unwrap();
//!
//! // What the game showed for CRANE
//! let feedback = GuessFeedback::from_marks("crane", "--G-G").unwrap();
//! session.record_guess(&feedback);
//!
//! for suggestion in session.suggest_matches().unwrap() {
//!     println!("{} {:.0}%", suggestion.word(), suggestion.percentage() * 100.0);
//! }
//! ```

// Core domain types
pub mod core;

// Constraint tracking and ranking
pub mod solver;

// Self-play and weight tuning
pub mod evolver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
