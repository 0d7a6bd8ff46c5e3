//! Weight tuning by self-play
//!
//! Simulates games against answers drawn from the word list and evolves the
//! per-level weight table that needs the fewest guesses.

mod genetic;
mod simulation;

pub use genetic::{
    EvolutionOutcome, EvolverConfig, EvolverError, GenerationReport, HIGH_INFORMATION_SEED,
    LOW_INFORMATION_SEED, WeightEvolver, blend_profiles, blend_weight, pick_top_two,
};
pub use simulation::{GameRecord, GameStep, play_game, simulate_game};
