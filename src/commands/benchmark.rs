//! Benchmark command
//!
//! Plays a game against each answer and summarises the guess counts.

use crate::core::Word;
use crate::evolver::play_game;
use crate::solver::{SolverError, SolverSession};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_guesses: usize,
    pub failures: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess counts of solved games
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run benchmark on a set of answers
///
/// Games run in parallel, each on its own clone of `session`. Failed games
/// count the guesses they used.
///
/// # Errors
///
/// Propagates `SolverError` from suggestion lookups.
pub fn run_benchmark(
    session: &SolverSession,
    answers: &[Word],
    max_guesses: usize,
) -> Result<BenchmarkResult, SolverError> {
    let start = Instant::now();

    let games = answers
        .par_iter()
        .map_init(
            || session.clone(),
            |session, answer| {
                play_game(session, answer, max_guesses).map(|game| (game.guesses(), game.solved))
            },
        )
        .collect::<Result<Vec<_>, _>>()?;

    let mut total_guesses = 0;
    let mut failures = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for (guesses, solved) in games {
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses_seen = max_guesses_seen.max(guesses);
        if solved {
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures += 1;
        }
    }

    let duration = start.elapsed();
    let total_words = answers.len();

    Ok(BenchmarkResult {
        total_words,
        total_guesses,
        failures,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
