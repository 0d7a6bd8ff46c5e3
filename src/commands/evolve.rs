//! Weight evolution command
//!
//! Runs the genetic optimizer with a progress bar.

use crate::evolver::{EvolutionOutcome, EvolverConfig, WeightEvolver};
use crate::solver::WordSet;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Evolve a weight table over `iterations` generations
///
/// # Errors
///
/// Returns an error if the word list is empty or a simulated game fails.
pub fn run_evolve(word_set: WordSet, config: EvolverConfig, iterations: usize) -> Result<EvolutionOutcome> {
    let mut evolver = WeightEvolver::new(word_set, config)?;

    let pb = ProgressBar::new(iterations as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let outcome = evolver.evolve_with(iterations, |report| {
        pb.set_message(format!(
            "best {} / runner-up {}",
            report.best_fitness, report.runner_up_fitness
        ));
        pb.inc(1);
    })?;

    pb.finish_with_message("Complete!");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KNOWN_SCORE_LEVELS;
    use crate::wordlists::sample_words;

    #[test]
    fn evolve_returns_full_table() {
        let config = EvolverConfig {
            sample_size: 4,
            offspring: 2,
            seed: Some(17),
            ..EvolverConfig::default()
        };

        let outcome = run_evolve(WordSet::new(sample_words()), config, 1).unwrap();
        assert_eq!(outcome.weights.len(), KNOWN_SCORE_LEVELS);
        assert!(outcome.fitness >= 4);
    }

    #[test]
    fn empty_word_list_fails() {
        let result = run_evolve(WordSet::new(Vec::new()), EvolverConfig::default(), 1);
        assert!(result.is_err());
    }
}
