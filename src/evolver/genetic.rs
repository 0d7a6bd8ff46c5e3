//! Genetic search over weight tables
//!
//! Each generation keeps the two fittest tables and breeds the rest of the
//! population from them by blending every coefficient. Fitness is the total
//! number of guesses taken over a random sample of answers (lower is better).

use super::simulation::simulate_game;
use crate::core::{KNOWN_SCORE_LEVELS, MAX_GUESSES, WeightProfile, Word};
use crate::solver::{SolverError, SolverSession, WordSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use thiserror::Error;

/// Seed profile favouring letter coverage over placement
pub const LOW_INFORMATION_SEED: WeightProfile = WeightProfile::new(0.1, 0.8, 0.1, 0.01, 0.0);
/// Seed profile favouring placement and word frequency
pub const HIGH_INFORMATION_SEED: WeightProfile = WeightProfile::new(0.9, 0.2, 0.9, 0.5, 0.1);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvolverError {
    #[error("cannot evolve weights against an empty word list")]
    EmptyWordList,
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Tuning knobs for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolverConfig {
    /// Answers drawn per generation
    pub sample_size: usize,
    /// Children bred per generation on top of the two parents
    pub offspring: usize,
    /// Fitness cost of a game that was not solved
    pub failure_penalty: u32,
    pub max_guesses: usize,
    /// Profiles per weight table
    pub levels: usize,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for EvolverConfig {
    fn default() -> Self {
        Self {
            sample_size: 50,
            offspring: 10,
            failure_penalty: 10,
            max_guesses: MAX_GUESSES,
            levels: KNOWN_SCORE_LEVELS,
            seed: None,
        }
    }
}

/// Progress of one finished generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    pub generation: usize,
    pub best_fitness: u32,
    pub runner_up_fitness: u32,
}

/// Result of a full run
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOutcome {
    /// Fittest table of the final generation
    pub weights: Vec<WeightProfile>,
    /// Its total guesses over the final sample
    pub fitness: u32,
    pub sample_size: usize,
}

impl EvolutionOutcome {
    /// Mean guesses per game over the final sample
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.sample_size == 0 {
            return 0.0;
        }
        f64::from(self.fitness) / self.sample_size as f64
    }
}

/// Genetic optimizer for per-level weight tables
pub struct WeightEvolver {
    word_set: WordSet,
    config: EvolverConfig,
    rng: StdRng,
}

impl WeightEvolver {
    /// Create an evolver playing against `word_set`
    ///
    /// # Errors
    /// Returns `EvolverError::EmptyWordList` when there is nothing to sample
    /// answers from.
    pub fn new(word_set: WordSet, config: EvolverConfig) -> Result<Self, EvolverError> {
        if word_set.is_empty() {
            return Err(EvolverError::EmptyWordList);
        }

        let rng = config
            .seed
            .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

        Ok(Self {
            word_set,
            config,
            rng,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &EvolverConfig {
        &self.config
    }

    /// The two starting tables, each a single seed profile repeated per level
    #[must_use]
    pub fn seed_tables(&self) -> (Vec<WeightProfile>, Vec<WeightProfile>) {
        (
            LOW_INFORMATION_SEED.uniform_table(self.config.levels),
            HIGH_INFORMATION_SEED.uniform_table(self.config.levels),
        )
    }

    /// Run `iterations` generations and return the fittest table
    ///
    /// # Errors
    /// Propagates `SolverError` from simulated games.
    pub fn evolve(&mut self, iterations: usize) -> Result<EvolutionOutcome, EvolverError> {
        self.evolve_with(iterations, |_| {})
    }

    /// Like [`evolve`](Self::evolve), calling `on_generation` after each one
    ///
    /// # Errors
    /// Propagates `SolverError` from simulated games.
    pub fn evolve_with<F>(
        &mut self,
        iterations: usize,
        mut on_generation: F,
    ) -> Result<EvolutionOutcome, EvolverError>
    where
        F: FnMut(&GenerationReport),
    {
        let (low, high) = self.seed_tables();
        let mut population = self.breed(&low, &high);

        for generation in 0..iterations {
            let fitness = self.evaluate_population(&population)?;
            let (best, second) = pick_top_two(&fitness);

            let report = GenerationReport {
                generation,
                best_fitness: fitness[best],
                runner_up_fitness: fitness[second],
            };
            log::debug!(
                "generation {}: best {} runner-up {}",
                report.generation, report.best_fitness, report.runner_up_fitness
            );
            on_generation(&report);

            let (best, second) = (population[best].clone(), population[second].clone());
            population = self.breed(&best, &second);
        }

        let fitness = self.evaluate_population(&population)?;
        let (best, _) = pick_top_two(&fitness);
        log::info!(
            "evolution finished after {iterations} generations: {} guesses over {} games",
            fitness[best], self.config.sample_size
        );

        Ok(EvolutionOutcome {
            fitness: fitness[best],
            weights: population.swap_remove(best),
            sample_size: self.config.sample_size,
        })
    }

    /// Score every table against one shared sample of answers
    ///
    /// # Errors
    /// Propagates `SolverError` from simulated games.
    pub fn evaluate_population(
        &mut self,
        population: &[Vec<WeightProfile>],
    ) -> Result<Vec<u32>, SolverError> {
        let answers = self.pick_answers();
        let word_set = &self.word_set;
        let config = &self.config;

        population
            .par_iter()
            .map(|weights| {
                let mut session = SolverSession::new(word_set.clone(), weights.clone())?;
                answers.iter().try_fold(0u32, |total, answer| {
                    let guesses = simulate_game(
                        &mut session,
                        answer,
                        config.max_guesses,
                        config.failure_penalty,
                    )?;
                    Ok::<_, SolverError>(total + guesses)
                })
            })
            .collect()
    }

    /// Next population: both parents followed by blended offspring
    fn breed(&mut self, best: &[WeightProfile], second: &[WeightProfile]) -> Vec<Vec<WeightProfile>> {
        let mut population = Vec::with_capacity(self.config.offspring + 2);
        population.push(best.to_vec());
        population.push(second.to_vec());

        for _ in 0..self.config.offspring {
            let child = best
                .iter()
                .zip(second)
                .map(|(a, b)| blend_profiles(&mut self.rng, a, b))
                .collect();
            population.push(child);
        }

        population
    }

    /// Uniform draws with replacement over the whole list
    fn pick_answers(&mut self) -> Vec<Word> {
        let words = self.word_set.words();
        (0..self.config.sample_size)
            .map(|_| words[self.rng.random_range(0..words.len())].clone())
            .collect()
    }
}

/// Random value between two parent coefficients
///
/// Draws uniformly from the band halfway between each parent and their mean,
/// so children drift towards the middle without collapsing onto it.
pub fn blend_weight<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    let average = (a + b) / 2.0;
    let low = (a.min(b) + average) / 2.0;
    let high = (a.max(b) + average) / 2.0;
    low + rng.random::<f64>() * (high - low)
}

/// Blend every coefficient of two profiles
pub fn blend_profiles<R: Rng + ?Sized>(
    rng: &mut R,
    a: &WeightProfile,
    b: &WeightProfile,
) -> WeightProfile {
    let (a, b) = (a.coefficients(), b.coefficients());
    WeightProfile::from_coefficients(std::array::from_fn(|i| blend_weight(rng, a[i], b[i])))
}

/// Indices of the lowest and second-lowest fitness; ties go to the earlier index
///
/// # Panics
/// Panics if `fitness` has fewer than two entries.
#[must_use]
pub fn pick_top_two(fitness: &[u32]) -> (usize, usize) {
    assert!(fitness.len() >= 2, "need at least two candidates to pick from");

    let (mut best, mut second) = if fitness[1] < fitness[0] { (1, 0) } else { (0, 1) };
    for (index, &value) in fitness.iter().enumerate().skip(2) {
        if value < fitness[best] {
            second = best;
            best = index;
        } else if value < fitness[second] {
            second = index;
        }
    }

    (best, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn word_set(texts: &[&str]) -> WordSet {
        let words = texts
            .iter()
            .enumerate()
            .map(|(i, text)| Word::new(*text, (texts.len() - i) as f64).unwrap())
            .collect();
        WordSet::new(words)
    }

    fn small_config(seed: u64) -> EvolverConfig {
        EvolverConfig {
            sample_size: 6,
            offspring: 4,
            seed: Some(seed),
            ..EvolverConfig::default()
        }
    }

    const WORDS: [&str; 10] = [
        "CRANE", "SLATE", "TABLE", "ROBOT", "ROBIN", "EERIE", "THERE", "SPEED", "ABIDE", "HELLO",
    ];

    #[test]
    fn blended_weight_stays_between_the_quarter_points() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let forward = blend_weight(&mut rng, 0.2, 0.8);
            let backward = blend_weight(&mut rng, 0.8, 0.2);
            assert!((0.35..=0.65).contains(&forward), "{forward}");
            assert!((0.35..=0.65).contains(&backward), "{backward}");
        }
    }

    #[test]
    fn equal_parents_blend_to_themselves() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!((blend_weight(&mut rng, 0.4, 0.4) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn blended_profile_lies_within_parents() {
        let mut rng = StdRng::seed_from_u64(3);
        let child = blend_profiles(&mut rng, &LOW_INFORMATION_SEED, &HIGH_INFORMATION_SEED);

        let low = LOW_INFORMATION_SEED.coefficients();
        let high = HIGH_INFORMATION_SEED.coefficients();
        for (i, value) in child.coefficients().into_iter().enumerate() {
            assert!(value >= low[i].min(high[i]) && value <= low[i].max(high[i]));
        }
    }

    #[test_case(&[5, 3, 3, 1, 1] => (3, 4); "lowest two with earliest tie first")]
    #[test_case(&[2, 2, 2] => (0, 1); "all equal")]
    #[test_case(&[9, 1] => (1, 0); "two reversed")]
    #[test_case(&[4, 8, 6, 2] => (3, 0); "best found last")]
    #[test_case(&[1, 8, 6, 2] => (0, 3); "runner-up found last")]
    fn top_two(fitness: &[u32]) -> (usize, usize) {
        pick_top_two(fitness)
    }

    #[test]
    #[should_panic(expected = "at least two")]
    fn top_two_needs_two_candidates() {
        let _ = pick_top_two(&[3]);
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let result = WeightEvolver::new(WordSet::new(Vec::new()), EvolverConfig::default());
        assert!(matches!(result, Err(EvolverError::EmptyWordList)));
    }

    #[test]
    fn breeding_keeps_parents_first() {
        let mut evolver = WeightEvolver::new(word_set(&WORDS), small_config(11)).unwrap();
        let (low, high) = evolver.seed_tables();

        let population = evolver.breed(&low, &high);
        assert_eq!(population.len(), 6);
        assert_eq!(population[0], low);
        assert_eq!(population[1], high);
        assert!(population.iter().all(|table| table.len() == KNOWN_SCORE_LEVELS));
    }

    #[test]
    fn fitness_is_bounded_by_the_sample() {
        let mut evolver = WeightEvolver::new(word_set(&WORDS), small_config(5)).unwrap();
        let (low, high) = evolver.seed_tables();

        let fitness = evolver.evaluate_population(&[low, high]).unwrap();
        assert_eq!(fitness.len(), 2);
        for total in fitness {
            assert!(total >= 6);
            assert!(total <= 6 * 10);
        }
    }

    #[test]
    fn evolution_reports_every_generation() {
        let mut evolver = WeightEvolver::new(word_set(&WORDS), small_config(42)).unwrap();
        let mut reports = Vec::new();

        let outcome = evolver.evolve_with(3, |report| reports.push(*report)).unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(
            reports.iter().map(|r| r.generation).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert!(reports.iter().all(|r| r.best_fitness <= r.runner_up_fitness));
        assert_eq!(outcome.weights.len(), KNOWN_SCORE_LEVELS);
        assert_eq!(outcome.sample_size, 6);
        assert!(outcome.average_guesses() >= 1.0);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let first = WeightEvolver::new(word_set(&WORDS), small_config(99))
            .unwrap()
            .evolve(2)
            .unwrap();
        let second = WeightEvolver::new(word_set(&WORDS), small_config(99))
            .unwrap()
            .evolve(2)
            .unwrap();

        assert_eq!(first, second);
    }
}
