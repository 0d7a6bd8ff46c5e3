//! Active word set
//!
//! Owns the full word list and a "virtual" subset of indices that are still
//! consistent with everything learned in the current session, together with
//! letter statistics computed over that subset.

use super::ranking::TopK;
use crate::core::{ALPHABET_SIZE, ComponentScores, WORD_LENGTH, WeightProfile, Word, letter_index, ratio};
use std::sync::Arc;

/// Number of suggestions returned per query
pub const SUGGESTION_COUNT: usize = 3;

/// A ranked candidate word
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    word: Word,
    score: f64,
}

impl Suggestion {
    #[must_use]
    pub const fn new(word: Word, score: f64) -> Self {
        Self { word, score }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Raw weighted score
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Score capped at 1.0, for percentage display
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.score.min(1.0)
    }
}

/// Letter statistics over the active subset
///
/// Per-word vectors are dense and parallel to the active index list.
#[derive(Debug, Clone, Default, PartialEq)]
struct SubsetStats {
    counts_by_position: [[u32; ALPHABET_SIZE]; WORD_LENGTH],
    total_counts: [u32; ALPHABET_SIZE],
    single_letter: Vec<u32>,
    repeat_letter: Vec<u32>,
    position: Vec<f64>,
    max_single: u32,
    max_repeat: u32,
    frequency_sum: f64,
}

impl SubsetStats {
    /// Build every aggregate for `indices` in one pass over letter counts and
    /// one pass over per-word scores
    fn build(words: &[Word], indices: &[usize]) -> Self {
        let mut stats = Self {
            single_letter: Vec::with_capacity(indices.len()),
            repeat_letter: Vec::with_capacity(indices.len()),
            position: Vec::with_capacity(indices.len()),
            ..Self::default()
        };

        for &index in indices {
            let word = &words[index];
            stats.frequency_sum += word.frequency();
            for (position, &letter) in word.letters().iter().enumerate() {
                let idx = letter_index(letter);
                stats.total_counts[idx] += 1;
                stats.counts_by_position[position][idx] += 1;
            }
        }

        let subset_len = indices.len() as f64;

        for &index in indices {
            let mut seen = [false; ALPHABET_SIZE];
            let mut single = 0u32;
            let mut repeat = 0u32;
            let mut position_score = 0.0;

            for (position, &letter) in words[index].letters().iter().enumerate() {
                let idx = letter_index(letter);
                repeat += stats.total_counts[idx];
                if !seen[idx] {
                    seen[idx] = true;
                    single += stats.total_counts[idx];
                }
                position_score +=
                    0.2 * f64::from(stats.counts_by_position[position][idx]) / subset_len;
            }

            stats.max_single = stats.max_single.max(single);
            stats.max_repeat = stats.max_repeat.max(repeat);
            stats.single_letter.push(single);
            stats.repeat_letter.push(repeat);
            stats.position.push(position_score);
        }

        stats
    }

    /// Subset-normalised component scores for the `slot`-th active word
    fn component_scores(&self, word: &Word, slot: usize) -> ComponentScores {
        ComponentScores {
            repeat_letter: ratio(
                f64::from(self.repeat_letter[slot]),
                f64::from(self.max_repeat),
            ),
            single_letter: ratio(
                f64::from(self.single_letter[slot]),
                f64::from(self.max_single),
            ),
            letter_placement: self.position[slot],
            word_frequency: ratio(word.frequency(), self.frequency_sum),
            raw_letter_frequency: word.raw_letter_frequency(),
        }
    }
}

/// The word list plus the subset still consistent with the session
///
/// Cloning is cheap for the base list (shared through `Arc`); each clone owns
/// its own subset and statistics, so clones can be handed to separate worker
/// threads.
#[derive(Debug, Clone)]
pub struct WordSet {
    words: Arc<[Word]>,
    /// `None` until the first cull of a session: every word is active
    active: Option<Vec<usize>>,
    stats: SubsetStats,
}

impl WordSet {
    /// Build a word set, recomputing the list-wide frequency scores
    #[must_use]
    pub fn new(mut words: Vec<Word>) -> Self {
        crate::core::rebuild_frequency_scores(&mut words);
        Self::from_shared(words.into())
    }

    /// Wrap an already-scored shared list
    #[must_use]
    pub fn from_shared(words: Arc<[Word]>) -> Self {
        Self {
            words,
            active: None,
            stats: SubsetStats::default(),
        }
    }

    /// The full list in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Shared handle to the full list
    #[must_use]
    pub fn shared_words(&self) -> Arc<[Word]> {
        Arc::clone(&self.words)
    }

    /// Size of the full list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True once a cull has narrowed this session
    #[must_use]
    pub const fn is_culled(&self) -> bool {
        self.active.is_some()
    }

    /// Number of words still consistent with the session
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.as_ref().map_or(self.words.len(), Vec::len)
    }

    /// Words still consistent with the session, in load order
    pub fn active_words(&self) -> impl Iterator<Item = &Word> {
        let all = self.active.is_none().then(|| self.words.iter());
        let subset = self
            .active
            .iter()
            .flat_map(|indices| indices.iter().map(|&i| &self.words[i]));
        all.into_iter().flatten().chain(subset)
    }

    /// Check whether a word (by text) is still active
    #[must_use]
    pub fn is_active(&self, text: &str) -> bool {
        self.active_words().any(|w| w.text().eq_ignore_ascii_case(text))
    }

    /// Drop the subset so every word is active again
    pub fn reset_subset(&mut self) {
        self.active = None;
        self.stats = SubsetStats::default();
    }

    /// Narrow the subset to words accepted by `is_valid`
    ///
    /// The first cull of a session scans the whole list; later culls only scan
    /// the current subset, so the subset never grows within a session. The
    /// new subset and its statistics are built completely before replacing the
    /// old ones.
    pub fn cull_invalid<F>(&mut self, is_valid: F)
    where
        F: Fn(&Word) -> bool,
    {
        let next: Vec<usize> = match &self.active {
            None => (0..self.words.len())
                .filter(|&i| is_valid(&self.words[i]))
                .collect(),
            Some(current) => current
                .iter()
                .copied()
                .filter(|&i| is_valid(&self.words[i]))
                .collect(),
        };

        let stats = SubsetStats::build(&self.words, &next);
        log::trace!(
            "culled subset from {} to {} words",
            self.active_count(),
            next.len()
        );

        self.stats = stats;
        self.active = Some(next);
    }

    /// Up to three best words for `weights`, highest score first
    ///
    /// Before any cull the list-wide scores are used; afterwards each word is
    /// scored against statistics of the current subset. Equal scores keep load
    /// order. An empty subset yields no suggestions.
    #[must_use]
    pub fn get_suggestions(&self, weights: &WeightProfile) -> Vec<Suggestion> {
        let top: TopK<usize, SUGGESTION_COUNT> = match &self.active {
            None => self
                .words
                .iter()
                .enumerate()
                .map(|(index, word)| (word.weighted_score(weights), index))
                .collect(),
            Some(indices) => indices
                .iter()
                .enumerate()
                .map(|(slot, &index)| {
                    let scores = self.stats.component_scores(&self.words[index], slot);
                    (weights.combine(&scores), index)
                })
                .collect(),
        };

        top.into_sorted_vec()
            .into_iter()
            .map(|(score, index)| Suggestion::new(self.words[index].clone(), score))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_set(entries: &[(&str, f64)]) -> WordSet {
        WordSet::new(
            entries
                .iter()
                .map(|&(text, freq)| Word::new(text, freq).unwrap())
                .collect(),
        )
    }

    fn sample() -> WordSet {
        word_set(&[
            ("CRANE", 10.0),
            ("TABLE", 5.0),
            ("SLATE", 8.0),
            ("ROBOT", 4.0),
            ("ROBIN", 3.0),
            ("EERIE", 1.0),
        ])
    }

    fn texts(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.word().text()).collect()
    }

    #[test]
    fn fresh_set_has_everything_active() {
        let set = sample();
        assert!(!set.is_culled());
        assert_eq!(set.active_count(), 6);
        assert_eq!(set.active_words().count(), 6);
        assert!(set.is_active("robot"));
    }

    #[test]
    fn cull_narrows_to_predicate() {
        let mut set = sample();
        set.cull_invalid(|w| w.letters()[0] == b'R');

        assert!(set.is_culled());
        assert_eq!(set.active_count(), 2);
        let active: Vec<&str> = set.active_words().map(Word::text).collect();
        assert_eq!(active, vec!["ROBOT", "ROBIN"]);
    }

    #[test]
    fn cull_is_monotonic() {
        let mut set = sample();
        set.cull_invalid(|w| w.text().contains('E'));
        let after_first = set.active_count();

        // A predicate accepting words outside the subset cannot bring them back
        set.cull_invalid(|w| w.text() != "EERIE");
        assert!(set.active_count() <= after_first);
        assert!(!set.is_active("ROBOT"));
        assert!(!set.is_active("EERIE"));
    }

    #[test]
    fn cull_accepting_everything_is_idempotent() {
        let mut set = sample();
        set.cull_invalid(|w| w.text() != "EERIE");
        let active_before = set.active.clone();
        let stats_before = set.stats.clone();

        set.cull_invalid(|_| true);

        assert_eq!(set.active, active_before);
        assert_eq!(set.stats, stats_before);
    }

    #[test]
    fn empty_subset_stays_empty_and_yields_no_suggestions() {
        let mut set = sample();
        set.cull_invalid(|_| false);
        assert_eq!(set.active_count(), 0);
        assert!(set.get_suggestions(&WeightProfile::new(1.0, 1.0, 1.0, 1.0, 1.0)).is_empty());

        // Still a culled session: the next cull must not rescan the full list
        set.cull_invalid(|_| true);
        assert_eq!(set.active_count(), 0);
    }

    #[test]
    fn reset_restores_full_list() {
        let mut set = sample();
        set.cull_invalid(|w| w.text() == "SLATE");
        set.reset_subset();

        assert!(!set.is_culled());
        assert_eq!(set.active_count(), 6);
    }

    #[test]
    fn subset_scores_are_normalised() {
        let mut set = sample();
        set.cull_invalid(|w| w.text() != "CRANE");

        let words = set.words().to_vec();
        let indices = set.active.clone().unwrap();
        for (slot, &index) in indices.iter().enumerate() {
            let scores = set.stats.component_scores(&words[index], slot);
            assert!((0.0..=1.0).contains(&scores.single_letter));
            assert!((0.0..=1.0).contains(&scores.repeat_letter));
            assert!((0.0..=1.0).contains(&scores.letter_placement));
            assert!((0.0..=1.0).contains(&scores.word_frequency));
        }
    }

    #[test]
    fn subset_frequency_sum_is_reset_per_cull() {
        let mut set = sample();
        set.cull_invalid(|_| true);
        set.cull_invalid(|w| w.text() == "SLATE" || w.text() == "TABLE");
        assert!((set.stats.frequency_sum - 13.0).abs() < 1e-12);
    }

    #[test]
    fn suggestions_are_ranked_and_capped() {
        let set = sample();
        let suggestions = set.get_suggestions(&WeightProfile::new(0.0, 0.0, 0.0, 1.0, 0.0));

        // Pure word frequency before culling: raw frequencies decide
        assert_eq!(texts(&suggestions), vec!["CRANE", "SLATE", "TABLE"]);
        assert!(suggestions.windows(2).all(|w| w[0].score() >= w[1].score()));
    }

    #[test]
    fn subset_suggestions_use_subset_frequency_share() {
        let mut set = sample();
        set.cull_invalid(|w| w.text().starts_with("RO"));
        let suggestions = set.get_suggestions(&WeightProfile::new(0.0, 0.0, 0.0, 1.0, 0.0));

        assert_eq!(texts(&suggestions), vec!["ROBOT", "ROBIN"]);
        assert!((suggestions[0].score() - 4.0 / 7.0).abs() < 1e-12);
        assert!((suggestions[1].score() - 3.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn ties_follow_load_order() {
        let set = word_set(&[("BBBBB", 1.0), ("AAAAA", 1.0), ("CCCCC", 1.0), ("DDDDD", 1.0)]);
        let suggestions = set.get_suggestions(&WeightProfile::new(0.0, 0.0, 0.0, 1.0, 0.0));
        assert_eq!(texts(&suggestions), vec!["BBBBB", "AAAAA", "CCCCC"]);
    }

    #[test]
    fn single_word_list_scores_its_own_combination() {
        let mut set = word_set(&[("SLATE", 0.0)]);
        let weights = WeightProfile::new(0.3, 0.4, 0.5, 0.6, 0.7);
        let word = set.words()[0].clone();

        let suggestions = set.get_suggestions(&weights);
        assert_eq!(suggestions.len(), 1);
        assert!((suggestions[0].score() - word.weighted_score(&weights)).abs() < 1e-12);

        // After culling, a zero frequency sum must not divide by zero
        set.cull_invalid(|_| true);
        let culled = set.get_suggestions(&weights);
        let expected = 0.3 + 0.4 + 0.5 + 0.7 * word.raw_letter_frequency();
        assert_eq!(culled.len(), 1);
        assert!(culled[0].score().is_finite());
        assert!((culled[0].score() - expected).abs() < 1e-12);
    }

    #[test]
    fn percentage_is_capped() {
        let word = Word::new("CRANE", 1.0).unwrap();
        assert!((Suggestion::new(word.clone(), 3.5).percentage() - 1.0).abs() < f64::EPSILON);
        assert!((Suggestion::new(word, 0.25).percentage() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn clones_share_list_but_not_subset() {
        let mut culled = sample();
        let clone = culled.clone();
        culled.cull_invalid(|w| w.text() == "CRANE");

        assert!(Arc::ptr_eq(&culled.shared_words(), &clone.shared_words()));
        assert_eq!(culled.active_count(), 1);
        assert_eq!(clone.active_count(), 6);
    }
}
