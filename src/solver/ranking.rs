//! Bounded top-K selection
//!
//! Keeps the K highest-scoring items seen so far in a fixed-size array sorted
//! from best to worst.

/// Fixed-capacity ranking of the best `K` scored items
///
/// An item only displaces a slot when its score is strictly greater, so equal
/// scores keep the order they were offered in.
#[derive(Debug, Clone)]
pub struct TopK<T, const K: usize> {
    slots: [Option<(f64, T)>; K],
}

impl<T, const K: usize> TopK<T, K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Offer an item; it is kept only if it ranks within the top `K`
    ///
    /// NaN scores are ignored.
    pub fn offer(&mut self, score: f64, item: T) {
        if score.is_nan() {
            return;
        }

        let Some(position) = self.slots.iter().position(|slot| match slot {
            Some((existing, _)) => score > *existing,
            None => true,
        }) else {
            return;
        };

        // Shift everything below `position` down one slot; the last one falls off
        let mut carried = Some((score, item));
        for slot in &mut self.slots[position..] {
            std::mem::swap(&mut carried, slot);
            if carried.is_none() {
                break;
            }
        }
    }

    /// Number of items currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().take_while(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots[..].first().is_none_or(Option::is_none)
    }

    /// Consume into `(score, item)` pairs, best first
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<(f64, T)> {
        self.slots.into_iter().flatten().collect()
    }
}

impl<T, const K: usize> Default for TopK<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const K: usize> FromIterator<(f64, T)> for TopK<T, K> {
    fn from_iter<I: IntoIterator<Item = (f64, T)>>(iter: I) -> Self {
        let mut top = Self::new();
        for (score, item) in iter {
            top.offer(score, item);
        }
        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_best_three_in_order() {
        let top: TopK<&str, 3> = [(0.2, "b"), (0.9, "e"), (0.1, "a"), (0.5, "c"), (0.7, "d")]
            .into_iter()
            .collect();

        let ranked: Vec<&str> = top.into_sorted_vec().into_iter().map(|(_, w)| w).collect();
        assert_eq!(ranked, vec!["e", "d", "c"]);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let top: TopK<usize, 3> = [(0.5, 0), (0.5, 1), (0.5, 2), (0.5, 3)].into_iter().collect();

        let ranked: Vec<usize> = top.into_sorted_vec().into_iter().map(|(_, i)| i).collect();
        assert_eq!(ranked, vec![0, 1, 2]);
    }

    #[test]
    fn later_higher_score_displaces_tie() {
        let top: TopK<usize, 3> = [(0.5, 0), (0.5, 1), (0.5, 2), (0.6, 3)].into_iter().collect();

        let ranked: Vec<usize> = top.into_sorted_vec().into_iter().map(|(_, i)| i).collect();
        assert_eq!(ranked, vec![3, 0, 1]);
    }

    #[test]
    fn fewer_items_than_capacity() {
        let mut top: TopK<char, 3> = TopK::new();
        assert!(top.is_empty());

        top.offer(1.0, 'x');
        assert_eq!(top.len(), 1);
        assert!(!top.is_empty());
        assert_eq!(top.into_sorted_vec(), vec![(1.0, 'x')]);
    }

    #[test]
    fn nan_scores_are_ignored() {
        let mut top: TopK<char, 3> = TopK::new();
        top.offer(f64::NAN, 'n');
        top.offer(0.0, 'z');
        assert_eq!(top.into_sorted_vec(), vec![(0.0, 'z')]);
    }
}
