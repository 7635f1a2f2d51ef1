use crate::error::{ListingError, ListingResult};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Weighted random choice over a fixed set of items.
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    items: Vec<T>,
    index: WeightedIndex<u32>,
}

impl<T> WeightedChoice<T> {
    /// Build from `(item, weight)` pairs. Every weight must be positive
    /// and at least one item is required.
    pub fn new(entries: impl IntoIterator<Item = (T, u32)>) -> ListingResult<Self> {
        let (items, weights): (Vec<T>, Vec<u32>) = entries.into_iter().unzip();

        if weights.contains(&0) {
            return Err(ListingError::invalid_config("weights must be positive"));
        }
        let index = WeightedIndex::new(&weights)
            .map_err(|e| ListingError::invalid_config(format!("weighted choice: {e}")))?;

        Ok(Self { items, index })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.items[self.index.sample(rng)]
    }
}
