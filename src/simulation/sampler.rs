use rand::Rng;

use crate::base::EmptyDistribution;

/// Draws items from a weighted distribution.
///
/// Built once from `(item, weight)` pairs, the sampler keeps a running
/// cumulative-weight table in input order. Each draw picks a uniform value in
/// `[0, total)` and selects the first item whose cumulative weight strictly
/// exceeds it, by binary search. An item's selection probability is its
/// weight divided by the total; zero-weight items occupy no interval and are
/// never selected.
#[derive(Debug, Clone)]
pub struct WeightedSampler<T> {
    /// Items in input order
    items: Vec<T>,
    /// Cumulative weights, parallel to `items`
    cumulative: Vec<u64>,
    /// Sum of all weights (invariant: > 0)
    total: u64,
}

impl<T> WeightedSampler<T> {
    /// Build a sampler from `(item, weight)` pairs.
    ///
    /// # Errors
    /// Returns `EmptyDistribution` if the input is empty or every weight is 0.
    pub fn new<I>(pairs: I) -> Result<Self, EmptyDistribution>
    where
        I: IntoIterator<Item = (T, u64)>,
    {
        let mut items = Vec::new();
        let mut cumulative = Vec::new();
        let mut total: u64 = 0;

        for (item, weight) in pairs {
            total += weight;
            items.push(item);
            cumulative.push(total);
        }

        if total == 0 {
            return Err(EmptyDistribution);
        }

        Ok(Self {
            items,
            cumulative,
            total,
        })
    }

    /// Return the total weight of the distribution.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Return the number of items, including zero-weight ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Return `true` if the sampler holds no items. Construction guarantees
    /// positive total weight, so this is always `false`; provided for API
    /// symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw one item, with probability proportional to its weight.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        let draw = rng.random_range(0..self.total);
        // First index whose cumulative weight strictly exceeds the draw.
        let idx = self.cumulative.partition_point(|&c| c <= draw);
        &self.items[idx]
    }
}
