//! Uniform random draw of distinct ticket numbers from a bounded pool.

use std::collections::HashSet;

use rand::Rng;

use rifa_core::error::{AppError, reasons};
use rifa_core::result::AppResult;

/// Draws distinct numbers uniformly at random from a fixed inclusive
/// range, excluding an arbitrary set of already-used values.
///
/// The engine is pure: it holds no state beyond the range, never
/// touches storage, and mutates nothing on failure. The caller is
/// responsible for deriving the exclusion set from the ledger and for
/// serializing concurrent draws.
///
/// The draw materializes the available complement and runs a partial
/// Fisher–Yates shuffle over it, which is uniform over all size-`count`
/// subsets and completes in a deterministic number of steps regardless
/// of how full the pool is.
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    range_min: i32,
    range_max: i32,
}

impl AllocationEngine {
    /// Create an engine over the inclusive range `[range_min, range_max]`.
    pub fn new(range_min: i32, range_max: i32) -> Self {
        Self {
            range_min,
            range_max,
        }
    }

    /// Total number of tickets in the pool.
    pub fn pool_size(&self) -> usize {
        (self.range_max - self.range_min + 1) as usize
    }

    /// How many numbers remain available given an exclusion set.
    ///
    /// Excluded values outside the range do not reduce capacity.
    pub fn remaining(&self, excluded: &HashSet<i32>) -> usize {
        let excluded_in_range = excluded
            .iter()
            .filter(|n| (self.range_min..=self.range_max).contains(*n))
            .count();
        self.pool_size() - excluded_in_range
    }

    /// Whether a number falls inside the pool range.
    pub fn contains(&self, number: i32) -> bool {
        (self.range_min..=self.range_max).contains(&number)
    }

    /// Draw `count` distinct numbers uniformly at random, disjoint from
    /// `excluded`, returned ascending.
    pub fn draw(&self, count: usize, excluded: &HashSet<i32>) -> AppResult<Vec<i32>> {
        self.draw_with(&mut rand::rng(), count, excluded)
    }

    fn draw_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        excluded: &HashSet<i32>,
    ) -> AppResult<Vec<i32>> {
        if count == 0 {
            return Err(AppError::validation("At least one number must be requested")
                .with_reason(reasons::INVALID_COMBO));
        }

        let mut available: Vec<i32> = (self.range_min..=self.range_max)
            .filter(|n| !excluded.contains(n))
            .collect();

        if available.len() < count {
            return Err(AppError::conflict(format!(
                "Only {} numbers remain in the pool, {} requested",
                available.len(),
                count
            ))
            .with_reason(reasons::CAPACITY_EXCEEDED));
        }

        // Partial Fisher–Yates: after i swaps, available[..i] is a
        // uniform sample without replacement.
        for i in 0..count {
            let j = rng.random_range(i..available.len());
            available.swap(i, j);
        }

        let mut drawn = available[..count].to_vec();
        drawn.sort_unstable();
        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rifa_core::error::ErrorKind;

    fn engine() -> AllocationEngine {
        AllocationEngine::new(1, 150)
    }

    #[test]
    fn test_draw_returns_exact_count_in_range() {
        let drawn = engine().draw(10, &HashSet::new()).unwrap();
        assert_eq!(drawn.len(), 10);
        let distinct: HashSet<i32> = drawn.iter().copied().collect();
        assert_eq!(distinct.len(), 10);
        assert!(drawn.iter().all(|n| (1..=150).contains(n)));
    }

    #[test]
    fn test_draw_is_ascending() {
        let drawn = engine().draw(25, &HashSet::new()).unwrap();
        let mut sorted = drawn.clone();
        sorted.sort_unstable();
        assert_eq!(drawn, sorted);
    }

    #[test]
    fn test_draw_is_disjoint_from_excluded() {
        let excluded: HashSet<i32> = (1..=100).collect();
        let drawn = engine().draw(50, &excluded).unwrap();
        assert_eq!(drawn.len(), 50);
        assert!(drawn.iter().all(|n| !excluded.contains(n)));
        // Only 101..=150 was left, so the draw is forced.
        assert_eq!(drawn, (101..=150).collect::<Vec<i32>>());
    }

    #[test]
    fn test_draw_beyond_capacity_fails() {
        let excluded: HashSet<i32> = (1..=100).collect();
        let err = engine().draw(51, &excluded).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.reason, Some("CAPACITY_EXCEEDED"));
    }

    #[test]
    fn test_draw_zero_rejected() {
        let err = engine().draw(0, &HashSet::new()).unwrap_err();
        assert_eq!(err.reason, Some("INVALID_COMBO"));
    }

    #[test]
    fn test_full_pool_drain_yields_whole_range() {
        let drawn = engine().draw(150, &HashSet::new()).unwrap();
        assert_eq!(drawn, (1..=150).collect::<Vec<i32>>());
    }

    #[test]
    fn test_excluded_values_outside_range_do_not_shrink_pool() {
        let excluded: HashSet<i32> = [0, 151, 999].into_iter().collect();
        assert_eq!(engine().remaining(&excluded), 150);
        let drawn = engine().draw(150, &excluded).unwrap();
        assert_eq!(drawn.len(), 150);
    }

    #[test]
    fn test_incremental_draws_drain_without_duplicates() {
        let engine = engine();
        let mut rng = StdRng::seed_from_u64(7);
        let mut used = HashSet::new();
        for _ in 0..30 {
            let drawn = engine.draw_with(&mut rng, 5, &used).unwrap();
            for n in drawn {
                assert!(used.insert(n), "number {n} was handed out twice");
            }
        }
        assert_eq!(used.len(), 150);
        let err = engine.draw_with(&mut rng, 1, &used).unwrap_err();
        assert_eq!(err.reason, Some("CAPACITY_EXCEEDED"));
    }

    #[test]
    fn test_every_number_is_reachable() {
        // With a seeded rng, repeated single draws from a 3-wide pool
        // hit all three values.
        let engine = AllocationEngine::new(1, 3);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..64 {
            let drawn = engine.draw_with(&mut rng, 1, &HashSet::new()).unwrap();
            seen.insert(drawn[0]);
        }
        assert_eq!(seen, HashSet::from([1, 2, 3]));
    }
}
