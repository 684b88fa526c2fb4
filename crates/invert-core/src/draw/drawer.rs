use super::recommendation::Recommendation;
use crate::error::{InvertError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Draws random picks from a candidate pool.
///
/// The random source is injected so draws can be reproduced with a fixed
/// seed. Each draw samples without replacement; the pool itself is never
/// consumed, so a number may appear in several recommendations.
#[derive(Debug, Clone)]
pub struct InverseDrawer<R = StdRng> {
    rng: R,
}

impl InverseDrawer<StdRng> {
    /// Creates a drawer seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Creates a drawer whose output is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> InverseDrawer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Produces `count` recommendations of `k` distinct numbers from `pool`.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientPool` if `pool` has fewer than `k` numbers.
    /// No partial result is produced.
    pub fn draw(
        &mut self,
        pool: &BTreeSet<u8>,
        k: usize,
        count: usize,
    ) -> Result<Vec<Recommendation>> {
        if pool.len() < k {
            return Err(InvertError::insufficient_pool(pool.len(), k));
        }

        let candidates: Vec<u8> = pool.iter().copied().collect();
        let picks = (0..count)
            .map(|_| {
                let numbers = candidates
                    .choose_multiple(&mut self.rng, k)
                    .copied()
                    .collect();
                Recommendation::from_unsorted(numbers)
            })
            .collect();

        tracing::debug!(pool_size = pool.len(), k, count, "Inverse draw completed");
        Ok(picks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(lo: u8, hi: u8) -> BTreeSet<u8> {
        (lo..=hi).collect()
    }

    #[test]
    fn test_draw_shape() {
        let pool = range(7, 45);
        let mut drawer = InverseDrawer::seeded(1);

        let picks = drawer.draw(&pool, 6, 5).unwrap();

        assert_eq!(picks.len(), 5);
        for pick in &picks {
            assert_eq!(pick.len(), 6);
            assert!(pick.numbers().windows(2).all(|w| w[0] < w[1]));
            assert!(pick.numbers().iter().all(|n| pool.contains(n)));
        }
    }

    #[test]
    fn test_exact_pool_returns_pool() {
        let pool: BTreeSet<u8> = [4, 8, 15, 16, 23, 42].into_iter().collect();
        let mut drawer = InverseDrawer::from_entropy();

        let picks = drawer.draw(&pool, 6, 3).unwrap();

        assert_eq!(picks.len(), 3);
        for pick in picks {
            assert_eq!(pick.numbers(), &[4, 8, 15, 16, 23, 42]);
        }
    }

    #[test]
    fn test_insufficient_pool() {
        let pool = range(1, 5);
        let mut drawer = InverseDrawer::seeded(3);

        let err = drawer.draw(&pool, 6, 5).unwrap_err();
        assert_eq!(err, InvertError::insufficient_pool(5, 6));

        let err = drawer.draw(&BTreeSet::new(), 1, 1).unwrap_err();
        assert!(err.is_insufficient_pool());
    }

    #[test]
    fn test_same_seed_same_draws() {
        let pool = range(1, 45);
        let first = InverseDrawer::seeded(2024).draw(&pool, 6, 5).unwrap();
        let second = InverseDrawer::seeded(2024).draw(&pool, 6, 5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let pool = range(1, 45);
        let picks = InverseDrawer::seeded(0).draw(&pool, 6, 0).unwrap();
        assert!(picks.is_empty());
    }

    #[test]
    fn test_every_candidate_reachable() {
        let pool = range(1, 10);
        let mut drawer = InverseDrawer::seeded(99);
        let seen: BTreeSet<u8> = drawer
            .draw(&pool, 2, 200)
            .unwrap()
            .into_iter()
            .flat_map(Recommendation::into_inner)
            .collect();
        assert_eq!(seen, pool);
    }
}
