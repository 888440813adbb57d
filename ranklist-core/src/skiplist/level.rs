//! Probabilistic height assignment for new nodes

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded geometric level generator
///
/// Heights start at 1 and grow by one with probability `1 / branching_factor`
/// until `max_level`. The same seed and call sequence always reproduce the
/// same heights.
#[derive(Debug, Clone)]
pub(crate) struct LevelGenerator {
    rng: StdRng,
    max_level: usize,
    branching_factor: u32,
}

impl LevelGenerator {
    pub(crate) fn new(max_level: usize, branching_factor: u32, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_level,
            branching_factor,
        }
    }

    pub(crate) fn max_level(&self) -> usize {
        self.max_level
    }

    /// Draw a height in `[1, max_level]`
    pub(crate) fn random_level(&mut self) -> usize {
        let mut lvl = 1;
        while lvl < self.max_level && self.rng.gen_ratio(1, self.branching_factor) {
            lvl += 1;
        }
        lvl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_in_bounds() {
        let mut levels = LevelGenerator::new(12, 4, 7);
        for _ in 0..10_000 {
            let lvl = levels.random_level();
            assert!((1..=12).contains(&lvl));
        }
    }

    #[test]
    fn test_single_level_cap() {
        let mut levels = LevelGenerator::new(1, 2, 7);
        assert!((0..1000).all(|_| levels.random_level() == 1));
    }

    #[test]
    fn test_same_seed_same_heights() {
        let mut a = LevelGenerator::new(12, 4, 2024);
        let mut b = LevelGenerator::new(12, 4, 2024);
        let xs: Vec<_> = (0..500).map(|_| a.random_level()).collect();
        let ys: Vec<_> = (0..500).map(|_| b.random_level()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_expected_height() {
        // E[height] = 1 / (1 - p) = 4/3 for p = 1/4
        let mut levels = LevelGenerator::new(12, 4, 99);
        let n = 100_000;
        let total: usize = (0..n).map(|_| levels.random_level()).sum();
        let mean = total as f64 / n as f64;
        assert!((mean - 4.0 / 3.0).abs() < 0.05, "mean height {mean}");
    }
}
