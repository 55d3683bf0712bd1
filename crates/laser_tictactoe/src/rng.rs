//! Seedable randomness for laser activation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG owned by the engine.
///
/// Same seed, same sequence of laser draws.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: Option<u64>,
}

impl GameRng {
    /// Create an RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Seed this RNG was created with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// One uniform draw: true with the given probability.
    ///
    /// `probability` must lie in `[0, 1]`.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let draws_a: Vec<bool> = (0..64).map(|_| a.chance(0.25)).collect();
        let draws_b: Vec<bool> = (0..64).map(|_| b.chance(0.25)).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_extreme_probabilities() {
        let mut rng = GameRng::new(1);
        assert!((0..32).all(|_| rng.chance(1.0)));
        assert!((0..32).all(|_| !rng.chance(0.0)));
    }

    #[test]
    fn test_quarter_chance_fires_sometimes() {
        let mut rng = GameRng::new(9);
        let hits = (0..1000).filter(|_| rng.chance(0.25)).count();
        assert!((150..350).contains(&hits), "hits = {hits}");
    }
}
