//! Deterministic random number generation for dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical roll sequences
//! - **Forkable**: Each player's die gets its own independent stream
//!
//! ## Usage
//!
//! ```
//! use pig::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork one stream per die
//! let mut die_rng = rng.fork();
//!
//! // Forks are deterministic - same seed, same fork counter, same stream
//! let mut rng2 = GameRng::new(42);
//! let mut die_rng2 = rng2.fork();
//! assert_eq!(die_rng.roll(6), die_rng2.roll(6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for per-die streams.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create a new RNG seeded from the operating system.
    ///
    /// The chosen seed is still recorded, so `seed()` can be logged and the
    /// game reproduced later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Roll a value uniformly in `1..=sides`.
    pub fn roll(&mut self, sides: u32) -> u32 {
        self.inner.gen_range(1..=sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(6), rng2.roll(6));
        }
    }

    #[test]
    fn test_known_roll_sequence() {
        // Pinned so a change to seeding or range sampling is caught
        let mut rng = GameRng::new(42);
        let rolls: Vec<_> = (0..10).map(|_| rng.roll(6)).collect();
        assert_eq!(rolls, vec![2, 5, 6, 5, 3, 3, 5, 2, 5, 2]);
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll(1000)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roll_stays_in_range() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 6];

        for _ in 0..1000 {
            let value = rng.roll(6);
            assert!((1..=6).contains(&value));
            seen[(value - 1) as usize] = true;
        }

        // Every face shows up in 1000 rolls
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..20).map(|_| rng.roll(1000)).collect();
        let seq2: Vec<_> = (0..20).map(|_| forked.roll(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut original = rng.clone();

        assert_eq!(original.roll(6), replay.roll(6));
    }
}
