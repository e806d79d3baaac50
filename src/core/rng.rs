//! Seedable random number generation for the computer player.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: Players own a `GameRng` instead of reaching for global state
//! - **Context streams**: Independent sequences for different purposes
//!
//! ```
//! use rpsls::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll(1..=100), b.roll(1..=100));
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seeded when `seed` is given, otherwise from entropy.
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform integer in the inclusive range, like a die roll.
    pub fn roll(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_replays_the_same_rolls() {
        let mut first = GameRng::new(42);
        let mut second = GameRng::new(42);

        let rolls: Vec<u32> = (0..100).map(|_| first.roll(1..=100)).collect();
        let replayed: Vec<u32> = (0..100).map(|_| second.roll(1..=100)).collect();

        assert_eq!(rolls, replayed);
        // Both halves of the die are hit, so the rock split is not degenerate.
        assert!(rolls.iter().any(|&r| r <= 50));
        assert!(rolls.iter().any(|&r| r > 50));
    }

    #[test]
    fn test_seed_changes_the_game() {
        let games: Vec<Vec<u32>> = [1, 2]
            .into_iter()
            .map(|seed| {
                let mut rng = GameRng::new(seed);
                (0..20).map(|_| rng.roll(1..=100)).collect()
            })
            .collect();

        assert_ne!(games[0], games[1]);
    }

    #[test]
    fn test_roll_stays_in_range() {
        let mut rng = GameRng::new(7);
        let mut seen_low = false;
        let mut seen_high = false;

        for _ in 0..10_000 {
            let r = rng.roll(1..=100);
            assert!((1..=100).contains(&r));
            seen_low |= r == 1;
            seen_high |= r == 100;
        }

        assert!(seen_low && seen_high, "both bounds should be reachable");
    }

    #[test]
    fn test_each_opponent_gets_its_own_moves() {
        let table = GameRng::new(42);

        let mut r2d2: Vec<u32> = Vec::new();
        let mut again: Vec<u32> = Vec::new();
        let mut hal: Vec<u32> = Vec::new();
        for (name, rolls) in [("R2D2", &mut r2d2), ("R2D2", &mut again), ("Hal", &mut hal)] {
            let mut moves = table.for_context(name);
            rolls.extend((0..20).map(|_| moves.roll(1..=100)));
        }

        assert_eq!(r2d2, again);
        assert_ne!(r2d2, hal);
    }

    #[test]
    fn test_roster_pick() {
        let roster = ["R2D2", "Hal", "Marvin"];
        let mut rng = GameRng::new(42);

        let mut picked: Vec<&str> = (0..60).map(|_| *rng.choose(&roster).unwrap()).collect();
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked, vec!["Hal", "Marvin", "R2D2"]);

        let solo = ["R2D2"];
        assert_eq!(rng.choose(&solo), Some(&"R2D2"));

        let empty: [&str; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn test_move_stream_ignores_roster_draws() {
        // The name is drawn from the base stream; moves come from the
        // name's own stream, which draws on the base do not shift.
        let untouched = GameRng::new(5);
        let mut drawn = GameRng::new(5);
        for _ in 0..3 {
            assert!(drawn.choose(&["R2D2", "Hal"]).is_some());
        }

        let mut a = untouched.for_context("R2D2");
        let mut b = drawn.for_context("R2D2");
        for _ in 0..50 {
            assert_eq!(a.roll(1..=100), b.roll(1..=100));
        }
    }

    #[test]
    fn test_seed_or_entropy() {
        assert_eq!(GameRng::from_seed_or_entropy(Some(9)).seed(), 9);
        // Entropy path just has to produce a usable generator.
        let mut rng = GameRng::from_seed_or_entropy(None);
        assert!((1..=6).contains(&rng.roll(1..=6)));
    }
}
