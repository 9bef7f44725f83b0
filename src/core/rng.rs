//! Deterministic random number generation for deck shuffling.
//!
//! The same seed always produces the same decks, which keeps replays and
//! tests reproducible. Each age shuffles from its own stream so that
//! adding cards to one age does not reorder another.
//!
//! ```
//! use wonders_engine::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut a = rng.for_age(1);
//! let mut b = rng.for_age(1);
//!
//! let mut x = vec![1, 2, 3, 4, 5];
//! let mut y = x.clone();
//! a.shuffle(&mut x);
//! b.shuffle(&mut y);
//! assert_eq!(x, y);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 generator.
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

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream dedicated to one age's deck.
    #[must_use]
    pub fn for_age(&self, age: u8) -> Self {
        let age_seed = self
            .seed
            .wrapping_add(u64::from(age).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(age_seed)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
