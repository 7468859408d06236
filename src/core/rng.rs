//! Random number generation for deck shuffling.
//!
//! ## Seeding
//!
//! Two policies are supported, chosen per run via [`SeedPolicy`]:
//!
//! - **Clock**: reseed from wall-clock nanoseconds every time the deck's
//!   working supply is refilled. Runs are not reproducible.
//! - **Fixed**: seed once when the deck is built and keep drawing from the
//!   same stream. Same seed produces an identical run.
//!
//! ```
//! use candy_lane::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut xs = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut ys = xs.clone();
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// How the shuffling RNG is seeded over the course of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedPolicy {
    /// Reseed from the wall clock on every deck refill.
    #[default]
    Clock,
    /// Seed once with the given value, never reseed.
    Fixed(u64),
}

impl SeedPolicy {
    /// Seed used when the deck is first built.
    #[must_use]
    pub fn initial_seed(self) -> u64 {
        match self {
            SeedPolicy::Clock => clock_seed(),
            SeedPolicy::Fixed(seed) => seed,
        }
    }

    /// Whether a refill should pull a fresh seed from the clock.
    #[must_use]
    pub const fn reseeds_on_refill(self) -> bool {
        matches!(self, SeedPolicy::Clock)
    }
}

/// Wall-clock nanoseconds since the Unix epoch, truncated to 64 bits.
#[must_use]
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Seedable shuffling RNG.
///
/// Uses ChaCha8 for speed. The seed is kept so a run can be logged and
/// replayed with `--seed`.
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

    /// Restart the stream from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.inner = ChaCha8Rng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// The seed the current stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
