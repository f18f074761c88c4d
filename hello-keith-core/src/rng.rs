//! Seeded generator state.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::seed::{Seed, SeedHash};

/// A locally owned pseudo-random generator keyed by a [`SeedHash`].
///
/// ChaCha20 produces the same stream on every platform, so a seed maps to
/// one draw sequence everywhere.
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: ChaCha20Rng,
}

impl SeededRng {
    /// Create a generator keyed by the full 32-byte digest.
    #[must_use]
    pub fn from_hash(hash: SeedHash) -> Self {
        Self { rng: ChaCha20Rng::from_seed(*hash.as_bytes()) }
    }

    /// Hash `seed` and key a generator with it.
    #[must_use]
    pub fn from_seed(seed: &Seed) -> Self {
        Self::from_hash(seed.hash())
    }

    /// Draw a uniformly distributed index in `[0, len)`.
    ///
    /// # Panics
    /// Panics if `len` is zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
