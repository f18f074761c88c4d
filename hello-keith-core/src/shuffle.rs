//! Select-and-remove shuffle over a [`NamePool`].
//!
//! Each step draws an index into the shrinking working copy, removes that
//! name, and appends it to the output. With a uniform draw this is
//! equivalent to a Fisher-Yates shuffle.

use std::ops::Index;

use crate::pool::NamePool;
use crate::rng::SeededRng;
use crate::seed::Seed;

/// A seeded permutation of a [`NamePool`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ShuffledOrder {
    names: Vec<String>,
}

impl ShuffledOrder {
    /// Hash `seed`, key a generator with it and shuffle `pool`.
    #[must_use]
    pub fn from_seed(seed: &Seed, pool: &NamePool) -> Self {
        let mut rng = SeededRng::from_seed(seed);
        shuffle(pool, &mut rng)
    }

    /// Returns the shuffled names in order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of names in the order.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the order holds no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the name at position `i`, if any.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&str> {
        self.names.get(i).map(String::as_str)
    }

    /// Iterates the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Index<usize> for ShuffledOrder {
    type Output = str;

    fn index(&self, i: usize) -> &str {
        &self.names[i]
    }
}

/// Shuffle `pool` using draws from `rng`.
///
/// # Complexity
/// O(n²) for a pool of n names; removal shifts the working copy.
#[must_use]
pub fn shuffle(pool: &NamePool, rng: &mut SeededRng) -> ShuffledOrder {
    let mut remaining = pool.names().to_vec();
    let mut chosen = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let index = rng.index(remaining.len());
        chosen.push(remaining.remove(index));
    }
    ShuffledOrder { names: chosen }
}
