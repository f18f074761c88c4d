use std::fmt;

use sha2::{Digest, Sha256};

/// A caller-supplied seed string.
///
/// Two seeds with the same text always hash, and therefore shuffle,
/// identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Seed(pub String);

impl Seed {
    /// Creates a `Seed` from any string-like value.
    pub fn new(seed: impl Into<String>) -> Self {
        Self(seed.into())
    }

    /// Returns the seed text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hashes the seed text into a [`SeedHash`].
    ///
    /// `H(seed) = SHA-256(utf8(seed))`
    #[must_use]
    pub fn hash(&self) -> SeedHash {
        let digest = Sha256::digest(self.0.as_bytes());
        SeedHash::new(digest.into())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// SHA-256 digest of a seed, used as the generator key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct SeedHash(pub [u8; 32]);

impl SeedHash {
    /// Creates a `SeedHash` from a raw 32-byte digest.
    #[must_use]
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The first eight digest bytes read as a big-endian integer.
    #[must_use]
    pub fn as_u64(&self) -> u64 {
        let mut head = [0u8; 8];
        head.copy_from_slice(&self.0[..8]);
        u64::from_be_bytes(head)
    }
}

impl fmt::Display for SeedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
