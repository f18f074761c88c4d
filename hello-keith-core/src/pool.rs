use std::collections::HashSet;

use crate::error::CoreError;

/// The names every default invocation shuffles, in source order.
pub const DEFAULT_NAMES: [&str; 5] = ["Bjarne", "Keith", "Alice", "Bob", "Charlie"];

/// An ordered, duplicate-free list of names to shuffle.
///
/// The pool itself is never mutated; shuffling consumes a working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct NamePool {
    names: Vec<String>,
}

impl NamePool {
    /// Creates a pool from the given names.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyPool`] if `names` is empty.
    /// Returns [`CoreError::DuplicateName`] if any name appears twice.
    pub fn new<I, S>(names: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(CoreError::EmptyPool);
        }
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(CoreError::DuplicateName { name: name.clone() });
            }
        }
        Ok(Self { names })
    }

    /// Returns the names in pool order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of names in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; construction rejects empty pools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for NamePool {
    fn default() -> Self {
        Self { names: DEFAULT_NAMES.iter().map(|&n| n.to_owned()).collect() }
    }
}

impl TryFrom<Vec<String>> for NamePool {
    type Error = CoreError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}
