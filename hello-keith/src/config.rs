//! Checker configuration.

use hello_keith_core::{Greeting, NamePool};

use crate::error::CheckError;

/// What a checker shuffles and how it expects each name greeted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct CheckerConfig {
    /// Names shuffled by every invocation.
    pub pool: NamePool,

    /// Template each expected judge line follows.
    pub greeting: Greeting,
}

impl CheckerConfig {
    /// Build a config over a custom list of names with the default greeting.
    ///
    /// # Errors
    /// Returns [`CheckError::Config`] if the names are empty or repeat.
    pub fn from_names<I, S>(names: I) -> Result<Self, CheckError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self { pool: NamePool::new(names)?, greeting: Greeting::default() })
    }

    /// Replace the name pool.
    #[must_use]
    pub fn with_pool(mut self, pool: NamePool) -> Self {
        self.pool = pool;
        self
    }

    /// Replace the greeting template.
    #[must_use]
    pub fn with_greeting(mut self, greeting: Greeting) -> Self {
        self.greeting = greeting;
        self
    }
}

#[cfg(test)]
mod tests {
    use hello_keith_core::{CoreError, DEFAULT_NAMES};

    use super::*;

    #[test]
    fn default_config_uses_fixed_pool_and_hello() {
        let config = CheckerConfig::default();
        assert_eq!(config.pool.names(), DEFAULT_NAMES.map(str::to_owned));
        assert_eq!(config.greeting.line("Bob"), "Hello, Bob!");
    }

    #[test]
    fn from_names_rejects_duplicates() {
        let result = CheckerConfig::from_names(["Ada", "Ada"]);
        assert!(matches!(result, Err(CheckError::Config(CoreError::DuplicateName { .. }))));
    }

    #[test]
    fn builders_replace_fields() {
        let pool = match NamePool::new(["Ferris"]) {
            Ok(p) => p,
            Err(e) => panic!("unexpected error: {e}"),
        };
        let config = CheckerConfig::default()
            .with_pool(pool.clone())
            .with_greeting(Greeting::new("Goodbye, ", "!"));
        assert_eq!(config.pool, pool);
        assert_eq!(config.greeting.line("Ferris"), "Goodbye, Ferris!");
    }
}
