//! Core types for the hello-keith checker.
//!
//! A seed string is hashed, the hash keys a ChaCha generator, and the
//! generator drives a select-and-remove shuffle of a fixed name pool.
//! The greeting template turns the shuffled order into the lines a
//! candidate program must print.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod greeting;
pub mod pool;
pub mod rng;
pub mod seed;
pub mod shuffle;

pub use error::CoreError;
pub use greeting::Greeting;
pub use pool::{NamePool, DEFAULT_NAMES};
pub use rng::SeededRng;
pub use seed::{Seed, SeedHash};
pub use shuffle::{shuffle, ShuffledOrder};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_has_the_five_names() {
        let pool = NamePool::default();
        assert_eq!(pool.len(), 5);
        assert_eq!(pool.names()[0], "Bjarne");
        assert_eq!(pool.names()[4], "Charlie");
        assert!(!pool.is_empty());
    }

    #[test]
    fn empty_pool_rejects() {
        let result = NamePool::new(Vec::<String>::new());
        assert!(matches!(result, Err(CoreError::EmptyPool)));
    }

    #[test]
    fn duplicate_name_rejects() {
        match NamePool::new(["Alice", "Bob", "Alice"]) {
            Err(CoreError::DuplicateName { name }) => assert_eq!(name, "Alice"),
            other => panic!("expected DuplicateName, got {other:?}"),
        }
    }

    #[test]
    fn pool_try_from_vec_succeeds() {
        let result = NamePool::try_from(vec!["Ferris".to_owned(), "Graydon".to_owned()]);
        assert!(result.is_ok(), "TryFrom with distinct names must succeed");
    }

    #[test]
    fn core_error_display_names_the_duplicate() {
        let err = CoreError::DuplicateName { name: "Bob".to_owned() };
        assert!(err.to_string().contains("'Bob'"), "Display must include the name");
    }

    #[test]
    fn explicit_rng_matches_from_seed() {
        let pool = NamePool::default();
        let seed = Seed::new("gamma");
        let mut rng = SeededRng::from_hash(seed.hash());
        assert_eq!(shuffle(&pool, &mut rng), ShuffledOrder::from_seed(&seed, &pool));
    }

    #[test]
    fn greeted_solution_contains_every_name() {
        let order = ShuffledOrder::from_seed(&Seed::new("delta"), &NamePool::default());
        let solution = Greeting::default().solution(&order);
        for name in DEFAULT_NAMES {
            assert!(solution.contains(&format!("Hello, {name}!")), "missing {name}");
        }
    }
}
