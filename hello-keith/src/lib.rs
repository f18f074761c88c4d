//! Fuzz-input generator and judge for the hello-keith exercise.
//!
//! `fuzz <seed>` prints a seeded shuffle of the name pool; `judge <seed>`
//! checks that stdin greets the same names in the same order.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod judge;
pub mod runner;

pub use cli::{Invocation, Mode};
pub use config::CheckerConfig;
pub use error::CheckError;
pub use runner::run;
