//! Error types for the checker crate.
//!
//! Every variant's `Display` is the exact text written to stderr.

use hello_keith_core::CoreError;

/// Errors that end a checker invocation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CheckError {
    /// Wrong number of command-line arguments.
    #[error("Usage: {program} <fuzz | judge> <seed>")]
    Usage { program: String },

    /// The mode argument is neither `fuzz` nor `judge`.
    #[error("Unknown method: {0}")]
    UnknownMode(String),

    /// The candidate printed more non-empty lines than there are names.
    #[error("Too many lines.")]
    TooManyLines,

    /// A candidate line differs from the expected greeting.
    #[error("Case: {case} expected: \"{expected}\", got: \"{actual}\"")]
    Mismatch {
        /// 1-indexed line number.
        case: usize,
        expected: String,
        actual: String,
    },

    /// The candidate stopped before greeting every name.
    #[error("Too few lines. Expected {expected}, got {got}")]
    TooFewLines { expected: usize, got: usize },

    /// The checker configuration was rejected.
    #[error("invalid checker configuration: {0}")]
    Config(#[from] CoreError),

    /// Reading stdin or writing stdout failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Process exit code for this error. Every failure exits with 1.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            CheckError::Usage { .. }
            | CheckError::UnknownMode(_)
            | CheckError::TooManyLines
            | CheckError::Mismatch { .. }
            | CheckError::TooFewLines { .. }
            | CheckError::Config(_)
            | CheckError::Io(_) => 1,
        }
    }
}
