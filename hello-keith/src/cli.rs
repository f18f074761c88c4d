//! Command-line argument and mode resolution.
//!
//! The checker takes exactly two positional arguments, `<mode> <seed>`.
//! The argument count is checked before the mode is parsed.

use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

use hello_keith_core::Seed;

use crate::error::CheckError;

/// Program name used in the usage text when `argv[0]` is absent.
pub const DEFAULT_PROGRAM: &str = "hello-keith";

/// What the invocation does with the shuffled order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Mode {
    /// Print the shuffled names as fuzz input.
    Fuzz,
    /// Check candidate greetings read from stdin.
    Judge,
}

impl FromStr for Mode {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fuzz" => Ok(Mode::Fuzz),
            "judge" => Ok(Mode::Judge),
            other => Err(CheckError::UnknownMode(other.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Fuzz => "fuzz",
            Mode::Judge => "judge",
        })
    }
}

/// A fully resolved command line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Invocation {
    pub mode: Mode,
    pub seed: Seed,
}

impl Invocation {
    /// Creates an invocation directly.
    #[must_use]
    pub fn new(mode: Mode, seed: Seed) -> Self {
        Self { mode, seed }
    }

    /// Resolve an invocation from a full argument vector, program name
    /// included.
    ///
    /// # Errors
    /// Returns [`CheckError::Usage`] unless exactly two arguments follow
    /// the program name.
    /// Returns [`CheckError::UnknownMode`] if the mode is not recognised.
    pub fn from_args<I, T>(args: I) -> Result<Self, CheckError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<String> = args
            .into_iter()
            .map(|arg| arg.into().to_string_lossy().into_owned())
            .collect();

        let [_, mode, seed] = args.as_slice() else {
            let program = args.first().map_or(DEFAULT_PROGRAM, String::as_str);
            return Err(CheckError::Usage { program: program.to_owned() });
        };

        Ok(Self { mode: mode.parse()?, seed: Seed::new(seed.as_str()) })
    }
}
