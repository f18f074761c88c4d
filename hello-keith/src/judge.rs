//! Judge mode: line-by-line comparison of candidate output.
//!
//! The judge walks `Scanning(0) -> Scanning(1) -> ...` one line at a time
//! and stops at the first failure. After the last line, [`Judge::finish`]
//! either passes or reports that lines are missing.

use hello_keith_core::{Greeting, ShuffledOrder};

use crate::error::CheckError;

/// Incremental judge over one shuffled order.
#[derive(Debug)]
pub struct Judge<'a> {
    order: &'a ShuffledOrder,
    greeting: &'a Greeting,
    matched: usize,
}

impl<'a> Judge<'a> {
    /// Start judging against `order`, greeting each name with `greeting`.
    #[must_use]
    pub fn new(order: &'a ShuffledOrder, greeting: &'a Greeting) -> Self {
        Self { order, greeting, matched: 0 }
    }

    /// Number of lines accepted so far.
    #[must_use]
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Check the next candidate line.
    ///
    /// Blank lines past the end of the order are ignored.
    ///
    /// # Errors
    /// Returns [`CheckError::TooManyLines`] for a non-empty line after
    /// every name has been greeted.
    /// Returns [`CheckError::Mismatch`] if the line is not the expected
    /// greeting.
    pub fn feed(&mut self, line: &str) -> Result<(), CheckError> {
        let Some(expected) = self.greeting.expected_line(self.order, self.matched) else {
            if line.is_empty() {
                return Ok(());
            }
            return Err(CheckError::TooManyLines);
        };

        if line != expected {
            return Err(CheckError::Mismatch {
                case: self.matched + 1,
                expected,
                actual: line.to_owned(),
            });
        }

        self.matched += 1;
        Ok(())
    }

    /// End of input.
    ///
    /// # Errors
    /// Returns [`CheckError::TooFewLines`] if some names were never greeted.
    pub fn finish(self) -> Result<(), CheckError> {
        if self.matched < self.order.len() {
            return Err(CheckError::TooFewLines {
                expected: self.order.len(),
                got: self.matched,
            });
        }
        Ok(())
    }
}

/// Judge a whole block of candidate output.
///
/// # Errors
/// Returns the first failure [`Judge::feed`] or [`Judge::finish`] reports.
pub fn judge(order: &ShuffledOrder, greeting: &Greeting, input: &str) -> Result<(), CheckError> {
    let mut judge = Judge::new(order, greeting);
    for line in input.lines() {
        judge.feed(line)?;
    }
    tracing::debug!(matched = judge.matched(), expected = order.len(), "input exhausted");
    judge.finish()
}
