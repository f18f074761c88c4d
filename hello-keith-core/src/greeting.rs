use crate::shuffle::ShuffledOrder;

/// Template for the line a candidate must print for each name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Greeting {
    /// Text before the name (e.g. `"Hello, "`).
    pub prefix: String,
    /// Text after the name (e.g. `"!"`).
    pub suffix: String,
}

impl Greeting {
    /// Creates a greeting from a prefix and a suffix.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), suffix: suffix.into() }
    }

    /// Renders the greeting for one name.
    #[must_use]
    pub fn line(&self, name: &str) -> String {
        format!("{}{name}{}", self.prefix, self.suffix)
    }

    /// The expected line at position `i` of `order`, if `i` is in range.
    #[must_use]
    pub fn expected_line(&self, order: &ShuffledOrder, i: usize) -> Option<String> {
        order.get(i).map(|name| self.line(name))
    }

    /// The full reference answer for `order`: one greeting per line,
    /// joined with `\n`, no trailing newline.
    #[must_use]
    pub fn solution(&self, order: &ShuffledOrder) -> String {
        order.iter().map(|name| self.line(name)).collect::<Vec<_>>().join("\n")
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new("Hello, ", "!")
    }
}
