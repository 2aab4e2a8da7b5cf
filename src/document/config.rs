//! Check configuration for env files
//!
//! The recognizer's grammar is fixed; these switches only decide how strictly the document
//! checker treats lines that are not statements.

/// Document check configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Accept comment lines that start with spaces (`   # note`)
    pub allow_indented_comments: bool,
    /// Accept lines holding only spaces as blank lines
    pub allow_whitespace_lines: bool,
    /// Stop at the first rejected line instead of collecting all of them
    pub stop_on_first_error: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            allow_indented_comments: true,
            allow_whitespace_lines: true,
            stop_on_first_error: false,
        }
    }
}

impl CheckConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject indented comments and whitespace-only lines
    pub fn strict() -> Self {
        Self::default()
            .with_indented_comments(false)
            .with_whitespace_lines(false)
    }

    /// Set whether indented comments are accepted
    pub fn with_indented_comments(mut self, allow: bool) -> Self {
        self.allow_indented_comments = allow;
        self
    }

    /// Set whether whitespace-only lines are accepted
    pub fn with_whitespace_lines(mut self, allow: bool) -> Self {
        self.allow_whitespace_lines = allow;
        self
    }

    /// Set whether checking stops at the first rejected line
    pub fn with_stop_on_first_error(mut self, stop: bool) -> Self {
        self.stop_on_first_error = stop;
        self
    }
}
