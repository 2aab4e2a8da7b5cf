/// Single-symbol classification.
impl Parser {
    // ========================================================================
    // Classification
    // ========================================================================

    /// Return `true` if the current symbol is `#`.
    pub fn is_comment_marker(&self) -> bool {
        self.matches_current(Some(COMMENT))
    }

    /// Return `true` if the current symbol is a single space. Tabs do not count.
    pub fn is_space(&self) -> bool {
        self.matches_current(Some(SPACE))
    }

    /// Return `true` if there is no current symbol (before the start or past the end).
    pub fn is_end_of_input(&self) -> bool {
        self.matches_current(None)
    }

    /// Return `true` on a newline or at end of input.
    ///
    /// End of input counts so that a final line without a trailing newline still terminates.
    pub fn is_line_terminator(&self) -> bool {
        self.matches_current(Some(NEWLINE)) || self.is_end_of_input()
    }

    /// Return `true` if the current symbol is in the permitted set.
    pub fn is_allowed_character(&self) -> bool {
        self.symbol.is_some_and(symbols::is_allowed)
    }
}
