/// Cursor navigation primitives.
///
/// Everything else in the recognizer moves the cursor through these five methods, which keep
/// `symbol` consistent with `cursor`.
///
/// ## Notes
/// - `advance` and `retreat` do NOT restore on failure: running off either end leaves the
///   cursor at the out-of-bounds index with `symbol == None`. End-of-input and terminator
///   checks rely on that.
impl Parser {
    // ========================================================================
    // Navigation
    // ========================================================================

    /// Move the cursor one symbol forward.
    ///
    /// Returns `false` (and clears the current symbol) when the new position is past the end.
    pub fn advance(&mut self) -> bool {
        self.cursor += 1;
        self.symbol = self.symbol_at(self.cursor);
        self.symbol.is_some()
    }

    /// Move the cursor one symbol back.
    ///
    /// Returns `false` (and clears the current symbol) when the new position is before the start.
    pub fn retreat(&mut self) -> bool {
        self.cursor -= 1;
        self.symbol = self.symbol_at(self.cursor);
        self.symbol.is_some()
    }

    /// Return the symbol after the cursor without moving.
    pub fn peek_ahead(&self) -> Option<char> {
        self.symbol_at(self.cursor + 1)
    }

    /// Return the symbol before the cursor without moving.
    ///
    /// `None` whenever `cursor - 1` is negative, including at cursor 0.
    pub fn peek_behind(&self) -> Option<char> {
        self.symbol_at(self.cursor - 1)
    }

    /// Return `true` if the current symbol equals `symbol`.
    ///
    /// Passing `None` tests for end of input.
    pub fn matches_current(&self, symbol: Option<char>) -> bool {
        self.symbol == symbol
    }
}
