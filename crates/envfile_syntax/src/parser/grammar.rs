/// Compound grammar predicates.
///
/// Every predicate here follows the same protocol: snapshot the cursor on entry, try to consume
/// its constructs, and either commit (cursor left advanced, returns `true`) or restore the
/// snapshot (returns `false`, zero net movement).
///
/// ## Notes
/// - On success the cursor stands on the first symbol the predicate did NOT consume. The next
///   construct starts right there; the only explicit step between constructs is the one over
///   the assignment operator.
/// - `statement` commits with the cursor on its line terminator (newline or end of input).
///   Callers driving a whole file step over it with one `advance`.
impl Parser {
    // ========================================================================
    // Grammar
    // ========================================================================

    /// One or more permitted symbols, consumed greedily.
    ///
    /// Needs no restore: failing means nothing was consumed.
    pub fn identifier(&mut self) -> bool {
        let mut count = 0usize;
        while self.is_allowed_character() {
            count += 1;
            self.advance();
        }
        count != 0
    }

    /// Unquoted value: a run of permitted symbols and spaces, minus trailing spaces.
    ///
    /// Internal spaces belong to the value (`foo bar`); trailing ones are walked back over so
    /// the cursor ends right after the last non-space symbol.
    pub fn value(&mut self) -> bool {
        let mark = self.mark();
        let mut count = 0usize;
        while self.is_allowed_character() || self.is_space() {
            count += 1;
            self.advance();
        }

        while count > 0 && self.peek_behind() == Some(SPACE) {
            count -= 1;
            self.retreat();
        }

        if count > 0 {
            return true;
        }
        self.restore(mark);
        false
    }

    /// Quoted value: `"` followed by any mix of value runs, `#`, `"` and spaces.
    ///
    /// `#` and `"` are body symbols here, so the body only stops at a symbol none of the four
    /// alternatives accept (a newline, a tab, `=`, end of input...). The value is accepted when
    /// the last thing consumed was a quote (or the cursor stands on one) and the body consumed
    /// at least one item. Stray inner quotes pass (`"a"b"`), and so does `""`.
    pub fn quoted_value(&mut self) -> bool {
        let mark = self.mark();
        if self.matches_current(Some(QUOTE)) {
            self.advance();
            let mut count = 0usize;
            loop {
                if self.value() {
                    count += 1;
                } else if self.is_space() {
                    // `value` failed here, so it fails anywhere in this run too: take the run whole.
                    while self.is_space() {
                        count += 1;
                        self.advance();
                    }
                } else if self.is_comment_marker() || self.matches_current(Some(QUOTE)) {
                    count += 1;
                    self.advance();
                } else {
                    break;
                }
            }

            let closed = self.matches_current(Some(QUOTE)) || self.peek_behind() == Some(QUOTE);
            if closed && count > 0 {
                return true;
            }
        }

        self.restore(mark);
        false
    }

    /// `identifier`, an operator, then a value.
    ///
    /// The operator is `=` or a single space. Extra spaces after the operator are not skipped;
    /// they become part of an unquoted value, and in front of `=` they make the line invalid.
    pub fn assignment(&mut self) -> bool {
        let mark = self.mark();
        if self.identifier() && (self.matches_current(Some(ASSIGN)) || self.is_space()) {
            self.advance();
            if self.value() || self.quoted_value() {
                return true;
            }
        }

        self.restore(mark);
        false
    }

    /// `#` through to (not including) the line terminator.
    pub fn comment(&mut self) -> bool {
        let mark = self.mark();
        if self.is_comment_marker() {
            while !self.is_line_terminator() {
                self.advance();
            }
            return true;
        }

        self.restore(mark);
        false
    }

    /// A full line: assignment, optional spaces, optional comment, line terminator.
    pub fn statement(&mut self) -> bool {
        let mark = self.mark();
        if self.assignment() {
            while self.is_space() {
                self.advance();
            }
            if self.comment() || self.is_line_terminator() {
                return true;
            }
        }

        self.restore(mark);
        false
    }
}
