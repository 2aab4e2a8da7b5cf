// Recognizer core type.
//
// This chunk defines the `Parser` type, its read-only accessors, and the snapshot/restore
// helpers every compound predicate uses for backtracking. It is `include!`'d into
// `crate::parser`.

/// Recognizer state.
///
/// ## Notes
/// - The cursor starts at `-1`, one before the first symbol, so the first [`Parser::advance`]
///   lands on index 0.
/// - `symbol` is derived from `cursor` and is only ever written by the navigation primitives
///   and by [`Parser::restore`].
/// - One parser per input. It is driven through `&mut self`, so one caller at a time.
#[derive(Debug, Clone)]
pub struct Parser {
    data: Vec<char>,
    cursor: isize,
    symbol: Option<char>,
}

impl Parser {
    /// Create a recognizer over `source`, positioned before the first symbol.
    pub fn new(source: &str) -> Self {
        Self {
            data: source.chars().collect(),
            cursor: -1,
            symbol: None,
        }
    }

    /// Current cursor position. May be `-1` or past the end after running off either side.
    pub fn cursor(&self) -> isize {
        self.cursor
    }

    /// Symbol under the cursor, or `None` when the cursor is out of bounds.
    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// Number of symbols in the input.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when the input has no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cursor clamped into `0..=len()`, for slicing the input.
    pub fn offset(&self) -> usize {
        usize::try_from(self.cursor).map_or(0, |c| c.min(self.data.len()))
    }

    fn symbol_at(&self, index: isize) -> Option<char> {
        usize::try_from(index).ok().and_then(|i| self.data.get(i).copied())
    }

    /// Snapshot the cursor at predicate entry.
    fn mark(&self) -> isize {
        self.cursor
    }

    /// Return to a snapshot taken by [`Parser::mark`], re-deriving the current symbol.
    fn restore(&mut self, mark: isize) {
        self.cursor = mark;
        self.symbol = self.symbol_at(mark);
    }
}
