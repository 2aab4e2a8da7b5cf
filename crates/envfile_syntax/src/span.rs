//! Byte ranges into source text.

/// Half-open byte range `start..end` into a source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_and_empty() {
        assert_eq!(Span::new(3, 7).len(), 4);
        assert!(Span::new(5, 5).is_empty());
        // Inverted spans are treated as empty rather than underflowing.
        assert_eq!(Span::new(7, 3).len(), 0);
    }

    #[test]
    fn test_into_source_span() {
        let span: miette::SourceSpan = Span::new(4, 10).into();
        assert_eq!(span.offset(), 4);
        assert_eq!(span.len(), 6);
    }
}
