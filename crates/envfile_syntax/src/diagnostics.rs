//! Syntax diagnostics for env files.
//!
//! The recognizer reports plain booleans. Callers that walk a whole file turn rejected lines into
//! [`SyntaxError`]s, which render with source context through `miette`.

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::span::Span;

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// Not a statement, comment, or blank line.
    InvalidStatement,
    /// A comment preceded by spaces while indented comments are disallowed.
    IndentedComment,
    /// A line holding only spaces while whitespace-only lines are disallowed.
    WhitespaceLine,
}

impl SyntaxErrorKind {
    /// Suggested fix shown under the rendered diagnostic.
    pub fn help(self) -> &'static str {
        match self {
            SyntaxErrorKind::InvalidStatement => {
                "expected `KEY=value`, `KEY=\"quoted value\"`, a `#` comment, or an empty line"
            }
            SyntaxErrorKind::IndentedComment => "start the comment in the first column",
            SyntaxErrorKind::WhitespaceLine => "remove the trailing spaces or the line",
        }
    }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::InvalidStatement => write!(f, "not a valid statement"),
            SyntaxErrorKind::IndentedComment => write!(f, "indented comment"),
            SyntaxErrorKind::WhitespaceLine => write!(f, "whitespace-only line"),
        }
    }
}

/// A rejected line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("line {line}: {kind}")]
#[diagnostic(code(envfile::syntax))]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// 1-based line number.
    pub line: usize,
    /// Text of the offending line, terminator excluded.
    pub text: String,
    #[label("rejected here")]
    pub span: SourceSpan,
    #[help]
    pub help: Option<String>,
}

impl SyntaxError {
    /// Build an error for `line`, attaching the kind's help text.
    pub fn new(kind: SyntaxErrorKind, line: usize, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            line,
            text: text.into(),
            span: span.into(),
            help: Some(kind.help().to_string()),
        }
    }

    /// Byte range of the offending line in the checked source.
    pub fn byte_span(&self) -> Span {
        Span::new(self.span.offset(), self.span.offset() + self.span.len())
    }
}
