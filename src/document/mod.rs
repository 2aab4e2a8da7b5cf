//! Whole-file checking for env files
//!
//! This module drives the statement recognizer over an entire source, one line at a time, and
//! classifies every line as a statement, a comment, or a blank line. Lines that are none of
//! those become [`SyntaxError`]s.
//!
//! The recognizer itself only says yes or no; line numbers, spans and the
//! comment/blank-line policy live here.

mod config;

pub use config::CheckConfig;

use std::fmt;

use crate::parser::Parser;
use envfile_syntax::{Span, SyntaxError, SyntaxErrorKind};

/// What a checked line turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `KEY=value`, optionally followed by spaces and a comment
    Statement,
    /// A full-line `#` comment
    Comment,
    /// Nothing (or only spaces) before the terminator
    Blank,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            LineKind::Statement => "statement",
            LineKind::Comment => "comment",
            LineKind::Blank => "blank",
        })
    }
}

/// One accepted line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number
    pub number: usize,
    pub kind: LineKind,
    /// Byte range of the line body, terminator excluded
    pub span: Span,
}

/// Classification of every line in a valid source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<Line>,
}

impl Report {
    pub fn statements(&self) -> usize {
        self.count(LineKind::Statement)
    }

    pub fn comments(&self) -> usize {
        self.count(LineKind::Comment)
    }

    pub fn blanks(&self) -> usize {
        self.count(LineKind::Blank)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn count(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|line| line.kind == kind).count()
    }
}

/// Check a source with default settings
pub fn check_source(source: &str) -> Result<Report, Vec<SyntaxError>> {
    check_source_with_config(source, CheckConfig::default())
}

/// Check a source with custom configuration
///
/// ## Errors
/// Returns every rejected line (or only the first one with `stop_on_first_error`).
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn check_source_with_config(source: &str, config: CheckConfig) -> Result<Report, Vec<SyntaxError>> {
    let offsets = byte_offsets(source);
    let mut parser = Parser::new(source);
    let mut lines = Vec::new();
    let mut errors = Vec::new();
    let mut number = 0;

    parser.advance();
    while !parser.is_end_of_input() {
        number += 1;
        let start = offsets[parser.offset()];
        let outcome = classify_line(&mut parser, &config);
        // Every branch of `classify_line` leaves the cursor on the line terminator.
        let span = Span::new(start, offsets[parser.offset()]);

        match outcome {
            Ok(kind) => lines.push(Line { number, kind, span }),
            Err(kind) => {
                let text = &source[span.start..span.end];
                tracing::debug!(line = number, reason = %kind, "rejected line");
                errors.push(SyntaxError::new(kind, number, text, span));
                if config.stop_on_first_error {
                    break;
                }
            }
        }

        parser.advance();
    }

    if errors.is_empty() {
        Ok(Report { lines })
    } else {
        Err(errors)
    }
}

/// Return `true` if every line of `source` is accepted with default settings
pub fn is_valid(source: &str) -> bool {
    check_source(source).is_ok()
}

/// Render a report as one row per line: number, kind, and the line text
pub fn render_lines(report: &Report, source: &str) -> String {
    let mut out = String::new();
    for line in &report.lines {
        let text = source.get(line.span.start..line.span.end).unwrap_or("");
        out.push_str(&format!("{:>4} {:<9} |{}\n", line.number, line.kind, text));
    }
    out
}

fn classify_line(parser: &mut Parser, config: &CheckConfig) -> Result<LineKind, SyntaxErrorKind> {
    if parser.statement() {
        return Ok(LineKind::Statement);
    }

    let mut indent = 0usize;
    while parser.is_space() {
        indent += 1;
        parser.advance();
    }

    if parser.comment() {
        if indent > 0 && !config.allow_indented_comments {
            return Err(SyntaxErrorKind::IndentedComment);
        }
        return Ok(LineKind::Comment);
    }

    if parser.is_line_terminator() {
        if indent > 0 && !config.allow_whitespace_lines {
            return Err(SyntaxErrorKind::WhitespaceLine);
        }
        return Ok(LineKind::Blank);
    }

    // Synchronize on the terminator so the next line starts clean.
    while !parser.is_line_terminator() {
        parser.advance();
    }
    Err(SyntaxErrorKind::InvalidStatement)
}

/// Byte offset of every char index, plus one entry for the end of the source.
fn byte_offsets(source: &str) -> Vec<usize> {
    source
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(source.len()))
        .collect()
}
