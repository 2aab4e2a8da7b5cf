//! Syntax frontend for env files: the cursor-based recognizer, spans, and syntax diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the checker, the CLI, and anything else that needs to
//! know whether a line is a valid `key=value` statement.
//!
//! ## Notes
//! - The recognizer only answers yes/no. It builds no tree and extracts no values.
//! - Symbol membership comes from `envfile_core::lang`.
//! - [`diagnostics::SyntaxError`] is produced by callers that drive the recognizer over whole files; the
//!   recognizer itself never reports errors.
//!
//! ## Examples
//! ```rust,no_run
//! use envfile_syntax::parser::{self, Parser};
//!
//! assert!(parser::is_statement("PORT=8080\n"));
//!
//! let mut p = Parser::new("# only a comment\n");
//! p.advance();
//! assert!(p.comment());
//! ```

pub mod diagnostics;
pub mod parser;
pub mod span;

pub use diagnostics::{SyntaxError, SyntaxErrorKind};
pub use parser::Parser;
pub use span::Span;
