#![forbid(unsafe_code)]
//! envfile: a line-oriented checker for env files
//!
//! The recognizer lives in `envfile_syntax` (a backtracking cursor over the source's chars) and
//! the symbol registry in `envfile_core`. This crate adds whole-file checking, configuration and
//! the `envfile` CLI.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod document;
pub mod version;

pub use envfile_syntax::diagnostics;
pub use envfile_syntax::parser;
pub use envfile_syntax::span;

pub use document::{CheckConfig, Line, LineKind, Report, check_source, check_source_with_config, is_valid, render_lines};
pub use envfile_syntax::{Parser, Span, SyntaxError, SyntaxErrorKind};
pub use parser::is_statement;
