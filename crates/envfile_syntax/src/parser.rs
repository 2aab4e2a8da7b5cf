//! Recognizer for env file statements.
//!
//! A single-pass, backtracking recursive-descent recognizer over a fixed symbol set. It holds the whole input and
//! one movable cursor, and answers whether the text at the cursor is a key, a value, a comment, an assignment, or
//! a full statement.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use envfile_syntax::parser::Parser;
//!
//! let mut p = Parser::new("FOO=bar # trailing comment\n");
//! p.advance();
//! assert!(p.statement());
//! assert_eq!(p.symbol(), Some('\n'));
//! ```

use envfile_core::lang::markers::{ASSIGN, COMMENT, NEWLINE, QUOTE, SPACE};
use envfile_core::lang::symbols;

// NOTE: This module is split across multiple files using `include!` to keep all recognizer
// methods in the same Rust module (private cursor helpers stay private) while keeping each
// layer of the grammar in its own file.

include!("parser/core.rs");
include!("parser/navigation.rs");
include!("parser/classify.rs");
include!("parser/grammar.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
