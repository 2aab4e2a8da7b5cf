//! Provide the canonical symbol vocabulary of the env file format.
//!
//! It answers two questions for the recognizer and any tooling built on top of it:
//! - which literal characters may appear in keys and unquoted values, and
//! - which characters carry structure (comment marker, assignment operator, quote, space, newline).
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global mutable state, and no recognizer types.
//! - Every table is `const`; the permitted set is closed and never changes at runtime.

pub mod lang;

pub use lang::markers;
pub use lang::symbols::{self, is_allowed};
