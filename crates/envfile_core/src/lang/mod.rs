//! Registry-first vocabulary for the env file format.
//!
//! - [`symbols`]: the closed set of permitted literal characters.
//! - [`markers`]: the structural characters the grammar reacts to.
//!
//! The two registries are disjoint: no structural marker is a permitted literal character. The guardrail tests
//! under `tests/` enforce that.

pub mod markers;
pub mod symbols;
