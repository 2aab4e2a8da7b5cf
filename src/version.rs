//! Checker version information.
//!
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time, so the CLI
//! `--version` output and anything else that reports a version agree.

/// The envfile version string (for example, `0.1.0`).
pub const ENVFILE_VERSION: &str = env!("CARGO_PKG_VERSION");
