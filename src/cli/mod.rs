//! CLI module for the env file checker
//!
//! ## Commands
//!
//! - `<file>` - Check a single file (default action)
//! - `check <path>...` - Check one or more files
//! - `--lines <file>` - Print the per-line classification (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::document::CheckConfig;
use crate::version::ENVFILE_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Validate env files line by line
#[derive(Parser, Debug)]
#[command(name = "envfile")]
#[command(version = ENVFILE_VERSION)]
#[command(about = "Validate env files line by line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print the classification of every line (debug)
    #[arg(long = "lines", value_name = "FILE", conflicts_with = "file")]
    pub lines_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check one or more env files
    Check {
        /// Files to check
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
        /// Stop on first rejected line
        #[arg(short = 'x', long = "exitfirst")]
        stop_on_fail: bool,
        /// Reject indented comments and whitespace-only lines
        #[arg(long)]
        strict: bool,
        /// Only report failures
        #[arg(short, long)]
        quiet: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    if let Some(file) = cli.lines_file {
        return commands::print_lines(&file);
    }

    match cli.command {
        Some(Command::Check {
            paths,
            stop_on_fail,
            strict,
            quiet,
        }) => {
            let config = check_config(strict, stop_on_fail);
            commands::check_paths(&paths, config, quiet)
        }
        None => {
            if let Some(file) = cli.file {
                commands::check_paths(&[file], CheckConfig::default(), false)
            } else {
                Err(CliError::failure("Error: no file given (try `envfile --help`)"))
            }
        }
    }
}

/// Map `check` flags onto a [`CheckConfig`].
fn check_config(strict: bool, stop_on_fail: bool) -> CheckConfig {
    let base = if strict { CheckConfig::strict() } else { CheckConfig::new() };
    base.with_stop_on_first_error(stop_on_fail)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default_file() {
        let cli = Cli::try_parse_from(["envfile", ".env"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from(".env")));
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["envfile", "check", "a.env", "b.env"]).unwrap();
        if let Some(Command::Check { paths, strict, .. }) = cli.command {
            assert_eq!(paths.len(), 2);
            assert!(!strict);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_check_flags() {
        let cli = Cli::try_parse_from(["envfile", "check", "-x", "--strict", "-q", ".env"]).unwrap();
        if let Some(Command::Check {
            stop_on_fail,
            strict,
            quiet,
            ..
        }) = cli.command
        {
            assert!(stop_on_fail);
            assert!(strict);
            assert!(quiet);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_check_requires_a_path() {
        assert!(Cli::try_parse_from(["envfile", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_lines_flag() {
        let cli = Cli::try_parse_from(["envfile", "--lines", ".env"]).unwrap();
        assert_eq!(cli.lines_file, Some(PathBuf::from(".env")));
    }

    #[test]
    fn test_check_config_mapping() {
        assert_eq!(check_config(false, false), CheckConfig::default());
        assert_eq!(check_config(true, false), CheckConfig::strict());
        assert!(check_config(false, true).stop_on_first_error);
    }

    #[test]
    fn test_execute_without_file_fails() {
        let cli = Cli::try_parse_from(["envfile"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
