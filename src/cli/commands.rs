//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use miette::NamedSource;
use thiserror::Error;

use crate::document::{CheckConfig, check_source, check_source_with_config, render_lines};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (16 MiB)
pub const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Why a source file could not be loaded.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("'{path}' is too large ({size} bytes, max {max} bytes)")]
    TooLarge { path: PathBuf, size: u64, max: u64 },
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        CliError::failure(err.to_string())
    }
}

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error or invalid UTF-8)
/// - The file exceeds `MAX_SOURCE_SIZE`
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let io_err = |source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(io_err)?;
    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(SourceError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_SOURCE_SIZE,
        });
    }

    fs::read_to_string(path).map_err(io_err)
}

/// Check env files and report every rejected line.
///
/// Unreadable files are reported and counted as failures. With `stop_on_first_error`
/// set, checking also stops after the first file that fails.
#[tracing::instrument(skip_all, fields(files = paths.len()))]
pub fn check_paths(paths: &[PathBuf], config: CheckConfig, quiet: bool) -> CliResult<ExitCode> {
    let mut failed = 0usize;

    for path in paths {
        let source = match read_source(path) {
            Ok(source) => source,
            Err(err) => {
                tracing::warn!(path = %path.display(), "skipping unreadable file");
                eprintln!("Error: {}", err);
                failed += 1;
                if config.stop_on_first_error {
                    break;
                }
                continue;
            }
        };

        match check_source_with_config(&source, config.clone()) {
            Ok(report) => {
                if !quiet {
                    println!(
                        "✓ {}: {} statement(s), {} comment(s), {} blank line(s)",
                        path.display(),
                        report.statements(),
                        report.comments(),
                        report.blanks()
                    );
                }
            }
            Err(errors) => {
                let name = path.display().to_string();
                for err in errors {
                    let report = miette::Report::new(err).with_source_code(NamedSource::new(&name, source.clone()));
                    eprintln!("{:?}", report);
                }
                failed += 1;
                if config.stop_on_first_error {
                    break;
                }
            }
        }
    }

    if failed > 0 {
        return Err(CliError::failure(format!("\n{} of {} file(s) failed", failed, paths.len())));
    }

    Ok(ExitCode::SUCCESS)
}

/// Print the per-line classification of a file (debug).
pub fn print_lines(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;

    match check_source(&source) {
        Ok(report) => {
            print!("{}", render_lines(&report, &source));
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            let mut msg = String::new();
            for err in &errors {
                msg.push_str(&format!("{}: {}\n", path.display(), err));
            }
            Err(CliError::failure(msg.trim_end()))
        }
    }
}
