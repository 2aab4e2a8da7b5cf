//! Integration tests for the env file checker

use std::fs;
use std::path::{Path, PathBuf};

use envfile::{CheckConfig, LineKind, SyntaxErrorKind, check_source, check_source_with_config, is_statement};

/// Collect every `.env` fixture in a directory
fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map(|e| e == "env").unwrap_or(false))
        .collect();
    paths.sort();
    paths
}

/// Test that all valid fixtures are accepted
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("valid");
    assert!(!paths.is_empty());

    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        let result = check_source(&source);
        assert!(
            result.is_ok(),
            "Expected {} to be accepted, got errors: {:?}",
            path.display(),
            result.unwrap_err()
        );
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("invalid");
    assert!(!paths.is_empty());

    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        assert!(
            check_source(&source).is_err(),
            "Expected {} to be rejected, but it was accepted",
            path.display()
        );
    }
}

#[test]
fn test_layout_fixture_fails_under_strict() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/valid/layout.env");
    let source = fs::read_to_string(path).unwrap();
    let errs = check_source_with_config(&source, CheckConfig::strict()).unwrap_err();
    let kinds: Vec<_> = errs.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![SyntaxErrorKind::IndentedComment, SyntaxErrorKind::WhitespaceLine]);
}

#[test]
fn test_database_fixture_classification() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/valid/database.env");
    let source = fs::read_to_string(path).unwrap();
    let report = check_source(&source).unwrap();
    assert_eq!(report.statements(), 5);
    assert_eq!(report.comments(), 2);
    assert_eq!(report.blanks(), 1);
    assert_eq!(report.lines[0].kind, LineKind::Comment);
}

/// Recognizer behavior through the public entry point
mod statement_tests {
    use super::*;

    #[test]
    fn test_documented_scenarios() {
        assert!(is_statement("FOO=bar\n"));
        assert!(is_statement("FOO=bar # comment\n"));
        assert!(is_statement("FOO=\"bar baz\"\n"));
        assert!(!is_statement("FOO=\n"));
        assert!(!is_statement("=bar\n"));
        assert!(!is_statement("  FOO=bar\n"));
    }

    #[test]
    fn test_space_operator() {
        assert!(is_statement("FOO bar\n"));
        assert!(!is_statement("FOO = bar\n"));
    }

    #[test]
    fn test_only_first_line_is_considered() {
        assert!(is_statement("A=1\n=garbage\n"));
    }

    #[test]
    fn test_non_ascii_value_is_rejected() {
        assert!(!is_statement("NAME=héllo\n"));
    }
}

/// CLI argument handling through the library surface
mod cli_tests {
    use clap::Parser as _;
    use envfile::cli::{Cli, Command};

    #[test]
    fn test_check_subcommand() {
        let cli = Cli::try_parse_from(["envfile", "check", "--strict", "a.env"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Check { strict: true, .. })));
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["envfile", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
