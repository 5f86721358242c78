//! Tests for error handling, exit codes and suggestions.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn svcgen(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("svcgen").unwrap();
    cmd.current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env_remove("GH_TOKEN")
        .env_remove("GITHUB_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_argument_prints_usage() {
    let root = TempDir::new().unwrap();
    svcgen(root.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage: svcgen <path-to-service-folder>"))
        .stdout(predicate::str::contains("Example:"));
}

#[test]
fn test_missing_descriptor() {
    let root = TempDir::new().unwrap();
    let empty = root.path().join("empty");
    fs::create_dir(&empty).unwrap();

    svcgen(root.path())
        .arg(&empty)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error reading file"))
        .stderr(predicate::str::contains("source.yml"));
}

#[test]
fn test_invalid_yaml() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("source.yml"), "name: [unterminated\n").unwrap();

    svcgen(root.path())
        .arg(root.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error parsing YAML"));
}

#[test]
fn test_error_with_suggestions_unsupported_language() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join("source.yml"),
        "name: sample-svc\nmetadata:\n  programming_language: cobol\n",
    )
    .unwrap();

    svcgen(root.path())
        .arg(root.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unsupported programming language: cobol"))
        .stderr(predicate::str::contains("golang"))
        .stderr(predicate::str::contains("nodejs"));

    assert!(!root.path().join("sample-svc").exists());
}

#[test]
fn test_missing_config_file() {
    let root = TempDir::new().unwrap();
    svcgen(root.path())
        .args(["--config", "does-not-exist.toml", "--show-config"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_bad_flag_exits_two() {
    let root = TempDir::new().unwrap();
    svcgen(root.path())
        .arg("--no-such-flag")
        .assert()
        .failure()
        .code(2);
}
