//! Integration tests for the commitpilot binary.
//!
//! These exercise argument parsing and the exit status policy.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for running commitpilot.
fn commitpilot() -> Command {
    Command::cargo_bin("commitpilot").unwrap()
}

#[test]
fn version_flag_works() {
    commitpilot()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("commitpilot"));
}

#[test]
fn help_flag_works() {
    commitpilot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--cwd"))
        .stdout(predicate::str::contains("conventional commit"));
}

#[test]
fn commit_content_flags_are_rejected() {
    commitpilot().args(["--message", "fix: typo"]).assert().failure();
}

#[test]
fn missing_git_exits_with_one() {
    let dir = TempDir::new().unwrap();
    commitpilot()
        .current_dir(dir.path())
        .env("PATH", dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("git was not found"));
}

#[test]
fn outside_repository_exits_zero_with_diagnostic() {
    let dir = TempDir::new().unwrap();
    commitpilot()
        .arg("--cwd")
        .arg(dir.path())
        .env("COMMITPILOT_CONFIG", dir.path().join("none.toml"))
        .assert()
        .success()
        .stderr(predicate::str::contains("not a git repository"));
}
