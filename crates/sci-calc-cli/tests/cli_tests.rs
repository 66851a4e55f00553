//! Smoke tests for the scicalc binary
//!
//! Only the headless paths are exercised here; the window needs a real
//! terminal.

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for the scicalc binary
fn scicalc() -> Command {
    let mut cmd = Command::cargo_bin("scicalc").expect("scicalc binary should exist");
    cmd.env_remove("SCICALC_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    scicalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    scicalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_eval_help() {
    scicalc()
        .args(["eval", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--radians"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_eval_requires_expression() {
    scicalc().arg("eval").assert().failure();
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn test_eval_documented_examples() {
    scicalc()
        .args(["--color", "never", "eval", "2+2", "sin(30)", "50%"])
        .assert()
        .success()
        .stdout("4\n0.5\n0.5\n");
}

#[test]
fn test_eval_radians() {
    scicalc()
        .args(["--color", "never", "eval", "--radians", "sin(30)"])
        .assert()
        .success()
        .stdout("-0.988031624093\n");
}

#[test]
fn test_eval_malformed_fails() {
    scicalc()
        .args(["--color", "never", "eval", "1+1", "2+*3"])
        .assert()
        .failure()
        .stdout("2\nError\n")
        .stderr(predicate::str::contains("1 of 2 expression(s) failed"));
}

#[test]
fn test_eval_answer_chaining() {
    scicalc()
        .args(["--color", "never", "eval", "6*7", "Ans/2", "sqrt(Ans+4)"])
        .assert()
        .success()
        .stdout("42\n21\n5\n");
}

#[test]
fn test_eval_negative_after_separator() {
    scicalc()
        .args(["--color", "never", "eval", "--", "-2^2"])
        .assert()
        .success()
        .stdout("-4\n");
}

#[test]
fn test_eval_percent_divides_preceding_term() {
    scicalc()
        .args(["--color", "never", "eval", "100/50%", "2**3%"])
        .assert()
        .success()
        .stdout("0.02\n0.08\n");
}

#[test]
fn test_eval_deep_nesting_is_error_not_crash() {
    let nested = format!("{}1{}", "(".repeat(30_000), ")".repeat(30_000));
    scicalc()
        .args(["--color", "never", "eval"])
        .arg(&nested)
        .assert()
        .code(1)
        .stdout("Error\n");
}

#[test]
fn test_eval_json() {
    let output = scicalc()
        .args(["eval", "--json", "1/4", "x", "pi"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let entries: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["display"], "0.25");
    assert_eq!(entries[1]["display"], "3.14159265359");
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_eval_logs_to_file() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("scicalc.log");

    scicalc()
        .args(["-v", "--color", "never", "--log-file"])
        .arg(&log)
        .args(["eval", "1+1"])
        .assert()
        .success()
        .stdout("2\n");

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("evaluated"));
}

#[test]
fn test_eval_verbose_logs_to_stderr() {
    scicalc()
        .args(["-v", "--color", "never", "eval", "1+1"])
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::contains("evaluated"));
}

#[test]
fn test_eval_env_filter_override() {
    scicalc()
        .env("SCICALC_LOG", "off")
        .args(["-vv", "eval", "1+1"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_eval_quiet_is_silent_on_stderr() {
    scicalc()
        .args(["-q", "eval", "3*3"])
        .assert()
        .success()
        .stdout(predicate::str::contains('9'))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_file_in_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("missing").join("scicalc.log");

    scicalc()
        .arg("--log-file")
        .arg(&log)
        .args(["eval", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
