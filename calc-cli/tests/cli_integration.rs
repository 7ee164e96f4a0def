//! CLI integration tests for calc

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command pointed at a config path inside `dir`, so the user's own
/// config never leaks into a test
fn calc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("calc").unwrap();
    cmd.env("CALC_CONFIG", dir.path().join("config.toml"))
        .env_remove("CALC_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    calc(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXIT CODES"));
}

#[test]
fn test_simple_addition() {
    let dir = TempDir::new().unwrap();
    calc(&dir)
        .args(["5", "+", "3", "="])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_chained_operations_with_history() {
    let dir = TempDir::new().unwrap();
    calc(&dir)
        .args(["--history", "2", "+", "3", "x", "4", "="])
        .assert()
        .success()
        .stdout("20\n2 + 3 = 5\n5 × 4 = 20\n");
}

#[test]
fn test_empty_history_sentinel() {
    let dir = TempDir::new().unwrap();
    calc(&dir)
        .args(["--history", "7"])
        .assert()
        .success()
        .stdout("7\nno records\n");
}

#[test]
fn test_division_by_zero_exit_code() {
    let dir = TempDir::new().unwrap();
    calc(&dir)
        .args(["5", "/", "0", "="])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn test_missing_operand_exit_code() {
    let dir = TempDir::new().unwrap();
    calc(&dir)
        .args(["="])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing operand"));
}

#[test]
fn test_unknown_token_exit_code() {
    let dir = TempDir::new().unwrap();
    calc(&dir)
        .args(["5", "%", "2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unrecognised token '%'"));
}

#[test]
fn test_keep_going_continues_after_error() {
    let dir = TempDir::new().unwrap();
    calc(&dir)
        .args(["--keep-going", "1", "/", "0", "=", "4", "+", "4", "="])
        .assert()
        .success()
        .stdout("8\n")
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn test_tokens_from_stdin() {
    let dir = TempDir::new().unwrap();
    calc(&dir)
        .write_stdin("6 / 4 =\n")
        .assert()
        .success()
        .stdout("1.5\n");
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let output = calc(&dir)
        .args(["--format", "json", "2", "^", "10", "=", "+"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["display"], "0");
    assert_eq!(report["pending"], "1024 +");
    assert!(report["error"].is_null());
    assert_eq!(report["history"][0]["operator"], "^");
    assert_eq!(report["history"][0]["result"], 1024.0);
}

#[test]
fn test_json_output_reports_error() {
    let dir = TempDir::new().unwrap();
    let output = calc(&dir)
        .args(["--format", "json", "9", "/", "0", "="])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["error"], "Division by zero");
    assert_eq!(report["display"], "0");
}

#[test]
fn test_jsonl_output() {
    let dir = TempDir::new().unwrap();
    let output = calc(&dir)
        .args(["--format", "jsonl", "1", "+", "1", "=", "+", "1", "="])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let results: Vec<f64> = stdout
        .lines()
        .map(|line| {
            let entry: serde_json::Value = serde_json::from_str(line).unwrap();
            entry["result"].as_f64().unwrap()
        })
        .collect();
    assert_eq!(results, vec![2.0, 3.0]);
}

#[test]
fn test_jsonl_keeps_nan() {
    let dir = TempDir::new().unwrap();
    let output = calc(&dir)
        .args(["--format", "jsonl", "0", "-", "8", "=", "^", ".5", "="])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);

    let entry: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(entry["first"], -8.0);
    assert_eq!(entry["operator"], "^");
    assert_eq!(entry["second"], 0.5);
    assert_eq!(entry["result"], "NaN");

    let entry: libcalc::HistoryEntry = serde_json::from_str(lines[1]).unwrap();
    assert!(entry.result.is_nan());
}

#[test]
fn test_invalid_format_rejected() {
    let dir = TempDir::new().unwrap();
    calc(&dir)
        .args(["--format", "csv", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_config_file_applies() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[engine]\nmax_input_len = 3\nhistory_sentinel = \"empty\"\n",
    )
    .unwrap();

    calc(&dir)
        .args(["--history", "123456"])
        .assert()
        .success()
        .stdout("123\nempty\n");
}

#[test]
fn test_broken_config_exit_code() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[engine\n").unwrap();

    calc(&dir)
        .args(["1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}
