//! Integration tests for the aba-parser CLI.
//!
//! These tests run the actual binary against ABA files and inspect its CSV output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given arguments and return stdout
fn run_parser(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("aba-parser").unwrap();
    let assert = cmd.args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Write the valid fixture with one line replaced
fn fixture_with_line(index: usize, line: &str) -> NamedTempFile {
    let content = fs::read_to_string(test_data_path("valid.aba")).unwrap();
    let mut lines: Vec<&str> = content.lines().collect();
    lines[index] = line;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(lines.join("\n").as_bytes()).unwrap();
    file
}

#[test]
fn test_output_has_correct_header() {
    let output = run_parser(&[&test_data_path("valid.aba")]);
    assert!(output.starts_with("batch,record,index,field,value"));
}

#[test]
fn test_outputs_every_field() {
    let output = run_parser(&[&test_data_path("valid.aba")]);
    let rows: Vec<&str> = output.lines().skip(1).collect();

    // 9 header fields, 4 transactions of 12 fields, 5 footer fields
    assert_eq!(rows.len(), 9 + 4 * 12 + 5);
    assert!(rows.contains(&"1,header,,bsb,123456"));
    assert!(rows.contains(&"1,transaction,1,amount,12.34"));
    assert!(rows.contains(&"1,transaction,3,amount,31235.13"));
    assert!(rows.contains(&"1,footer,,creditTotal,31292.47"));
    assert!(rows.contains(&"1,footer,,numberOfTransactions,4"));
}

#[test]
fn test_validate_accepts_valid_file() {
    let plain = run_parser(&[&test_data_path("valid.aba")]);
    let validated = run_parser(&[&test_data_path("valid.aba"), "--validate"]);
    assert_eq!(plain, validated);
}

#[test]
fn test_validate_rejects_count_mismatch() {
    let footer = "7999-999            000312924700031292470000000000                        000001";
    let file = fixture_with_line(5, footer);

    let mut cmd = Command::cargo_bin("aba-parser").unwrap();
    cmd.arg("--validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid batch, batch ended on line: 6, message: Total transactions count mismatch",
        ));
}

#[test]
fn test_invalid_file_without_validate_succeeds() {
    let footer = "7888-888            000312924700031292470000000000                        000004";
    let file = fixture_with_line(5, footer);

    let mut cmd = Command::cargo_bin("aba-parser").unwrap();
    cmd.arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1,footer,,bsb,888888"));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("aba-parser").unwrap();
    cmd.arg("nonexistent.aba")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("aba-parser").unwrap();
    cmd.arg("--validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}
