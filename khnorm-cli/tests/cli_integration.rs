//! Integration tests for the khnorm CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_normalize_file() {
    let mut cmd = Command::cargo_bin("khnorm").unwrap();
    cmd.arg(fixture_path("khmer-sample.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ស្ត្រី"))
        .stdout(predicate::str::contains("hello world"))
        .stdout(predicate::str::contains("ក្មេ"));
}

#[test]
fn test_line_order_preserved() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("lines.txt");
    fs::write(&input, "first ស្រ្ត\nsecond កេ្ម\nthird\n").unwrap();

    let mut cmd = Command::cargo_bin("khnorm").unwrap();
    cmd.arg(&input);

    cmd.assert()
        .success()
        .stdout("first ស្ត្រ\nsecond ក្មេ\nthird\n");
}

#[test]
fn test_latin_text_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("latin.txt");
    fs::write(&input, "plain ascii text\nwith two lines\n").unwrap();

    let mut cmd = Command::cargo_bin("khnorm").unwrap();
    cmd.arg(&input);

    cmd.assert()
        .success()
        .stdout("plain ascii text\nwith two lines\n");
}

#[test]
fn test_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("empty.txt");
    fs::write(&input, "").unwrap();

    let mut cmd = Command::cargo_bin("khnorm").unwrap();
    cmd.arg(&input);

    cmd.assert().success().stdout("");
}

#[test]
fn test_missing_file() {
    let mut cmd = Command::cargo_bin("khnorm").unwrap();
    cmd.arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("khnorm").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Canonicalize Khmer text"));
}
