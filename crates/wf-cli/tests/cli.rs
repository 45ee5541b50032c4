//! CLI command integration tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wf_cmd() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("wf").unwrap()
}

#[test]
fn tokenize_inline_text() {
    wf_cmd()
        .args(["tokenize", "A cat sat. A cat ran."])
        .assert()
        .success()
        .stdout(predicate::str::contains("cat"))
        .stdout(predicate::str::contains("ran"))
        .stderr(predicate::str::contains("6 tokens"));
}

#[test]
fn tokenize_from_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("source.txt");
    std::fs::write(&input, "Don't stop believing!").unwrap();

    wf_cmd()
        .arg("tokenize")
        .arg("--file")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("don't"))
        .stdout(predicate::str::contains("believing"));
}

#[test]
fn tokenize_without_input_fails() {
    wf_cmd()
        .arg("tokenize")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no source text"));
}

#[test]
fn locate_reports_indices_and_heights() {
    wf_cmd()
        .args(["locate", "cat", "A cat sat. A cat ran."])
        .assert()
        .success()
        .stdout(predicate::str::contains("index    1"))
        .stdout(predicate::str::contains("index    4"));
}

#[test]
fn locate_absent_term_is_not_an_error() {
    wf_cmd()
        .args(["locate", "dog", "a cat sat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no occurrences of 'dog'"));
}

#[test]
fn run_prints_category_summary() {
    wf_cmd()
        .args([
            "run", "cat", "sat", "dog", "--text", "a cat sat a cat ran", "--markers", "4",
            "--frames", "10", "--seed", "42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens:    6"))
        .stdout(predicate::str::contains("falling:   8 markers ('cat')"))
        .stdout(predicate::str::contains("pulsing:   4 markers ('sat')"))
        .stdout(predicate::str::contains("floating:  0 markers ('dog')"));
}

#[test]
fn run_json_snapshot_parses() {
    let output = wf_cmd()
        .args([
            "run", "cat", "cat", "cat", "--text", "cat cat", "--markers", "2", "--frames",
            "5", "--seed", "7", "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = snapshot["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 3);
    for group in groups {
        assert_eq!(group["markers"].as_array().unwrap().len(), 4);
        assert_eq!(group["visible"], serde_json::Value::Bool(true));
    }
}

#[test]
fn run_rejects_missing_file() {
    wf_cmd()
        .args(["run", "a", "b", "c", "--file", "/nonexistent/source.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn run_with_empty_text_places_nothing() {
    wf_cmd()
        .args(["run", "a", "b", "c", "--text", "", "--frames", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens:    0"))
        .stdout(predicate::str::contains("falling:   0 markers"));
}
