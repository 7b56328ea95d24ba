//! End-to-end tests for the recx binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_receipt(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn parse_prints_json_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_receipt(
        dir.path(),
        "receipt.txt",
        "SUPERFRESH MART\nDate: 15/03/2024\nTOTAL: ₹500.00\n",
    );

    Command::cargo_bin("recx")
        .unwrap()
        .args(["parse", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUPERFRESH MART"))
        .stdout(predicate::str::contains("500"));
}

#[test]
fn parse_text_format_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_receipt(
        dir.path(),
        "receipt.txt",
        "SUPERFRESH MART\nTOTAL: ₹500.00\n",
    );

    Command::cargo_bin("recx")
        .unwrap()
        .args(["parse", input.to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merchant: SUPERFRESH MART"));
}

#[test]
fn parse_missing_file_fails() {
    Command::cargo_bin("recx")
        .unwrap()
        .args(["parse", "/definitely/not/here.txt"])
        .assert()
        .failure();
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    write_receipt(dir.path(), "a.txt", "ACME TRADERS\nTOTAL: ₹100.00\n");
    write_receipt(dir.path(), "b.txt", "CITY STORES\nTOTAL: ₹200.00\n");
    let out_dir = dir.path().join("out");

    let pattern = format!("{}/*.txt", dir.path().display());
    Command::cargo_bin("recx")
        .unwrap()
        .args([
            "batch",
            &pattern,
            "--output-dir",
            out_dir.to_str().unwrap(),
            "--summary",
        ])
        .assert()
        .success();

    assert!(out_dir.join("a.json").exists());
    assert!(out_dir.join("b.json").exists());

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("ACME TRADERS"));
    assert!(summary.contains("CITY STORES"));
}

#[test]
fn batch_without_matches_fails() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = format!("{}/*.txt", dir.path().display());

    Command::cargo_bin("recx")
        .unwrap()
        .args(["batch", &pattern])
        .assert()
        .failure();
}
