//! Integration tests for the docmark CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const DOCUMENT: &str = r#"{"type": "root", "children": [
    {"type": "element", "tagName": "h1", "children": [{"type": "text", "value": "Title"}]},
    {"type": "element", "tagName": "p", "children": [
        {"type": "text", "value": "Some "},
        {"type": "element", "tagName": "del", "children": [{"type": "text", "value": "old"}]}
    ]}
]}"#;

const UNSUPPORTED: &str = r#"{"type": "root", "children": [
    {"type": "element", "tagName": "h2", "children": [{"type": "text", "value": "Summary"}]},
    {"type": "text", "value": "\n"},
    {"type": "element", "tagName": "blink", "children": [{"type": "text", "value": "flashing text."}]}
]}"#;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_docmark"))
}

fn write_input(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("input.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_markdown_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, DOCUMENT);
    let output = temp_dir.path().join("output.md");

    cli()
        .arg("md")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Converted"))
        .stdout(predicate::str::contains("to MD"))
        .stdout(predicate::str::contains("✓ Output saved to"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "# Title\n\nSome ~~old~~");
}

#[test]
fn test_html_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, DOCUMENT);
    let output = temp_dir.path().join("output.html");

    cli()
        .arg("HTML")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("to HTML"));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<h1>Title</h1><p>Some <del>old</del></p>"
    );
}

#[test]
fn test_setext_headings() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, DOCUMENT);
    let output = temp_dir.path().join("output.md");

    cli()
        .arg("md")
        .arg(&input)
        .arg(&output)
        .arg("--setext")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Title\n=====\n\nSome ~~old~~"
    );
}

#[test]
fn test_fallback_still_writes_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, UNSUPPORTED);
    let output = temp_dir.path().join("output.md");

    cli()
        .arg("md")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("structural conversion failed"));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "## Summary\n\nflashing text."
    );
}

#[test]
fn test_plain_text_fallback() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, UNSUPPORTED);
    let output = temp_dir.path().join("output.md");

    cli()
        .args(["md", "--fallback", "plain-text"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "# Summary\nflashing text."
    );
}

#[test]
fn test_unsupported_format() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, DOCUMENT);
    let output = temp_dir.path().join("output.pdf");

    cli()
        .arg("pdf")
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error during conversion: Unsupported format: pdf",
        ));

    assert!(!output.exists());
}

#[test]
fn test_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "{\"type\": ");
    let output = temp_dir.path().join("output.md");

    cli()
        .arg("md")
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error during conversion: Invalid input"));

    assert!(!output.exists());
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("output.md");

    cli()
        .arg("md")
        .arg(temp_dir.path().join("missing.json"))
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));

    assert!(!output.exists());
}
