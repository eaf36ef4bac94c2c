//! Tests for single-file and directory conversion.

use std::fs;

use csvpq_output::{OutputError, convert_dir, convert_file, inspect_parquet};
use tempfile::TempDir;

#[test]
fn convert_file_defaults_to_sibling_parquet() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("data.csv");
    fs::write(&input, "id,name\n1,alice\n2,bob\n").expect("write");

    let output = convert_file(&input, None).expect("convert");
    assert_eq!(output, dir.path().join("data.parquet"));

    let summary = inspect_parquet(&output, 5).expect("inspect");
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.columns, 2);
}

#[test]
fn convert_file_creates_parent_directories() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("data.csv");
    fs::write(&input, "a\n1\n").expect("write");
    let output = dir.path().join("nested/deep/out.parquet");

    let written = convert_file(&input, Some(&output)).expect("convert");
    assert_eq!(written, output);
    assert!(output.is_file());
}

#[test]
fn convert_file_missing_input() {
    let dir = TempDir::new().expect("temp dir");
    let err = convert_file(&dir.path().join("absent.csv"), None).unwrap_err();
    assert!(matches!(err, OutputError::InputNotFound { .. }));
}

#[test]
fn convert_dir_mirrors_structure() {
    let dir = TempDir::new().expect("temp dir");
    let input_root = dir.path().join("in");
    let output_root = dir.path().join("out");
    fs::create_dir_all(input_root.join("sub")).expect("mkdir");
    fs::write(input_root.join("a.csv"), "x\n1\n").expect("write");
    fs::write(input_root.join("sub/b.csv"), "y\n2\n").expect("write");

    let outcome = convert_dir(&input_root, Some(&output_root)).expect("convert dir");
    assert!(outcome.failures.is_empty());
    assert_eq!(
        outcome.files,
        vec![
            output_root.join("a.parquet"),
            output_root.join("sub/b.parquet"),
        ]
    );
    assert!(output_root.join("sub/b.parquet").is_file());
}

#[test]
fn convert_dir_continues_past_bad_files() {
    let dir = TempDir::new().expect("temp dir");
    let input_root = dir.path().join("in");
    fs::create_dir_all(&input_root).expect("mkdir");
    fs::write(input_root.join("good.csv"), "x\n1\n").expect("write");
    // Unparseable as CSV with a consistent schema: ragged quoting.
    fs::write(input_root.join("bad.csv"), "x\n\"unterminated\n").expect("write");

    let outcome = convert_dir(&input_root, Some(&dir.path().join("out"))).expect("convert dir");
    assert_eq!(outcome.files.len() + outcome.failures.len(), 2);
    assert!(
        outcome
            .files
            .iter()
            .any(|p| p.file_name().unwrap() == "good.parquet")
    );
}
