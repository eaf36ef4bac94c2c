//! Tests for chunk planning.

use std::fs;
use std::path::PathBuf;

use csvpq_ingest::{IngestError, SourceFile, plan_chunks};
use polars::prelude::DataType;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn rows_per_chunk_matches_average_row_size() {
    let dir = TempDir::new().expect("temp dir");
    // Every data row is exactly 8 bytes ("1000,20\n").
    let mut contents = String::from("id,val\n");
    for i in 0..100 {
        contents.push_str(&format!("{:04},{:02}\n", 1000 + i, 20 + i % 70));
    }
    let path = write_csv(&dir, "even.csv", &contents);

    let source = SourceFile::open(&path).expect("open source");
    let plan = plan_chunks(&source, 80.0).expect("plan");

    assert!((plan.avg_row_bytes - 8.0).abs() < f64::EPSILON);
    assert_eq!(plan.rows_per_chunk, 10);
    assert_eq!(plan.estimated_chunks, 10);
}

#[test]
fn tiny_budget_still_yields_one_row_per_chunk() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "tiny.csv", "a,b\nlong-value,other-long-value\n");

    let source = SourceFile::open(&path).expect("open source");
    let plan = plan_chunks(&source, 1.0).expect("plan");

    assert_eq!(plan.rows_per_chunk, 1);
}

#[test]
fn header_only_file_falls_back_to_one_row() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "headers.csv", "a,b,c\n");

    let source = SourceFile::open(&path).expect("open source");
    let plan = plan_chunks(&source, 1024.0).expect("plan");

    assert_eq!(plan.rows_per_chunk, 1);
    assert_eq!(plan.estimated_chunks, 0);
}

#[test]
fn empty_file_fails_estimation() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "void.csv", "");

    let err = SourceFile::open(&path).unwrap_err();
    assert!(matches!(err, IngestError::Estimation { .. }));
}

#[test]
fn schema_is_inferred_from_sample() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "typed.csv", "id,name,score\n1,alice,1.5\n2,bob,2.5\n");

    let source = SourceFile::open(&path).expect("open source");
    let plan = plan_chunks(&source, 1024.0 * 1024.0).expect("plan");

    assert_eq!(plan.schema.len(), 3);
    assert_eq!(plan.schema.get("id"), Some(&DataType::Int64));
    assert_eq!(plan.schema.get("name"), Some(&DataType::String));
    assert_eq!(plan.schema.get("score"), Some(&DataType::Float64));
}
