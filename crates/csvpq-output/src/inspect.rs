//! Read-only Parquet inspection for the viewer.

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::{DataFrame, ParquetReader, SerReader};

use crate::error::{OutputError, Result};

/// Summary of one Parquet file: shape, schema, and a bounded preview.
#[derive(Debug)]
pub struct ParquetSummary {
    pub path: PathBuf,
    /// Total row count in the file.
    pub rows: usize,
    /// Column count.
    pub columns: usize,
    /// Estimated in-memory size of the decoded data, in bytes.
    pub estimated_bytes: usize,
    /// Column name and dtype, in file order.
    pub schema: Vec<(String, String)>,
    /// First `preview_rows` rows.
    pub preview: DataFrame,
}

/// Inspect a Parquet file without mutating it.
pub fn inspect_parquet(path: &Path, preview_rows: usize) -> Result<ParquetSummary> {
    if !path.is_file() {
        return Err(OutputError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| OutputError::ParquetRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let df = ParquetReader::new(file)
        .finish()
        .map_err(|e| OutputError::ParquetRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let schema = df
        .schema()
        .iter()
        .map(|(name, dtype)| (name.to_string(), dtype.to_string()))
        .collect();

    Ok(ParquetSummary {
        path: path.to_path_buf(),
        rows: df.height(),
        columns: df.width(),
        estimated_bytes: df.estimated_size(),
        schema,
        preview: df.head(Some(preview_rows)),
    })
}
