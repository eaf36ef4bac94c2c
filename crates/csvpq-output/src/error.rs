//! Error types for Parquet output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing or inspecting Parquet files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Input file or directory not found.
    #[error("input not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Output directory could not be created.
    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target file already exists and overwrite was not requested.
    #[error("output file already exists: {path} (use --overwrite to replace it)")]
    OutputExists { path: PathBuf },

    /// Failed to read the CSV input for conversion.
    #[error("failed to read CSV {path}: {message}")]
    CsvRead { path: PathBuf, message: String },

    /// Chunk or file could not be serialized to Parquet.
    #[error("failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Failed to read a Parquet file for inspection.
    #[error("failed to read parquet {path}: {message}")]
    ParquetRead { path: PathBuf, message: String },

    /// Failed to read directory entries during batch conversion.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = OutputError::OutputExists {
            path: PathBuf::from("/out/a_part000.parquet"),
        };
        assert_eq!(
            err.to_string(),
            "output file already exists: /out/a_part000.parquet (use --overwrite to replace it)"
        );
    }
}
