//! Whole-file CSV to Parquet conversion, single file or directory tree.

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvReadOptions, ParquetWriter, SerReader};
use tracing::{info, warn};

use crate::discovery::list_csv_files;
use crate::error::{OutputError, Result};

/// Result of a batch conversion over a directory tree.
#[derive(Debug, Default)]
pub struct ConvertOutcome {
    /// Parquet files written, in input order.
    pub files: Vec<PathBuf>,
    /// Inputs that failed, with the reason. Batch conversion continues
    /// past individual failures.
    pub failures: Vec<(PathBuf, OutputError)>,
}

/// Convert a single CSV file to Parquet.
///
/// Column types are inferred by polars over the whole file. When `output`
/// is `None`, the Parquet file lands next to the input with the extension
/// swapped. Parent directories are created as needed.
pub fn convert_file(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    if !input.is_file() {
        return Err(OutputError::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("parquet"),
    };
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| OutputError::OutputDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(input.to_path_buf()))
        .map_err(|e| OutputError::CsvRead {
            path: input.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| OutputError::CsvRead {
            path: input.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut file = File::create(&output).map_err(|e| OutputError::Encode {
        path: output.clone(),
        message: e.to_string(),
    })?;
    ParquetWriter::new(&mut file)
        .finish(&mut df)
        .map_err(|e| OutputError::Encode {
            path: output.clone(),
            message: e.to_string(),
        })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        "converted"
    );
    Ok(output)
}

/// Convert every CSV file under `input_dir`, mirroring the directory
/// structure into `output_dir` (or converting in place when `None`).
///
/// Individual file failures are collected, not fatal for the batch.
pub fn convert_dir(input_dir: &Path, output_dir: Option<&Path>) -> Result<ConvertOutcome> {
    let csv_files = list_csv_files(input_dir)?;
    let mut outcome = ConvertOutcome::default();

    for input in csv_files {
        let output = match output_dir {
            Some(out_root) => {
                let relative = input
                    .strip_prefix(input_dir)
                    .unwrap_or(input.as_path())
                    .with_extension("parquet");
                Some(out_root.join(relative))
            }
            None => None,
        };
        match convert_file(&input, output.as_deref()) {
            Ok(path) => outcome.files.push(path),
            Err(error) => {
                warn!(input = %input.display(), %error, "conversion failed");
                outcome.failures.push((input, error));
            }
        }
    }
    Ok(outcome)
}
