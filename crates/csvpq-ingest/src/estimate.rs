//! Chunk planning: bytes-per-row estimation and run-wide schema sampling.
//!
//! The estimator reads the header plus a bounded sample of rows on its own
//! cursor, so the streaming reader is never consumed by probing. Column
//! types for the whole run come from polars' CSV inference over the same
//! sample window; chunks are later encoded against that one schema so two
//! chunks of the same run can never disagree on a column type.

use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use polars::prelude::{CsvReadOptions, SchemaRef, SerReader};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::source::SourceFile;

/// Number of data rows sampled for row-size and schema estimation.
pub const SAMPLE_ROWS: usize = 1000;

/// Per-run chunking plan derived from one sampling pass.
#[derive(Debug, Clone)]
pub struct ChunkPlan {
    /// Data rows per chunk, always >= 1.
    pub rows_per_chunk: usize,
    /// Average bytes per data row observed in the sample.
    pub avg_row_bytes: f64,
    /// Expected number of chunks, from file size over target size.
    pub estimated_chunks: u64,
    /// Column types inferred from the sample, applied to every chunk.
    pub schema: SchemaRef,
}

/// Compute the chunk plan for `source` with a byte budget per chunk.
///
/// A header-only file falls back to one row per chunk instead of dividing
/// by zero; the streaming loop then produces zero chunks.
pub fn plan_chunks(source: &SourceFile, target_bytes: f64) -> Result<ChunkPlan> {
    let (avg_row_bytes, data_bytes) = sample_row_size(source)?;
    let schema = sample_schema(source.path())?;

    let rows_per_chunk = if avg_row_bytes > 0.0 {
        ((target_bytes / avg_row_bytes).floor() as usize).max(1)
    } else {
        1
    };
    let estimated_chunks = if data_bytes == 0 {
        0
    } else {
        (data_bytes as f64 / target_bytes).ceil() as u64
    };

    debug!(
        path = %source.path().display(),
        avg_row_bytes,
        rows_per_chunk,
        estimated_chunks,
        "chunk plan computed"
    );

    Ok(ChunkPlan {
        rows_per_chunk,
        avg_row_bytes,
        estimated_chunks,
        schema,
    })
}

/// Read up to [`SAMPLE_ROWS`] rows and derive average bytes per row from
/// reader byte positions. Returns `(avg_row_bytes, data_bytes_total)`.
fn sample_row_size(source: &SourceFile) -> Result<(f64, u64)> {
    let path = source.path();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| read_error(path, e))?;

    let mut record = ByteRecord::new();
    // Header row; SourceFile::open guarantees it exists.
    if !reader
        .read_byte_record(&mut record)
        .map_err(|e| read_error(path, e))?
    {
        return Err(IngestError::Estimation {
            path: path.to_path_buf(),
            reason: "file has no header row".to_string(),
        });
    }
    let header_end = reader.position().byte();

    let mut sampled = 0usize;
    while sampled < SAMPLE_ROWS {
        match reader.read_byte_record(&mut record) {
            Ok(true) => sampled += 1,
            Ok(false) => break,
            // Malformed rows still occupy bytes; keep them in the average.
            Err(e) if !e.is_io_error() => sampled += 1,
            Err(e) => return Err(read_error(path, e)),
        }
    }
    let sample_end = reader.position().byte();
    let data_bytes = source.byte_len().saturating_sub(header_end);

    if sampled == 0 {
        debug!(path = %path.display(), "header-only file, defaulting to 1 row per chunk");
        return Ok((0.0, 0));
    }
    let avg = (sample_end - header_end) as f64 / sampled as f64;
    Ok((avg, data_bytes))
}

/// Infer the run-wide schema from the sample window via polars.
///
/// `ignore_errors` keeps a stray malformed row in the sample from aborting
/// the probe; the row filter deals with such rows during streaming.
fn sample_schema(path: &Path) -> Result<SchemaRef> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_n_rows(Some(SAMPLE_ROWS))
        .with_ignore_errors(true)
        .map_parse_options(|parse| parse.with_truncate_ragged_lines(true))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(df.schema().clone())
}

fn read_error(path: &Path, error: csv::Error) -> IngestError {
    match error.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        other => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!("{other:?}"),
        },
    }
}
