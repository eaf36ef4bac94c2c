//! The split-and-convert orchestrator.
//!
//! Runs the pipeline as a straight line through its states: validate input
//! and output, estimate the chunk plan, stream row-bounded chunks through
//! the encoder, then finalize the accounting. Chunks are produced and
//! encoded in strictly increasing ordinal order; no chunk starts encoding
//! before the previous one returned. Any fatal error carries the partial
//! result out with it, and files already on disk stay there.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use csvpq_ingest::{ChunkReader, SourceFile, plan_chunks};
use csvpq_output::{ChunkEncoder, OutputError};

use crate::error::{SplitError, SplitFailure};
use crate::progress::{NullProgress, ProgressSink};
use crate::result::ConversionResult;

/// Bytes in one megabyte, matching the chunk-size CLI unit.
pub const BYTES_PER_MB: f64 = (1024 * 1024) as f64;

/// Default chunk size in megabytes.
pub const DEFAULT_CHUNK_SIZE_MB: f64 = 250.0;

/// Tunables for one split run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOptions {
    /// Target chunk size in megabytes; fractional values are allowed so
    /// small-chunk behavior can be exercised (e.g. 0.1).
    pub chunk_size_mb: f64,
    /// Replace existing chunk files instead of failing on collision.
    pub overwrite: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            chunk_size_mb: DEFAULT_CHUNK_SIZE_MB,
            overwrite: false,
        }
    }
}

impl SplitOptions {
    #[must_use]
    pub fn with_chunk_size_mb(mut self, chunk_size_mb: f64) -> Self {
        self.chunk_size_mb = chunk_size_mb;
        self
    }

    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Split a CSV file into bounded chunks, each converted to Parquet.
pub fn split_and_convert(
    input: &Path,
    out_dir: &Path,
    options: &SplitOptions,
) -> Result<ConversionResult, SplitFailure> {
    split_and_convert_with_progress(input, out_dir, options, &mut NullProgress)
}

/// As [`split_and_convert`], reporting throughput to `progress`.
pub fn split_and_convert_with_progress(
    input: &Path,
    out_dir: &Path,
    options: &SplitOptions,
    progress: &mut dyn ProgressSink,
) -> Result<ConversionResult, SplitFailure> {
    // Init: arguments and filesystem preconditions.
    if options.chunk_size_mb.is_nan() || options.chunk_size_mb <= 0.0 {
        return Err(SplitFailure::new(
            SplitError::InvalidChunkSize(options.chunk_size_mb),
            ConversionResult::default(),
        ));
    }
    let source = match SourceFile::open(input) {
        Ok(source) => source,
        Err(error) => return Err(SplitFailure::new(error, ConversionResult::default())),
    };
    if let Err(error) = std::fs::create_dir_all(out_dir) {
        return Err(SplitFailure::new(
            OutputError::OutputDir {
                path: out_dir.to_path_buf(),
                source: error,
            },
            ConversionResult::default(),
        ));
    }

    // Estimating.
    let target_bytes = options.chunk_size_mb * BYTES_PER_MB;
    let plan = match plan_chunks(&source, target_bytes) {
        Ok(plan) => plan,
        Err(error) => return Err(SplitFailure::new(error, ConversionResult::default())),
    };
    info!(
        input = %input.display(),
        source_bytes = source.byte_len(),
        rows_per_chunk = plan.rows_per_chunk,
        estimated_chunks = plan.estimated_chunks,
        "split plan ready"
    );
    progress.on_plan(source.byte_len(), plan.rows_per_chunk, plan.estimated_chunks);

    // Streaming: pull a chunk, encode it, repeat until exhausted.
    let encoder = ChunkEncoder::new(out_dir, source.stem())
        .with_schema(plan.schema.clone())
        .with_overwrite(options.overwrite);
    let mut reader = match ChunkReader::open(&source, plan.rows_per_chunk) {
        Ok(reader) => reader,
        Err(error) => return Err(SplitFailure::new(error, ConversionResult::default())),
    };
    let header: Vec<String> = reader.header().to_vec();
    let mut result = ConversionResult::default();

    loop {
        let chunk = match reader.next_chunk() {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(error) => {
                finalize_counts(&mut result, &reader);
                progress.on_finish(&result);
                return Err(SplitFailure::new(error, result));
            }
        };
        match encoder.encode(&header, &chunk.rows, chunk.index) {
            Ok(path) => {
                result.files.push(path);
                result.chunks_written += 1;
                result.rows_encoded += chunk.rows.len() as u64;
                progress.on_chunk(chunk.index, chunk.rows.len(), reader.bytes_read());
            }
            Err(error) => {
                finalize_counts(&mut result, &reader);
                progress.on_finish(&result);
                return Err(SplitFailure::new(error, result));
            }
        }
    }

    // Finalizing: close the books and verify the accounting invariant.
    finalize_counts(&mut result, &reader);
    if !result.is_balanced() {
        warn!(
            rows_read = result.rows_read,
            rows_encoded = result.rows_encoded,
            rows_skipped = result.rows_skipped,
            "row accounting mismatch"
        );
        debug_assert!(result.is_balanced(), "row accounting mismatch");
    }
    info!(
        chunks = result.chunks_written,
        rows_read = result.rows_read,
        rows_skipped = result.rows_skipped,
        "split complete"
    );
    progress.on_finish(&result);
    Ok(result)
}

fn finalize_counts(result: &mut ConversionResult, reader: &ChunkReader) {
    result.rows_read = reader.rows_read();
    result.rows_skipped = reader.rows_skipped();
}
