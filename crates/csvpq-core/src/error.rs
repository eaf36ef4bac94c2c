//! Error types for the split pipeline.

use thiserror::Error;

use csvpq_ingest::IngestError;
use csvpq_output::OutputError;

use crate::result::ConversionResult;

/// Fatal conditions for a split run.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The chunk size argument was zero, negative, or not a number.
    #[error("chunk size must be a positive number of megabytes, got {0}")]
    InvalidChunkSize(f64),

    /// Reading or sampling the source failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Writing a chunk or preparing the output directory failed.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// A failed run together with the progress made before the failure.
///
/// Chunk files written before the failure are never deleted; `partial`
/// reports them so callers can surface partial progress.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct SplitFailure {
    #[source]
    pub error: SplitError,
    pub partial: ConversionResult,
}

impl SplitFailure {
    pub fn new(error: impl Into<SplitError>, partial: ConversionResult) -> Self {
        Self {
            error: error.into(),
            partial,
        }
    }
}
