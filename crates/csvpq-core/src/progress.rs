//! Progress reporting seam.
//!
//! The orchestrator drives a [`ProgressSink`] so the CLI can render a live
//! bar while library callers default to [`NullProgress`].

use crate::result::ConversionResult;

/// Receives throughput events during a split run.
pub trait ProgressSink {
    /// Called once after estimation, before streaming starts.
    fn on_plan(&mut self, source_bytes: u64, rows_per_chunk: usize, estimated_chunks: u64) {
        let _ = (source_bytes, rows_per_chunk, estimated_chunks);
    }

    /// Called after each chunk is encoded.
    fn on_chunk(&mut self, index: usize, rows: usize, source_bytes_read: u64) {
        let _ = (index, rows, source_bytes_read);
    }

    /// Called once when the run finishes, successfully or not.
    fn on_finish(&mut self, result: &ConversionResult) {
        let _ = result;
    }
}

/// No-op sink for library use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl ProgressSink for NullProgress {}
