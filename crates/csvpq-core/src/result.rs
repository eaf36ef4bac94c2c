//! Run-level accounting for a split-and-convert invocation.

use std::path::PathBuf;

use serde::Serialize;

/// Outcome of one run: files written plus row accounting.
///
/// Invariant: `rows_encoded + rows_skipped == rows_read` (header excluded).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionResult {
    /// Output files in chunk-ordinal order.
    pub files: Vec<PathBuf>,
    /// Data rows pulled from the source, valid and malformed combined.
    pub rows_read: u64,
    /// Malformed rows skipped by the filter.
    pub rows_skipped: u64,
    /// Valid rows written across all chunks.
    pub rows_encoded: u64,
    /// Chunks successfully encoded.
    pub chunks_written: u64,
}

impl ConversionResult {
    /// Whether the accounting invariant holds.
    pub fn is_balanced(&self) -> bool {
        self.rows_encoded + self.rows_skipped == self.rows_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_check() {
        let mut result = ConversionResult {
            rows_read: 100,
            rows_skipped: 3,
            rows_encoded: 97,
            ..ConversionResult::default()
        };
        assert!(result.is_balanced());
        result.rows_encoded = 96;
        assert!(!result.is_balanced());
    }
}
