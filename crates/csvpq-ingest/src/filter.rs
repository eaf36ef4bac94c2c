//! Malformed-row classification.
//!
//! Rows that do not match the header arity, contain invalid UTF-8, or trip a
//! recoverable CSV parse error are skipped and counted, never fatal. The
//! counter is owned by the filter and threaded through the chunk reader, so
//! no global state is involved.

use csv::{ByteRecord, StringRecord};
use tracing::trace;

/// Why a row was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// Field count differs from the header.
    ArityMismatch { expected: usize, found: usize },
    /// A field was not valid UTF-8.
    InvalidUtf8,
    /// The CSV parser reported a structural error for this record.
    ParseError,
}

/// Skip-and-continue filter for raw CSV records.
#[derive(Debug)]
pub struct RowFilter {
    expected_fields: usize,
    skipped: u64,
}

impl RowFilter {
    pub fn new(expected_fields: usize) -> Self {
        Self {
            expected_fields,
            skipped: 0,
        }
    }

    /// Classify one raw record. Returns the decoded row when valid,
    /// otherwise counts the row as skipped and returns `None`.
    pub fn classify(&mut self, record: ByteRecord) -> Option<StringRecord> {
        if record.len() != self.expected_fields {
            self.reject(
                record.position().map(|p| p.line()),
                MalformedKind::ArityMismatch {
                    expected: self.expected_fields,
                    found: record.len(),
                },
            );
            return None;
        }
        let line = record.position().map(|p| p.line());
        match StringRecord::from_byte_record(record) {
            Ok(row) => Some(row),
            Err(_) => {
                self.reject(line, MalformedKind::InvalidUtf8);
                None
            }
        }
    }

    /// Absorb a read error when it only affects a single record.
    ///
    /// I/O errors are handed back to the caller as fatal; anything else
    /// (length errors, record-level parse failures) counts as one skipped
    /// row and the stream continues at the next record boundary. Note that
    /// an unterminated quote does not surface here: the parser folds the
    /// rest of the file into one oversized field, which [`classify`]
    /// rejects as an arity mismatch.
    ///
    /// [`classify`]: RowFilter::classify
    pub fn absorb_error(&mut self, error: csv::Error) -> Result<(), std::io::Error> {
        let line = error.position().map(|p| p.line());
        match error.into_kind() {
            csv::ErrorKind::Io(source) => Err(source),
            _ => {
                self.reject(line, MalformedKind::ParseError);
                Ok(())
            }
        }
    }

    fn reject(&mut self, line: Option<u64>, kind: MalformedKind) {
        self.skipped += 1;
        trace!(?line, ?kind, "skipping malformed row");
    }

    /// Rows skipped so far in this run.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}
