//! Row-bounded chunk reading.
//!
//! Streams records off disk one at a time and hands back bounded batches of
//! valid rows. Only the current chunk is ever held in memory. Boundary
//! counting happens after the malformed-row filter, so chunk `i` always
//! covers valid rows `[i * rows_per_chunk, (i + 1) * rows_per_chunk)` no
//! matter how many raw lines were skipped in between.

use std::fs::File;

use csv::{ByteRecord, Reader, ReaderBuilder, StringRecord};
use tracing::trace;

use crate::error::{IngestError, Result};
use crate::filter::RowFilter;
use crate::source::SourceFile;

/// One bounded batch of valid rows, consumed exactly once by the encoder.
#[derive(Debug)]
pub struct Chunk {
    /// 0-based ordinal, assigned in strictly increasing order.
    pub index: usize,
    /// Valid data rows, each matching the header arity.
    pub rows: Vec<StringRecord>,
    /// Source bytes consumed while assembling this chunk.
    pub bytes: u64,
}

/// Streaming reader that yields [`Chunk`]s of at most `rows_per_chunk` rows.
pub struct ChunkReader {
    reader: Reader<File>,
    source: SourceFile,
    rows_per_chunk: usize,
    filter: RowFilter,
    next_index: usize,
    rows_read: u64,
    exhausted: bool,
}

impl ChunkReader {
    /// Open a streaming cursor on the source, positioned after the header.
    pub fn open(source: &SourceFile, rows_per_chunk: usize) -> Result<Self> {
        debug_assert!(rows_per_chunk >= 1);
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(source.path())
            .map_err(|e| Self::map_error(source, e))?;
        // Skip the header; arity checks use the normalized header from the
        // source handle.
        let mut record = ByteRecord::new();
        reader
            .read_byte_record(&mut record)
            .map_err(|e| Self::map_error(source, e))?;

        Ok(Self {
            reader,
            source: source.clone(),
            rows_per_chunk: rows_per_chunk.max(1),
            filter: RowFilter::new(source.header().len()),
            next_index: 0,
            rows_read: 0,
            exhausted: false,
        })
    }

    /// Pull the next chunk, or `None` once the input is exhausted.
    ///
    /// The final chunk may hold fewer than `rows_per_chunk` rows; an input
    /// with no valid data rows yields no chunks at all.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk>> {
        if self.exhausted {
            return Ok(None);
        }
        let start_byte = self.reader.position().byte();
        let mut rows = Vec::with_capacity(self.rows_per_chunk);
        let mut record = ByteRecord::new();

        while rows.len() < self.rows_per_chunk {
            match self.reader.read_byte_record(&mut record) {
                Ok(true) => {
                    self.rows_read += 1;
                    if let Some(row) = self.filter.classify(record.clone()) {
                        rows.push(row);
                    }
                }
                Ok(false) => {
                    self.exhausted = true;
                    break;
                }
                Err(error) => {
                    self.rows_read += 1;
                    self.filter.absorb_error(error).map_err(|source| {
                        IngestError::FileRead {
                            path: self.source.path().to_path_buf(),
                            source,
                        }
                    })?;
                }
            }
        }

        if rows.is_empty() {
            return Ok(None);
        }
        let chunk = Chunk {
            index: self.next_index,
            rows,
            bytes: self.reader.position().byte() - start_byte,
        };
        self.next_index += 1;
        trace!(
            index = chunk.index,
            rows = chunk.rows.len(),
            bytes = chunk.bytes,
            "chunk assembled"
        );
        Ok(Some(chunk))
    }

    /// Ordered column names of the source.
    pub fn header(&self) -> &[String] {
        self.source.header()
    }

    /// Data rows read so far, valid and skipped combined.
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }

    /// Malformed rows skipped so far.
    pub fn rows_skipped(&self) -> u64 {
        self.filter.skipped()
    }

    /// Source bytes consumed so far, header included.
    pub fn bytes_read(&self) -> u64 {
        self.reader.position().byte()
    }

    fn map_error(source: &SourceFile, error: csv::Error) -> IngestError {
        match error.into_kind() {
            csv::ErrorKind::Io(io) => IngestError::FileRead {
                path: source.path().to_path_buf(),
                source: io,
            },
            other => IngestError::CsvParse {
                path: source.path().to_path_buf(),
                message: format!("{other:?}"),
            },
        }
    }
}
