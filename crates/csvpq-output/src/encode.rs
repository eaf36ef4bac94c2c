//! Chunk-to-Parquet encoding.
//!
//! Each chunk is materialized through polars' CSV reader with the run-wide
//! schema applied, then written with `ParquetWriter`. Value parsing is
//! polars' own; nothing here re-implements type inference. A value that does
//! not fit the sampled schema fails the encode, which aborts the run with
//! partial results rather than letting chunk schemas drift apart.

use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use polars::prelude::{CsvReadOptions, ParquetWriter, SchemaRef, SerReader};
use tracing::debug;

use crate::error::{OutputError, Result};

/// Writes one Parquet file per chunk under a fixed output directory.
pub struct ChunkEncoder {
    out_dir: PathBuf,
    stem: String,
    schema: Option<SchemaRef>,
    overwrite: bool,
}

impl ChunkEncoder {
    pub fn new(out_dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            stem: stem.into(),
            schema: None,
            overwrite: false,
        }
    }

    /// Apply one schema to every chunk instead of per-chunk inference.
    #[must_use]
    pub fn with_schema(mut self, schema: SchemaRef) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Allow replacing existing output files.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Deterministic output path for a chunk ordinal.
    pub fn chunk_path(&self, index: usize) -> PathBuf {
        self.out_dir
            .join(format!("{}_part{index:03}.parquet", self.stem))
    }

    /// Encode one chunk (header + rows) to its Parquet file.
    ///
    /// Fails with [`OutputError::OutputExists`] on a collision without the
    /// overwrite flag, and [`OutputError::Encode`] when the rows cannot be
    /// parsed under the run schema or the file cannot be written.
    pub fn encode(&self, header: &[String], rows: &[StringRecord], index: usize) -> Result<PathBuf> {
        let path = self.chunk_path(index);
        if !self.overwrite && path.exists() {
            return Err(OutputError::OutputExists { path });
        }

        let buffer = rows_to_csv_buffer(header, rows, &path)?;
        let mut options = CsvReadOptions::default().with_has_header(true);
        if let Some(schema) = &self.schema {
            options = options.with_schema(Some(schema.clone()));
        }
        let mut df = options
            .into_reader_with_file_handle(Cursor::new(buffer))
            .finish()
            .map_err(|e| OutputError::Encode {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let mut file = File::create(&path).map_err(|e| OutputError::Encode {
            path: path.clone(),
            message: e.to_string(),
        })?;
        ParquetWriter::new(&mut file)
            .finish(&mut df)
            .map_err(|e| OutputError::Encode {
                path: path.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %path.display(), rows = rows.len(), "chunk encoded");
        Ok(path)
    }
}

/// Serialize the chunk back to CSV bytes so polars owns all value parsing.
fn rows_to_csv_buffer(header: &[String], rows: &[StringRecord], path: &Path) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let encode_err = |message: String| OutputError::Encode {
        path: path.to_path_buf(),
        message,
    };
    writer
        .write_record(header)
        .map_err(|e| encode_err(e.to_string()))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| encode_err(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| encode_err(e.to_string()))
}
