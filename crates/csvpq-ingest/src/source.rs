//! Source file handle: path, byte length, and the header row.

use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder};

use crate::error::{IngestError, Result};

/// A CSV source opened for one split run.
///
/// Immutable once opened; readers for sampling and streaming each open their
/// own cursor on the path, so nothing here is consumed by probing.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    byte_len: u64,
    header: Vec<String>,
}

impl SourceFile {
    /// Open a CSV file and read its header row.
    ///
    /// Fails with [`IngestError::FileNotFound`] for a missing path and
    /// [`IngestError::Estimation`] for a file with no header row at all.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let byte_len = std::fs::metadata(path)
            .map_err(|source| IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| csv_open_error(path, e))?;
        let mut record = ByteRecord::new();
        let has_header = reader
            .read_byte_record(&mut record)
            .map_err(|e| csv_open_error(path, e))?;
        if !has_header || record.is_empty() {
            return Err(IngestError::Estimation {
                path: path.to_path_buf(),
                reason: "file has no header row".to_string(),
            });
        }
        let header = record
            .iter()
            .map(|field| normalize_header(&String::from_utf8_lossy(field)))
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            byte_len,
            header,
        })
    }

    /// Path the source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Total size of the file in bytes, header included.
    pub fn byte_len(&self) -> u64 {
        self.byte_len
    }

    /// Ordered column names from the header row.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// File stem used to derive chunk output names.
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("chunk")
    }
}

/// Strip a BOM and collapse stray whitespace in a header cell.
fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn csv_open_error(path: &Path, error: csv::Error) -> IngestError {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_bom_and_whitespace() {
        assert_eq!(normalize_header("\u{feff}id "), "id");
        assert_eq!(normalize_header(" name"), "name");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = SourceFile::open("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
