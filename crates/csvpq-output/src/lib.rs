//! Parquet output for the csvpq toolkit.
//!
//! Owns the conversion contract: chunk encoding against a run-wide schema,
//! whole-file and directory-tree conversion, and read-only inspection.
//! Type inference is delegated to polars throughout.

pub mod convert;
pub mod discovery;
pub mod encode;
pub mod error;
pub mod inspect;

pub use convert::{ConvertOutcome, convert_dir, convert_file};
pub use discovery::list_csv_files;
pub use encode::ChunkEncoder;
pub use error::{OutputError, Result};
pub use inspect::{ParquetSummary, inspect_parquet};
