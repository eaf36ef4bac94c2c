//! CSV ingestion for the csvpq toolkit.
//!
//! Streams delimited text without materializing the whole file: a source
//! handle carries the header, the estimator sizes chunks in rows from a
//! bounded sample, and the chunk reader yields row-bounded batches with
//! malformed rows skipped and counted along the way.

pub mod chunker;
pub mod error;
pub mod estimate;
pub mod filter;
pub mod source;

pub use chunker::{Chunk, ChunkReader};
pub use error::{IngestError, Result};
pub use estimate::{ChunkPlan, SAMPLE_ROWS, plan_chunks};
pub use filter::{MalformedKind, RowFilter};
pub use source::SourceFile;
