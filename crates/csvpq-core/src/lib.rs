//! Orchestration for the csvpq toolkit.
//!
//! Ties the ingest and output crates together into the split-and-convert
//! pipeline: chunk planning, the streaming loop, per-chunk encoding, and
//! run-level accounting. Single-threaded and synchronous; chunks are
//! written in strictly increasing ordinal order.

pub mod error;
pub mod progress;
pub mod result;
pub mod split;

pub use error::{SplitError, SplitFailure};
pub use progress::{NullProgress, ProgressSink};
pub use result::ConversionResult;
pub use split::{
    BYTES_PER_MB, DEFAULT_CHUNK_SIZE_MB, SplitOptions, split_and_convert,
    split_and_convert_with_progress,
};
