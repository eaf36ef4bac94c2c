//! Progress bar wired into the split pipeline's reporting seam.

use csvpq_core::{ConversionResult, ProgressSink};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta}) {msg}";

/// Renders source-byte progress with a per-chunk message.
pub struct SplitProgressBar {
    bar: ProgressBar,
}

impl SplitProgressBar {
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

impl Default for SplitProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for SplitProgressBar {
    fn on_plan(&mut self, source_bytes: u64, rows_per_chunk: usize, estimated_chunks: u64) {
        // Progress belongs on stdout; logs go to stderr.
        let bar =
            ProgressBar::with_draw_target(Some(source_bytes), ProgressDrawTarget::stdout());
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        bar.set_style(style);
        bar.set_message(format!(
            "{rows_per_chunk} rows/chunk, ~{estimated_chunks} chunks"
        ));
        self.bar = bar;
    }

    fn on_chunk(&mut self, index: usize, rows: usize, source_bytes_read: u64) {
        self.bar.set_position(source_bytes_read);
        self.bar.set_message(format!("chunk {index} ({rows} rows)"));
    }

    fn on_finish(&mut self, result: &ConversionResult) {
        self.bar.finish_with_message(format!(
            "{} chunks, {} rows read, {} skipped",
            result.chunks_written, result.rows_read, result.rows_skipped
        ));
    }
}
