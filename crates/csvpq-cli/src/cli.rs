//! CLI argument definitions for csvpq.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csvpq",
    version,
    about = "csvpq - Convert delimited text to Parquet",
    long_about = "Convert CSV files to Parquet, split oversized files into\n\
                  bounded-size Parquet chunks, and inspect Parquet files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a large CSV file into bounded-size Parquet chunks.
    Split(SplitArgs),

    /// Convert a CSV file, or every CSV file under a directory, to Parquet.
    Convert(ConvertArgs),

    /// Show schema, summary, and a row preview of a Parquet file.
    View(ViewArgs),
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Directory for the chunk files (created if missing).
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Target chunk size in megabytes; decimals allowed (e.g. 0.1).
    #[arg(long = "chunk-size", value_name = "MB", default_value_t = 250.0)]
    pub chunk_size: f64,

    /// Replace existing chunk files instead of failing on collision.
    #[arg(long = "overwrite")]
    pub overwrite: bool,

    /// Print the final summary as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Disable the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Input CSV file or directory.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output Parquet file or directory (default: alongside the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ViewArgs {
    /// Path to the Parquet file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of preview rows to display.
    #[arg(long = "rows", value_name = "N", default_value_t = 5)]
    pub rows: usize,

    /// Skip the schema listing.
    #[arg(long = "no-schema")]
    pub no_schema: bool,

    /// Skip the row-count and memory summary.
    #[arg(long = "no-info")]
    pub no_info: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
