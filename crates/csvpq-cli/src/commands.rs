//! Subcommand implementations. Each returns the process exit code.

use anyhow::{Context, Result};
use tracing::{error, info, info_span};

use csvpq_core::{
    NullProgress, ProgressSink, SplitOptions, split_and_convert_with_progress,
};
use csvpq_output::{convert_dir, convert_file, inspect_parquet};

use crate::cli::{ConvertArgs, SplitArgs, ViewArgs};
use crate::progress::SplitProgressBar;
use crate::summary::{print_split_summary, print_view};

pub fn run_split(args: &SplitArgs) -> Result<i32> {
    let span = info_span!("split", input = %args.input.display());
    let _guard = span.enter();

    let options = SplitOptions::default()
        .with_chunk_size_mb(args.chunk_size)
        .with_overwrite(args.overwrite);
    let mut bar = SplitProgressBar::new();
    let mut null = NullProgress;
    let progress: &mut dyn ProgressSink = if args.no_progress || args.json {
        &mut null
    } else {
        &mut bar
    };

    match split_and_convert_with_progress(&args.input, &args.output_dir, &options, progress) {
        Ok(result) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_split_summary(&result);
            }
            Ok(0)
        }
        Err(failure) => {
            error!(error = %failure.error, "split failed");
            eprintln!("error: {}", failure.error);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&failure.partial)?);
            } else {
                print_split_summary(&failure.partial);
            }
            Ok(1)
        }
    }
}

pub fn run_convert(args: &ConvertArgs) -> Result<i32> {
    if args.input.is_dir() {
        let outcome = convert_dir(&args.input, args.output.as_deref())
            .with_context(|| format!("convert directory {}", args.input.display()))?;
        for file in &outcome.files {
            println!("converted: {}", file.display());
        }
        for (input, error) in &outcome.failures {
            eprintln!("failed: {input}: {error}", input = input.display());
        }
        info!(
            converted = outcome.files.len(),
            failed = outcome.failures.len(),
            "batch conversion complete"
        );
        println!(
            "Converted {} files ({} failed)",
            outcome.files.len(),
            outcome.failures.len()
        );
        Ok(if outcome.failures.is_empty() { 0 } else { 1 })
    } else {
        let output = convert_file(&args.input, args.output.as_deref())
            .with_context(|| format!("convert {}", args.input.display()))?;
        println!("converted: {}", output.display());
        Ok(0)
    }
}

pub fn run_view(args: &ViewArgs) -> Result<i32> {
    let summary = inspect_parquet(&args.file, args.rows)
        .with_context(|| format!("inspect {}", args.file.display()))?;
    print_view(&summary, !args.no_schema, !args.no_info, args.rows);
    Ok(0)
}
