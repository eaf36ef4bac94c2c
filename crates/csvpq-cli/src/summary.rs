//! Terminal summaries for run results and Parquet inspection.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use csvpq_core::{BYTES_PER_MB, ConversionResult};
use csvpq_output::ParquetSummary;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn file_size_mb(path: &Path) -> Option<f64> {
    std::fs::metadata(path)
        .ok()
        .map(|m| m.len() as f64 / BYTES_PER_MB)
}

/// Print the chunk listing and row accounting for a split run.
pub fn print_split_summary(result: &ConversionResult) {
    if !result.files.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Chunk"), header_cell("Size (MB)")]);
        apply_table_style(&mut table);
        if let Some(column) = table.column_mut(1) {
            column.set_cell_alignment(CellAlignment::Right);
        }
        for file in &result.files {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| file.display().to_string());
            let size = file_size_mb(file)
                .map(|mb| format!("{mb:.2}"))
                .unwrap_or_else(|| "?".to_string());
            table.add_row(vec![Cell::new(name), Cell::new(size)]);
        }
        println!("{table}");
    }
    println!(
        "Chunks written: {}  Rows read: {}  Rows encoded: {}  Rows skipped: {}",
        result.chunks_written, result.rows_read, result.rows_encoded, result.rows_skipped
    );
    if !result.is_balanced() {
        println!("warning: row accounting does not balance");
    }
}

/// Print schema, info, and preview sections for a Parquet file.
pub fn print_view(summary: &ParquetSummary, show_schema: bool, show_info: bool, rows: usize) {
    println!("File: {}", summary.path.display());

    if show_info {
        println!(
            "Rows: {}  Columns: {}  In-memory size: {:.2} MB",
            summary.rows,
            summary.columns,
            summary.estimated_bytes as f64 / BYTES_PER_MB
        );
    }

    if show_schema {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Column"), header_cell("Type")]);
        apply_table_style(&mut table);
        for (name, dtype) in &summary.schema {
            table.add_row(vec![
                Cell::new(name),
                Cell::new(dtype).fg(Color::Cyan),
            ]);
        }
        println!("{table}");
    }

    println!("First {rows} rows:");
    println!("{}", summary.preview);
}
