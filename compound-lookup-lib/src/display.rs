//! Result rendering: aligned text tables, JSON and CSV.

use std::io::Write;

use compound_lookup_catalog::{COLUMNS, Compound, label_for};
use thiserror::Error;

/// Note printed alongside threshold values.
pub const THRESHOLD_NOTE: &str =
    "Thresholds in mg/kg; years in parentheses; medium is water unless noted.";

/// Columns shown in tables unless the caller picks others.
pub const DEFAULT_COLUMNS: [&str; 8] = [
    "cas_number",
    "compound_name_en",
    "compound_name_cn",
    "molecular_formula",
    "molecular_weight",
    "category",
    "odor",
    "has_aroma",
];

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown column \"{0}\"")]
    UnknownColumn(String),
}

/// How result rows are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    /// Whether the output is meant for other programs rather than people.
    pub fn is_machine_readable(self) -> bool {
        !matches!(self, Self::Table)
    }
}

/// Validate requested column names, keeping the caller's order.
pub fn resolve_columns(requested: &[String]) -> Result<Vec<&'static str>, DisplayError> {
    requested
        .iter()
        .map(|name| {
            let name = name.trim();
            COLUMNS
                .iter()
                .copied()
                .find(|c| c.eq_ignore_ascii_case(name))
                .ok_or_else(|| DisplayError::UnknownColumn(name.to_string()))
        })
        .collect()
}

/// Whether any of the columns carries a threshold value.
pub fn shows_thresholds(columns: &[&str]) -> bool {
    columns.iter().any(|c| c.starts_with("threshold_"))
}

/// Truncate to at most `max` characters, appending "..." if cut.
pub fn truncate_cell(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max).collect()
    }
}

/// Render records as an aligned table, one line per row plus a header.
///
/// Newlines inside values are flattened to spaces. Width is counted in
/// characters, so wide CJK glyphs can push later columns right.
pub fn render_table(records: &[Compound], columns: &[&str], max_width: usize) -> Vec<String> {
    let header: Vec<String> = columns
        .iter()
        .map(|c| label_for(c).map_or_else(|| c.to_string(), str::to_string))
        .collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            columns
                .iter()
                .map(|c| {
                    let value = r.field(c).unwrap_or_default().replace(['\n', '\r'], " ");
                    truncate_cell(&value, max_width)
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(header.as_slice()));
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(|row| format_row(row.as_slice())));
    lines
}

/// Write records as a pretty-printed JSON array.
pub fn write_json<W: Write>(records: &[Compound], mut writer: W) -> Result<(), DisplayError> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    Ok(())
}

/// Write records as CSV with a header of column names.
///
/// The aroma column is written as yes/no, like the table.
pub fn write_csv<W: Write>(records: &[Compound], writer: W) -> Result<(), DisplayError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for record in records {
        wtr.write_record(COLUMNS.iter().map(|c| record.field(c).unwrap_or_default()))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;
