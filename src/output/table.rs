//! Table formatter for human-readable display
//!
//! Renders a header, a dash separator, and one line per report row in
//! three left-aligned fixed-width columns. Row order is whatever the
//! caller supplies; the formatter never sorts or filters.

use crate::domain::ReportRow;
use crate::output::{DATE_FORMAT, DATE_WIDTH, NAME_WIDTH, PLACEHOLDER, VERSION_WIDTH};
use chrono::{DateTime, Local};
use colored::Colorize;
use std::io::Write;

/// Table formatter for the inspection report
pub struct TableFormatter {
    /// Whether to dim placeholder cells
    color: bool,
}

impl TableFormatter {
    /// Create a new table formatter with colors enabled
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a new table formatter with a color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Format and write the full table: header, separator, one line per row
    pub fn format(&self, rows: &[ReportRow], writer: &mut dyn Write) -> std::io::Result<()> {
        self.write_header(writer)?;
        for row in rows {
            self.write_row(row, writer)?;
        }
        Ok(())
    }

    fn write_header(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            writer,
            "{:<name$} {:<date$} {:<version$}",
            "Name",
            "Date",
            "Version",
            name = NAME_WIDTH,
            date = DATE_WIDTH,
            version = VERSION_WIDTH
        )?;
        writeln!(writer, "{}", "-".repeat(Self::total_width()))
    }

    fn write_row(&self, row: &ReportRow, writer: &mut dyn Write) -> std::io::Result<()> {
        let date_text = row
            .modified_at
            .map(|d| Self::format_date(&d))
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let version_text = row.version.clone().unwrap_or_else(|| PLACEHOLDER.to_string());

        // Pad to column width before styling so ANSI codes never skew
        // the alignment
        let name_cell = format!("{:<width$}", row.name, width = NAME_WIDTH);
        let date_cell = format!("{:<width$}", date_text, width = DATE_WIDTH);
        let version_cell = format!("{:<width$}", version_text, width = VERSION_WIDTH);

        let date_cell = if self.color && row.modified_at.is_none() {
            date_cell.dimmed().to_string()
        } else {
            date_cell
        };
        let version_cell = if self.color && row.version.is_none() {
            version_cell.dimmed().to_string()
        } else {
            version_cell
        };

        writeln!(writer, "{} {} {}", name_cell, date_cell, version_cell)
    }

    /// Render a modification date in the table's date style
    fn format_date(date: &DateTime<Local>) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Full table width: three columns plus the two separating spaces
    fn total_width() -> usize {
        NAME_WIDTH + DATE_WIDTH + VERSION_WIDTH + 2
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}
