//! Output formatting for inspection reports
//!
//! This module provides:
//! - Presentation constants for the aligned table
//! - `TableFormatter` for human-readable display

mod table;

pub use table::TableFormatter;

/// Placeholder rendered for any value that could not be obtained
pub const PLACEHOLDER: &str = "N/A";

/// Width of the component name column
pub const NAME_WIDTH: usize = 24;

/// Width of the modification date column
pub const DATE_WIDTH: usize = 24;

/// Width of the version column
pub const VERSION_WIDTH: usize = 12;

/// Medium date, short time; for example `May 3, 2017 2:05 PM`
pub const DATE_FORMAT: &str = "%b %-d, %Y %-I:%M %p";
