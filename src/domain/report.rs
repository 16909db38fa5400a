//! Report rows and the overall inspection report

use chrono::{DateTime, Local};

/// The data behind one output line: component name plus whatever of the
/// modification date and version string could be obtained. Either field
/// may be absent independently; absent fields render as a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Component name, copied from the catalog item
    pub name: String,
    /// Last modification time of the metadata file, if readable
    pub modified_at: Option<DateTime<Local>>,
    /// Version string reported by the reader utility, if any
    pub version: Option<String>,
}

impl ReportRow {
    /// Creates a report row
    pub fn new(
        name: impl Into<String>,
        modified_at: Option<DateTime<Local>>,
        version: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            modified_at,
            version,
        }
    }

    /// Creates a row for a component whose metadata file is absent
    pub fn missing(name: impl Into<String>) -> Self {
        Self::new(name, None, None)
    }

    /// Returns true if neither field could be obtained
    pub fn is_empty(&self) -> bool {
        self.modified_at.is_none() && self.version.is_none()
    }
}

/// Result of inspecting the whole catalog.
///
/// Diagnostics collect non-fatal reader problems (launch failures, nonzero
/// exits, stderr text). They are never part of the stdout table; the
/// binary prints them to stderr in verbose mode only.
#[derive(Debug, Clone, Default)]
pub struct InspectionReport {
    /// One row per catalog item, in catalog order
    pub rows: Vec<ReportRow>,
    /// Non-fatal notes gathered along the way
    pub diagnostics: Vec<String>,
}

impl InspectionReport {
    /// Number of rows in the report
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the report holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
