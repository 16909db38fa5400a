//! Update item descriptor structures

use std::fmt;
use std::path::{Path, PathBuf};

/// One security-update component tracked by the catalog: a display name,
/// the path of its version-bearing plist, and the key whose value is the
/// component's version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateItem {
    /// Human-readable component label
    pub name: String,
    /// Absolute path to the metadata file
    pub path: PathBuf,
    /// Key read from the metadata file to obtain the version
    pub version_key: String,
}

impl UpdateItem {
    /// Creates a new update item
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        version_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            version_key: version_key.into(),
        }
    }

    /// Returns the metadata path as a `Path`
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for UpdateItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.path.display())
    }
}
