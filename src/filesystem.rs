//! Filesystem probing for catalog items
//!
//! This module provides:
//! - The `Filesystem` trait so inspection can run against a fake in tests
//! - `SystemFilesystem`, the real implementation over `std::fs`

use std::path::Path;
use std::time::SystemTime;

/// Read-only filesystem queries used during inspection
pub trait Filesystem {
    /// Returns true if a file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Returns the last modification time of `path`, or `None` when the
    /// attributes cannot be read
    fn modified(&self, path: &Path) -> Option<SystemTime>;
}

/// Default filesystem that queries the real OS
#[derive(Debug, Default)]
pub struct SystemFilesystem;

impl SystemFilesystem {
    /// Create a new system filesystem
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for SystemFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn modified(&self, path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
    }
}
