//! Version lookup through the external `defaults` reader utility
//!
//! This module provides:
//! - The `CommandRunner` trait, a single run-and-capture seam so tests can
//!   substitute deterministic fakes for real subprocesses
//! - `SystemCommandRunner`, the real implementation over `std::process`
//! - `VersionReader`, which asks the reader tool for one item's version

use crate::domain::UpdateItem;
use crate::error::ReaderError;
use std::process::Command;

/// Path of the property-list reader utility
pub const READER_TOOL: &str = "/usr/bin/defaults";

/// Captured result of one subprocess run
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Raw standard output bytes
    pub stdout: Vec<u8>,
    /// Raw standard error bytes
    pub stderr: Vec<u8>,
    /// Whether the process exited successfully
    pub success: bool,
    /// Exit code, when the process exited normally
    pub exit_code: Option<i32>,
}

/// Trait for running an external command and capturing its output
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput>;
}

/// Default runner that spawns real processes
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    /// Create a new system command runner
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;

        Ok(CommandOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            success: output.status.success(),
            exit_code: output.status.code(),
        })
    }
}

/// Result of asking the reader for one item's version
#[derive(Debug, Clone)]
pub struct VersionLookup {
    /// First line of the reader's stdout, if it printed anything
    pub version: Option<String>,
    /// Whether the reader exited successfully
    pub success: bool,
    /// Exit code, when the reader exited normally
    pub exit_code: Option<i32>,
    /// The reader's stderr, lossily decoded for diagnostics
    pub stderr: String,
}

/// Reads version strings out of per-file metadata stores by invoking the
/// reader utility as `<tool> read <path> <key>`.
pub struct VersionReader<R: CommandRunner> {
    runner: R,
    tool: String,
}

impl<R: CommandRunner> VersionReader<R> {
    /// Create a reader over the default tool path
    pub fn new(runner: R) -> Self {
        Self::with_tool(runner, READER_TOOL)
    }

    /// Create a reader over a custom tool path (for testing)
    pub fn with_tool(runner: R, tool: impl Into<String>) -> Self {
        Self {
            runner,
            tool: tool.into(),
        }
    }

    /// Returns the tool path this reader invokes
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Look up the version for one item.
    ///
    /// The version is exactly the first line of the reader's stdout; no
    /// output means no version. The exit status is captured but does not
    /// affect the version value.
    pub fn read(&self, item: &UpdateItem) -> Result<VersionLookup, ReaderError> {
        let path = item.path.to_string_lossy();
        let args = ["read", path.as_ref(), item.version_key.as_str()];

        let output = self
            .runner
            .run(&self.tool, &args)
            .map_err(|source| ReaderError::launch(&self.tool, source))?;

        let text = String::from_utf8(output.stdout)
            .map_err(|_| ReaderError::non_utf8_output(&self.tool))?;

        let version = match text.lines().next() {
            Some(line) if !line.is_empty() => Some(line.to_string()),
            _ => None,
        };

        Ok(VersionLookup {
            version,
            success: output.success,
            exit_code: output.exit_code,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
