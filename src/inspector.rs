//! Per-item inspection: existence, modification time, version lookup
//!
//! This module provides:
//! - `Inspector`, a deterministic function from catalog items plus an
//!   injected environment (filesystem + command runner) to report rows
//! - Failure containment: nothing a single item does can abort the run

use crate::domain::{InspectionReport, ReportRow, UpdateItem};
use crate::filesystem::{Filesystem, SystemFilesystem};
use crate::reader::{CommandRunner, SystemCommandRunner, VersionLookup, VersionReader};
use chrono::{DateTime, Local};

/// Inspects catalog items against an injected environment
pub struct Inspector<F: Filesystem, R: CommandRunner> {
    fs: F,
    reader: VersionReader<R>,
}

impl Inspector<SystemFilesystem, SystemCommandRunner> {
    /// Create an inspector wired to the real filesystem and process runner
    pub fn system() -> Self {
        Self::new(SystemFilesystem::new(), SystemCommandRunner::new())
    }
}

impl<F: Filesystem, R: CommandRunner> Inspector<F, R> {
    /// Create an inspector over a filesystem and a command runner
    pub fn new(fs: F, runner: R) -> Self {
        Self {
            fs,
            reader: VersionReader::new(runner),
        }
    }

    /// Create an inspector over a filesystem and a preconfigured reader
    pub fn with_reader(fs: F, reader: VersionReader<R>) -> Self {
        Self { fs, reader }
    }

    /// Inspect every item in order, producing one row per item.
    ///
    /// Row order equals item order. Reader problems are collected as
    /// diagnostics; they never remove or reorder rows.
    pub fn run(&self, items: &[UpdateItem]) -> InspectionReport {
        let mut report = InspectionReport {
            rows: Vec::with_capacity(items.len()),
            diagnostics: Vec::new(),
        };

        for item in items {
            let row = self.inspect_with(item, &mut report.diagnostics);
            report.rows.push(row);
        }

        report
    }

    /// Inspect a single item, discarding diagnostics
    pub fn inspect(&self, item: &UpdateItem) -> ReportRow {
        let mut discarded = Vec::new();
        self.inspect_with(item, &mut discarded)
    }

    fn inspect_with(&self, item: &UpdateItem, diagnostics: &mut Vec<String>) -> ReportRow {
        // Absent items never spawn the reader
        if !self.fs.exists(&item.path) {
            return ReportRow::missing(&item.name);
        }

        let modified_at = self
            .fs
            .modified(&item.path)
            .map(DateTime::<Local>::from);

        let version = match self.reader.read(item) {
            Ok(lookup) => {
                if let Some(note) = self.exit_diagnostic(item, &lookup) {
                    diagnostics.push(note);
                }
                lookup.version
            }
            Err(err) => {
                diagnostics.push(format!("{}: {}", item.name, err));
                None
            }
        };

        ReportRow::new(&item.name, modified_at, version)
    }

    /// Describe an unsuccessful reader exit. The exit status never affects
    /// the reported version; it is only surfaced for diagnostics.
    fn exit_diagnostic(&self, item: &UpdateItem, lookup: &VersionLookup) -> Option<String> {
        if lookup.success {
            return None;
        }

        let code = lookup
            .exit_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let stderr = lookup.stderr.lines().next().unwrap_or("").trim();

        if stderr.is_empty() {
            Some(format!(
                "{}: {} exited with code {}",
                item.name,
                self.reader.tool(),
                code
            ))
        } else {
            Some(format!(
                "{}: {} exited with code {}: {}",
                item.name,
                self.reader.tool(),
                code,
                stderr
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::CommandOutput;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use std::path::{Path, PathBuf};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    /// Fake filesystem backed by a path map; `None` means the file exists
    /// but its attributes cannot be read
    struct FakeFilesystem {
        files: HashMap<PathBuf, Option<SystemTime>>,
    }

    impl FakeFilesystem {
        fn empty() -> Self {
            Self {
                files: HashMap::new(),
            }
        }

        fn with_file(path: &str, modified: Option<SystemTime>) -> Self {
            let mut files = HashMap::new();
            files.insert(PathBuf::from(path), modified);
            Self { files }
        }
    }

    impl Filesystem for FakeFilesystem {
        fn exists(&self, path: &Path) -> bool {
            self.files.contains_key(path)
        }

        fn modified(&self, path: &Path) -> Option<SystemTime> {
            self.files.get(path).copied().flatten()
        }
    }

    /// Fake runner that counts invocations and replays canned stdout. The
    /// call counter is shared so tests keep a handle after the runner
    /// moves into the inspector.
    struct CountingRunner {
        stdout: Vec<u8>,
        calls: Rc<Cell<usize>>,
    }

    impl CountingRunner {
        fn with_stdout(stdout: &str) -> (Self, Rc<Cell<usize>>) {
            let calls = Rc::new(Cell::new(0));
            let runner = Self {
                stdout: stdout.as_bytes().to_vec(),
                calls: Rc::clone(&calls),
            };
            (runner, calls)
        }
    }

    impl CommandRunner for CountingRunner {
        fn run(&self, _program: &str, _args: &[&str]) -> std::io::Result<CommandOutput> {
            self.calls.set(self.calls.get() + 1);
            Ok(CommandOutput {
                stdout: self.stdout.clone(),
                stderr: Vec::new(),
                success: true,
                exit_code: Some(0),
            })
        }
    }

    struct FailingRunner;

    impl CommandRunner for FailingRunner {
        fn run(&self, _program: &str, _args: &[&str]) -> std::io::Result<CommandOutput> {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such tool",
            ))
        }
    }

    fn sample_item() -> UpdateItem {
        UpdateItem::new("XProtect", "/tmp/XProtect.meta.plist", "Version")
    }

    fn sample_mtime() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(1_493_800_000)
    }

    #[test]
    fn test_absent_item_has_no_fields() {
        let (runner, _calls) = CountingRunner::with_stdout("2099\n");
        let inspector = Inspector::new(FakeFilesystem::empty(), runner);
        let row = inspector.inspect(&sample_item());
        assert!(row.is_empty());
        assert_eq!(row.name, "XProtect");
    }

    #[test]
    fn test_absent_item_never_spawns_reader() {
        let (runner, calls) = CountingRunner::with_stdout("2099\n");
        let inspector = Inspector::new(FakeFilesystem::empty(), runner);
        inspector.inspect(&sample_item());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_present_item_spawns_reader_once() {
        let fs = FakeFilesystem::with_file("/tmp/XProtect.meta.plist", Some(sample_mtime()));
        let (runner, calls) = CountingRunner::with_stdout("2099\n");
        let inspector = Inspector::new(fs, runner);
        let row = inspector.inspect(&sample_item());
        assert_eq!(row.version.as_deref(), Some("2099"));
        assert!(row.modified_at.is_some());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unreadable_attributes_keep_version() {
        let fs = FakeFilesystem::with_file("/tmp/XProtect.meta.plist", None);
        let (runner, _calls) = CountingRunner::with_stdout("135\n");
        let inspector = Inspector::new(fs, runner);
        let row = inspector.inspect(&sample_item());
        assert!(row.modified_at.is_none());
        assert_eq!(row.version.as_deref(), Some("135"));
    }

    #[test]
    fn test_launch_failure_degrades_version() {
        let fs = FakeFilesystem::with_file("/tmp/XProtect.meta.plist", Some(sample_mtime()));
        let inspector = Inspector::new(fs, FailingRunner);
        let row = inspector.inspect(&sample_item());
        assert!(row.version.is_none());
        assert!(row.modified_at.is_some());
    }

    #[test]
    fn test_launch_failure_recorded_as_diagnostic() {
        let fs = FakeFilesystem::with_file("/tmp/XProtect.meta.plist", Some(sample_mtime()));
        let inspector = Inspector::new(fs, FailingRunner);
        let report = inspector.run(&[sample_item()]);
        assert_eq!(report.len(), 1);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(report.diagnostics[0].contains("XProtect"));
        assert!(report.diagnostics[0].contains("failed to launch"));
    }

    #[test]
    fn test_unsuccessful_exit_recorded_as_diagnostic() {
        struct GrumpyRunner;

        impl CommandRunner for GrumpyRunner {
            fn run(&self, _program: &str, _args: &[&str]) -> std::io::Result<CommandOutput> {
                Ok(CommandOutput {
                    stdout: b"135\n".to_vec(),
                    stderr: b"domain default pair does not exist\n".to_vec(),
                    success: false,
                    exit_code: Some(1),
                })
            }
        }

        let fs = FakeFilesystem::with_file("/tmp/XProtect.meta.plist", Some(sample_mtime()));
        let inspector = Inspector::new(fs, GrumpyRunner);
        let report = inspector.run(&[sample_item()]);

        // Version still comes from the first stdout line
        assert_eq!(report.rows[0].version.as_deref(), Some("135"));
        assert_eq!(report.diagnostics.len(), 1);
        assert!(report.diagnostics[0].contains("exited with code 1"));
        assert!(report.diagnostics[0].contains("domain default pair"));
    }

    #[test]
    fn test_run_preserves_item_order() {
        let mut files = HashMap::new();
        files.insert(PathBuf::from("/tmp/b.plist"), Some(sample_mtime()));
        let fs = FakeFilesystem { files };
        let (runner, _calls) = CountingRunner::with_stdout("1\n");
        let inspector = Inspector::new(fs, runner);

        let items = vec![
            UpdateItem::new("Alpha", "/tmp/a.plist", "Version"),
            UpdateItem::new("Beta", "/tmp/b.plist", "Version"),
            UpdateItem::new("Gamma", "/tmp/c.plist", "Version"),
        ];
        let report = inspector.run(&items);

        assert_eq!(report.len(), 3);
        let names: Vec<_> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
        assert!(report.rows[0].is_empty());
        assert!(!report.rows[1].is_empty());
        assert!(report.rows[2].is_empty());
    }

    #[test]
    fn test_run_spawns_only_for_present_items() {
        let mut files = HashMap::new();
        files.insert(PathBuf::from("/tmp/b.plist"), Some(sample_mtime()));
        let fs = FakeFilesystem { files };
        let (runner, calls) = CountingRunner::with_stdout("1\n");
        let inspector = Inspector::new(fs, runner);

        let items = vec![
            UpdateItem::new("Alpha", "/tmp/a.plist", "Version"),
            UpdateItem::new("Beta", "/tmp/b.plist", "Version"),
        ];
        inspector.run(&items);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_custom_reader_tool_is_invoked() {
        struct EchoProgramRunner;

        impl CommandRunner for EchoProgramRunner {
            fn run(&self, program: &str, _args: &[&str]) -> std::io::Result<CommandOutput> {
                Ok(CommandOutput {
                    stdout: format!("{}\n", program).into_bytes(),
                    stderr: Vec::new(),
                    success: true,
                    exit_code: Some(0),
                })
            }
        }

        let fs = FakeFilesystem::with_file("/tmp/XProtect.meta.plist", Some(sample_mtime()));
        let reader = VersionReader::with_tool(EchoProgramRunner, "/opt/fake-defaults");
        let inspector = Inspector::with_reader(fs, reader);
        let row = inspector.inspect(&sample_item());
        assert_eq!(row.version.as_deref(), Some("/opt/fake-defaults"));
    }
}
