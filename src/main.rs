//! secwatch - macOS security update inventory CLI tool
//!
//! Checks a fixed catalog of macOS security-update components (XProtect,
//! Gatekeeper, SIP, MRT, ...) and prints one aligned table with each
//! component's last-modified date and installed version.

use clap::Parser;
use colored::Colorize;
use secwatch::catalog;
use secwatch::cli::CliArgs;
use secwatch::inspector::Inspector;
use secwatch::output::TableFormatter;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.no_color {
        colored::control::set_override(false);
    }

    // Print version info in verbose mode
    if args.verbose {
        eprintln!("secwatch v{}", env!("CARGO_PKG_VERSION"));
    }

    let items = catalog::items();
    let inspector = Inspector::system();
    let report = inspector.run(&items);

    // Output the table
    let formatter = TableFormatter::with_color(!args.no_color);
    let mut stdout = io::stdout().lock();
    formatter.format(&report.rows, &mut stdout)?;
    stdout.flush()?;

    // Print reader diagnostics in verbose mode
    if args.verbose && !report.diagnostics.is_empty() {
        eprintln!();
        eprintln!("Reader diagnostics:");
        for diagnostic in &report.diagnostics {
            if args.no_color {
                eprintln!("  - {}", diagnostic);
            } else {
                eprintln!("  {} {}", "✗".red(), diagnostic);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
