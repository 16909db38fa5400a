//! CLI argument parsing module for secwatch

use clap::Parser;

/// macOS security update inventory
#[derive(Parser, Debug, Clone)]
#[command(
    name = "secwatch",
    version,
    about = "Report installed macOS security update versions"
)]
pub struct CliArgs {
    /// Enable verbose output (per-item reader diagnostics on stderr)
    #[arg(long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
