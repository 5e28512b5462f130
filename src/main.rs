//! # dotbuild
//!
//! Sequence `dotnet` build actions from the command line.
//!
//! ## Usage
//!
//! - Default pipeline: `dotbuild` (clean, restore, build, test)
//! - Pick actions in any order: `dotbuild test clean`
//! - Preview without running: `dotbuild --dry-run run restore`
//!
//! See `dotbuild --help` for all options.

/// Entry point for the CLI tool.
fn main() {
    dotbuild::cli::run_cli();
}
