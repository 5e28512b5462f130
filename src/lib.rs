//! # dotbuild
//!
//! Runs `dotnet` lifecycle actions (clean, restore, build, run, test) in a
//! fixed order, dropping duplicates and redundant steps, and stops at the
//! first action that fails.

pub mod action;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod plan;

pub use action::{Action, parse_actions};
pub use error::{Error, Result};
pub use plan::Plan;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
