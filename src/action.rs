//! Build actions and command-line parsing of action names.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One step of the build lifecycle.
///
/// Variants are declared in canonical order, so the derived `Ord` sorts
/// clean < restore < build < run < test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Clean,
    Restore,
    Build,
    Run,
    Test,
}

impl Action {
    /// Every action, in canonical order.
    pub const ALL: [Action; 5] = [
        Action::Clean,
        Action::Restore,
        Action::Build,
        Action::Run,
        Action::Test,
    ];

    /// Actions run when none are given on the command line.
    pub const DEFAULT: [Action; 4] = [
        Action::Clean,
        Action::Restore,
        Action::Build,
        Action::Test,
    ];

    /// Lowercase name, also the build-tool subcommand.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Action::Clean => "clean",
            Action::Restore => "restore",
            Action::Build => "build",
            Action::Run => "run",
            Action::Test => "test",
        }
    }

    /// Position in the canonical order.
    #[must_use]
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Case-insensitive lookup by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Action> {
        let lower = name.to_lowercase();
        Self::ALL.into_iter().find(|action| action.name() == lower)
    }

    /// The command line used to run this action with the given build tool.
    #[must_use]
    pub fn command(self, tool: &str) -> String {
        format!("{} {}", tool, self.name())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Action::from_name(s).ok_or_else(|| Error::UnknownAction {
            token: s.to_string(),
            available: available_actions(),
        })
    }
}

/// Comma-separated list of all action names.
#[must_use]
pub fn available_actions() -> String {
    Action::ALL
        .iter()
        .map(|a| a.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse raw arguments into actions.
///
/// No arguments yields [`Action::DEFAULT`]. Otherwise every argument must name
/// an action; duplicates are kept. The first unknown name aborts parsing.
///
/// # Errors
///
/// Returns [`Error::UnknownAction`] for the first argument that is not an action name.
pub fn parse_actions<S: AsRef<str>>(args: &[S]) -> Result<Vec<Action>> {
    if args.is_empty() {
        return Ok(Action::DEFAULT.to_vec());
    }

    args.iter().map(|arg| arg.as_ref().parse()).collect()
}
