//! Error types for parsing and executing actions.

use crate::action::Action;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown action: {token}\nAvailable actions: {available}")]
    UnknownAction { token: String, available: String },

    #[error("Action '{action}' failed. Stopping.")]
    ActionFailed { action: Action, status: ExitStatus },

    #[error("Action '{action}' failed. Stopping.")]
    Spawn {
        action: Action,
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Action '{action}' failed. Stopping.")]
    ToolNotFound { action: Action, program: String },
}

impl Error {
    /// The action that failed, if this error came from execution.
    #[must_use]
    pub fn action(&self) -> Option<Action> {
        match self {
            Self::UnknownAction { .. } => None,
            Self::ActionFailed { action, .. }
            | Self::Spawn { action, .. }
            | Self::ToolNotFound { action, .. } => Some(*action),
        }
    }

    /// Process exit code for this error. Every failure exits with 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// One-line cause for execution failures, shown below the stop message.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::UnknownAction { .. } => None,
            Self::ActionFailed { status, .. } => Some(format!("Command failed with status: {status}")),
            Self::Spawn {
                program, source, ..
            } => Some(format!("Could not start '{program}': {source}")),
            Self::ToolNotFound { program, .. } => {
                Some(format!("Build tool '{program}' was not found on PATH"))
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
