//! Sequential execution of a plan, stopping at the first failure.

use crate::action::Action;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::plan::Plan;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Runs a single action to completion.
pub trait Runner {
    /// The command line shown before the action runs.
    fn command_line(&self, action: Action) -> String;

    /// Run the action, blocking until it finishes.
    ///
    /// # Errors
    ///
    /// Returns an error if the action could not be started or did not succeed.
    fn run(&mut self, action: Action) -> Result<()>;
}

/// Spawns the build tool with inherited stdio.
pub struct CommandRunner {
    tool: String,
    working_dir: Option<PathBuf>,
}

impl CommandRunner {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            tool: config.tool().to_string(),
            working_dir: config.working_dir().map(PathBuf::from),
        }
    }

    fn resolve_program(&self, action: Action) -> Result<PathBuf> {
        let cwd = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };
        which::which_in(&self.tool, std::env::var_os("PATH"), cwd).map_err(|e| {
            tracing::debug!(tool = %self.tool, error = %e, "build tool lookup failed");
            Error::ToolNotFound {
                action,
                program: self.tool.clone(),
            }
        })
    }
}

impl Runner for CommandRunner {
    fn command_line(&self, action: Action) -> String {
        action.command(&self.tool)
    }

    fn run(&mut self, action: Action) -> Result<()> {
        let program = self.resolve_program(action)?;
        tracing::debug!(program = %program.display(), arg = action.name(), "spawning");

        let mut cmd = Command::new(&program);
        cmd.arg(action.name())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|source| Error::Spawn {
            action,
            program: self.tool.clone(),
            source,
        })?;
        tracing::debug!(%action, %status, "finished");

        if !status.success() {
            return Err(Error::ActionFailed { action, status });
        }
        Ok(())
    }
}

/// Echoes commands without running anything.
pub struct DryRunner {
    tool: String,
}

impl DryRunner {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            tool: config.tool().to_string(),
        }
    }
}

impl Runner for DryRunner {
    fn command_line(&self, action: Action) -> String {
        action.command(&self.tool)
    }

    fn run(&mut self, _action: Action) -> Result<()> {
        Ok(())
    }
}

/// Run each action of the plan in order.
///
/// Each command is echoed before it starts. The first failing action ends the
/// run; later actions are never started and earlier ones are not undone.
///
/// # Errors
///
/// Returns the error of the first action that fails.
pub fn execute_plan<R: Runner + ?Sized>(plan: &Plan, runner: &mut R) -> Result<()> {
    for &action in plan.actions() {
        println!("\n> {}", runner.command_line(action));
        runner.run(action)?;
    }
    Ok(())
}
