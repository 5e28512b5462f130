//! Resolved run configuration: which build tool to call and where.

use std::path::{Path, PathBuf};

/// Build tool invoked when neither `--tool` nor `DOTBUILD_TOOL` is set.
pub const DEFAULT_TOOL: &str = "dotnet";

/// Environment variable overriding the build tool.
pub const TOOL_ENV: &str = "DOTBUILD_TOOL";

/// Environment variable holding a tracing filter, e.g. `DOTBUILD_LOG=debug`.
pub const LOG_ENV: &str = "DOTBUILD_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    tool: String,
    working_dir: Option<PathBuf>,
}

impl Config {
    #[must_use]
    pub fn new(tool: impl Into<String>, working_dir: Option<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            working_dir,
        }
    }

    #[must_use]
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Directory subprocesses run in; `None` means the current directory.
    #[must_use]
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL, None)
    }
}
