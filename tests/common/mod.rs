//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_dotbuild"))
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to create a Command with test environment
/// Clears `DOTBUILD_TOOL` and `DOTBUILD_LOG` so the caller's shell can't leak in
pub fn test_command() -> Command {
    let mut cmd = Command::new(get_binary_path());
    cmd.env_remove("DOTBUILD_TOOL");
    cmd.env_remove("DOTBUILD_LOG");
    cmd
}

/// Run dotbuild with the given arguments
pub fn run_dotbuild(args: &[&str]) -> Output {
    test_command()
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// A stand-in build tool that logs each action it receives.
///
/// The script appends its first argument to `calls.log` in the temp dir and
/// exits 3 when that argument equals `$FAKE_FAIL_ON`.
pub struct FakeTool {
    pub dir: tempfile::TempDir,
    pub script: PathBuf,
}

impl FakeTool {
    #[cfg(unix)]
    pub fn new() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = create_temp_dir();
        let script = dir.path().join("fake-dotnet");
        let log = dir.path().join("calls.log");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\necho \"$1\" >> '{}'\nif [ \"$1\" = \"$FAKE_FAIL_ON\" ]; then exit 3; fi\nexit 0\n",
                log.display()
            ),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        Self { dir, script }
    }

    /// Actions the tool was invoked with, in call order.
    pub fn calls(&self) -> Vec<String> {
        let log = self.dir.path().join("calls.log");
        match fs::read_to_string(log) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.script
    }

    /// Run dotbuild against this tool, failing on `fail_on` if given.
    pub fn run(&self, args: &[&str], fail_on: Option<&str>) -> Output {
        let mut cmd = test_command();
        cmd.arg("--tool").arg(self.path()).args(args);
        if let Some(action) = fail_on {
            cmd.env("FAKE_FAIL_ON", action);
        } else {
            cmd.env_remove("FAKE_FAIL_ON");
        }
        cmd.output().expect("Failed to execute command")
    }
}
