use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

const DEFAULT_SHELL: &str = "/bin/sh";

/// The ambient process state a command runs under, captured explicitly
/// so callers (and tests) control it instead of reading globals.
#[derive(Debug, Clone)]
pub struct ExecContext {
    pub shell: String,
    pub workdir: PathBuf,
}

impl ExecContext {
    /// Shell from `$SHELL` with a `/bin/sh` fallback; `workdir` should
    /// be the directory containing the manifest, so commands behave
    /// the same no matter which subdirectory the tool is invoked from.
    pub fn from_env(workdir: &Path) -> Self {
        Self {
            shell: env::var("SHELL").unwrap_or_else(|_| DEFAULT_SHELL.to_string()),
            workdir: workdir.to_path_buf(),
        }
    }

    /// Runs the finished command line under the shell and hands back
    /// the child's exit code unchanged. A child killed by a signal has
    /// no exit code; report 1.
    pub fn run(&self, command_line: &str) -> Result<i32> {
        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command_line)
            .current_dir(&self.workdir)
            .status()
            .with_context(|| format!("failed to spawn shell '{}'", self.shell))?;

        Ok(status.code().unwrap_or(1))
    }
}
