//! Subprocess runner for git invocations

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{Error, Result};

/// Exit status and captured streams of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `None` if the process was terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful invocation that printed `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed invocation with the given exit code and error stream.
    pub fn failed(status: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Whether the process exited with status zero.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Convert a non-zero exit into [`Error::CommandFailed`].
    pub fn check(self, args: &[&str]) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(Error::CommandFailed {
                command: args.join(" "),
                status: self.status,
                stdout: self.stdout.trim().to_string(),
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Runs git with a list of arguments inside a fixed working directory.
///
/// Implementations block until the command exits. A non-zero exit is not an
/// error at this level; callers decide with [`CommandOutput::check`].
pub trait GitRunner {
    fn run(&self, args: &[&str]) -> Result<CommandOutput>;
}

/// [`GitRunner`] backed by the `git` executable.
pub struct GitCli {
    /// Directory every command runs in
    workdir: PathBuf,
}

impl GitCli {
    /// Create a runner that executes git inside `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl GitRunner for GitCli {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        tracing::debug!(workdir = %self.workdir.display(), "git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::GitNotFound,
                _ => Error::Io(e),
            })?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
