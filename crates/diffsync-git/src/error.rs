//! Error types for diffsync-git

use std::path::PathBuf;

/// Result type for diffsync-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in diffsync-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{path} is not a git repository.")]
    NotAGitRepository { path: PathBuf },

    #[error("'git' command not found. Is git installed and in your PATH?")]
    GitNotFound,

    #[error("Failed to run git: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "`git {command}` failed ({})\nCommand output:\n{stdout}\nCommand error:\n{stderr}",
        describe_status(.status)
    )]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("Error updating git branches while {step} (original branch: '{original_branch}'): {source}")]
    BranchUpdateFailed {
        step: String,
        original_branch: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Error running git diff against branch '{base}':\n{stderr}")]
    DiffCommandFailed { base: String, stderr: String },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
