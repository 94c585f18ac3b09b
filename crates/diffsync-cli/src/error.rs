//! Error types for diffsync-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from diffsync-core
    #[error(transparent)]
    Core(#[from] diffsync_core::Error),

    /// Error from diffsync-git
    #[error(transparent)]
    Git(#[from] diffsync_git::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
