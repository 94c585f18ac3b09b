//! Error types for diffsync-core

/// Result type for diffsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in diffsync-core operations
///
/// Per-operation copy and delete failures are not errors; they are recorded
/// in the [`crate::RunSummary`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Git error from diffsync-git
    #[error(transparent)]
    Git(#[from] diffsync_git::Error),

    /// Filesystem error from diffsync-fs
    #[error(transparent)]
    Fs(#[from] diffsync_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
