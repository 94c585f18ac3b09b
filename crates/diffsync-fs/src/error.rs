//! Error types for diffsync-fs

use std::path::PathBuf;

/// Result type for diffsync-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in diffsync-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a regular file")]
    NotAFile { path: PathBuf },

    #[error("Path is empty")]
    EmptyPath,

    #[error("Path '{path}' is not relative to the tree root")]
    OutsideRoot { path: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
