//! Source repository handle

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Absolute path to a directory holding git metadata.
///
/// Resolved once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    root: PathBuf,
}

impl RepositoryHandle {
    /// Resolve `path` to an absolute directory and verify `.git` exists in it.
    ///
    /// A `.git` file (as used by linked worktrees and submodules) is accepted
    /// as well as a `.git` directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let root = dunce::canonicalize(path).map_err(|_| Error::NotAGitRepository {
            path: std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
        })?;

        if !root.join(".git").exists() {
            return Err(Error::NotAGitRepository { path: root });
        }

        Ok(Self { root })
    }

    /// Get the repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AsRef<Path> for RepositoryHandle {
    fn as_ref(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_accepts_git_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();

        let handle = RepositoryHandle::open(temp.path()).unwrap();
        assert!(handle.root().is_absolute());
        assert!(handle.root().join(".git").is_dir());
    }

    #[test]
    fn test_open_accepts_git_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".git"), "gitdir: /elsewhere\n").unwrap();

        assert!(RepositoryHandle::open(temp.path()).is_ok());
    }

    #[test]
    fn test_open_rejects_plain_directory() {
        let temp = TempDir::new().unwrap();

        let err = RepositoryHandle::open(temp.path()).unwrap_err();
        assert!(matches!(err, Error::NotAGitRepository { .. }));
        assert!(err.to_string().contains("is not a git repository"));
    }

    #[test]
    fn test_open_rejects_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let err = RepositoryHandle::open(&missing).unwrap_err();
        match err {
            Error::NotAGitRepository { path } => assert!(path.ends_with("nope")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
