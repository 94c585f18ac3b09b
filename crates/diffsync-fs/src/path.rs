//! Relative paths shared by the source and destination trees

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::{Error, Result};

/// A file path relative to the root of a synchronized tree.
///
/// Git reports paths with forward slashes relative to the repository root.
/// The same relative path addresses the file in both the source repository
/// and the destination directory, so it is stored verbatim and only turned
/// into a native path by [`TreePath::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TreePath {
    inner: String,
}

impl TreePath {
    /// Create a new TreePath from the path text reported by git.
    pub fn new(path: impl Into<String>) -> Self {
        Self { inner: path.into() }
    }

    /// Get the path as reported.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Resolve this path beneath `root`.
    ///
    /// Rejects empty paths, absolute paths and any `..` component so the
    /// result can never leave `root`.
    pub fn resolve(&self, root: &Path) -> Result<PathBuf> {
        let mut resolved = root.to_path_buf();
        let mut depth = 0usize;

        for component in Path::new(&self.inner).components() {
            match component {
                Component::Normal(segment) => {
                    resolved.push(segment);
                    depth += 1;
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(Error::OutsideRoot {
                        path: self.inner.clone(),
                    });
                }
            }
        }

        if depth == 0 {
            return Err(Error::EmptyPath);
        }

        Ok(resolved)
    }
}

impl AsRef<str> for TreePath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl std::fmt::Display for TreePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for TreePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TreePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
