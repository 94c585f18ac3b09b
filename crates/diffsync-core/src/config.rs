//! Run configuration

use std::path::{Path, PathBuf};

use diffsync_git::RepositoryHandle;

use crate::Result;

/// Base branch used when none is given.
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// Everything one sync run needs to know, resolved once at startup.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Repository whose branch diff drives the sync
    pub source: RepositoryHandle,
    /// Absolute root of the tree that receives the changes
    pub destination: PathBuf,
    /// Branch the working branch is compared against
    pub base_branch: String,
    /// Skip the confirmation prompt
    pub assume_yes: bool,
    /// Compute and show the plan without applying it
    pub dry_run: bool,
}

impl SyncConfig {
    /// Resolve both trees.
    ///
    /// Fails with [`diffsync_git::Error::NotAGitRepository`] when `source_repo`
    /// has no `.git`. The destination is made absolute but does not need to
    /// exist yet.
    pub fn new(source_repo: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<Self> {
        let source = RepositoryHandle::open(source_repo)?;
        let destination = destination.as_ref();
        let destination = std::path::absolute(destination)
            .map_err(|e| diffsync_fs::Error::io(destination, e))?;

        Ok(Self {
            source,
            destination,
            base_branch: DEFAULT_BASE_BRANCH.to_string(),
            assume_yes: false,
            dry_run: false,
        })
    }

    pub fn with_base_branch(mut self, base_branch: impl Into<String>) -> Self {
        self.base_branch = base_branch.into();
        self
    }

    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
