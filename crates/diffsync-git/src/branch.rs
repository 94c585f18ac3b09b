//! Bringing the working and base branches up to date before diffing

use crate::{Error, GitRunner, Result};

/// What [`BranchUpdater::update`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchUpdate {
    /// Branch checked out before the update, and again after it
    pub original_branch: String,
    pub base_branch: String,
    /// Whether the base branch had to be checked out and pulled separately
    pub visited_base: bool,
}

/// Pulls the current branch and the base branch from their remotes.
///
/// The repository is checked out on the original branch again when the
/// update succeeds. When a step fails the update stops right there and the
/// original branch is not restored; after a failed base-branch pull or a
/// failed return checkout the repository is left on the base branch. The
/// returned error names the original branch so the caller can tell the user
/// where to go back to.
pub struct BranchUpdater<'a> {
    git: &'a dyn GitRunner,
}

impl<'a> BranchUpdater<'a> {
    pub fn new(git: &'a dyn GitRunner) -> Self {
        Self { git }
    }

    /// Get the name of the checked-out branch (`HEAD` when detached).
    pub fn current_branch(&self) -> Result<String> {
        let output = self.run(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(output.trim().to_string())
    }

    /// Pull the current branch, then the base branch if it differs.
    pub fn update(&self, base_branch: &str) -> Result<BranchUpdate> {
        let original_branch = self
            .current_branch()
            .map_err(|e| step_failed("reading the current branch", "<unknown>", e))?;

        tracing::info!("Pulling latest changes for current branch '{original_branch}'");
        self.run(&["pull"]).map_err(|e| {
            step_failed(&format!("pulling '{original_branch}'"), &original_branch, e)
        })?;

        let visited_base = original_branch != base_branch;
        if visited_base {
            tracing::info!("Checking out and updating base branch '{base_branch}'");
            self.run(&["checkout", base_branch]).map_err(|e| {
                step_failed(&format!("checking out '{base_branch}'"), &original_branch, e)
            })?;

            self.run(&["pull"]).map_err(|e| {
                warn_stranded(base_branch, &original_branch);
                step_failed(&format!("pulling '{base_branch}'"), &original_branch, e)
            })?;

            tracing::info!("Checking out original branch '{original_branch}'");
            self.run(&["checkout", &original_branch]).map_err(|e| {
                warn_stranded(base_branch, &original_branch);
                step_failed(
                    &format!("checking out '{original_branch}'"),
                    &original_branch,
                    e,
                )
            })?;
        }

        Ok(BranchUpdate {
            original_branch,
            base_branch: base_branch.to_string(),
            visited_base,
        })
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.git.run(args)?.check(args)?;
        Ok(output.stdout)
    }
}

/// Wrap a failed step, passing a missing git executable through unchanged.
fn step_failed(step: &str, original_branch: &str, error: Error) -> Error {
    match error {
        Error::GitNotFound => Error::GitNotFound,
        other => Error::BranchUpdateFailed {
            step: step.to_string(),
            original_branch: original_branch.to_string(),
            source: Box::new(other),
        },
    }
}

fn warn_stranded(base_branch: &str, original_branch: &str) {
    tracing::warn!(
        base = %base_branch,
        original = %original_branch,
        "Repository left on the base branch; check out the original branch manually"
    );
}
