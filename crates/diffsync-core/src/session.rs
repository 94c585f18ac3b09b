//! One sync run from branch update to execution

use diffsync_git::{BranchUpdate, BranchUpdater, GitRunner, diff_name_status};

use crate::{
    Decision, OperationPlan, Prompt, Result, RunSummary, SyncConfig, SyncExecutor, confirm,
    operations_from_changes,
};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The change report produced no operations
    NoChanges,
    /// The plan was computed and shown but not applied
    DryRun { plan: OperationPlan },
    /// The user declined the plan; nothing was touched
    Cancelled { plan: OperationPlan },
    /// The plan was applied
    Completed {
        plan: OperationPlan,
        summary: RunSummary,
    },
}

/// Drives one run for a [`SyncConfig`] using the given git runner.
///
/// The runner must execute inside the configured source repository.
pub struct SyncSession<'a> {
    config: &'a SyncConfig,
    git: &'a dyn GitRunner,
}

impl<'a> SyncSession<'a> {
    pub fn new(config: &'a SyncConfig, git: &'a dyn GitRunner) -> Self {
        Self { config, git }
    }

    pub fn config(&self) -> &SyncConfig {
        self.config
    }

    /// Pull the working and base branches.
    pub fn update_branches(&self) -> Result<BranchUpdate> {
        Ok(BranchUpdater::new(self.git).update(&self.config.base_branch)?)
    }

    /// Diff the working tree against the base branch and build the plan.
    pub fn plan(&self) -> Result<OperationPlan> {
        let changes = diff_name_status(self.git, &self.config.base_branch)?;
        let operations = operations_from_changes(&changes);
        tracing::debug!(
            entries = changes.len(),
            operations = operations.len(),
            "Built operation plan"
        );
        Ok(OperationPlan::new(operations))
    }

    /// Apply a plan to the destination tree.
    pub fn execute(&self, plan: &OperationPlan) -> RunSummary {
        SyncExecutor::new(self.config.source.root(), &self.config.destination)
            .execute(plan.operations())
    }

    /// Plan, confirm and apply.
    ///
    /// `show_plan` is called with a non-empty plan before the confirmation
    /// gate so the caller can render it. Branches are not updated here; call
    /// [`SyncSession::update_branches`] first.
    pub fn sync(
        &self,
        prompt: &mut dyn Prompt,
        show_plan: &mut dyn FnMut(&OperationPlan),
    ) -> Result<SyncOutcome> {
        let plan = self.plan()?;
        if plan.is_empty() {
            return Ok(SyncOutcome::NoChanges);
        }

        show_plan(&plan);

        if self.config.dry_run {
            return Ok(SyncOutcome::DryRun { plan });
        }

        match confirm(self.config.assume_yes, prompt)? {
            Decision::Cancel => Ok(SyncOutcome::Cancelled { plan }),
            Decision::Proceed => {
                let summary = self.execute(&plan);
                Ok(SyncOutcome::Completed { plan, summary })
            }
        }
    }
}
