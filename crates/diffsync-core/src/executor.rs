//! Applying operations to the destination tree

use std::path::PathBuf;

use diffsync_fs::{TreePath, io};
use serde::Serialize;

use crate::Operation;

/// An operation that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationFailure {
    pub operation: Operation,
    pub message: String,
}

/// Outcome counts of one run.
///
/// Every operation lands in exactly one bucket: copies are copied or
/// failed, deletes are deleted, skipped (already absent) or failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub copies_attempted: usize,
    pub copied: usize,
    pub copy_failed: usize,
    pub deletes_attempted: usize,
    pub deleted: usize,
    pub delete_skipped: usize,
    pub delete_failed: usize,
    pub failures: Vec<OperationFailure>,
}

impl RunSummary {
    /// Total operations attempted.
    pub fn attempted(&self) -> usize {
        self.copies_attempted + self.deletes_attempted
    }

    /// Total operations that failed.
    pub fn failed(&self) -> usize {
        self.copy_failed + self.delete_failed
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn record_failure(&mut self, operation: &Operation, message: String) {
        tracing::warn!(operation = %operation, "{message}");
        match operation {
            Operation::Copy(_) => self.copy_failed += 1,
            Operation::Delete(_) => self.delete_failed += 1,
        }
        self.failures.push(OperationFailure {
            operation: operation.clone(),
            message,
        });
    }
}

/// Applies operations from a source tree to a destination tree.
///
/// The source tree is only ever read. A failing operation is recorded in the
/// summary and the executor moves on to the next one.
pub struct SyncExecutor {
    source_root: PathBuf,
    destination_root: PathBuf,
}

impl SyncExecutor {
    pub fn new(source_root: impl Into<PathBuf>, destination_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            destination_root: destination_root.into(),
        }
    }

    /// Apply every operation in order.
    pub fn execute(&self, operations: &[Operation]) -> RunSummary {
        let mut summary = RunSummary::default();

        for operation in operations {
            match operation {
                Operation::Copy(path) => self.copy(operation, path, &mut summary),
                Operation::Delete(path) => self.delete(operation, path, &mut summary),
            }
        }

        summary
    }

    fn copy(&self, operation: &Operation, path: &TreePath, summary: &mut RunSummary) {
        summary.copies_attempted += 1;

        let (source, destination) = match (
            path.resolve(&self.source_root),
            path.resolve(&self.destination_root),
        ) {
            (Ok(source), Ok(destination)) => (source, destination),
            (Err(e), _) | (_, Err(e)) => {
                summary.record_failure(operation, e.to_string());
                return;
            }
        };

        // An earlier entry in the same report may have been superseded, e.g.
        // a file added and then removed again on the working branch.
        if !source.exists() {
            summary.record_failure(
                operation,
                format!(
                    "Source file for copy does not exist, skipping: {}",
                    source.display()
                ),
            );
            return;
        }

        tracing::debug!("Copying: {path}");
        match io::copy_preserving(&source, &destination) {
            Ok(_) => summary.copied += 1,
            Err(e) => summary.record_failure(operation, format!("Error copying {path}: {e}")),
        }
    }

    fn delete(&self, operation: &Operation, path: &TreePath, summary: &mut RunSummary) {
        summary.deletes_attempted += 1;

        let destination = match path.resolve(&self.destination_root) {
            Ok(destination) => destination,
            Err(e) => {
                summary.record_failure(operation, e.to_string());
                return;
            }
        };

        if !destination.is_file() {
            tracing::debug!(
                "File to delete already gone, skipping: {}",
                destination.display()
            );
            summary.delete_skipped += 1;
            return;
        }

        tracing::debug!("Deleting: {path}");
        match io::remove_file(&destination) {
            Ok(()) => {
                summary.deleted += 1;
                io::prune_empty_parents(&destination, &self.destination_root);
            }
            Err(e) => summary.record_failure(operation, format!("Error deleting {path}: {e}")),
        }
    }
}
