//! Copy and delete operations derived from a change report

use std::fmt;

use diffsync_fs::TreePath;
use diffsync_git::ChangeEntry;
use serde::Serialize;

/// One filesystem action against the destination tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum Operation {
    /// Copy the file from the source tree to the same path in the destination
    Copy(TreePath),
    /// Remove the file from the destination
    Delete(TreePath),
}

impl Operation {
    /// The path this operation acts on.
    pub fn path(&self) -> &TreePath {
        match self {
            Self::Copy(path) | Self::Delete(path) => path,
        }
    }

    /// Lowercase verb used in plans and logs.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Copy(_) => "copy",
            Self::Delete(_) => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb(), self.path())
    }
}

/// Expand change entries into operations, in report order.
///
/// Added and modified files become copies, deleted files become deletes, and
/// a rename becomes a delete of the old path immediately followed by a copy
/// of the new one. Unrecognized statuses produce nothing.
pub fn operations_from_changes(changes: &[ChangeEntry]) -> Vec<Operation> {
    let mut operations = Vec::with_capacity(changes.len());

    for change in changes {
        match change {
            ChangeEntry::Added(path) | ChangeEntry::Modified(path) => {
                operations.push(Operation::Copy(path.clone()));
            }
            ChangeEntry::Deleted(path) => {
                operations.push(Operation::Delete(path.clone()));
            }
            ChangeEntry::Renamed { from, to, .. } => {
                operations.push(Operation::Delete(from.clone()));
                operations.push(Operation::Copy(to.clone()));
            }
            ChangeEntry::Unrecognized { status } => {
                tracing::debug!(status = %status, "Ignoring unrecognized change status");
            }
        }
    }

    operations
}
