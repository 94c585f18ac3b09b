//! Parsing `git diff --name-status -z` reports
//!
//! With `-z` every status and path is its own NUL-terminated field and paths
//! are emitted verbatim, so names containing quotes, backslashes, tabs or
//! newlines survive unchanged.

use diffsync_fs::TreePath;

use crate::{Error, GitRunner, Result};

/// One record of a name-status report.
///
/// Renames always carry two paths and every other status carries one, so
/// the arity is part of the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEntry {
    Added(TreePath),
    Modified(TreePath),
    Deleted(TreePath),
    Renamed {
        /// Similarity percentage from `R<score>`, when present
        score: Option<u8>,
        from: TreePath,
        to: TreePath,
    },
    /// A status code diffsync does not act on (copies, type changes,
    /// unmerged entries and anything newer git versions add)
    Unrecognized { status: String },
}

/// Run `git diff --name-status -z` against `base` and parse the report.
///
/// The diff compares `base` with the working tree. A non-zero exit becomes
/// [`Error::DiffCommandFailed`] carrying git's error stream.
pub fn diff_name_status(git: &dyn GitRunner, base: &str) -> Result<Vec<ChangeEntry>> {
    let args = ["diff", "--name-status", "-z", base, "--"];
    let output = git.run(&args)?;

    if !output.success() {
        return Err(Error::DiffCommandFailed {
            base: base.to_string(),
            stderr: output.stderr.trim().to_string(),
        });
    }

    Ok(parse_name_status(&output.stdout))
}

/// Parse a NUL-separated name-status report, preserving record order.
///
/// A record is a status field followed by one path, or two for renames and
/// copies. A record cut short by the end of the report is logged and dropped.
pub fn parse_name_status(report: &str) -> Vec<ChangeEntry> {
    let mut fields = report.split('\0').filter(|field| !field.is_empty());
    let mut entries = Vec::new();

    while let Some(status) = fields.next() {
        match parse_record(status, &mut fields) {
            Some(entry) => entries.push(entry),
            None => tracing::warn!(status = %status, "Skipping truncated name-status record"),
        }
    }

    entries
}

fn parse_record<'a>(
    status: &str,
    fields: &mut impl Iterator<Item = &'a str>,
) -> Option<ChangeEntry> {
    if let Some(score) = status.strip_prefix('R') {
        let from = fields.next()?;
        let to = fields.next()?;
        return Some(ChangeEntry::Renamed {
            score: score.parse().ok(),
            from: TreePath::from(from),
            to: TreePath::from(to),
        });
    }

    // Copies carry two paths; consume both to stay aligned.
    if status.starts_with('C') {
        fields.next()?;
        fields.next()?;
        return Some(ChangeEntry::Unrecognized {
            status: status.to_string(),
        });
    }

    let path = TreePath::from(fields.next()?);
    Some(match status {
        "A" => ChangeEntry::Added(path),
        "M" => ChangeEntry::Modified(path),
        "D" => ChangeEntry::Deleted(path),
        other => ChangeEntry::Unrecognized {
            status: other.to_string(),
        },
    })
}
