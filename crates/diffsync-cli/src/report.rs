//! Terminal rendering of plans and run summaries
//!
//! Successes are green, failures and deletions red, skips grey. Rendering
//! returns lines so callers decide where they go.

use colored::Colorize;
use diffsync_core::{Operation, OperationPlan, RunSummary, SyncOutcome};
use serde_json::{Value, json};

/// Counts of pending operations shown before confirmation.
pub fn plan_lines(plan: &OperationPlan) -> Vec<String> {
    vec![
        "Summary of pending operations:".to_string(),
        format!("  - To be copied: {} file(s)", plan.copies())
            .green()
            .to_string(),
        format!("  - To be deleted: {} file(s)", plan.deletes())
            .red()
            .to_string(),
    ]
}

/// One line per planned operation, for dry runs.
pub fn operation_lines(plan: &OperationPlan) -> Vec<String> {
    plan.operations()
        .iter()
        .map(|op| match op {
            Operation::Copy(_) => format!("  {op}").green().to_string(),
            Operation::Delete(_) => format!("  {op}").red().to_string(),
        })
        .collect()
}

/// Final counts; failure and skip lines only when nonzero.
pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![
        "Synchronization complete.".to_string(),
        format!("  - Copied: {}", summary.copied).green().to_string(),
    ];
    if summary.copy_failed > 0 {
        lines.push(
            format!("  - Copy Failed: {}", summary.copy_failed)
                .red()
                .to_string(),
        );
    }
    lines.push(format!("  - Deleted: {}", summary.deleted).red().to_string());
    if summary.delete_failed > 0 {
        lines.push(
            format!("  - Delete Failed: {}", summary.delete_failed)
                .red()
                .to_string(),
        );
    }
    if summary.delete_skipped > 0 {
        lines.push(
            format!(
                "  - Delete Skipped (already gone): {}",
                summary.delete_skipped
            )
            .dimmed()
            .to_string(),
        );
    }
    lines
}

/// Machine-readable report of a finished run.
pub fn json_report(outcome: &SyncOutcome) -> Value {
    match outcome {
        SyncOutcome::NoChanges => json!({
            "status": "no_changes",
            "operations": 0,
        }),
        SyncOutcome::DryRun { plan } => json!({
            "status": "dry_run",
            "operations": plan.len(),
            "planned": plan.operations(),
        }),
        SyncOutcome::Cancelled { plan } => json!({
            "status": "cancelled",
            "operations": plan.len(),
        }),
        SyncOutcome::Completed { plan, summary } => json!({
            "status": if summary.is_success() { "success" } else { "partial" },
            "operations": plan.len(),
            "copied": summary.copied,
            "copy_failed": summary.copy_failed,
            "deleted": summary.deleted,
            "delete_failed": summary.delete_failed,
            "delete_skipped": summary.delete_skipped,
            "failures": summary.failures,
        }),
    }
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
