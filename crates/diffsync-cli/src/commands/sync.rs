//! The sync command
//!
//! Resolves both trees, updates branches, then plans, confirms and applies
//! the diff. Text output goes to stdout; with `--json` stdout carries only the
//! final report.

use colored::Colorize;

use diffsync_core::{OperationPlan, Prompt, SyncConfig, SyncOutcome, SyncSession};
use diffsync_git::GitCli;

use crate::cli::Cli;
use crate::error::Result;
use crate::interactive::{DeclinePrompt, TerminalPrompt};
use crate::report;

/// Run one synchronization described by the parsed arguments.
pub fn run_sync(cli: &Cli) -> Result<()> {
    let config = SyncConfig::new(&cli.source_repo, &cli.destination_directory)?
        .with_base_branch(cli.base_branch.clone())
        .with_assume_yes(cli.yes)
        .with_dry_run(cli.dry_run);

    let text = !cli.json;
    if text {
        println!("Source repository: {}", config.source.root().display());
        println!("Destination directory: {}", config.destination.display());
        println!("Updating branches...");
    }

    let git = GitCli::new(config.source.root());
    let session = SyncSession::new(&config, &git);
    session.update_branches()?;
    if text {
        println!("{}", "Branches updated successfully.".green());
    }

    let mut prompt: Box<dyn Prompt> = if cli.json {
        Box::new(DeclinePrompt)
    } else {
        Box::new(TerminalPrompt)
    };
    let mut show_plan = |plan: &OperationPlan| {
        if text {
            report::print_lines(&report::plan_lines(plan));
        }
    };
    let outcome = session.sync(prompt.as_mut(), &mut show_plan)?;

    if cli.json {
        let value = report::json_report(&outcome);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match outcome {
        SyncOutcome::NoChanges => println!("No changed files found."),
        SyncOutcome::DryRun { plan } => {
            println!("{}", "Dry run: no changes applied.".yellow());
            report::print_lines(&report::operation_lines(&plan));
        }
        SyncOutcome::Cancelled { .. } => println!("Operation cancelled by user."),
        SyncOutcome::Completed { summary, .. } => {
            report::print_lines(&report::summary_lines(&summary));
        }
    }

    Ok(())
}
