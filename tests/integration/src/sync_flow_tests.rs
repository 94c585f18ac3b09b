//! End-to-end sync flows against real git repositories
//!
//! Exercises branch update, diffing and execution together through
//! `SyncSession` with the real `git` CLI.

use diffsync_core::{OperationPlan, Prompt, SyncConfig, SyncOutcome, SyncSession};
use diffsync_git::{BranchUpdater, GitCli, diff_name_status};
use diffsync_test_utils::{GitFixture, TestTree};
use pretty_assertions::assert_eq;

struct NeverAsked;

impl Prompt for NeverAsked {
    fn ask(&mut self, question: &str) -> std::io::Result<String> {
        panic!("prompt should not be shown: {question}");
    }
}

fn run(config: &SyncConfig) -> SyncOutcome {
    let git = GitCli::new(config.source.root());
    let session = SyncSession::new(config, &git);
    session.update_branches().unwrap();
    session
        .sync(&mut NeverAsked, &mut |_: &OperationPlan| {})
        .unwrap()
}

/// `main` holds three files; `feature` adds, modifies, deletes and renames.
fn feature_repo() -> GitFixture {
    let repo = GitFixture::new();
    repo.write("src/lib.txt", "lib v1");
    repo.write("docs/guide.txt", "guide");
    repo.write("legacy/notes.txt", "notes");
    repo.commit_all("Base tree");
    repo.git(&["push"]);

    repo.checkout_new_branch("feature");
    repo.write("src/lib.txt", "lib v2");
    repo.write("src/new/module.txt", "module");
    repo.remove("docs/guide.txt");
    std::fs::create_dir_all(repo.work().join("notes")).unwrap();
    repo.git(&["mv", "legacy/notes.txt", "notes/notes.txt"]);
    repo.commit_all("Feature work");
    repo
}

fn main_checkout() -> TestTree {
    let dest = TestTree::new();
    dest.write("src/lib.txt", "lib v1")
        .write("docs/guide.txt", "guide")
        .write("legacy/notes.txt", "notes")
        .write("local-only.txt", "keep me");
    dest
}

#[test]
fn test_feature_branch_is_mirrored() {
    let repo = feature_repo();
    let dest = main_checkout();
    let config = SyncConfig::new(repo.work(), dest.root())
        .unwrap()
        .with_assume_yes(true);

    let SyncOutcome::Completed { plan, summary } = run(&config) else {
        panic!("expected a completed run");
    };

    assert_eq!(plan.copies(), 3);
    assert_eq!(plan.deletes(), 2);
    assert!(summary.is_success());
    dest.assert_file_eq("src/lib.txt", "lib v2");
    dest.assert_file_eq("src/new/module.txt", "module");
    dest.assert_file_eq("notes/notes.txt", "notes");
    dest.assert_file_not_exists("docs");
    dest.assert_file_not_exists("legacy");
    dest.assert_file_eq("local-only.txt", "keep me");
    assert_eq!(repo.current_branch(), "feature");
}

#[test]
fn test_second_run_is_idempotent() {
    let repo = feature_repo();
    let dest = main_checkout();
    let config = SyncConfig::new(repo.work(), dest.root())
        .unwrap()
        .with_assume_yes(true);

    run(&config);
    let SyncOutcome::Completed { summary, .. } = run(&config) else {
        panic!("expected a completed run");
    };

    assert_eq!(summary.copied, 3);
    assert_eq!(summary.deleted, 0);
    assert_eq!(summary.delete_skipped, 2);
    assert!(summary.is_success());
    dest.assert_file_eq("src/lib.txt", "lib v2");
}

#[test]
fn test_base_branch_is_pulled_from_remote() {
    let repo = feature_repo();

    // Someone else lands the same change on main through the remote.
    let other = tempfile::TempDir::new().unwrap();
    let clone = other.path().join("clone");
    std::process::Command::new("git")
        .arg("clone")
        .arg(repo.remote())
        .arg(&clone)
        .output()
        .unwrap();
    for args in [
        &["config", "user.email", "other@test.com"][..],
        &["config", "user.name", "Other"],
        &["config", "commit.gpgsign", "false"],
    ] {
        std::process::Command::new("git")
            .args(args)
            .current_dir(&clone)
            .output()
            .unwrap();
    }
    std::fs::write(clone.join("upstream.txt"), "from upstream").unwrap();
    for args in [
        &["add", "-A"][..],
        &["commit", "-m", "Upstream change"],
        &["push", "origin", "main"],
    ] {
        let out = std::process::Command::new("git")
            .args(args)
            .current_dir(&clone)
            .output()
            .unwrap();
        assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    }

    let git = GitCli::new(repo.work());
    let update = BranchUpdater::new(&git).update("main").unwrap();

    assert!(update.visited_base);
    assert_eq!(update.original_branch, "feature");
    assert_eq!(repo.current_branch(), "feature");
    assert_eq!(repo.git(&["show", "main:upstream.txt"]), "from upstream");

    // The working branch lacks the upstream file, so it is reported deleted.
    let changes = diff_name_status(&git, "main").unwrap();
    assert!(changes.iter().any(|c| matches!(
        c,
        diffsync_git::ChangeEntry::Deleted(path) if path.as_str() == "upstream.txt"
    )));
}

#[test]
fn test_uncommitted_working_tree_changes_are_included() {
    let repo = GitFixture::new();
    repo.write("draft.txt", "uncommitted");
    repo.git(&["add", "draft.txt"]);
    let dest = TestTree::new();
    let config = SyncConfig::new(repo.work(), dest.root())
        .unwrap()
        .with_assume_yes(true);

    let SyncOutcome::Completed { summary, .. } = run(&config) else {
        panic!("expected a completed run");
    };

    assert_eq!(summary.copied, 1);
    dest.assert_file_eq("draft.txt", "uncommitted");
}

#[test]
fn test_dry_run_leaves_destination_untouched() {
    let repo = feature_repo();
    let dest = main_checkout();
    let config = SyncConfig::new(repo.work(), dest.root())
        .unwrap()
        .with_dry_run(true);

    let outcome = run(&config);

    assert!(matches!(outcome, SyncOutcome::DryRun { ref plan } if plan.len() == 5));
    dest.assert_file_eq("src/lib.txt", "lib v1");
    dest.assert_file_exists("docs/guide.txt");
}

#[test]
fn test_missing_base_branch_names_original_branch() {
    let repo = feature_repo();
    let dest = main_checkout();
    let config = SyncConfig::new(repo.work(), dest.root())
        .unwrap()
        .with_base_branch("nope");
    let git = GitCli::new(config.source.root());

    let err = SyncSession::new(&config, &git)
        .update_branches()
        .unwrap_err()
        .to_string();

    assert!(err.contains("checking out 'nope'"), "{err}");
    assert!(err.contains("original branch: 'feature'"), "{err}");
    dest.assert_file_eq("src/lib.txt", "lib v1");
}

#[cfg(unix)]
#[test]
fn test_paths_git_would_quote_are_synced_verbatim() {
    let repo = GitFixture::new();
    repo.write("back\\slash.txt", "old");
    repo.commit_all("Backslash file");
    repo.git(&["push"]);

    repo.checkout_new_branch("odd-names");
    repo.remove("back\\slash.txt");
    repo.write("notes/say \"hi\".txt", "quoted");
    repo.write("tab\there.txt", "tabbed");
    repo.commit_all("Odd names");

    let dest = TestTree::new();
    dest.write("back\\slash.txt", "old");
    let config = SyncConfig::new(repo.work(), dest.root())
        .unwrap()
        .with_assume_yes(true);

    let SyncOutcome::Completed { summary, .. } = run(&config) else {
        panic!("expected a completed run");
    };

    assert!(summary.is_success(), "{:?}", summary.failures);
    assert_eq!(summary.copied, 2);
    assert_eq!(summary.deleted, 1);
    dest.assert_file_eq("notes/say \"hi\".txt", "quoted");
    dest.assert_file_eq("tab\there.txt", "tabbed");
    dest.assert_file_not_exists("back\\slash.txt");
}
