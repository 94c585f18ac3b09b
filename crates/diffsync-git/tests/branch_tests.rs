use diffsync_git::{BranchUpdater, CommandOutput, Error};
use diffsync_test_utils::ScriptedGit;
use pretty_assertions::assert_eq;

const CURRENT: &[&str] = &["rev-parse", "--abbrev-ref", "HEAD"];

#[test]
fn test_update_on_base_branch_only_pulls_once() {
    let git = ScriptedGit::new()
        .expect(CURRENT, CommandOutput::ok("main\n"))
        .expect(&["pull"], CommandOutput::ok("Already up to date.\n"));

    let update = BranchUpdater::new(&git).update("main").unwrap();

    assert_eq!(update.original_branch, "main");
    assert!(!update.visited_base);
    assert_eq!(git.calls(), vec!["rev-parse --abbrev-ref HEAD", "pull"]);
}

#[test]
fn test_update_visits_base_and_returns() {
    let git = ScriptedGit::new()
        .expect(CURRENT, CommandOutput::ok("feature/login\n"))
        .expect(&["pull"], CommandOutput::ok(""))
        .expect(&["checkout", "main"], CommandOutput::ok(""))
        .expect(&["pull"], CommandOutput::ok(""))
        .expect(&["checkout", "feature/login"], CommandOutput::ok(""));

    let update = BranchUpdater::new(&git).update("main").unwrap();

    assert_eq!(update.original_branch, "feature/login");
    assert_eq!(update.base_branch, "main");
    assert!(update.visited_base);
    assert_eq!(
        git.calls(),
        vec![
            "rev-parse --abbrev-ref HEAD",
            "pull",
            "checkout main",
            "pull",
            "checkout feature/login",
        ]
    );
    assert_eq!(git.pending(), 0);
}

#[test]
fn test_failed_base_pull_stops_without_restoring() {
    let git = ScriptedGit::new()
        .expect(CURRENT, CommandOutput::ok("feature\n"))
        .expect(&["pull"], CommandOutput::ok(""))
        .expect(&["checkout", "main"], CommandOutput::ok(""))
        .expect(
            &["pull"],
            CommandOutput {
                status: Some(1),
                stdout: "Updating abc..def\n".to_string(),
                stderr: "fatal: Not possible to fast-forward, aborting.\n".to_string(),
            },
        );

    let err = BranchUpdater::new(&git).update("main").unwrap_err();

    // No `checkout feature` after the failure.
    assert_eq!(
        git.calls(),
        vec!["rev-parse --abbrev-ref HEAD", "pull", "checkout main", "pull"]
    );
    match &err {
        Error::BranchUpdateFailed {
            step,
            original_branch,
            ..
        } => {
            assert_eq!(step, "pulling 'main'");
            assert_eq!(original_branch, "feature");
        }
        other => panic!("unexpected error: {other}"),
    }
    let message = err.to_string();
    assert!(message.contains("Updating abc..def"));
    assert!(message.contains("Not possible to fast-forward"));
}

#[test]
fn test_failed_checkout_of_base_is_reported() {
    let git = ScriptedGit::new()
        .expect(CURRENT, CommandOutput::ok("feature\n"))
        .expect(&["pull"], CommandOutput::ok(""))
        .expect(
            &["checkout", "develop"],
            CommandOutput::failed(1, "error: pathspec 'develop' did not match"),
        );

    let err = BranchUpdater::new(&git).update("develop").unwrap_err();

    assert!(matches!(err, Error::BranchUpdateFailed { .. }));
    assert!(err.to_string().contains("checking out 'develop'"));
    assert!(err.to_string().contains("pathspec 'develop'"));
}

#[test]
fn test_failed_first_pull_stops_immediately() {
    let git = ScriptedGit::new()
        .expect(CURRENT, CommandOutput::ok("feature\n"))
        .expect(
            &["pull"],
            CommandOutput::failed(1, "There is no tracking information for the current branch."),
        );

    let err = BranchUpdater::new(&git).update("main").unwrap_err();

    assert_eq!(git.calls(), vec!["rev-parse --abbrev-ref HEAD", "pull"]);
    assert!(err.to_string().contains("no tracking information"));
}

#[test]
fn test_missing_git_is_not_wrapped() {
    let git = ScriptedGit::missing_executable();

    let err = BranchUpdater::new(&git).update("main").unwrap_err();

    assert!(matches!(err, Error::GitNotFound));
}

#[test]
fn test_current_branch_trims_output() {
    let git = ScriptedGit::new().expect(CURRENT, CommandOutput::ok("  release/1.2\n"));
    assert_eq!(
        BranchUpdater::new(&git).current_branch().unwrap(),
        "release/1.2"
    );
}
