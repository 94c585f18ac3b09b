//! Real git repositories for end-to-end tests.
//!
//! Fixtures are built with the `git` CLI so they match what the syncer sees
//! at runtime. Each fixture owns a bare "remote" and a working clone whose
//! branches track it, so `git pull` succeeds without network access.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// A working repository with an `origin` remote, both in one temp directory.
///
/// Layout:
/// - `<tmp>/remote.git`: bare repository acting as `origin`
/// - `<tmp>/work`: working clone, initially on `main` with one commit
pub struct GitFixture {
    temp_dir: TempDir,
}

impl GitFixture {
    /// Create the remote and the working clone with an initial commit on
    /// `main` that has been pushed to `origin`.
    ///
    /// # Panics
    /// Panics if any git operation fails.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let fixture = Self { temp_dir };

        let remote = fixture.remote();
        fs::create_dir_all(&remote).unwrap();
        run_git(&remote, &["init", "--bare"]);
        run_git(&remote, &["symbolic-ref", "HEAD", "refs/heads/main"]);

        let work = fixture.work();
        fs::create_dir_all(&work).unwrap();
        fixture.git(&["init"]);
        fixture.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        fixture.git(&["config", "user.email", "test@test.com"]);
        fixture.git(&["config", "user.name", "Test User"]);
        fixture.git(&["config", "commit.gpgsign", "false"]);
        fixture.git(&["config", "pull.rebase", "false"]);
        fixture.git(&["remote", "add", "origin", remote.to_str().unwrap()]);

        fixture.write("README.md", "# Test\n");
        fixture.commit_all("Initial commit");
        fixture.git(&["push", "-u", "origin", "main"]);

        fixture
    }

    /// Path to the working clone.
    pub fn work(&self) -> PathBuf {
        self.temp_dir.path().join("work")
    }

    /// Path to the bare remote.
    pub fn remote(&self) -> PathBuf {
        self.temp_dir.path().join("remote.git")
    }

    /// Run git in the working clone and return its trimmed stdout.
    ///
    /// # Panics
    /// Panics if the command exits non-zero.
    pub fn git(&self, args: &[&str]) -> String {
        run_git(&self.work(), args)
    }

    /// Write `content` to `path` (relative to the working clone).
    pub fn write(&self, path: &str, content: &str) {
        let full = self.work().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }

    /// Remove `path` (relative to the working clone) from disk.
    pub fn remove(&self, path: &str) {
        fs::remove_file(self.work().join(path)).unwrap();
    }

    /// Stage everything and commit.
    pub fn commit_all(&self, message: &str) {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-m", message]);
    }

    /// Create `name` from the current branch, check it out and push it with
    /// upstream tracking.
    pub fn checkout_new_branch(&self, name: &str) {
        self.git(&["checkout", "-b", name]);
        self.git(&["push", "-u", "origin", name]);
    }

    /// Name of the checked-out branch.
    pub fn current_branch(&self) -> String {
        self.git(&["rev-parse", "--abbrev-ref", "HEAD"])
    }
}

impl Default for GitFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn run_git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("GitFixture: failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "GitFixture: `git {args:?}` failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
