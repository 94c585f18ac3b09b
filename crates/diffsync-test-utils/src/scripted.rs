//! A scripted [`GitRunner`] for tests that must not touch a real repository.

use std::cell::RefCell;

use diffsync_git::{CommandOutput, Error, GitRunner, Result};

/// Replays canned outputs for expected git invocations and records every
/// call it receives.
///
/// Expectations are matched by exact argument list. When several
/// expectations share the same arguments they are consumed in the order they
/// were added. An invocation with no remaining expectation returns a failed
/// output (exit code 128) so unexpected commands surface as errors.
///
/// # Example
///
/// ```rust
/// use diffsync_git::{CommandOutput, GitRunner};
/// use diffsync_test_utils::ScriptedGit;
///
/// let git = ScriptedGit::new()
///     .expect(&["rev-parse", "--abbrev-ref", "HEAD"], CommandOutput::ok("main\n"));
///
/// let output = git.run(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap();
/// assert_eq!(output.stdout, "main\n");
/// assert_eq!(git.calls(), vec!["rev-parse --abbrev-ref HEAD"]);
/// ```
#[derive(Default)]
pub struct ScriptedGit {
    expectations: RefCell<Vec<(Vec<String>, CommandOutput)>>,
    calls: RefCell<Vec<String>>,
    missing_executable: bool,
}

impl ScriptedGit {
    /// Create a runner with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that behaves as if `git` is not installed.
    pub fn missing_executable() -> Self {
        Self {
            missing_executable: true,
            ..Self::default()
        }
    }

    /// Queue `output` as the response to `args`.
    pub fn expect(self, args: &[&str], output: CommandOutput) -> Self {
        self.expectations
            .borrow_mut()
            .push((args.iter().map(|a| a.to_string()).collect(), output));
        self
    }

    /// Every invocation received so far, arguments joined by spaces.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Number of expectations that were never consumed.
    pub fn pending(&self) -> usize {
        self.expectations.borrow().len()
    }
}

impl GitRunner for ScriptedGit {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(args.join(" "));

        if self.missing_executable {
            return Err(Error::GitNotFound);
        }

        let mut expectations = self.expectations.borrow_mut();
        let position = expectations
            .iter()
            .position(|(expected, _)| expected.iter().map(String::as_str).eq(args.iter().copied()));

        match position {
            Some(index) => Ok(expectations.remove(index).1),
            None => Ok(CommandOutput::failed(
                128,
                format!("unexpected git invocation: git {}", args.join(" ")),
            )),
        }
    }
}
