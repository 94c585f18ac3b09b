//! Operation plan and confirmation gate

use crate::{Operation, Result};

/// Question asked before any operation is applied.
pub const CONFIRM_PROMPT: &str = "Do you want to proceed with these operations? (y/n)";

/// The ordered operations of one run, with their counts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationPlan {
    operations: Vec<Operation>,
}

impl OperationPlan {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of copy operations.
    pub fn copies(&self) -> usize {
        self.operations
            .iter()
            .filter(|op| matches!(op, Operation::Copy(_)))
            .count()
    }

    /// Number of delete operations.
    pub fn deletes(&self) -> usize {
        self.operations
            .iter()
            .filter(|op| matches!(op, Operation::Delete(_)))
            .count()
    }
}

/// Whether a confirmed plan may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Cancel,
}

/// Source of the user's answer to the confirmation question.
pub trait Prompt {
    /// Ask `question` and return the raw answer.
    fn ask(&mut self, question: &str) -> std::io::Result<String>;
}

/// Gate a plan on `assume_yes` or the user's answer.
///
/// The prompt is not consulted when `assume_yes` is set.
pub fn confirm(assume_yes: bool, prompt: &mut dyn Prompt) -> Result<Decision> {
    if assume_yes {
        return Ok(Decision::Proceed);
    }

    let answer = prompt.ask(CONFIRM_PROMPT)?;
    if is_affirmative(&answer) {
        Ok(Decision::Proceed)
    } else {
        Ok(Decision::Cancel)
    }
}

/// Only `y` (either case) confirms; the line terminator is ignored.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y")
}
