//! Core orchestration layer for diffsync
//!
//! Turns a git change report into copy/delete operations and applies them to
//! a destination tree:
//!
//! - **Operations**: the closed [`Operation`] sum type and its derivation from
//!   [`diffsync_git::ChangeEntry`] records
//! - **Planning**: [`OperationPlan`] counts and the confirmation gate
//! - **Execution**: [`SyncExecutor`] with per-operation failure isolation,
//!   producing a [`RunSummary`]
//! - **Session**: [`SyncSession`] wiring branch update, diff, plan and
//!   execution together for one [`SyncConfig`]
//!
//! # Architecture
//!
//! ```text
//!                 diffsync-cli
//!                      |
//!                diffsync-core
//!                      |
//!           +----------+----------+
//!           |                     |
//!      diffsync-fs          diffsync-git
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod operation;
pub mod plan;
pub mod session;

pub use config::{DEFAULT_BASE_BRANCH, SyncConfig};
pub use error::{Error, Result};
pub use executor::{OperationFailure, RunSummary, SyncExecutor};
pub use operation::{Operation, operations_from_changes};
pub use plan::{CONFIRM_PROMPT, Decision, OperationPlan, Prompt, confirm, is_affirmative};
pub use session::{SyncOutcome, SyncSession};
