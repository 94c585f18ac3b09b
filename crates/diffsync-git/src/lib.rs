//! Git integration for diffsync
//!
//! Every interaction with version control goes through the [`GitRunner`]
//! trait, which runs `git` with a list of arguments and hands back the exit
//! status and captured output. The production runner shells out to the `git`
//! executable; tests substitute a scripted fake.

pub mod branch;
pub mod diff;
pub mod error;
pub mod repository;
pub mod runner;

pub use branch::{BranchUpdate, BranchUpdater};
pub use diff::{ChangeEntry, diff_name_status, parse_name_status};
pub use error::{Error, Result};
pub use repository::RepositoryHandle;
pub use runner::{CommandOutput, GitCli, GitRunner};
