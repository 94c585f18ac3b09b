//! Shared test utilities for the diffsync workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`scripted`]: [`ScriptedGit`], a fake [`diffsync_git::GitRunner`]
//! - [`git`]: real git repositories with a bare remote
//! - [`tree`]: [`TestTree`] scratch directories with assertion helpers

pub mod git;
pub mod scripted;
pub mod tree;

pub use git::GitFixture;
pub use scripted::ScriptedGit;
pub use tree::TestTree;
