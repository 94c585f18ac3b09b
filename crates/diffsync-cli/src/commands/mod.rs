//! Command implementations for diffsync-cli

pub mod sync;

pub use sync::run_sync;
