//! Filesystem primitives for diffsync
//!
//! Provides root-confined path resolution for synchronized trees and the
//! copy/remove/prune operations the executor applies to them.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::TreePath;
