//! Copy and removal primitives applied to the destination tree

use std::fs::{self, File, FileTimes};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Copy a file's bytes, permissions and timestamps.
///
/// The bytes are staged in a temporary file next to `destination` and
/// renamed into place once complete, so a failed copy leaves whatever was at
/// `destination` untouched. Creates the destination's parent directory chain
/// when it is missing. `source` must be a regular file.
pub fn copy_preserving(source: &Path, destination: &Path) -> Result<u64> {
    let mut reader = File::open(source).map_err(|e| Error::io(source, e))?;
    let metadata = reader.metadata().map_err(|e| Error::io(source, e))?;
    if !metadata.is_file() {
        return Err(Error::NotAFile {
            path: source.to_path_buf(),
        });
    }

    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

    // Dropped (and removed) on any early return below.
    let mut staged = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
    let bytes = std::io::copy(&mut reader, staged.as_file_mut())
        .map_err(|e| Error::io(source, e))?;

    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    staged
        .as_file()
        .set_times(times)
        .map_err(|e| Error::io(staged.path(), e))?;
    staged
        .as_file()
        .set_permissions(metadata.permissions())
        .map_err(|e| Error::io(staged.path(), e))?;

    staged
        .persist(destination)
        .map_err(|e| Error::io(destination, e.error))?;

    Ok(bytes)
}

/// Remove a single file.
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| Error::io(path, e))
}

/// Remove empty directories from `file`'s parent upward, stopping at `root`.
///
/// `root` itself is never removed. The walk stops at the first directory that
/// cannot be removed, which is normally one that still has entries. Returns
/// the number of directories removed.
pub fn prune_empty_parents(file: &Path, root: &Path) -> usize {
    let mut removed = 0;
    let mut current = file.parent();

    while let Some(dir) = current {
        if dir == root || !dir.starts_with(root) {
            break;
        }
        if let Err(e) = fs::remove_dir(dir) {
            tracing::trace!(dir = %dir.display(), error = %e, "Stopped pruning");
            break;
        }
        removed += 1;
        current = dir.parent();
    }

    removed
}
