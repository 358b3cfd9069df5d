//! Filesystem helpers used by the descriptor model and the assembly pipeline

use crate::error::Result;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Create `path` (and any missing parents).
///
/// Succeeds when the directory already exists; any other failure, including a
/// regular file sitting at `path`, is returned.
pub fn ensure_dir(path: &Path) -> Result<()> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Delete every file under `root` whose extension is `extension`.
///
/// Directories are left in place. Returns the number of files removed; a
/// missing `root` removes nothing.
pub fn remove_files_with_extension(root: &Path, extension: &str) -> Result<usize> {
    if !root.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|e| e.to_str()) == Some(extension)
        {
            debug!("Removing intermediate source {}", entry.path().display());
            fs::remove_file(entry.path())?;
            removed += 1;
        }
    }

    Ok(removed)
}

/// Remove `path` if it is a directory or a file; a missing path is not an error.
pub fn remove_path(path: &Path) -> Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
