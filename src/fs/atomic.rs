//! Atomic file replacement.
//!
//! The filtered content is written to a temporary file in the same directory
//! (`.{filename}.tmp`), synced to disk, and renamed over the target. Rename
//! within one directory is atomic on POSIX; on Windows the existing target is
//! removed first, which narrows the window to the rename itself.
//!
//! The temporary file must live next to the target: a cross-filesystem rename
//! is not atomic.

use crate::error::{HookstripError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace the contents of `path` with `content`.
///
/// The target's directory must exist; this tool only rewrites files created
/// by an earlier build step, so a missing parent is an invocation error and
/// surfaces as such from the temp-file create.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path)?;

    write_and_sync(&temp_path, content.as_bytes())?;
    replace(&temp_path, path)
}

/// Temporary file path in the same directory as the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            HookstripError::UserError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        HookstripError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).and_then(|()| file.sync_all()).map_err(|e| {
        let _ = fs::remove_file(path);
        HookstripError::UserError(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        ))
    })
}

#[cfg(unix)]
fn replace(source: &Path, target: &Path) -> Result<()> {
    // rename() replaces an existing destination atomically on POSIX.
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        HookstripError::UserError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })
}

#[cfg(windows)]
fn replace(source: &Path, target: &Path) -> Result<()> {
    // rename() refuses to clobber on Windows; drop the target first.
    if target.exists()
        && let Err(e) = fs::remove_file(target)
    {
        let _ = fs::remove_file(source);
        return Err(HookstripError::UserError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        )));
    }
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        HookstripError::UserError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })
}
