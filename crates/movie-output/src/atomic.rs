//! Atomic file replacement.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Hidden temp file next to `path`, e.g. `out/.cleaned.csv.tmp`.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

/// Check that the directory that would hold `path` exists.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if parent.is_dir() {
        Ok(())
    } else {
        Err(OutputError::DirectoryNotFound {
            path: parent.to_path_buf(),
        })
    }
}

/// Write `path` through a temp file that is synced and renamed on success.
///
/// The parent directory must already exist. On any failure the temp file is
/// removed and the target is left untouched.
pub fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    ensure_parent_dir(path)?;

    let temp_path = temp_path_for(path);
    let result = write_temp(&temp_path, write).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| OutputError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        })
    });
    if result.is_err() {
        // Best effort; keep the write error.
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_temp<F>(temp_path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let mut file = File::create(temp_path).map_err(|e| OutputError::Io {
        operation: "create",
        path: temp_path.to_path_buf(),
        source: e,
    })?;
    write(&mut file)?;
    file.sync_all().map_err(|e| OutputError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })
}
