use crate::errors::{io_error, write_failed, Result};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// `sorted.json` → `sorted.json.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(OsString::new);
    name.push(".bak");
    path.with_file_name(name)
}

/// Copy `path` next to itself before an in-place rewrite.
///
/// # Errors
///
/// Returns `WriteFailed` if the copy cannot be made.
pub fn create_backup(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup).map_err(|e| write_failed("create_backup", &backup, e))?;
    tracing::debug!(backup = %backup.display(), "created backup");
    Ok(backup)
}

/// Remove the backup of `path`; a backup that is already gone is fine.
///
/// # Errors
///
/// Returns `Io` if an existing backup cannot be removed.
pub fn discard_backup(path: &Path) -> Result<()> {
    let backup = backup_path(path);
    match fs::remove_file(&backup) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_error("discard_backup", e)),
    }
}
