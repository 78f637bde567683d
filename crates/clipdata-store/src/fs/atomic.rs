//! Atomic write primitives
//!
//! Uses temp→rename so a failed run never leaves a partial file

use crate::errors::{write_failed, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file
///
/// The whole buffer goes to a sibling temp file which is then renamed over
/// the target. Parent directories are created as needed.
///
/// # Errors
///
/// Returns `WriteFailed` if the directory, the temp file or the rename fails.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_failed("create_output_dir", parent, e))?;
    }

    let temp_path = temp_sibling(target_path);
    if let Err(e) = fs::write(&temp_path, content) {
        fs::remove_file(&temp_path).ok();
        return Err(write_failed("write_temp", &temp_path, e));
    }

    if let Err(e) = fs::rename(&temp_path, target_path) {
        fs::remove_file(&temp_path).ok();
        return Err(write_failed("rename_temp", target_path, e));
    }

    tracing::debug!(path = %target_path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// `name.json` → `name.json.tmp`
fn temp_sibling(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    target.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("data").join("emojis.json");

        atomic_write(&target, b"[]").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"[]");
    }

    #[test]
    fn test_no_tmp_files_after_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("symbols.json");

        atomic_write(&target, b"one").unwrap();
        atomic_write(&target, b"two").unwrap();

        let names: Vec<String> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["symbols.json".to_string()]);
        assert_eq!(fs::read(&target).unwrap(), b"two");
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("emojis.json");
        fs::create_dir_all(target.join("occupied")).unwrap();

        let err = atomic_write(&target, b"[]").unwrap_err();

        assert_eq!(err.kind(), clipdata_core::errors::ExErrorKind::WriteFailed);
        assert!(!temp_sibling(&target).exists());
        assert!(target.join("occupied").is_dir());
    }

    #[test]
    fn test_temp_sibling_keeps_extension() {
        assert_eq!(
            temp_sibling(Path::new("build/kaomojis.json")),
            PathBuf::from("build/kaomojis.json.tmp")
        );
    }
}
