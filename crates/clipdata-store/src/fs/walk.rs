use crate::errors::{read_error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Every `*.json` file under `dir` (extension matched case-insensitively),
/// descending into subdirectories, sorted by path.
///
/// # Errors
///
/// Returns `InputNotFound` if `dir` does not exist, `Io` if a directory
/// cannot be listed.
pub fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect(dir, &mut found)?;
    found.sort();
    Ok(found)
}

fn collect(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| read_error("walk_dir", dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| read_error("walk_dir", dir, e))?.path();
        if path.is_dir() {
            collect(&path, found)?;
        } else if is_json(&path) {
            found.push(path);
        }
    }
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_json_ignores_case() {
        assert!(is_json(Path::new("a/Emojis.JSON")));
        assert!(!is_json(Path::new("a/emojis.json.bak")));
        assert!(!is_json(Path::new("a/notes.txt")));
    }
}
