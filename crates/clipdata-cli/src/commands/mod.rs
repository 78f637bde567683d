//! One module per pipeline stage.
//!
//! Each stage is `execute(args)`: load, call into clipdata-core, print the
//! report on stdout, write through clipdata-store.

pub mod analyze;
pub mod clean;
pub mod create_symbols;
pub mod dedup;
pub mod enrich;
pub mod expand;
pub mod export;
pub mod format;
pub mod pot;
pub mod reorder;
pub mod sort;
pub mod verify;
pub mod verify_order;
pub mod verify_structure;

use clap::ValueEnum;
use clipdata_core::errors::{ExError, ExErrorKind, Result};
use clipdata_core::{log_op_end, log_op_error, log_op_start, log_skip};
use clipdata_core::{Dataset, DatasetKind, UniquenessScope};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type CommandResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Run one stage between start and end (or end_error) log events
pub fn run_logged<F>(op: &'static str, body: F) -> CommandResult
where
    F: FnOnce() -> Result<()>,
{
    log_op_start!(op);
    let start = Instant::now();

    body().map_err(|e| {
        log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        e
    })?;

    log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
    Ok(())
}

/// Uniqueness policy as a command-line value
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    Global,
    Branch,
    Off,
}

impl From<ScopeArg> for UniquenessScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Global => UniquenessScope::Global,
            ScopeArg::Branch => UniquenessScope::Branch,
            ScopeArg::Off => UniquenessScope::Off,
        }
    }
}

/// Explicit `--scope`, or the kind's default
pub fn scope_for(kind: DatasetKind, arg: Option<ScopeArg>) -> UniquenessScope {
    arg.map(Into::into).unwrap_or_else(|| kind.default_scope())
}

/// Load and parse a dataset; skipped nodes are logged, not fatal.
pub fn load_dataset(op: &str, kind: DatasetKind, path: &Path) -> Result<Dataset> {
    let raw = clipdata_store::load_json(path)?;
    let (dataset, warnings) = Dataset::from_json(kind, &raw).map_err(|e| e.with_path(path))?;
    for warning in &warnings {
        log_skip!(op, warning.message, location = %warning.location, path = %path.display());
    }
    Ok(dataset)
}

/// Expand the inputs of a batch command into files.
///
/// A directory is only accepted with `recursive`, and yields every JSON
/// file beneath it.
pub fn batch_files(paths: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            if !recursive {
                return Err(ExError::new(ExErrorKind::InvalidInput)
                    .with_op("batch_files")
                    .with_path(path)
                    .with_message("is a directory; pass --recursive to process it"));
            }
            files.extend(clipdata_store::json_files(path)?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// True when the batch is one explicitly named file. Per-file failures
/// abort such a run instead of being skipped.
pub fn is_single_file(paths: &[PathBuf]) -> bool {
    paths.len() == 1 && !paths[0].is_dir()
}

/// Error for a verifier that found problems
pub fn verification_failed(op: &str, message: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::VerificationFailed)
        .with_op(op)
        .with_message(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_file_batch() {
        let dir = std::env::temp_dir();
        assert!(is_single_file(&[PathBuf::from("missing.json")]));
        assert!(!is_single_file(&[PathBuf::from("a.json"), PathBuf::from("b.json")]));
        assert!(!is_single_file(&[dir]));
    }

    #[test]
    fn test_scope_defaults_per_kind() {
        assert_eq!(scope_for(DatasetKind::Symbol, None), UniquenessScope::Branch);
        assert_eq!(scope_for(DatasetKind::Kaomoji, None), UniquenessScope::Global);
        assert_eq!(
            scope_for(DatasetKind::Symbol, Some(ScopeArg::Global)),
            UniquenessScope::Global
        );
    }
}
