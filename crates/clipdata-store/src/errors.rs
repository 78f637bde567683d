//! Error handling for clipdata-store
//!
//! Wraps clipdata-core ExError with filesystem-specific helpers

use clipdata_core::errors::{ExError, ExErrorKind};
use std::io;
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Classify a failed read: a missing file is `InputNotFound`, anything else `Io`
pub fn read_error(operation: &str, path: &Path, err: io::Error) -> ExError {
    let kind = if err.kind() == io::ErrorKind::NotFound {
        ExErrorKind::InputNotFound
    } else {
        ExErrorKind::Io
    };
    ExError::new(kind)
        .with_op(operation)
        .with_path(path)
        .with_message(err.to_string())
}

/// Create a write failure error
pub fn write_failed(operation: &str, path: &Path, err: io::Error) -> ExError {
    ExError::new(ExErrorKind::WriteFailed)
        .with_op(operation)
        .with_path(path)
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
