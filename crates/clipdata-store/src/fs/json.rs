//! JSON documents and text sources

use crate::errors::{read_error, Result};
use crate::fs::atomic::atomic_write;
use clipdata_core::errors::{ExError, ExErrorKind};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse a JSON document.
///
/// # Errors
///
/// - `InputNotFound` if the file does not exist
/// - `MalformedJson` (with line and column) if it does not parse
/// - `Io` for any other read failure
pub fn load_json(path: &Path) -> Result<Value> {
    let bytes = fs::read(path).map_err(|e| read_error("load_json", path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| {
        let ex: ExError = e.into();
        ex.with_op("load_json").with_path(path)
    })
}

/// Load an optional document, logging instead of failing.
///
/// A missing file is silent; an unreadable or unparsable one is a warning.
pub fn try_load_json(path: &Path) -> Option<Value> {
    match load_json(path) {
        Ok(value) => Some(value),
        Err(e) if e.kind() == ExErrorKind::InputNotFound => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), err.code = e.code(), "ignoring unreadable file: {}", e);
            None
        }
    }
}

/// Read a UTF-8 text source.
///
/// # Errors
///
/// `InputNotFound` if the file does not exist, `Io` otherwise.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| read_error("read_text", path, e))
}

/// Serialize with `indent` spaces, non-ASCII kept literal, trailing newline.
///
/// # Errors
///
/// Returns `Serialization` if the value cannot be serialized.
pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<Vec<u8>> {
    let indent_str = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent_str.as_bytes()));
    value.serialize(&mut ser).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("to_json_bytes")
            .with_message(e.to_string())
    })?;
    buf.push(b'\n');
    Ok(buf)
}

/// Serialize to one complete buffer, then write it atomically.
///
/// # Errors
///
/// `Serialization` or `WriteFailed`; the target is untouched either way.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, indent: usize) -> Result<()> {
    let bytes = to_json_bytes(value, indent)?;
    atomic_write(path, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_indent_and_literal_non_ascii() {
        let bytes = to_json_bytes(&json!({"name": "café", "symbols": ["→"]}), 2).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "{\n  \"name\": \"café\",\n  \"symbols\": [\n    \"→\"\n  ]\n}\n"
        );
    }

    #[test]
    fn test_key_order_is_preserved() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": 2}"#).unwrap();
        let text = String::from_utf8(to_json_bytes(&value, 4).unwrap()).unwrap();
        assert!(text.find("\"z\"").unwrap() < text.find("\"a\"").unwrap());
    }
}
