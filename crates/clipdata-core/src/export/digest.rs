//! Version tokens for exported datasets.

use crate::errors::Result;
use crate::model::DatasetKind;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// Emoji version when no leaf carries a parsable `unicode_version`
pub const UNKNOWN_VERSION: &str = "unknown";

/// Number of hex digits kept in a content hash token
const HASH_PREFIX_LEN: usize = 16;

/// Version token of an export.
///
/// Emoji datasets are versioned by the newest Unicode emoji version they
/// contain; the others by a hash of their content.
///
/// # Errors
///
/// Returns `Serialization` if the data cannot be serialized.
pub fn data_version(kind: DatasetKind, data: &Value) -> Result<String> {
    match kind {
        DatasetKind::Emoji => Ok(emoji_version(data)),
        DatasetKind::Kaomoji | DatasetKind::Symbol => content_hash(data),
    }
}

/// Highest `unicode_version` across every emoji leaf, e.g. `"15.1"`.
///
/// Versions may be strings or numbers; values that do not parse as a
/// number are ignored.
pub fn emoji_version(data: &Value) -> String {
    let leaves_key = DatasetKind::Emoji.leaves_key();
    let versions = data
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|category| category.get(leaves_key).and_then(Value::as_array))
        .flatten()
        .filter_map(|emoji| emoji.get("unicode_version"))
        .filter_map(parse_version);

    let mut max: Option<f64> = None;
    for version in versions {
        if max.map_or(true, |m| version > m) {
            max = Some(version);
        }
    }
    match max {
        Some(v) => format!("{:?}", v),
        None => UNKNOWN_VERSION.to_string(),
    }
}

fn parse_version(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

/// `sha256:` followed by the first 16 hex digits of the SHA-256 of the
/// canonical JSON form.
///
/// # Errors
///
/// Returns `Serialization` if the data cannot be serialized.
///
/// ## Example
///
/// ```
/// use clipdata_core::export::content_hash;
/// use serde_json::json;
///
/// let a = content_hash(&json!([{"name": "A", "symbols": ["x"]}])).unwrap();
/// let b = content_hash(&json!([{"symbols": ["x"], "name": "A"}])).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), "sha256:".len() + 16);
/// ```
pub fn content_hash(data: &Value) -> Result<String> {
    let canonical = canonical_json(data)?;
    let digest = hex::encode(Sha256::digest(canonical.as_bytes()));
    Ok(format!("sha256:{}", &digest[..HASH_PREFIX_LEN]))
}

/// Compact JSON with object keys sorted recursively and non-ASCII
/// characters written literally.
///
/// # Errors
///
/// Returns `Serialization` if the value cannot be serialized.
pub fn canonical_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(&sort_keys(value))?)
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_keys(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}
