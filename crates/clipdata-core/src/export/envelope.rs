use crate::errors::Result;
use crate::export::digest::data_version;
use crate::model::{Attribution, DatasetKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity of the extension shipping the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionInfo {
    pub name: Option<String>,
    pub uuid: Option<String>,
}

impl ExtensionInfo {
    /// Pick `name` and `uuid` out of the extension's `metadata.json`.
    ///
    /// Returns `None` if the document is not an object.
    pub fn from_metadata(metadata: &Value) -> Option<Self> {
        let obj = metadata.as_object()?;
        let field = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
        Some(Self {
            name: field("name"),
            uuid: field("uuid"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportMetadata {
    pub data_version: String,
    pub attribution: Attribution,
    pub extension_info: Option<ExtensionInfo>,
}

/// Finalized data file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    #[serde(rename = "_metadata")]
    pub metadata: ExportMetadata,
    pub data: Value,
}

impl Envelope {
    /// # Errors
    ///
    /// Returns `Serialization` if the envelope cannot be converted.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Wrap `data` with its version token and the kind's attribution.
///
/// # Errors
///
/// Returns `Serialization` if the data cannot be hashed.
pub fn assemble(
    kind: DatasetKind,
    data: Value,
    extension_info: Option<ExtensionInfo>,
) -> Result<Envelope> {
    let data_version = data_version(kind, &data)?;
    tracing::debug!(op = "assemble", dataset_kind = %kind, data_version = %data_version, "envelope assembled");
    Ok(Envelope {
        metadata: ExportMetadata {
            data_version,
            attribution: kind.attribution(),
            extension_info,
        },
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_layout() {
        let data = json!([{"name": "Math", "symbols": ["+"]}]);
        let info = ExtensionInfo::from_metadata(&json!({"name": "Clipboard", "uuid": "clip@example", "version": 3}));

        let envelope = assemble(DatasetKind::Symbol, data.clone(), info).unwrap();
        let value = envelope.to_value().unwrap();

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["_metadata", "data"]);
        assert_eq!(value["data"], data);
        assert_eq!(
            value["_metadata"]["extension_info"],
            json!({"name": "Clipboard", "uuid": "clip@example"})
        );
        assert_eq!(
            value["_metadata"]["attribution"]["provider"],
            "Various (Microsoft, Unicode, etc.)"
        );
    }

    #[test]
    fn test_missing_extension_info_is_null() {
        let envelope = assemble(DatasetKind::Kaomoji, json!([]), None).unwrap();
        let value = envelope.to_value().unwrap();
        assert!(value["_metadata"]["extension_info"].is_null());
        assert_eq!(value["_metadata"]["data_version"], "sha256:4f53cda18c2baa0c");
    }

    #[test]
    fn test_extension_info_from_non_object() {
        assert!(ExtensionInfo::from_metadata(&json!([1, 2])).is_none());
        let partial = ExtensionInfo::from_metadata(&json!({"name": "X"})).unwrap();
        assert_eq!(partial.uuid, None);
    }
}
