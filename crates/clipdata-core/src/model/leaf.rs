//! Leaf entries: a bare string or a detailed record.

use serde_json::{Map, Value};

/// Smallest dataset entry.
///
/// Simple datasets store the identity string directly. Detailed datasets
/// store an object whose identity lives in the kind's identity field
/// (`emoji`, `kaomoji`, `symbol`) next to derived metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf {
    Plain(String),
    Record(Map<String, Value>),
}

impl Leaf {
    /// Parse a leaf; `None` if the value is neither a string nor an object.
    pub fn from_value(value: &Value) -> Option<Leaf> {
        match value {
            Value::String(s) => Some(Leaf::Plain(s.clone())),
            Value::Object(map) => Some(Leaf::Record(map.clone())),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Leaf::Plain(s) => Value::String(s.clone()),
            Leaf::Record(map) => Value::Object(map.clone()),
        }
    }

    /// Identity string, or `None` for a malformed leaf (empty string, or a
    /// record without a non-empty string in `field`).
    pub fn identity<'a>(&'a self, field: &str) -> Option<&'a str> {
        let id = match self {
            Leaf::Plain(s) => Some(s.as_str()),
            Leaf::Record(map) => map.get(field).and_then(Value::as_str),
        };
        id.filter(|s| !s.is_empty())
    }

    /// Replace the identity string, keeping every other field.
    pub fn set_identity(&mut self, field: &str, identity: String) {
        match self {
            Leaf::Plain(s) => *s = identity,
            Leaf::Record(map) => {
                map.insert(field.to_string(), Value::String(identity));
            }
        }
    }

    /// Field of a detailed record; plain leaves have none.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Leaf::Plain(_) => None,
            Leaf::Record(map) => map.get(name),
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Leaf::Record(_))
    }
}

impl From<&str> for Leaf {
    fn from(s: &str) -> Self {
        Leaf::Plain(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_of_plain_and_record() {
        let plain = Leaf::from("(^_^)");
        assert_eq!(plain.identity("kaomoji"), Some("(^_^)"));

        let record = Leaf::from_value(&json!({"kaomoji": "(>_<)", "description": "frustrated"})).unwrap();
        assert_eq!(record.identity("kaomoji"), Some("(>_<)"));
        assert_eq!(record.identity("emoji"), None);
    }

    #[test]
    fn test_malformed_leaves() {
        assert!(Leaf::from_value(&json!(42)).is_none());
        assert_eq!(Leaf::from("").identity("kaomoji"), None);
        let record = Leaf::from_value(&json!({"kaomoji": ""})).unwrap();
        assert_eq!(record.identity("kaomoji"), None);
    }

    #[test]
    fn test_set_identity_keeps_other_fields() {
        let mut record =
            Leaf::from_value(&json!({"kaomoji": "(>_<)\u{200b}", "keywords": ["ugh"]})).unwrap();
        record.set_identity("kaomoji", "(>_<)".to_string());
        assert_eq!(record.to_value(), json!({"kaomoji": "(>_<)", "keywords": ["ugh"]}));
    }
}
