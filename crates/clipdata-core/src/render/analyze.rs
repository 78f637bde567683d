//! Key/type shape of arbitrary JSON documents.

use serde_json::Value;

/// Ordered `(key, node)` pairs describing one level of a document.
pub type Shape = Vec<(String, ShapeNode)>;

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeNode {
    Type(&'static str),
    Nested(Shape),
}

const ARRAY_ITEMS: &str = "<Array: Items structure>";
const ARRAY_EMPTY: &str = "<Array Contents>";

/// Type name of a JSON value
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
        Value::String(_) => "String",
        Value::Bool(_) => "Boolean",
        Value::Number(n) if n.is_f64() => "Float",
        Value::Number(_) => "Integer",
        Value::Null => "Null",
    }
}

/// Shape of `value`. Arrays are described by their first element.
pub fn analyze(value: &Value) -> Shape {
    match value {
        Value::Array(items) => match items.first() {
            None => vec![(ARRAY_EMPTY.to_string(), ShapeNode::Type("Empty Array"))],
            Some(first) => vec![(ARRAY_ITEMS.to_string(), ShapeNode::Nested(analyze(first)))],
        },
        Value::Object(map) => map
            .iter()
            .map(|(key, v)| {
                let node = match v {
                    Value::Array(_) | Value::Object(_) => ShapeNode::Nested(analyze(v)),
                    other => ShapeNode::Type(type_name(other)),
                };
                (key.clone(), node)
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Indented tree, four spaces per level.
pub fn render_shape(shape: &Shape) -> String {
    let mut out = String::new();
    render_level(shape, 0, &mut out);
    out
}

fn render_level(shape: &Shape, depth: usize, out: &mut String) {
    let pad = "    ".repeat(depth);
    for (key, node) in shape {
        match node {
            ShapeNode::Type(name) => out.push_str(&format!("{}- {}: {}\n", pad, key, name)),
            ShapeNode::Nested(inner) => {
                out.push_str(&format!("{}+ {} (Object/Array):\n", pad, key));
                render_level(inner, depth + 1, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(&json!(1)), "Integer");
        assert_eq!(type_name(&json!(1.5)), "Float");
        assert_eq!(type_name(&json!(true)), "Boolean");
        assert_eq!(type_name(&json!(null)), "Null");
    }

    #[test]
    fn test_render_dataset_shape() {
        let value = json!([{"name": "A", "symbols": [{"symbol": "+", "codepoint": "U+002B"}], "tags": []}]);
        let text = render_shape(&analyze(&value));
        assert_eq!(
            text,
            "+ <Array: Items structure> (Object/Array):\n\
             \x20   - name: String\n\
             \x20   + symbols (Object/Array):\n\
             \x20       + <Array: Items structure> (Object/Array):\n\
             \x20           - symbol: String\n\
             \x20           - codepoint: String\n\
             \x20   + tags (Object/Array):\n\
             \x20       - <Array Contents>: Empty Array\n"
        );
    }

    #[test]
    fn test_scalar_document_has_no_shape() {
        assert!(analyze(&json!("just a string")).is_empty());
    }
}
