//! Gettext template of the translatable strings in finalized data files.

use crate::model::DatasetKind;
use serde_json::Value;
use std::collections::BTreeSet;

/// Finalized files scanned for strings, with the kind each holds
pub const POT_SOURCE_FILES: [(&str, DatasetKind); 3] = [
    ("emojis.json", DatasetKind::Emoji),
    ("kaomojis.json", DatasetKind::Kaomoji),
    ("symbols.json", DatasetKind::Symbol),
];

const POT_HEADER: &str = r#"# Translation template for All-in-One Clipboard data content.
# Copyright (C) 2025 YOUR NAME
# This file is distributed under the same license as the All-in-One Clipboard package.
#
#, fuzzy
msgid ""
msgstr ""
"Project-Id-Version: all-in-one-clipboard\n"
"Report-Msgid-Bugs-To: \n"
"POT-Creation-Date: 2025-10-26 10:00+0000\n"
"PO-Revision-Date: YEAR-MO-DA HO:MI+ZONE\n"
"Last-Translator: FULL NAME <EMAIL@ADDRESS>\n"
"Language-Team: LANGUAGE <LL@li.org>\n"
"Language: \n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"

"#;

/// Add the translatable strings of one dataset's `data` array to `out`.
///
/// - emoji: category names, emoji `name` and `keywords`
/// - kaomoji: category and sub-category names, emoticon `description`
///   and `keywords`
/// - symbol: category names and symbol `name`
///
/// Empty strings are never collected.
pub fn collect_strings(kind: DatasetKind, data: &Value, out: &mut BTreeSet<String>) {
    for category in data.as_array().into_iter().flatten() {
        add_str(category.get("name"), out);
        match kind {
            DatasetKind::Emoji => collect_leaves(category, "emojis", "name", out),
            DatasetKind::Symbol => collect_leaves(category, "symbols", "name", out),
            DatasetKind::Kaomoji => {
                for sub in array(category.get("categories")) {
                    add_str(sub.get("name"), out);
                    collect_leaves(sub, "emoticons", "description", out);
                }
            }
        }
    }
}

fn collect_leaves(parent: &Value, leaves_key: &str, text_key: &str, out: &mut BTreeSet<String>) {
    for leaf in array(parent.get(leaves_key)) {
        add_str(leaf.get(text_key), out);
        for keyword in array(leaf.get("keywords")) {
            add_str(Some(keyword), out);
        }
    }
}

fn array(value: Option<&Value>) -> impl Iterator<Item = &Value> {
    value.and_then(Value::as_array).into_iter().flatten()
}

fn add_str(value: Option<&Value>, out: &mut BTreeSet<String>) {
    if let Some(s) = value.and_then(Value::as_str).filter(|s| !s.is_empty()) {
        out.insert(s.to_string());
    }
}

/// Double backslashes and escape double quotes
pub fn escape_pot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Header followed by one entry per string, in sorted order.
pub fn render_pot(strings: &BTreeSet<String>) -> String {
    let mut out = String::from(POT_HEADER);
    for s in strings {
        out.push_str("#: extension/data/*.json\n");
        out.push_str(&format!("msgid \"{}\"\n", escape_pot(s)));
        out.push_str("msgstr \"\"\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_kaomoji_strings() {
        let data = json!([{"name": "Positive", "categories": [{"name": "Joy", "emoticons": [
            {"kaomoji": "(^_^)", "description": "smiling", "keywords": ["happy", ""]},
            "(^o^)"
        ]}]}]);
        let mut strings = BTreeSet::new();
        collect_strings(DatasetKind::Kaomoji, &data, &mut strings);

        let got: Vec<&str> = strings.iter().map(String::as_str).collect();
        assert_eq!(got, vec!["Joy", "Positive", "happy", "smiling"]);
    }

    #[test]
    fn test_collect_symbol_strings_skips_keywords_key_absence() {
        let data = json!([{"name": "Math", "symbols": [{"symbol": "+", "name": "PLUS SIGN"}]}]);
        let mut strings = BTreeSet::new();
        collect_strings(DatasetKind::Symbol, &data, &mut strings);
        assert_eq!(strings.len(), 2);
        assert!(strings.contains("PLUS SIGN"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_pot(r#"say "hi" \o/"#), r#"say \"hi\" \\o/"#);
    }

    #[test]
    fn test_render_entries() {
        let strings: BTreeSet<String> = ["b", "a"].iter().map(|s| s.to_string()).collect();
        let pot = render_pot(&strings);

        assert!(pot.starts_with(
            "# Translation template for All-in-One Clipboard data content.\n# Copyright (C) 2025 YOUR NAME\n"
        ));
        assert!(pot.contains("\n#\n#, fuzzy\nmsgid \"\"\nmsgstr \"\"\n"));
        assert!(pot.contains("\"Content-Type: text/plain; charset=UTF-8\\n\"\n"));
        assert!(pot.ends_with(
            "#: extension/data/*.json\nmsgid \"a\"\nmsgstr \"\"\n\n#: extension/data/*.json\nmsgid \"b\"\nmsgstr \"\"\n\n"
        ));
    }
}
