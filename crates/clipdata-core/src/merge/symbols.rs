use crate::model::{Category, Dataset, DatasetKind, Leaf};
use std::collections::BTreeSet;

/// Vendor source files, in category order.
pub const SYMBOL_SOURCE_FILES: [&str; 7] = [
    "[Microsoft] General Punctuation.txt",
    "[Microsoft] Currency Symbols.txt",
    "[Microsoft] Latin Symbols.txt",
    "[Microsoft] Geometric Symbols.txt",
    "[Microsoft] Math Symbols.txt",
    "[Microsoft] Supplemental Symbols.txt",
    "[Microsoft] Language Symbols.txt",
];

/// `"[Microsoft] Math Symbols.txt"` → `"Math Symbols"`
pub fn category_name_from_file(file_name: &str) -> String {
    let mut name = file_name.trim();
    if name.starts_with('[') {
        if let Some(end) = name.find(']') {
            name = name[end + 1..].trim_start();
        }
    }
    name.strip_suffix(".txt").unwrap_or(name).trim().to_string()
}

/// Build a symbol dataset from `(category name, source text)` pairs.
///
/// Every non-whitespace scalar is a symbol. Symbols are deduplicated within
/// their category and sorted by codepoint; categories without any symbol
/// are left out.
pub fn create_symbols(sources: &[(String, String)]) -> Dataset {
    let categories = sources
        .iter()
        .filter_map(|(name, text)| {
            let symbols: BTreeSet<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.is_empty() {
                tracing::debug!(op = "create_symbols", category = %name, "no symbols, skipped");
                return None;
            }
            let leaves = symbols
                .into_iter()
                .map(|c| Leaf::Plain(c.to_string()))
                .collect();
            Some(Category::with_leaves(name.clone(), leaves))
        })
        .collect();
    Dataset::new(DatasetKind::Symbol, categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_names() {
        assert_eq!(category_name_from_file("[Microsoft] Math Symbols.txt"), "Math Symbols");
        assert_eq!(category_name_from_file("[Google]Arrows.txt"), "Arrows");
        assert_eq!(category_name_from_file("Plain.txt"), "Plain");
    }

    #[test]
    fn test_symbols_deduped_and_sorted() {
        let sources = vec![
            ("Math".to_string(), "− + ±\n+ ×".to_string()),
            ("Empty".to_string(), " \n\t".to_string()),
        ];

        let dataset = create_symbols(&sources);

        assert_eq!(
            dataset.to_json(),
            json!([{"name": "Math", "symbols": ["+", "±", "×", "−"]}])
        );
    }
}
