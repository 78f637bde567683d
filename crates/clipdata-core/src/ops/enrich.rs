//! Derived metadata for emoji and symbol datasets.

use crate::model::dataset::NAME_KEY;
use crate::model::{Children, Dataset, DatasetKind, Leaf};
use crate::unicode::{annotate_symbol, codepoints};
use serde::Serialize;
use serde_json::{Map, Value};

/// An item the enricher could not annotate.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Skipped {
    pub item: String,
    pub location: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct EnrichReport {
    pub enriched: usize,
    pub skipped: Vec<Skipped>,
    /// True when the kind has no derived metadata and the dataset was
    /// returned unchanged
    pub unsupported: bool,
}

/// Attach derived metadata.
///
/// - emoji: a `codepoints` list on every leaf (plain leaves become records)
/// - symbol: every symbol becomes `{symbol, name, codepoint, category_code}`
///   and each category gains a `slug`; unnamed symbols are skipped
/// - kaomoji: nothing to derive, returned unchanged
pub fn enrich(dataset: &Dataset) -> (Dataset, EnrichReport) {
    match dataset.kind() {
        DatasetKind::Emoji => enrich_emoji(dataset),
        DatasetKind::Symbol => enrich_symbols(dataset),
        DatasetKind::Kaomoji => {
            tracing::warn!(op = "enrich", "kaomoji datasets carry no derived metadata");
            let report = EnrichReport {
                unsupported: true,
                ..EnrichReport::default()
            };
            (dataset.clone(), report)
        }
    }
}

fn enrich_emoji(dataset: &Dataset) -> (Dataset, EnrichReport) {
    let field = dataset.identity_field();
    let mut out = dataset.clone();
    let mut report = EnrichReport::default();

    for branch in out.branches_mut() {
        for leaf in branch.leaves.iter_mut() {
            let Some(emoji) = leaf.identity(field).map(str::to_string) else {
                continue;
            };
            let mut record = match std::mem::replace(leaf, Leaf::Plain(String::new())) {
                Leaf::Record(map) => map,
                Leaf::Plain(s) => {
                    let mut map = Map::new();
                    map.insert(field.to_string(), Value::String(s));
                    map
                }
            };
            let labels = codepoints(&emoji).into_iter().map(Value::String).collect();
            record.insert("codepoints".to_string(), Value::Array(labels));
            *leaf = Leaf::Record(record);
            report.enriched += 1;
        }
    }
    (out, report)
}

/// Lower-cased name with spaces replaced by `-`
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

fn enrich_symbols(dataset: &Dataset) -> (Dataset, EnrichReport) {
    let field = dataset.identity_field();
    let mut out = dataset.clone();
    let mut report = EnrichReport::default();

    for category in &mut out.categories {
        let Children::Leaves(leaves) = &mut category.children else {
            continue;
        };
        let mut annotated = Vec::with_capacity(leaves.len());
        for leaf in leaves.iter() {
            let Some(symbol) = leaf.identity(field) else {
                continue;
            };
            match annotate_symbol(symbol) {
                Ok(info) => {
                    let record = serde_json::to_value(&info)
                        .ok()
                        .and_then(|v| Leaf::from_value(&v));
                    if let Some(record) = record {
                        annotated.push(record);
                        report.enriched += 1;
                    }
                }
                Err(err) => {
                    crate::log_skip!("enrich", err, symbol = symbol, location = %category.name);
                    report.skipped.push(Skipped {
                        item: symbol.to_string(),
                        location: category.name.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }
        *leaves = annotated;

        // slug goes right after name
        let slug_value = Value::String(slug(&category.name));
        let mut extra = Map::new();
        if !category.extra.contains_key(NAME_KEY) {
            extra.insert(NAME_KEY.to_string(), Value::Null);
            extra.insert("slug".to_string(), slug_value.clone());
        }
        for (k, v) in &category.extra {
            if k == "slug" {
                continue;
            }
            extra.insert(k.clone(), v.clone());
            if k == NAME_KEY {
                extra.insert("slug".to_string(), slug_value.clone());
            }
        }
        category.extra = extra;
    }

    out.prune_empty();
    (out, report)
}
