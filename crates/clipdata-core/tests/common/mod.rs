use clipdata_core::{Dataset, DatasetKind};
use serde_json::Value;

/// Parse a dataset that is known to be well-formed
#[allow(dead_code)]
pub fn parse(kind: DatasetKind, raw: Value) -> Dataset {
    let (dataset, warnings) = Dataset::from_json(kind, &raw).expect("top level is a list");
    assert!(warnings.is_empty(), "unexpected schema warnings: {:?}", warnings);
    dataset
}

/// Identities of every leaf, in traversal order
#[allow(dead_code)]
pub fn identities(dataset: &Dataset) -> Vec<String> {
    let field = dataset.identity_field();
    dataset
        .leaves()
        .filter_map(|(_, leaf)| leaf.identity(field).map(str::to_string))
        .collect()
}
