use crate::model::{Dataset, DatasetKind, UniquenessScope};
use crate::reconcile::Duplicate;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::invariants::{self, StructureIssue};

/// One broken dataset invariant.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum Violation {
    Structure(StructureIssue),
    EmptyBranch { location: String },
    Duplicate(Duplicate),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Structure(issue) => write!(f, "{}: {}", issue.location, issue.message),
            Violation::EmptyBranch { location } => write!(f, "{}: empty branch", location),
            Violation::Duplicate(dup) => write!(f, "{}", dup),
        }
    }
}

/// Validate a raw document against every dataset invariant.
///
/// Shape is checked first; the tree-level checks (no empty branches,
/// identities unique within `scope`) run only on a well-shaped document.
/// An empty list means the dataset is valid.
pub fn validate_dataset(kind: DatasetKind, raw: &Value, scope: UniquenessScope) -> Vec<Violation> {
    let structure = invariants::find_structure_issues(kind, raw);
    if !structure.is_empty() {
        return structure.into_iter().map(Violation::Structure).collect();
    }

    let Ok((dataset, warnings)) = Dataset::from_json(kind, raw) else {
        return Vec::new();
    };
    let mut out: Vec<Violation> = warnings
        .into_iter()
        .map(|w| {
            Violation::Structure(StructureIssue {
                location: w.location,
                message: w.message,
            })
        })
        .collect();
    out.extend(
        invariants::find_empty_branches(&dataset)
            .into_iter()
            .map(|location| Violation::EmptyBranch { location }),
    );
    out.extend(
        invariants::find_scope_violations(&dataset, scope)
            .into_iter()
            .map(Violation::Duplicate),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_dataset() {
        let raw = json!([{"name": "A", "symbols": ["a", "b"]}]);
        assert!(validate_dataset(DatasetKind::Symbol, &raw, UniquenessScope::Branch).is_empty());
    }

    #[test]
    fn test_shape_problems_short_circuit() {
        let raw = json!([{"name": "A"}]);
        let violations = validate_dataset(DatasetKind::Symbol, &raw, UniquenessScope::Branch);
        assert_eq!(violations.len(), 1);
        assert!(matches!(violations[0], Violation::Structure(_)));
    }

    #[test]
    fn test_tree_level_violations() {
        let raw = json!([
            {"name": "A", "categories": [{"name": "B", "emoticons": ["x", "x"]}, {"name": "C", "emoticons": []}]}
        ]);
        let violations = validate_dataset(DatasetKind::Kaomoji, &raw, UniquenessScope::Global);
        let text: Vec<String> = violations.iter().map(ToString::to_string).collect();
        assert_eq!(
            text,
            vec![
                "A > C: empty branch".to_string(),
                "'x' in 'A > B' is a duplicate. First seen in 'A > B'.".to_string(),
            ]
        );
    }
}
