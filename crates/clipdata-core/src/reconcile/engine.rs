//! Reconciliation engine.

use crate::reconcile::model::{Duplicate, LeafRef, Reconciliation, Screened};
use crate::traversal::LeafIndex;
use std::collections::{HashMap, HashSet};

/// Compare two indexes by identity.
///
/// `missing` is the reference minus the target (a verification failure),
/// `added` the target minus the reference (informational). Both are sorted
/// by identity.
pub fn reconcile(reference: &LeafIndex, target: &LeafIndex) -> Reconciliation {
    let mut missing = one_sided(reference, target);
    let mut added = one_sided(target, reference);
    missing.sort();
    added.sort();
    Reconciliation { missing, added }
}

fn one_sided(from: &LeafIndex, other: &LeafIndex) -> Vec<LeafRef> {
    from.locations()
        .filter(|(id, _)| !other.contains(id))
        .map(|(id, loc)| LeafRef::new(id, loc))
        .collect()
}

/// Master set of identities already placed, with where each was first seen.
#[derive(Debug, Clone, Default)]
pub struct SeenSet {
    first_seen: HashMap<String, String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with every identity of an index, at its indexed location.
    pub fn from_index(index: &LeafIndex) -> Self {
        let first_seen = index
            .locations()
            .map(|(id, loc)| (id.to_string(), loc))
            .collect();
        Self { first_seen }
    }

    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.first_seen.contains_key(identity)
    }

    pub fn first_seen(&self, identity: &str) -> Option<&str> {
        self.first_seen.get(identity).map(String::as_str)
    }

    /// Record `identity` at `location`.
    ///
    /// Returns the duplicate record if it was already present; the stored
    /// first location is left unchanged.
    pub fn admit(&mut self, identity: &str, location: &str) -> Option<Duplicate> {
        if let Some(first) = self.first_seen.get(identity) {
            return Some(Duplicate {
                identity: identity.to_string(),
                location: location.to_string(),
                first_seen: first.clone(),
            });
        }
        self.first_seen
            .insert(identity.to_string(), location.to_string());
        None
    }

    /// Split `candidates` into unseen ones and duplicates without touching
    /// the set. Repeats inside the batch are duplicates of their first
    /// occurrence in the batch.
    pub fn screen<S: AsRef<str>>(&self, candidates: &[S], location: &str) -> Screened {
        let mut batch: HashSet<&str> = HashSet::new();
        let mut out = Screened::default();
        for candidate in candidates {
            let id = candidate.as_ref();
            if let Some(first) = self.first_seen.get(id) {
                out.duplicates.push(Duplicate {
                    identity: id.to_string(),
                    location: location.to_string(),
                    first_seen: first.clone(),
                });
            } else if !batch.insert(id) {
                out.duplicates.push(Duplicate {
                    identity: id.to_string(),
                    location: location.to_string(),
                    first_seen: location.to_string(),
                });
            } else {
                out.fresh.push(id.to_string());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dataset, DatasetKind};
    use serde_json::json;

    fn index(raw: serde_json::Value) -> LeafIndex {
        let (dataset, _) = Dataset::from_json(DatasetKind::Symbol, &raw).unwrap();
        LeafIndex::build(&dataset)
    }

    #[test]
    fn test_reconcile_reports_both_directions() {
        let reference = index(json!([{"name": "A", "symbols": ["a", "b", "c"]}]));
        let target = index(json!([{"name": "B", "symbols": ["c", "a", "d"]}]));

        let result = reconcile(&reference, &target);

        assert_eq!(result.missing, vec![LeafRef::new("b", "A")]);
        assert_eq!(result.added, vec![LeafRef::new("d", "B")]);
        assert!(!result.is_complete());
    }

    #[test]
    fn test_reconcile_identical_sets() {
        let a = index(json!([{"name": "A", "symbols": ["a", "b"]}]));
        let b = index(json!([{"name": "A", "symbols": ["b", "a"]}]));
        let result = reconcile(&a, &b);
        assert!(result.is_complete());
        assert!(result.added.is_empty());
    }

    #[test]
    fn test_screen_does_not_mutate() {
        let mut seen = SeenSet::new();
        assert!(seen.admit("x", "Main > One").is_none());

        let screened = seen.screen(&["x", "y", "y"], "Main > Two");

        assert_eq!(screened.fresh, vec!["y".to_string()]);
        assert_eq!(screened.duplicates.len(), 2);
        assert_eq!(screened.duplicates[0].first_seen, "Main > One");
        assert_eq!(screened.duplicates[1].first_seen, "Main > Two");
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_duplicate_message() {
        let mut seen = SeenSet::new();
        seen.admit("(^_^)", "X > Y");
        let dup = seen.admit("(^_^)", "X > Z").unwrap();
        assert_eq!(
            dup.to_string(),
            "'(^_^)' in 'X > Z' is a duplicate. First seen in 'X > Y'."
        );
    }
}
