//! Scope-controlled removal of repeated leaves.

use crate::model::{Dataset, UniquenessScope};
use crate::reconcile::{Duplicate, SeenSet};
use crate::rules::find_empty_branches;
use serde::Serialize;

/// What a deduplication pass removed.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DedupReport {
    pub duplicates: Vec<Duplicate>,
    /// Locations of leaves dropped for lacking an identity
    pub malformed: Vec<String>,
    /// Branches and categories removed because they ended up empty
    pub pruned: Vec<String>,
    /// Leaves remaining
    pub kept: usize,
}

impl DedupReport {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.malformed.is_empty() && self.pruned.is_empty()
    }
}

/// Remove repeated identities within `scope`; the first occurrence in
/// traversal order wins.
///
/// Malformed leaves are dropped under every scope. Empty sub-categories and
/// categories are pruned afterwards. Extra keys on categories and
/// sub-categories are kept.
pub fn deduplicate(dataset: &Dataset, scope: UniquenessScope) -> (Dataset, DedupReport) {
    let field = dataset.identity_field();
    let mut out = dataset.clone();
    let mut report = DedupReport::default();
    let mut global = SeenSet::new();

    for branch in out.branches_mut() {
        let location = branch.location.to_string();
        let mut local = SeenSet::new();
        branch.leaves.retain(|leaf| {
            let Some(id) = leaf.identity(field) else {
                tracing::warn!(op = "dedup", location = %location, "dropping leaf without identity");
                report.malformed.push(location.clone());
                return false;
            };
            let seen = match scope {
                UniquenessScope::Global => &mut global,
                UniquenessScope::Branch => &mut local,
                UniquenessScope::Off => return true,
            };
            match seen.admit(id, &location) {
                None => true,
                Some(dup) => {
                    tracing::info!(op = "dedup", "{}", dup);
                    report.duplicates.push(dup);
                    false
                }
            }
        });
    }

    report.pruned = find_empty_branches(&out);
    for location in &report.pruned {
        tracing::info!(op = "dedup", location = %location, "removing empty branch");
    }
    out.prune_empty();
    report.kept = out.leaf_count();
    (out, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DatasetKind;
    use serde_json::json;

    fn parse(kind: DatasetKind, raw: serde_json::Value) -> Dataset {
        Dataset::from_json(kind, &raw).unwrap().0
    }

    #[test]
    fn test_duplicate_within_sub_category() {
        let dataset = parse(
            DatasetKind::Kaomoji,
            json!([{"name": "X", "categories": [{"name": "Y", "emoticons": ["(^_^)", "(^_^)"]}]}]),
        );
        let (out, report) = deduplicate(&dataset, UniquenessScope::Global);

        assert_eq!(
            out.to_json(),
            json!([{"name": "X", "categories": [{"name": "Y", "emoticons": ["(^_^)"]}]}])
        );
        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.duplicates[0].location, "X > Y");
        assert_eq!(report.duplicates[0].first_seen, "X > Y");
    }

    #[test]
    fn test_global_scope_prunes_emptied_branches() {
        let dataset = parse(
            DatasetKind::Kaomoji,
            json!([
                {"name": "A", "categories": [{"name": "One", "emoticons": ["x"]}]},
                {"name": "B", "icon": "b", "categories": [{"name": "Two", "emoticons": ["x"]}]}
            ]),
        );
        let (out, report) = deduplicate(&dataset, UniquenessScope::Global);

        assert_eq!(out.categories.len(), 1);
        assert_eq!(report.pruned, vec!["B > Two".to_string(), "B".to_string()]);
        assert_eq!(report.kept, 1);
    }

    #[test]
    fn test_branch_scope_allows_cross_category_repeats() {
        let dataset = parse(
            DatasetKind::Symbol,
            json!([
                {"name": "Math", "symbols": ["±", "±"]},
                {"name": "Latin", "symbols": ["±"]}
            ]),
        );
        let (out, report) = deduplicate(&dataset, UniquenessScope::Branch);

        assert_eq!(out.leaf_count(), 2);
        assert_eq!(report.duplicates.len(), 1);
    }

    #[test]
    fn test_off_scope_keeps_everything_but_malformed() {
        let dataset = parse(
            DatasetKind::Emoji,
            json!([{"name": "S", "emojis": [{"emoji": "😀"}, {"emoji": "😀"}, {"name": "nothing"}]}]),
        );
        let (out, report) = deduplicate(&dataset, UniquenessScope::Off);

        assert_eq!(out.leaf_count(), 2);
        assert_eq!(report.malformed, vec!["S".to_string()]);
    }
}
