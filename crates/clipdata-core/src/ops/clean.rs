//! Invisible-character cleaning of leaf identities.

use crate::config::Exclusion;
use crate::model::Dataset;
use crate::rules::find_empty_branches;
use crate::unicode::clean_invisible;
use serde::Serialize;

/// One identity rewritten by the cleaner.
///
/// `before` and `after` often look identical on screen: the removed
/// characters are invisible.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Cleaned {
    pub before: String,
    pub after: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CleanReport {
    pub cleaned: Vec<Cleaned>,
    /// Leaves dropped because nothing was left after cleaning
    pub dropped: Vec<Cleaned>,
    /// Branches and categories removed because they ended up empty
    pub pruned: Vec<String>,
}

/// Strip excluded characters from every leaf identity.
///
/// Plain leaves are rewritten; records get their identity field rewritten
/// and keep every other field. Leaves without an identity are left alone.
pub fn clean_dataset(dataset: &Dataset, exclusion: &Exclusion) -> (Dataset, CleanReport) {
    let field = dataset.identity_field();
    let mut out = dataset.clone();
    let mut report = CleanReport::default();

    for branch in out.branches_mut() {
        let location = branch.location.to_string();
        branch.leaves.retain_mut(|leaf| {
            let Some(before) = leaf.identity(field).map(str::to_string) else {
                return true;
            };
            let after = clean_invisible(&before, exclusion);
            if after == before {
                return true;
            }
            let change = Cleaned {
                before,
                after: after.clone(),
                location: location.clone(),
            };
            if after.is_empty() {
                tracing::warn!(op = "clean", location = %location, before = %change.before, "leaf is empty after cleaning, dropped");
                report.dropped.push(change);
                return false;
            }
            tracing::info!(op = "clean", location = %location, "Cleaned '{}' -> '{}'", change.before, change.after);
            leaf.set_identity(field, after);
            report.cleaned.push(change);
            true
        });
    }

    report.pruned = find_empty_branches(&out);
    out.prune_empty();
    (out, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DatasetKind;
    use serde_json::json;

    #[test]
    fn test_zero_width_space_removed() {
        let (dataset, _) = Dataset::from_json(
            DatasetKind::Kaomoji,
            &json!([{"name": "N", "categories": [{"name": "Anger", "emoticons": ["(>_<)\u{200b}", "(-_-;)"]}]}]),
        )
        .unwrap();

        let (out, report) = clean_dataset(&dataset, &Exclusion::default());

        assert_eq!(
            out.to_json(),
            json!([{"name": "N", "categories": [{"name": "Anger", "emoticons": ["(>_<)", "(-_-;)"]}]}])
        );
        assert_eq!(report.cleaned.len(), 1);
        assert_eq!(report.cleaned[0].after, "(>_<)");
        assert_eq!(report.cleaned[0].location, "N > Anger");
    }

    #[test]
    fn test_record_identity_cleaned_in_place() {
        let (dataset, _) = Dataset::from_json(
            DatasetKind::Kaomoji,
            &json!([{"name": "N", "categories": [{"name": "S", "emoticons": [
                {"kaomoji": "\u{feff}(T_T)", "description": "crying"}
            ]}]}]),
        )
        .unwrap();

        let (out, _) = clean_dataset(&dataset, &Exclusion::default());

        assert_eq!(
            out.to_json()[0]["categories"][0]["emoticons"][0],
            json!({"kaomoji": "(T_T)", "description": "crying"})
        );
    }

    #[test]
    fn test_leaf_empty_after_cleaning_is_dropped() {
        let (dataset, _) = Dataset::from_json(
            DatasetKind::Symbol,
            &json!([{"name": "Format", "symbols": ["\u{200d}"]}]),
        )
        .unwrap();

        let (out, report) = clean_dataset(&dataset, &Exclusion::default());

        assert!(out.categories.is_empty());
        assert_eq!(report.dropped.len(), 1);
        assert_eq!(report.pruned, vec!["Format".to_string()]);
    }
}
