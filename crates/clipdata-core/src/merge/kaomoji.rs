//! Fold vendor kaomoji lists into a base dataset.

use crate::errors::{CurationError, ExError, ExErrorKind, Result};
use crate::model::{Children, Dataset, DatasetKind, Leaf, Location, SubCategory};
use crate::reconcile::{Duplicate, LeafRef, SeenSet};
use crate::traversal::LeafIndex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

/// Sources feeding one sub-category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    pub sources: Vec<String>,
    pub main_category: String,
    pub sub_category: String,
}

impl MappingRule {
    fn new(sources: &[&str], main_category: &str, sub_category: &str) -> Self {
        Self {
            sources: sources.iter().map(|s| s.to_string()).collect(),
            main_category: main_category.to_string(),
            sub_category: sub_category.to_string(),
        }
    }
}

/// Built-in vendor mapping
pub fn default_rules() -> Vec<MappingRule> {
    vec![
        MappingRule::new(&["[Microsoft] Happy.txt", "[Google] Smiling.txt"], "Positive", "Joy"),
        MappingRule::new(&["[Google] Love.txt"], "Positive", "Love"),
        MappingRule::new(&["[Microsoft] Acting Cute.txt"], "Positive", "Cute"),
        MappingRule::new(&["[Microsoft] Sad.txt", "[Google] Crying.txt"], "Negative", "Sadness"),
        MappingRule::new(&["[Microsoft] Angry.txt"], "Negative", "Anger"),
        MappingRule::new(&["[Google] Look of Disapproval.txt"], "Negative", "Dissatisfaction"),
        MappingRule::new(&["[Google] Nervous.txt"], "Negative", "Fear"),
        MappingRule::new(&["[Google] Shruggie.txt"], "Neutral", "Indifference"),
        MappingRule::new(
            &["[Microsoft] Surprised_Speechless.txt", "[Google] Surprise.txt"],
            "Neutral",
            "Surprise",
        ),
        MappingRule::new(&["[Microsoft] Greeting.txt"], "Various", "Greeting"),
        MappingRule::new(&["[Google] Hugging.txt"], "Various", "Hugging"),
        MappingRule::new(&["[Google] Table Flip.txt"], "Various", "Table Flipping"),
        MappingRule::new(&["[Google] Dancing.txt"], "Various", "Dancing"),
        MappingRule::new(&["[Google] Flexing.txt"], "Various", "Flexing"),
        MappingRule::new(&["[Google] Pointers.txt"], "Various", "Pointing"),
        MappingRule::new(&["[Google] Animals.txt"], "Animals", "General"),
        MappingRule::new(
            &["[Microsoft] Classic ASCII Emoticons.txt", "[Google] Classic.txt"],
            "Other",
            "Classic",
        ),
    ]
}

/// Parse a rules file: a JSON list of `{sources, main_category, sub_category}`.
///
/// # Errors
///
/// Returns `SchemaMismatch` if the value is not such a list.
pub fn rules_from_value(value: &Value) -> Result<Vec<MappingRule>> {
    Vec::<MappingRule>::deserialize(value).map_err(|e| {
        ExError::new(ExErrorKind::SchemaMismatch)
            .with_op("load_mapping_rules")
            .with_message(e.to_string())
    })
}

/// Non-blank lines of a source file, trimmed
pub fn source_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ExpandReport {
    pub added: Vec<LeafRef>,
    pub duplicates: Vec<Duplicate>,
    /// Sub-categories that did not exist in the base
    pub created: Vec<String>,
    /// Rules whose main category the base lacks
    pub unresolved: Vec<String>,
    /// Source files named by a rule but not provided
    pub missing_sources: Vec<String>,
}

/// Merge vendor lists into `base`.
///
/// `sources` maps a source file name to its lines. Every identity already
/// in the base seeds the master set; a candidate already in the master set
/// is reported as a duplicate and dropped. Each touched sub-category
/// becomes the codepoint-sorted union of its existing and new entries.
///
/// # Errors
///
/// Returns `InvalidInput` if `base` is not a kaomoji dataset.
pub fn expand_kaomoji(
    base: &Dataset,
    rules: &[MappingRule],
    sources: &BTreeMap<String, Vec<String>>,
) -> Result<(Dataset, ExpandReport)> {
    if base.kind() != DatasetKind::Kaomoji {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("expand_kaomoji")
            .with_message(format!("expected a kaomoji dataset, got {}", base.kind())));
    }

    let field = base.identity_field();
    let mut master = SeenSet::from_index(&LeafIndex::build(base));
    let mut out = base.clone();
    let mut report = ExpandReport::default();

    for rule in rules {
        let mut candidates: Vec<&str> = Vec::new();
        for source in &rule.sources {
            match sources.get(source) {
                Some(lines) => candidates.extend(lines.iter().map(String::as_str)),
                None => {
                    crate::log_skip!("expand_kaomoji", "source file not provided", source = %source);
                    if !report.missing_sources.contains(source) {
                        report.missing_sources.push(source.clone());
                    }
                }
            }
        }
        if candidates.is_empty() {
            continue;
        }

        let Some(category) = out.category_mut(&rule.main_category) else {
            let err = CurationError::UnknownCategory {
                category: rule.main_category.clone(),
            };
            crate::log_skip!("expand_kaomoji", err, sub_category = %rule.sub_category);
            report.unresolved.push(rule.main_category.clone());
            continue;
        };
        let Children::SubCategories(subs) = &mut category.children else {
            continue;
        };

        let location = Location::nested(&rule.main_category, &rule.sub_category).to_string();
        let position = match subs.iter().position(|s| s.name == rule.sub_category) {
            Some(position) => position,
            None => {
                tracing::info!(op = "expand_kaomoji", location = %location, "creating sub-category");
                subs.push(SubCategory::new(rule.sub_category.clone(), Vec::new()));
                report.created.push(location.clone());
                subs.len() - 1
            }
        };
        let sub = &mut subs[position];

        let screened = master.screen(&candidates, &location);
        report.duplicates.extend(screened.duplicates);
        if !screened.fresh.is_empty() {
            tracing::info!(op = "expand_kaomoji", location = %location, added = screened.fresh.len(), "adding new kaomoji");
        }

        let mut seen_here: HashSet<String> = HashSet::new();
        let mut leaves: Vec<Leaf> = std::mem::take(&mut sub.leaves)
            .into_iter()
            .filter(|leaf| match leaf.identity(field) {
                Some(id) => seen_here.insert(id.to_string()),
                None => true,
            })
            .collect();
        for id in &screened.fresh {
            master.admit(id, &location);
            report.added.push(LeafRef::new(id.clone(), location.clone()));
            leaves.push(Leaf::Plain(id.clone()));
        }
        leaves.sort_by(|a, b| a.identity(field).cmp(&b.identity(field)));
        sub.leaves = leaves;
    }

    Ok((out, report))
}
