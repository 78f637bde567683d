use crate::model::{Children, Dataset, DatasetKind, UniquenessScope};
use crate::reconcile::{Duplicate, SeenSet};
use serde::Serialize;
use serde_json::Value;

/// A shape problem in a raw dataset document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StructureIssue {
    pub location: String,
    pub message: String,
}

impl StructureIssue {
    fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

/// Check the raw document shape before typed parsing.
///
/// Returns every issue found; an empty list means the document is valid.
pub fn find_structure_issues(kind: DatasetKind, raw: &Value) -> Vec<StructureIssue> {
    let Some(items) = raw.as_array() else {
        return vec![StructureIssue::new("root", "top-level structure is not a list")];
    };

    let children_key = kind.sub_categories_key().unwrap_or(kind.leaves_key());
    let mut issues = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        let Some(obj) = item.as_object() else {
            issues.push(StructureIssue::new(format!("item {}", idx), "not an object"));
            continue;
        };
        let location = match obj.get("name").and_then(Value::as_str) {
            Some(name) => name.to_string(),
            None => {
                issues.push(StructureIssue::new(
                    format!("item {}", idx),
                    "missing or non-string 'name'",
                ));
                format!("item {}", idx)
            }
        };
        match obj.get(children_key) {
            Some(Value::Array(children)) if kind.is_nested() => {
                issues.extend(sub_category_issues(kind, &location, children));
            }
            Some(Value::Array(_)) => {}
            _ => issues.push(StructureIssue::new(
                location,
                format!("missing or non-list '{}'", children_key),
            )),
        }
    }
    issues
}

fn sub_category_issues(kind: DatasetKind, parent: &str, subs: &[Value]) -> Vec<StructureIssue> {
    let mut issues = Vec::new();
    for (idx, sub) in subs.iter().enumerate() {
        let here = format!("{} > item {}", parent, idx);
        let Some(obj) = sub.as_object() else {
            issues.push(StructureIssue::new(here, "sub-category is not an object"));
            continue;
        };
        let location = match obj.get("name").and_then(Value::as_str) {
            Some(name) => format!("{} > {}", parent, name),
            None => {
                issues.push(StructureIssue::new(here.clone(), "missing or non-string 'name'"));
                here
            }
        };
        if !matches!(obj.get(kind.leaves_key()), Some(Value::Array(_))) {
            issues.push(StructureIssue::new(
                location,
                format!("missing or non-list '{}'", kind.leaves_key()),
            ));
        }
    }
    issues
}

/// Sub-categories and categories without leaves.
pub fn find_empty_branches(dataset: &Dataset) -> Vec<String> {
    let mut out = Vec::new();
    for category in &dataset.categories {
        match &category.children {
            Children::Leaves(leaves) => {
                if leaves.is_empty() {
                    out.push(category.name.clone());
                }
            }
            Children::SubCategories(subs) => {
                for sub in subs.iter().filter(|s| s.leaves.is_empty()) {
                    out.push(format!("{} > {}", category.name, sub.name));
                }
                if subs.iter().all(|s| s.leaves.is_empty()) {
                    out.push(category.name.clone());
                }
            }
        }
    }
    out
}

/// Identities repeated within `scope`, first occurrence excluded.
pub fn find_scope_violations(dataset: &Dataset, scope: UniquenessScope) -> Vec<Duplicate> {
    let field = dataset.identity_field();
    let mut global = SeenSet::new();
    let mut out = Vec::new();
    for branch in dataset.branches() {
        let location = branch.location.to_string();
        let mut local = SeenSet::new();
        let seen = match scope {
            UniquenessScope::Global => &mut global,
            UniquenessScope::Branch => &mut local,
            UniquenessScope::Off => return out,
        };
        for id in branch.leaves.iter().filter_map(|l| l.identity(field)) {
            out.extend(seen.admit(id, &location));
        }
    }
    out
}
