//! Category tree and its JSON conversion.
//!
//! Parsing is lenient: a malformed node is skipped and reported as a
//! [`SchemaWarning`] instead of aborting the run. Only a document whose
//! top level is not an array is rejected outright.

use crate::errors::{CurationError, Result};
use crate::model::kind::DatasetKind;
use crate::model::leaf::Leaf;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

pub(crate) const NAME_KEY: &str = "name";

/// Path of a branch inside the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Location {
    pub category: String,
    pub sub_category: Option<String>,
}

impl Location {
    pub fn top(category: &str) -> Self {
        Self {
            category: category.to_string(),
            sub_category: None,
        }
    }

    pub fn nested(category: &str, sub_category: &str) -> Self {
        Self {
            category: category.to_string(),
            sub_category: Some(sub_category.to_string()),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub_category {
            Some(sub) => write!(f, "{} > {}", self.category, sub),
            None => f.write_str(&self.category),
        }
    }
}

/// A node skipped during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaWarning {
    /// `"Main"`, `"Main > Sub"`, or `"#3"` when the node has no usable name
    pub location: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubCategory {
    pub name: String,
    /// Every source key in document order; `name` and the leaves key are
    /// placeholders that only remember their position
    pub extra: Map<String, Value>,
    pub leaves: Vec<Leaf>,
}

impl SubCategory {
    pub fn new(name: impl Into<String>, leaves: Vec<Leaf>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
            leaves,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    Leaves(Vec<Leaf>),
    SubCategories(Vec<SubCategory>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    /// Every source key in document order; `name` and the children key are
    /// placeholders that only remember their position
    pub extra: Map<String, Value>,
    pub children: Children,
}

impl Category {
    pub fn with_leaves(name: impl Into<String>, leaves: Vec<Leaf>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
            children: Children::Leaves(leaves),
        }
    }

    pub fn with_sub_categories(name: impl Into<String>, subs: Vec<SubCategory>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
            children: Children::SubCategories(subs),
        }
    }

    pub fn sub_category(&self, name: &str) -> Option<&SubCategory> {
        match &self.children {
            Children::SubCategories(subs) => subs.iter().find(|s| s.name == name),
            Children::Leaves(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.children {
            Children::Leaves(leaves) => leaves.is_empty(),
            Children::SubCategories(subs) => subs.is_empty(),
        }
    }
}

/// Read-only view of one leaf list and where it lives.
#[derive(Debug, Clone)]
pub struct Branch<'a> {
    pub location: Location,
    pub leaves: &'a [Leaf],
}

/// Mutable view of one leaf list and where it lives.
#[derive(Debug)]
pub struct BranchMut<'a> {
    pub location: Location,
    pub leaves: &'a mut Vec<Leaf>,
}

/// A whole dataset tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    kind: DatasetKind,
    pub categories: Vec<Category>,
}

impl Dataset {
    pub fn new(kind: DatasetKind, categories: Vec<Category>) -> Self {
        Self { kind, categories }
    }

    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    /// Identity field of this dataset's detailed leaves
    pub fn identity_field(&self) -> &'static str {
        self.kind.identity_field()
    }

    /// Parse a category array.
    ///
    /// # Errors
    ///
    /// Returns `SchemaMismatch` if the top level is not an array.
    pub fn from_json(kind: DatasetKind, value: &Value) -> Result<(Dataset, Vec<SchemaWarning>)> {
        let items = value.as_array().ok_or_else(|| CurationError::SchemaMismatch {
            reason: "top-level structure is not a list".to_string(),
        })?;

        let mut warnings = Vec::new();
        let mut categories = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if let Some(category) = parse_category(kind, idx, item, &mut warnings) {
                categories.push(category);
            }
        }
        Ok((Dataset { kind, categories }, warnings))
    }

    pub fn to_json(&self) -> Value {
        Value::Array(
            self.categories
                .iter()
                .map(|c| category_to_json(self.kind, c))
                .collect(),
        )
    }

    /// Every leaf list in traversal order: category order, then
    /// sub-category order.
    pub fn branches(&self) -> Vec<Branch<'_>> {
        let mut out = Vec::new();
        for category in &self.categories {
            match &category.children {
                Children::Leaves(leaves) => out.push(Branch {
                    location: Location::top(&category.name),
                    leaves,
                }),
                Children::SubCategories(subs) => {
                    for sub in subs {
                        out.push(Branch {
                            location: Location::nested(&category.name, &sub.name),
                            leaves: &sub.leaves,
                        });
                    }
                }
            }
        }
        out
    }

    pub fn branches_mut(&mut self) -> Vec<BranchMut<'_>> {
        let mut out = Vec::new();
        for category in &mut self.categories {
            match &mut category.children {
                Children::Leaves(leaves) => out.push(BranchMut {
                    location: Location::top(&category.name),
                    leaves,
                }),
                Children::SubCategories(subs) => {
                    for sub in subs.iter_mut() {
                        out.push(BranchMut {
                            location: Location::nested(&category.name, &sub.name),
                            leaves: &mut sub.leaves,
                        });
                    }
                }
            }
        }
        out
    }

    /// Every leaf with its location, in traversal order.
    pub fn leaves(&self) -> impl Iterator<Item = (Location, &Leaf)> + '_ {
        self.branches().into_iter().flat_map(|branch| {
            let Branch { location, leaves } = branch;
            leaves.iter().map(move |leaf| (location.clone(), leaf))
        })
    }

    pub fn leaf_count(&self) -> usize {
        self.branches().iter().map(|b| b.leaves.len()).sum()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name == name)
    }

    /// Leaf list at `location`, if that branch exists
    pub fn branch(&self, location: &Location) -> Option<&[Leaf]> {
        let category = self.category(&location.category)?;
        match (&category.children, &location.sub_category) {
            (Children::Leaves(leaves), None) => Some(leaves.as_slice()),
            (Children::SubCategories(_), Some(sub)) => {
                category.sub_category(sub).map(|s| s.leaves.as_slice())
            }
            _ => None,
        }
    }

    /// Drop sub-categories without leaves, then categories without children.
    pub fn prune_empty(&mut self) {
        for category in &mut self.categories {
            if let Children::SubCategories(subs) = &mut category.children {
                subs.retain(|s| !s.leaves.is_empty());
            }
        }
        self.categories.retain(|c| !c.is_empty());
    }
}

fn parse_category(
    kind: DatasetKind,
    idx: usize,
    item: &Value,
    warnings: &mut Vec<SchemaWarning>,
) -> Option<Category> {
    let Some(obj) = item.as_object() else {
        warnings.push(SchemaWarning {
            location: format!("#{}", idx),
            message: "category is not an object".to_string(),
        });
        return None;
    };
    let Some(name) = obj.get(NAME_KEY).and_then(Value::as_str) else {
        warnings.push(SchemaWarning {
            location: format!("#{}", idx),
            message: "category is missing a string 'name'".to_string(),
        });
        return None;
    };

    let children_key = kind.sub_categories_key().unwrap_or(kind.leaves_key());
    let extra = extra_fields(obj, children_key);
    let raw_children = children_array(obj, children_key, name, warnings);

    let children = if kind.is_nested() {
        let subs = raw_children
            .iter()
            .enumerate()
            .filter_map(|(sub_idx, sub)| parse_sub_category(kind, name, sub_idx, sub, warnings))
            .collect();
        Children::SubCategories(subs)
    } else {
        Children::Leaves(parse_leaves(raw_children, &Location::top(name), warnings))
    };

    Some(Category {
        name: name.to_string(),
        extra,
        children,
    })
}

fn parse_sub_category(
    kind: DatasetKind,
    parent: &str,
    idx: usize,
    item: &Value,
    warnings: &mut Vec<SchemaWarning>,
) -> Option<SubCategory> {
    let Some(obj) = item.as_object() else {
        warnings.push(SchemaWarning {
            location: format!("{} > #{}", parent, idx),
            message: "sub-category is not an object".to_string(),
        });
        return None;
    };
    let Some(name) = obj.get(NAME_KEY).and_then(Value::as_str) else {
        warnings.push(SchemaWarning {
            location: format!("{} > #{}", parent, idx),
            message: "sub-category is missing a string 'name'".to_string(),
        });
        return None;
    };

    let location = Location::nested(parent, name);
    let raw = children_array(obj, kind.leaves_key(), &location.to_string(), warnings);
    Some(SubCategory {
        name: name.to_string(),
        extra: extra_fields(obj, kind.leaves_key()),
        leaves: parse_leaves(raw, &location, warnings),
    })
}

fn parse_leaves(raw: &[Value], location: &Location, warnings: &mut Vec<SchemaWarning>) -> Vec<Leaf> {
    raw.iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            let leaf = Leaf::from_value(value);
            if leaf.is_none() {
                warnings.push(SchemaWarning {
                    location: location.to_string(),
                    message: format!("entry #{} is neither a string nor an object", idx),
                });
            }
            leaf
        })
        .collect()
}

const EMPTY: &[Value] = &[];

fn children_array<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    location: &str,
    warnings: &mut Vec<SchemaWarning>,
) -> &'a [Value] {
    match obj.get(key) {
        Some(Value::Array(items)) => items,
        Some(_) => {
            warnings.push(SchemaWarning {
                location: location.to_string(),
                message: format!("'{}' is not a list", key),
            });
            EMPTY
        }
        None => {
            warnings.push(SchemaWarning {
                location: location.to_string(),
                message: format!("missing '{}'", key),
            });
            EMPTY
        }
    }
}

fn extra_fields(obj: &Map<String, Value>, children_key: &str) -> Map<String, Value> {
    obj.iter()
        .map(|(k, v)| {
            if k.as_str() == NAME_KEY || k.as_str() == children_key {
                (k.clone(), Value::Null)
            } else {
                (k.clone(), v.clone())
            }
        })
        .collect()
}

/// Rebuilds a node object, putting `name` and the children back where the
/// source had them. Nodes built in memory get `name` first and children last.
fn node_to_json(
    name: &str,
    extra: &Map<String, Value>,
    children_key: &str,
    children: Value,
) -> Value {
    let mut obj = Map::new();
    let mut children = Some(children);
    if !extra.contains_key(NAME_KEY) {
        obj.insert(NAME_KEY.to_string(), Value::String(name.to_string()));
    }
    for (k, v) in extra {
        if k.as_str() == NAME_KEY {
            obj.insert(k.clone(), Value::String(name.to_string()));
        } else if k.as_str() == children_key {
            if let Some(children) = children.take() {
                obj.insert(k.clone(), children);
            }
        } else {
            obj.insert(k.clone(), v.clone());
        }
    }
    if let Some(children) = children {
        obj.insert(children_key.to_string(), children);
    }
    Value::Object(obj)
}

fn category_to_json(kind: DatasetKind, category: &Category) -> Value {
    match &category.children {
        Children::Leaves(leaves) => node_to_json(
            &category.name,
            &category.extra,
            kind.leaves_key(),
            leaves_to_json(leaves),
        ),
        Children::SubCategories(subs) => {
            let key = kind.sub_categories_key().unwrap_or("categories");
            let subs = subs.iter().map(|s| sub_category_to_json(kind, s)).collect();
            node_to_json(&category.name, &category.extra, key, Value::Array(subs))
        }
    }
}

fn sub_category_to_json(kind: DatasetKind, sub: &SubCategory) -> Value {
    node_to_json(&sub.name, &sub.extra, kind.leaves_key(), leaves_to_json(&sub.leaves))
}

fn leaves_to_json(leaves: &[Leaf]) -> Value {
    Value::Array(leaves.iter().map(Leaf::to_value).collect())
}
