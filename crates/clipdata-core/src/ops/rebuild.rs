//! Rebuild a dataset in the order of a reference tree.
//!
//! The reference decides branch order and leaf order; the pool supplies the
//! leaf records. Nothing from the pool is lost: every pool leaf is either
//! placed exactly once or reported.

use crate::errors::{ExError, ExErrorKind, Result};
use crate::model::{Category, Children, Dataset, Leaf, Location, SubCategory};
use crate::reconcile::{Duplicate, LeafRef};
use crate::traversal::LeafIndex;
use serde::Serialize;
use serde_json::Map;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RebuildReport {
    /// Pool leaves the reference never mentions, with where they were placed
    pub orphans: Vec<LeafRef>,
    /// Reference leaves the pool does not have
    pub missing: Vec<LeafRef>,
    /// Pool identities occurring more than once; emitted once
    pub unresolved: Vec<Duplicate>,
    /// Pool leaves without an identity, dropped
    pub malformed: usize,
}

/// Rebuild `pool` in the order of `reference`.
///
/// Branches are visited in reference order. Each emits the reference's
/// leaves (records taken from the pool by identity, wherever they sit in
/// the pool), followed by the pool leaves living in that branch that the
/// reference does not mention, sorted by identity. Branches only the pool
/// has come after all reference branches, in pool order, sorted. Empty
/// branches are omitted.
///
/// # Errors
///
/// Returns `InvalidInput` if the two datasets are of different kinds.
pub fn rebuild(reference: &Dataset, pool: &Dataset) -> Result<(Dataset, RebuildReport)> {
    if reference.kind() != pool.kind() {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("rebuild")
            .with_message(format!(
                "reference is a {} dataset but the pool is {}",
                reference.kind(),
                pool.kind()
            )));
    }

    let index = LeafIndex::build(pool);
    let mut placer = Placer {
        field: pool.identity_field(),
        pool,
        index: &index,
        referenced: reference_identities(reference),
        placed: HashSet::new(),
        report: RebuildReport {
            unresolved: unresolved(&index),
            malformed: index.skipped(),
            ..RebuildReport::default()
        },
    };

    let mut categories: Vec<Category> = reference
        .categories
        .iter()
        .map(|ref_cat| placer.reference_category(ref_cat))
        .collect();

    for branch in pool.branches() {
        if reference.branch(&branch.location).is_some() {
            continue;
        }
        let leaves = placer.orphans(&branch.location, branch.leaves);
        attach_pool_branch(&mut categories, pool, &branch.location, leaves);
    }

    let mut out = Dataset::new(reference.kind(), categories);
    out.prune_empty();
    Ok((out, placer.report))
}

struct Placer<'a> {
    field: &'static str,
    pool: &'a Dataset,
    index: &'a LeafIndex,
    /// Every identity the reference lists; these are never orphans
    referenced: HashSet<String>,
    placed: HashSet<String>,
    report: RebuildReport,
}

impl Placer<'_> {
    fn reference_category(&mut self, ref_cat: &Category) -> Category {
        let pool = self.pool;
        let pool_cat = pool.category(&ref_cat.name);
        let extra = pool_cat
            .map(|c| c.extra.clone())
            .unwrap_or_else(|| ref_cat.extra.clone());

        let children = match &ref_cat.children {
            Children::Leaves(leaves) => {
                Children::Leaves(self.branch(&Location::top(&ref_cat.name), leaves))
            }
            Children::SubCategories(subs) => Children::SubCategories(
                subs.iter()
                    .map(|sub| {
                        let extra = pool_cat
                            .and_then(|c| c.sub_category(&sub.name))
                            .map(|s| s.extra.clone())
                            .unwrap_or_else(|| sub.extra.clone());
                        let location = Location::nested(&ref_cat.name, &sub.name);
                        SubCategory {
                            name: sub.name.clone(),
                            extra,
                            leaves: self.branch(&location, &sub.leaves),
                        }
                    })
                    .collect(),
            ),
        };

        Category {
            name: ref_cat.name.clone(),
            extra,
            children,
        }
    }

    /// Reference-ordered leaves, then this branch's orphans
    fn branch(&mut self, location: &Location, ref_leaves: &[Leaf]) -> Vec<Leaf> {
        let mut out = Vec::with_capacity(ref_leaves.len());
        for leaf in ref_leaves {
            let Some(id) = leaf.identity(self.field) else {
                continue;
            };
            if self.placed.contains(id) {
                continue;
            }
            match self.index.get(id) {
                Some(found) => {
                    self.placed.insert(id.to_string());
                    out.push(found.clone());
                }
                None => {
                    tracing::warn!(op = "rebuild", identity = id, location = %location, "missing from pool");
                    self.report.missing.push(LeafRef::new(id, location.to_string()));
                }
            }
        }

        let pool = self.pool;
        if let Some(pool_leaves) = pool.branch(location) {
            out.extend(self.orphans(location, pool_leaves));
        }
        out
    }

    /// Unplaced pool leaves whose first occurrence is in `location`, sorted
    fn orphans(&mut self, location: &Location, pool_leaves: &[Leaf]) -> Vec<Leaf> {
        let mut found: Vec<(String, Leaf)> = Vec::new();
        for leaf in pool_leaves {
            let Some(id) = leaf.identity(self.field) else {
                continue;
            };
            if self.placed.contains(id)
                || self.referenced.contains(id)
                || self.index.location_of(id) != Some(location)
            {
                continue;
            }
            self.placed.insert(id.to_string());
            found.push((id.to_string(), leaf.clone()));
        }
        found.sort_by(|a, b| a.0.cmp(&b.0));

        found
            .into_iter()
            .map(|(id, leaf)| {
                tracing::info!(op = "rebuild", identity = %id, location = %location, "preserved orphan");
                self.report.orphans.push(LeafRef::new(id, location.to_string()));
                leaf
            })
            .collect()
    }
}

fn reference_identities(reference: &Dataset) -> HashSet<String> {
    let field = reference.identity_field();
    reference
        .leaves()
        .filter_map(|(_, leaf)| leaf.identity(field).map(str::to_string))
        .collect()
}

fn unresolved(index: &LeafIndex) -> Vec<Duplicate> {
    index
        .repeats()
        .iter()
        .map(|(id, location)| Duplicate {
            identity: id.clone(),
            location: location.to_string(),
            first_seen: index
                .location_of(id)
                .map(|l| l.to_string())
                .unwrap_or_default(),
        })
        .collect()
}

/// Append a pool-only branch: a new category for flat kinds, a new
/// sub-category (and its category if needed) for nested kinds.
fn attach_pool_branch(
    categories: &mut Vec<Category>,
    pool: &Dataset,
    location: &Location,
    leaves: Vec<Leaf>,
) {
    let pool_cat = pool.category(&location.category);
    let cat_extra = pool_cat.map(|c| c.extra.clone()).unwrap_or_default();

    let Some(sub_name) = &location.sub_category else {
        categories.push(Category {
            name: location.category.clone(),
            extra: cat_extra,
            children: Children::Leaves(leaves),
        });
        return;
    };

    let sub = SubCategory {
        name: sub_name.clone(),
        extra: pool_cat
            .and_then(|c| c.sub_category(sub_name))
            .map(|s| s.extra.clone())
            .unwrap_or_else(Map::new),
        leaves,
    };
    match categories.iter_mut().find(|c| c.name == location.category) {
        Some(Category {
            children: Children::SubCategories(subs),
            ..
        }) => subs.push(sub),
        _ => categories.push(Category {
            name: location.category.clone(),
            extra: cat_extra,
            children: Children::SubCategories(vec![sub]),
        }),
    }
}
