//! Codepoint ordering of leaves.
//!
//! Leaves compare by the Unicode scalar sequence of their identity, which
//! for Rust strings is plain `str` ordering. No locale collation is used.

use crate::model::{Dataset, Leaf};
use serde::Serialize;
use std::cmp::Ordering;

/// Ordering state of one branch.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BranchOrder {
    Sorted,
    Empty,
    /// `before` sits at `position` but sorts after the leaf following it
    Unsorted {
        position: usize,
        before: String,
        after: String,
    },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderStatus {
    pub location: String,
    pub order: BranchOrder,
}

/// Sort every branch by codepoint.
///
/// Returns the sorted copy and the locations whose order changed. Leaves
/// without an identity keep their relative order at the end of the branch.
pub fn sort_by_codepoint(dataset: &Dataset) -> (Dataset, Vec<String>) {
    let field = dataset.identity_field();
    let mut out = dataset.clone();
    let mut changed = Vec::new();

    for branch in out.branches_mut() {
        let before: Vec<Leaf> = branch.leaves.clone();
        branch
            .leaves
            .sort_by(|a, b| compare(a.identity(field), b.identity(field)));
        if *branch.leaves != before {
            tracing::debug!(op = "sort", location = %branch.location, "branch reordered");
            changed.push(branch.location.to_string());
        }
    }
    (out, changed)
}

fn compare(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Check each branch for codepoint order.
pub fn verify_order(dataset: &Dataset) -> Vec<OrderStatus> {
    let field = dataset.identity_field();
    dataset
        .branches()
        .into_iter()
        .map(|branch| {
            let order = if branch.leaves.is_empty() {
                BranchOrder::Empty
            } else {
                first_violation(branch.leaves, field)
            };
            OrderStatus {
                location: branch.location.to_string(),
                order,
            }
        })
        .collect()
}

fn first_violation(leaves: &[Leaf], field: &str) -> BranchOrder {
    for (position, pair) in leaves.windows(2).enumerate() {
        let (a, b) = (pair[0].identity(field), pair[1].identity(field));
        if compare(a, b) == Ordering::Greater {
            return BranchOrder::Unsorted {
                position,
                before: a.unwrap_or_default().to_string(),
                after: b.unwrap_or_default().to_string(),
            };
        }
    }
    BranchOrder::Sorted
}
