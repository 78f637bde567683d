#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use clipdata_core::export::content_hash;
use clipdata_core::ops::{deduplicate, rebuild, sort_by_codepoint, verify_order, BranchOrder};
use clipdata_core::{Dataset, DatasetKind, UniquenessScope};
use common::identities;
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;

/// Kaomoji trees: up to 3 categories of up to 3 sub-categories of short leaves
fn kaomoji_tree() -> impl Strategy<Value = Value> {
    let leaves = prop::collection::vec("[a-e\u{e9}\u{20ac}]{1,3}", 0..6);
    let subs = prop::collection::vec(leaves, 1..4);
    prop::collection::vec(subs, 1..4).prop_map(|cats| {
        Value::Array(
            cats.into_iter()
                .enumerate()
                .map(|(ci, subs)| {
                    let subs: Vec<Value> = subs
                        .into_iter()
                        .enumerate()
                        .map(|(si, leaves)| json!({"name": format!("S{}", si), "emoticons": leaves}))
                        .collect();
                    json!({"name": format!("C{}", ci), "categories": subs})
                })
                .collect(),
        )
    })
}

fn parse(raw: &Value) -> Dataset {
    Dataset::from_json(DatasetKind::Kaomoji, raw).unwrap().0
}

fn reverse_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let reversed: Map<String, Value> = map
                .iter()
                .rev()
                .map(|(k, v)| (k.clone(), reverse_keys(v)))
                .collect();
            Value::Object(reversed)
        }
        Value::Array(items) => Value::Array(items.iter().map(reverse_keys).collect()),
        other => other.clone(),
    }
}

proptest! {
    #[test]
    fn prop_sort_is_idempotent(raw in kaomoji_tree()) {
        let (once, _) = sort_by_codepoint(&parse(&raw));
        let (twice, changed) = sort_by_codepoint(&once);
        prop_assert_eq!(once.to_json(), twice.to_json());
        prop_assert!(changed.is_empty());
    }

    #[test]
    fn prop_sorted_branches_verify(raw in kaomoji_tree()) {
        let (sorted, _) = sort_by_codepoint(&parse(&raw));
        for status in verify_order(&sorted) {
            prop_assert!(!matches!(status.order, BranchOrder::Unsorted { .. }), "{:?}", status);
        }
    }

    #[test]
    fn prop_dedup_preserves_membership(raw in kaomoji_tree()) {
        let dataset = parse(&raw);
        let (out, report) = deduplicate(&dataset, UniquenessScope::Global);

        let before: BTreeSet<String> = identities(&dataset).into_iter().collect();
        let after = identities(&out);
        let after_set: BTreeSet<String> = after.iter().cloned().collect();
        prop_assert_eq!(before, after_set);
        prop_assert_eq!(after.len(), identities(&dataset).len() - report.duplicates.len());
    }

    #[test]
    fn prop_dedup_is_idempotent(raw in kaomoji_tree()) {
        let (once, _) = deduplicate(&parse(&raw), UniquenessScope::Global);
        let (twice, report) = deduplicate(&once, UniquenessScope::Global);
        prop_assert_eq!(once, twice);
        prop_assert!(report.is_clean());
    }

    #[test]
    fn prop_rebuild_places_every_pool_leaf(reference in kaomoji_tree(), pool in kaomoji_tree()) {
        let pool = parse(&pool);
        let (out, report) = rebuild(&parse(&reference), &pool).unwrap();

        let pool_ids: BTreeSet<String> = identities(&pool).into_iter().collect();
        let out_ids = identities(&out);
        let out_set: BTreeSet<String> = out_ids.iter().cloned().collect();
        prop_assert_eq!(&pool_ids, &out_set);
        prop_assert_eq!(out_ids.len(), out_set.len());
        prop_assert!(report.missing.iter().all(|m| !pool_ids.contains(&m.identity)));
    }

    #[test]
    fn prop_hash_ignores_key_order(raw in kaomoji_tree()) {
        prop_assert_eq!(content_hash(&raw).unwrap(), content_hash(&reverse_keys(&raw)).unwrap());
    }
}
