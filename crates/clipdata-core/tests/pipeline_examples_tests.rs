#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use clipdata_core::ops::{clean_dataset, deduplicate, rebuild, sort_by_codepoint};
use clipdata_core::reconcile::LeafRef;
use clipdata_core::{DatasetKind, Exclusion, UniquenessScope};
use common::{identities, parse};
use serde_json::json;

#[test]
fn test_sort_by_codepoint_example() {
    let dataset = parse(DatasetKind::Symbol, json!([{"name": "Positive", "symbols": ["b", "a"]}]));

    let (sorted, _) = sort_by_codepoint(&dataset);

    assert_eq!(sorted.to_json(), json!([{"name": "Positive", "symbols": ["a", "b"]}]));
}

#[test]
fn test_dedup_example_cites_location() {
    let dataset = parse(
        DatasetKind::Kaomoji,
        json!([{"name": "X", "categories": [{"name": "Y", "emoticons": ["(^_^)", "(^_^)"]}]}]),
    );

    let (out, report) = deduplicate(&dataset, UniquenessScope::Global);

    assert_eq!(identities(&out), vec!["(^_^)".to_string()]);
    assert_eq!(report.duplicates.len(), 1);
    assert_eq!(report.duplicates[0].location, "X > Y");
    assert_eq!(
        report.duplicates[0].to_string(),
        "'(^_^)' in 'X > Y' is a duplicate. First seen in 'X > Y'."
    );
}

#[test]
fn test_orphan_example_appended_and_reported() {
    let reference = parse(
        DatasetKind::Kaomoji,
        json!([{"name": "Neutral", "categories": [{"name": "Surprise", "emoticons": ["(o_o)"]}]}]),
    );
    let enriched = parse(
        DatasetKind::Kaomoji,
        json!([{"name": "Neutral", "categories": [{"name": "Surprise", "emoticons": [
            {"kaomoji": "(O_O)", "description": "shocked", "keywords": []},
            {"kaomoji": "(o_o)", "description": "surprised", "keywords": []}
        ]}]}]),
    );

    let (out, report) = rebuild(&reference, &enriched).unwrap();

    assert_eq!(identities(&out), vec!["(o_o)".to_string(), "(O_O)".to_string()]);
    assert_eq!(report.orphans, vec![LeafRef::new("(O_O)", "Neutral > Surprise")]);
}

#[test]
fn test_invisible_character_example() {
    let dataset = parse(
        DatasetKind::Kaomoji,
        json!([{"name": "N", "categories": [{"name": "S", "emoticons": ["(>_<)\u{200b}", "(-_-;)"]}]}]),
    );

    let (out, report) = clean_dataset(&dataset, &Exclusion::default());

    assert_eq!(identities(&out), vec!["(>_<)".to_string(), "(-_-;)".to_string()]);
    assert_eq!(report.cleaned.len(), 1);
    assert_eq!(report.cleaned[0].before, "(>_<)\u{200b}");
}

#[test]
fn test_rebuild_keeps_leaf_in_its_reference_branch() {
    let reference = parse(
        DatasetKind::Kaomoji,
        json!([
            {"name": "A", "categories": [{"name": "One", "emoticons": ["a"]}]},
            {"name": "B", "categories": [{"name": "Two", "emoticons": ["x"]}]}
        ]),
    );
    let pool = parse(
        DatasetKind::Kaomoji,
        json!([
            {"name": "A", "categories": [{"name": "One", "emoticons": [{"kaomoji": "a"}, {"kaomoji": "x"}]}]},
            {"name": "B", "categories": [{"name": "Two", "emoticons": []}]}
        ]),
    );

    let (out, report) = rebuild(&reference, &pool).unwrap();

    assert!(report.orphans.is_empty());
    assert!(report.missing.is_empty());
    let locations: Vec<(String, String)> = out
        .leaves()
        .map(|(location, leaf)| {
            (location.to_string(), leaf.identity("kaomoji").unwrap().to_string())
        })
        .collect();
    assert_eq!(
        locations,
        vec![
            ("A > One".to_string(), "a".to_string()),
            ("B > Two".to_string(), "x".to_string()),
        ]
    );
}
