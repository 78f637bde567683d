#![allow(clippy::unwrap_used, clippy::expect_used)]

use clipdata_core::errors::{CurationError, ExError, ExErrorKind};
use clipdata_core::unicode::{annotate_symbol, char_name};
use clipdata_core::{Dataset, DatasetKind, Exclusion};
use serde_json::json;

#[test]
fn test_no_unicode_name_maps_to_unresolvable_lookup() {
    let err: ExError = char_name('\u{E000}').unwrap_err().into();

    assert_eq!(err.kind(), ExErrorKind::UnresolvableLookup);
    assert_eq!(err.code(), "ERR_UNRESOLVABLE_LOOKUP");
    assert!(err.message().contains("U+E000"));
    assert!(!err.kind().is_per_file());
}

#[test]
fn test_multi_char_symbol_is_rejected() {
    let err = annotate_symbol("ab").unwrap_err();
    assert!(matches!(err, CurationError::NotSingleChar { .. }));
    assert_eq!(ExError::from(err).code(), "ERR_UNRESOLVABLE_LOOKUP");
}

#[test]
fn test_unknown_kind_is_invalid_input() {
    let err: ExError = "emoticon".parse::<DatasetKind>().unwrap_err().into();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}

#[test]
fn test_non_list_document_is_schema_mismatch() {
    let err = Dataset::from_json(DatasetKind::Emoji, &json!({"name": "Smileys"})).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::SchemaMismatch);
    assert!(err.kind().is_per_file());
}

#[test]
fn test_bad_exclusion_code_is_invalid_input() {
    let err = "Cc,Xyz".parse::<Exclusion>().unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.op(), Some("parse_exclusion"));
}

#[test]
fn test_every_kind_has_distinct_code() {
    let kinds = [
        ExErrorKind::InputNotFound,
        ExErrorKind::MalformedJson,
        ExErrorKind::SchemaMismatch,
        ExErrorKind::UnresolvableLookup,
        ExErrorKind::InvalidInput,
        ExErrorKind::VerificationFailed,
        ExErrorKind::WriteFailed,
        ExErrorKind::Serialization,
        ExErrorKind::Io,
        ExErrorKind::Internal,
    ];
    let codes: std::collections::BTreeSet<&str> = kinds.iter().map(|k| k.code()).collect();
    assert_eq!(codes.len(), kinds.len());
    assert!(codes.iter().all(|c| c.starts_with("ERR_")));
}
