#![allow(clippy::unwrap_used, clippy::expect_used)]

use clipdata_core::errors::ExErrorKind;
use clipdata_core::{Dataset, DatasetKind};
use clipdata_store::{
    backup_path, create_backup, discard_backup, json_files, load_json, read_text, try_load_json,
    write_json,
};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_dataset_survives_write_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("build").join("kaomojis").join("kaomojis.json");
    let raw = json!([
        {"name": "Positive", "icon": "☺", "categories": [
            {"name": "Joy", "emoticons": ["(^_^)", {"kaomoji": "(＾▽＾)", "keywords": ["happy"]}]}
        ]}
    ]);
    let (dataset, _) = Dataset::from_json(DatasetKind::Kaomoji, &raw).unwrap();

    write_json(&path, &dataset.to_json(), 4).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(loaded, raw);
    let text = read_text(&path).unwrap();
    assert!(text.contains("(＾▽＾)"));
    assert!(text.starts_with("[\n    {"));
}

#[test]
fn test_missing_file_is_input_not_found() {
    let dir = TempDir::new().unwrap();
    let err = load_json(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InputNotFound);
    assert!(try_load_json(&dir.path().join("absent.json")).is_none());
}

#[test]
fn test_malformed_json_reports_position_and_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[\n  {\"name\": }\n]").unwrap();

    let err = load_json(&path).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MalformedJson);
    assert_eq!(err.path(), Some(path.as_path()));
    assert_eq!(err.position().map(|(line, _)| line), Some(2));
    assert!(try_load_json(&path).is_none());
}

#[test]
fn test_walk_finds_nested_json_case_insensitively() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("a.json"), "[]").unwrap();
    fs::write(dir.path().join("nested").join("B.JSON"), "[]").unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    let files = json_files(dir.path()).unwrap();

    assert_eq!(
        files,
        vec![dir.path().join("a.json"), dir.path().join("nested").join("B.JSON")]
    );
}

#[test]
fn test_backup_created_and_discarded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("symbols.json");
    fs::write(&path, "[]").unwrap();

    let backup = create_backup(&path).unwrap();
    assert_eq!(backup, backup_path(&path));
    assert_eq!(fs::read_to_string(&backup).unwrap(), "[]");

    discard_backup(&path).unwrap();
    assert!(!backup.exists());
    discard_backup(&path).unwrap();
}
