//! File utility tests

use simeval_infrastructure::FileUtils;
use std::collections::BTreeMap;

#[test]
fn test_write_json_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out").join("result.json");

    let mut value = BTreeMap::new();
    value.insert("accuracy", 0.75);
    FileUtils::write_json(&path, &value, "result").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"accuracy":0.75}"#);
    let back: BTreeMap<String, f64> = FileUtils::read_json(&path, "result").unwrap();
    assert!((back["accuracy"] - 0.75).abs() < f64::EPSILON);
}

#[test]
fn test_read_json_reports_path_on_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let error = FileUtils::read_json::<Vec<f64>, _>(&path, "records").unwrap_err();
    let message = error.to_string();
    assert!(message.contains("Failed to parse records"));
    assert!(message.contains("broken.json"));
}

#[test]
fn test_read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = FileUtils::read_to_string(dir.path().join("absent.json"), "pairings");
    assert!(result.unwrap_err().to_string().contains("Failed to read pairings"));
}
