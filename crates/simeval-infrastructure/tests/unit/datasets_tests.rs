//! Dataset loader tests

use simeval_domain::{AccuracyResult, Error, Label, Pairing, SimilarityRecord};
use simeval_infrastructure::io::{
    load_embeddings, load_pairings, load_similarity_records, save_json,
};
use std::path::{Path, PathBuf};

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_embeddings() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "embeddings.json",
        r#"{"a": [1, 0], "b": [0, 1], "c": [1.0, 0.0]}"#,
    );

    let store = load_embeddings(&path).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.get("b").unwrap(), &[0.0, 1.0]);
}

#[test]
fn test_load_embeddings_rejects_ragged_vectors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "embeddings.json",
        r#"{"a": [1, 0], "b": [0, 1, 0]}"#,
    );

    assert!(matches!(
        load_embeddings(&path),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn test_load_pairings_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "pairings.json",
        r#"[
            {"text_1": "a", "text_2": "c", "label": 1},
            {"text_1": "a", "text_2": "b", "label": -1}
        ]"#,
    );

    let pairings = load_pairings(&path).unwrap();
    assert_eq!(
        pairings,
        vec![
            Pairing::new("a", "c", Label::Similar),
            Pairing::new("a", "b", Label::Dissimilar),
        ]
    );
}

#[test]
fn test_load_pairings_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "pairings.jsonl",
        "{\"text_1\": \"a\", \"text_2\": \"c\", \"label\": 1}\n\n\
         {\"text_1\": \"a\", \"text_2\": \"b\", \"label\": -1}\n",
    );

    let pairings = load_pairings(&path).unwrap();
    assert_eq!(pairings.len(), 2);
    assert_eq!(pairings[1].label, Label::Dissimilar);
}

#[test]
fn test_load_pairings_json_lines_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "pairings.jsonl",
        "{\"text_1\": \"a\", \"text_2\": \"c\", \"label\": 1}\n\
         {\"text_1\": \"a\", \"text_2\": \"b\", \"label\": 0}\n",
    );

    let message = load_pairings(&path).unwrap_err().to_string();
    assert!(message.contains("line 2"));
    assert!(message.contains("Invalid label"));
}

#[test]
fn test_load_pairings_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "pairings.csv",
        "text_1,text_2,label\n\
         The capital of France is,Paris,1\n\
         \n\
         \"Boston, MA\",Paris,-1\n",
    );

    let pairings = load_pairings(&path).unwrap();
    assert_eq!(
        pairings,
        vec![
            Pairing::new("The capital of France is", "Paris", Label::Similar),
            Pairing::new("Boston, MA", "Paris", Label::Dissimilar),
        ]
    );
}

#[test]
fn test_load_pairings_csv_rejects_invalid_label() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "pairings.csv",
        "text_1,text_2,label\na,b,1\nc,d,0\n",
    );

    let message = load_pairings(&path).unwrap_err().to_string();
    assert!(message.contains("pairings.csv"));
    assert!(message.contains("Invalid label"));
}

#[test]
fn test_load_pairings_rejects_invalid_label() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "pairings.json",
        r#"[{"text_1": "a", "text_2": "b", "label": 2}]"#,
    );
    assert!(load_pairings(&path).is_err());
}

#[test]
fn test_load_pairings_rejects_non_string_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "pairings.json",
        r#"[{"text_1": 3, "text_2": "b", "label": 1}]"#,
    );
    assert!(load_pairings(&path).is_err());
}

#[test]
fn test_similarity_records_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cosine_pairings.json");
    let records = vec![
        SimilarityRecord::new(1.0, Label::Similar),
        SimilarityRecord::new(0.0, Label::Dissimilar),
    ];

    save_json(&path, &records, "similarity records").unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[[1.0,1],[0.0,-1]]"
    );
    assert_eq!(load_similarity_records(&path).unwrap(), records);
}

#[test]
fn test_save_accuracy_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accuracy.json");
    let result = AccuracyResult {
        accuracy: 1.0,
        standard_error: 0.0,
        message: "100.0% ± 0.0%".to_string(),
    };

    save_json(&path, &result, "accuracy result").unwrap();
    let back: AccuracyResult = serde_json::from_str(&std::fs::read_to_string(&path).unwrap())
        .unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_load_similarity_records_with_python_nan() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "cosine_pairings.json",
        "[[NaN, -1], [0.5, 1]]",
    );

    let records = load_similarity_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].similarity.is_nan());
    assert_eq!(records[0].label, Label::Dissimilar);
    assert_eq!(records[1], SimilarityRecord::new(0.5, Label::Similar));
}
