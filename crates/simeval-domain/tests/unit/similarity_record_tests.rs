//! Unit tests for the SimilarityRecord value object

use simeval_domain::{Label, SimilarityRecord};

#[test]
fn test_similarity_record_serializes_as_pair() {
    let records = vec![
        SimilarityRecord::new(1.0, Label::Similar),
        SimilarityRecord::new(0.0, Label::Dissimilar),
    ];
    let json = serde_json::to_string(&records).unwrap();
    assert_eq!(json, "[[1.0,1],[0.0,-1]]");
}

#[test]
fn test_similarity_record_deserializes_cosine_pairings_file() {
    let json = "[[0.9123, 1], [-0.25, -1], [1, 1]]";
    let records: Vec<SimilarityRecord> = serde_json::from_str(json).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].similarity, 0.9123);
    assert_eq!(records[1].label, Label::Dissimilar);
    assert_eq!(records[2].similarity, 1.0);
}

#[test]
fn test_similarity_record_nan_round_trips_through_null() {
    let record = SimilarityRecord::new(f64::NAN, Label::Similar);
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, "[null,1]");

    let decoded: SimilarityRecord = serde_json::from_str(&json).unwrap();
    assert!(decoded.similarity.is_nan());
    assert_eq!(decoded.label, Label::Similar);
}

#[test]
fn test_similarity_record_rejects_bad_label() {
    assert!(serde_json::from_str::<SimilarityRecord>("[0.5, 3]").is_err());
}
