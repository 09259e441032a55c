//! Unit tests for the EmbeddingStore value object

use simeval_domain::{EmbeddingStore, Error};

fn sample_store() -> EmbeddingStore {
    [
        ("a".to_string(), vec![1.0, 0.0]),
        ("b".to_string(), vec![0.0, 1.0]),
        ("c".to_string(), vec![1.0, 0.0]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_embedding_store_lookup() {
    let store = sample_store();
    assert_eq!(store.len(), 3);
    assert!(!store.is_empty());
    assert_eq!(store.get("b").unwrap(), &[0.0, 1.0]);
}

#[test]
fn test_embedding_store_missing_text() {
    let store = sample_store();
    match store.get("nope") {
        Err(Error::MissingEmbedding { text }) => assert_eq!(text, "nope"),
        other => panic!("Expected MissingEmbedding error, got {other:?}"),
    }
}

#[test]
fn test_embedding_store_deserializes_plain_object() {
    let json = r#"{"The capital of France is": [0.1, 0.2, 0.3], "Paris": [0.3, 0.2, 0.1]}"#;
    let store: EmbeddingStore = serde_json::from_str(json).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.get("Paris").unwrap(), &[0.3, 0.2, 0.1]);
    assert_eq!(store.dimensions().unwrap(), Some(3));
}

#[test]
fn test_embedding_store_dimensions() {
    assert_eq!(EmbeddingStore::default().dimensions().unwrap(), None);
    assert_eq!(sample_store().dimensions().unwrap(), Some(2));

    let ragged: EmbeddingStore = [
        ("x".to_string(), vec![1.0, 2.0]),
        ("y".to_string(), vec![1.0, 2.0, 3.0]),
    ]
    .into_iter()
    .collect();
    assert!(matches!(
        ragged.dimensions(),
        Err(Error::DimensionMismatch { .. })
    ));
}
