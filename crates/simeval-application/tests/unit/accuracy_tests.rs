//! Tests for the threshold sweep

use simeval_application::domain_services::{
    accuracy_and_se, accuracy_at_threshold, format_message,
};
use simeval_domain::{Error, Label, SimilarityRecord};

fn record(similarity: f64, label: i64) -> SimilarityRecord {
    SimilarityRecord::new(similarity, Label::try_from(label).unwrap())
}

#[test]
fn test_worked_example() {
    let records = vec![record(1.0, 1), record(0.0, -1)];
    let result = accuracy_and_se(&records).unwrap();

    assert_eq!(result.accuracy, 1.0);
    assert_eq!(result.standard_error, 0.0);
    assert_eq!(result.message, "100.0% ± 0.0%");
}

#[test]
fn test_perfectly_separable_records() {
    let records = vec![
        record(1.0, 1),
        record(1.0, 1),
        record(-1.0, -1),
        record(-1.0, -1),
        record(-1.0, -1),
    ];
    let result = accuracy_and_se(&records).unwrap();

    assert_eq!(result.accuracy, 1.0);
    assert_eq!(result.standard_error, 0.0);
}

#[test]
fn test_single_record() {
    let always_right = accuracy_and_se(&[record(0.3, 1)]).unwrap();
    assert_eq!(always_right.accuracy, 1.0);
    assert!(always_right.standard_error.is_finite());

    // -1.0 never exceeds any threshold, so it is always predicted dissimilar
    let always_wrong = accuracy_and_se(&[record(-1.0, 1)]).unwrap();
    assert_eq!(always_wrong.accuracy, 0.0);
    assert_eq!(always_wrong.standard_error, 0.0);
    assert_eq!(always_wrong.message, "0.0% ± 0.0%");
}

#[test]
fn test_partially_separable_records() {
    let records = vec![
        record(0.9, 1),
        record(0.8, -1),
        record(0.1, -1),
        record(0.7, 1),
    ];
    let result = accuracy_and_se(&records).unwrap();

    assert_eq!(result.accuracy, 0.75);
    let expected_se = (0.75_f64 * 0.25 / 4.0).sqrt();
    assert!((result.standard_error - expected_se).abs() < 1e-15);
    assert_eq!(result.message, "75.0% ± 42.4%");
}

#[test]
fn test_threshold_is_strict() {
    // 0.5 at threshold 0.5 is predicted dissimilar
    let records = vec![record(0.5, 1)];
    assert_eq!(accuracy_at_threshold(&records, 0.5), 0.0);
    assert_eq!(accuracy_at_threshold(&records, 0.499), 1.0);
}

#[test]
fn test_similarity_above_grid_is_always_similar() {
    // The last threshold is 0.999, so 1.0 is predicted similar everywhere
    let result = accuracy_and_se(&[record(1.0, -1)]).unwrap();
    assert_eq!(result.accuracy, 0.0);
}

#[test]
fn test_nan_similarity_is_predicted_dissimilar() {
    let records = vec![record(f64::NAN, -1), record(f64::NAN, 1)];
    let result = accuracy_and_se(&records).unwrap();
    assert_eq!(result.accuracy, 0.5);
}

#[test]
fn test_order_does_not_change_result() {
    let records = vec![
        record(0.9, 1),
        record(0.8, -1),
        record(0.1, -1),
        record(0.7, 1),
        record(0.2, 1),
    ];
    let mut reversed = records.clone();
    reversed.reverse();

    assert_eq!(
        accuracy_and_se(&records).unwrap(),
        accuracy_and_se(&reversed).unwrap()
    );
}

#[test]
fn test_empty_records_fail() {
    let err = accuracy_and_se(&[]).unwrap_err();
    assert!(matches!(err, Error::EmptyRecords));
}

#[test]
fn test_format_message() {
    assert_eq!(format_message(0.5, 0.05), "50.0% ± 9.8%");
    assert_eq!(format_message(1.0, 0.0), "100.0% ± 0.0%");
}
