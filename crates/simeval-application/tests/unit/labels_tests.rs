//! Tests for label counting

use simeval_application::domain_services::count_labels;
use simeval_domain::{Label, LabelCounts, Pairing};

#[test]
fn test_count_labels() {
    let pairings = vec![
        Pairing::new("a", "b", Label::Similar),
        Pairing::new("a", "c", Label::Similar),
        Pairing::new("b", "c", Label::Dissimilar),
    ];
    let counts = count_labels(&pairings);

    assert_eq!(
        counts,
        LabelCounts {
            positives: 2,
            negatives: 1
        }
    );
    assert_eq!(counts.total(), 3);
}

#[test]
fn test_count_labels_empty() {
    assert_eq!(count_labels(&[]), LabelCounts::default());
}
