//! Label statistics

use simeval_domain::{Label, LabelCounts, Pairing};

/// Count similar and dissimilar pairings
pub fn count_labels(pairings: &[Pairing]) -> LabelCounts {
    pairings
        .iter()
        .fold(LabelCounts::default(), |mut counts, pairing| {
            match pairing.label {
                Label::Similar => counts.positives += 1,
                Label::Dissimilar => counts.negatives += 1,
            }
            counts
        })
}
