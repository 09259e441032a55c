//! Similarity Record Value Object

use serde::{Deserialize, Serialize};

use super::pairing::Label;

/// Wire form of a record: `[similarity, label]`, with `null` standing in for
/// a NaN similarity since JSON has no NaN literal. The file loader also
/// accepts the bare `NaN` token Python's `json` module writes.
type RecordRepr = (Option<f64>, Label);

/// Value Object: Computed Similarity of One Pairing
///
/// Serialized as a two-element JSON array, `[0.8731, 1]`, matching the
/// cosine-pairings files consumed by the accuracy step.
///
/// ## Example
///
/// ```rust
/// use simeval_domain::{Label, SimilarityRecord};
///
/// let record = SimilarityRecord::new(0.5, Label::Similar);
/// assert_eq!(serde_json::to_string(&record).unwrap(), "[0.5,1]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordRepr", into = "RecordRepr")]
pub struct SimilarityRecord {
    /// Cosine similarity in [-1, 1], or NaN under the `nan` zero-norm policy
    pub similarity: f64,
    /// Label of the pairing the similarity was computed for
    pub label: Label,
}

impl SimilarityRecord {
    /// Create a new record
    pub const fn new(similarity: f64, label: Label) -> Self {
        Self { similarity, label }
    }
}

impl From<RecordRepr> for SimilarityRecord {
    fn from((similarity, label): RecordRepr) -> Self {
        Self {
            similarity: similarity.unwrap_or(f64::NAN),
            label,
        }
    }
}

impl From<SimilarityRecord> for RecordRepr {
    fn from(record: SimilarityRecord) -> Self {
        let similarity = (!record.similarity.is_nan()).then_some(record.similarity);
        (similarity, record.label)
    }
}
