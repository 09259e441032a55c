//! Similarity Evaluator Use Case
//!
//! Runs pairwise generation followed by the threshold sweep, once or twice.
//! The comparison variant evaluates the same inputs without and then with a
//! projection matrix, to show whether the matrix improves separability.

use serde::Serialize;
use simeval_domain::error::Result;
use simeval_domain::{
    AccuracyResult, EmbeddingStore, Pairing, ProjectionMatrix, SimilarityRecord, ZeroNormPolicy,
};
use std::fmt;
use tracing::info;

use crate::domain_services::{accuracy_and_se, generate_similarities};

/// Accuracy before and after applying a projection matrix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// Accuracy on the raw embeddings
    pub before: AccuracyResult,
    /// Accuracy on the projected embeddings
    pub after: AccuracyResult,
}

impl ComparisonReport {
    /// Change in accuracy, positive when the matrix helps
    pub fn improvement(&self) -> f64 {
        self.after.accuracy - self.before.accuracy
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Before: {}", self.before.message)?;
        write!(f, "After: {}", self.after.message)
    }
}

/// Similarity evaluator over loaded embeddings and pairings
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityEvaluator {
    zero_norm: ZeroNormPolicy,
}

impl SimilarityEvaluator {
    /// Create an evaluator with the given zero-norm policy
    pub const fn new(zero_norm: ZeroNormPolicy) -> Self {
        Self { zero_norm }
    }

    /// Similarity records for every pairing, in input order
    pub fn similarities(
        &self,
        embeddings: &EmbeddingStore,
        pairings: &[Pairing],
        matrix: Option<&ProjectionMatrix>,
    ) -> Result<Vec<SimilarityRecord>> {
        generate_similarities(embeddings, pairings, matrix, self.zero_norm)
    }

    /// Best-threshold accuracy of the pairings
    pub fn evaluate(
        &self,
        embeddings: &EmbeddingStore,
        pairings: &[Pairing],
        matrix: Option<&ProjectionMatrix>,
    ) -> Result<AccuracyResult> {
        let records = self.similarities(embeddings, pairings, matrix)?;
        accuracy_and_se(&records)
    }

    /// Accuracy without and with `matrix`
    pub fn compare(
        &self,
        embeddings: &EmbeddingStore,
        pairings: &[Pairing],
        matrix: &ProjectionMatrix,
    ) -> Result<ComparisonReport> {
        let before = self.evaluate(embeddings, pairings, None)?;
        let after = self.evaluate(embeddings, pairings, Some(matrix))?;

        let report = ComparisonReport { before, after };
        info!(
            before = report.before.accuracy,
            after = report.after.accuracy,
            improvement = report.improvement(),
            "Projection matrix comparison finished"
        );
        Ok(report)
    }
}
