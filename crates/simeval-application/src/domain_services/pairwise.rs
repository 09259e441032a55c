//! Pairwise similarity generation

use simeval_domain::error::Result;
use simeval_domain::{EmbeddingStore, Pairing, ProjectionMatrix, SimilarityRecord, ZeroNormPolicy};
use tracing::debug;

use super::similarity::similarity;

/// Compute one [`SimilarityRecord`] per pairing, in input order
///
/// Fails on the first pairing whose text has no embedding.
pub fn generate_similarities(
    embeddings: &EmbeddingStore,
    pairings: &[Pairing],
    matrix: Option<&ProjectionMatrix>,
    zero_norm: ZeroNormPolicy,
) -> Result<Vec<SimilarityRecord>> {
    debug!(
        pairings = pairings.len(),
        projected = matrix.is_some(),
        "Generating pairwise similarities"
    );

    pairings
        .iter()
        .map(|pairing| {
            let a = embeddings.get(&pairing.text_1)?;
            let b = embeddings.get(&pairing.text_2)?;
            let value = similarity(a, b, matrix, zero_norm)?;
            Ok(SimilarityRecord::new(value, pairing.label))
        })
        .collect()
}
