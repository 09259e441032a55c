//! Cosine similarity, with an optional linear projection
//!
//! All functions here are pure. Shape errors are reported instead of
//! panicking, and the treatment of zero-norm vectors is chosen by the caller
//! through [`ZeroNormPolicy`].

use ndarray::{Array1, ArrayView1};
use simeval_domain::error::{Error, Result};
use simeval_domain::{ProjectionMatrix, ZeroNormPolicy};

/// Cosine similarity of two vectors
///
/// `dot(a, b) / (‖a‖ · ‖b‖)`, clamped to [-1, 1] to absorb rounding.
pub fn cosine_similarity(a: &[f64], b: &[f64], zero_norm: ZeroNormPolicy) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::dimension_mismatch(
            "cosine similarity",
            a.len(),
            b.len(),
        ));
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return match zero_norm {
            ZeroNormPolicy::Error => Err(Error::ZeroNorm),
            ZeroNormPolicy::Nan => Ok(f64::NAN),
        };
    }

    Ok((dot / denom).clamp(-1.0, 1.0))
}

/// Row-vector × matrix product `vector · M`
pub fn project(vector: &[f64], matrix: &ProjectionMatrix) -> Result<Array1<f64>> {
    if vector.len() != matrix.input_dim() {
        return Err(Error::dimension_mismatch(
            "projection",
            matrix.input_dim(),
            vector.len(),
        ));
    }
    Ok(ArrayView1::from(vector).dot(matrix.as_array()))
}

/// Similarity of two embeddings, projecting both through `matrix` first when
/// one is given
pub fn similarity(
    a: &[f64],
    b: &[f64],
    matrix: Option<&ProjectionMatrix>,
    zero_norm: ZeroNormPolicy,
) -> Result<f64> {
    match matrix {
        None => cosine_similarity(a, b, zero_norm),
        Some(m) => {
            let a_m = project(a, m)?.to_vec();
            let b_m = project(b, m)?.to_vec();
            cosine_similarity(&a_m, &b_m, zero_norm)
        }
    }
}
