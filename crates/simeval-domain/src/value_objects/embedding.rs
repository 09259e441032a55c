//! Embedding Storage Value Objects
//!
//! Precomputed text embeddings, keyed by the exact text they were computed
//! from. Embeddings are produced elsewhere and only read here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Value Object: Text Embedding Store
///
/// Serializes as a plain JSON object mapping each text to its vector, the
/// format written by the embedding download step.
///
/// ## Business Rules
///
/// - Keys are unique texts
/// - Lookups of unknown texts fail with [`Error::MissingEmbedding`]
/// - The store is never mutated after loading
///
/// ## Example
///
/// ```rust
/// use simeval_domain::EmbeddingStore;
///
/// let store: EmbeddingStore = [
///     ("a".to_string(), vec![1.0, 0.0]),
///     ("b".to_string(), vec![0.0, 1.0]),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(store.get("a").unwrap(), &[1.0, 0.0]);
/// assert!(store.get("z").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbeddingStore {
    vectors: HashMap<String, Vec<f64>>,
}

impl EmbeddingStore {
    /// Look up the embedding of `text`
    pub fn get(&self, text: &str) -> Result<&[f64]> {
        self.vectors
            .get(text)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::missing_embedding(text))
    }

    /// Number of embedded texts
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the store holds no embeddings
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Shared dimensionality of all vectors
    ///
    /// Returns `Ok(None)` for an empty store and
    /// [`Error::DimensionMismatch`] when two vectors differ in length.
    pub fn dimensions(&self) -> Result<Option<usize>> {
        let mut expected: Option<usize> = None;
        for (text, vector) in &self.vectors {
            match expected {
                None => expected = Some(vector.len()),
                Some(dim) if dim != vector.len() => {
                    return Err(Error::dimension_mismatch(
                        format!("embedding for {text:?}"),
                        dim,
                        vector.len(),
                    ));
                }
                Some(_) => {}
            }
        }
        Ok(expected)
    }
}

impl FromIterator<(String, Vec<f64>)> for EmbeddingStore {
    fn from_iter<I: IntoIterator<Item = (String, Vec<f64>)>>(iter: I) -> Self {
        Self {
            vectors: iter.into_iter().collect(),
        }
    }
}
