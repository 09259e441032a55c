//! Projection Matrix Value Object
//!
//! A learned linear transform with shape `(embedding_dim, output_dim)`.
//! Both embeddings of a pairing are multiplied by it as row vectors before
//! their cosine similarity is taken. The matrix need not be square.

use ndarray::Array2;

use crate::error::{Error, Result};

/// Value Object: Projection Matrix
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionMatrix {
    values: Array2<f64>,
}

impl ProjectionMatrix {
    /// Wrap a 2-D array
    ///
    /// Rejects matrices with a zero-length axis, which would project every
    /// embedding to an empty vector.
    pub fn new(values: Array2<f64>) -> Result<Self> {
        let (rows, cols) = values.dim();
        if rows == 0 || cols == 0 {
            return Err(Error::matrix(format!(
                "projection matrix must be non-empty, got shape ({rows}, {cols})"
            )));
        }
        Ok(Self { values })
    }

    /// Embedding dimension the matrix accepts (row count)
    pub fn input_dim(&self) -> usize {
        self.values.nrows()
    }

    /// Dimension of projected vectors (column count)
    pub fn output_dim(&self) -> usize {
        self.values.ncols()
    }

    /// Underlying array
    pub fn as_array(&self) -> &Array2<f64> {
        &self.values
    }
}
