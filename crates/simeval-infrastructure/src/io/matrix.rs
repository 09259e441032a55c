//! Projection matrix loading from NumPy `.npy` files

use crate::error_ext::ErrorContext;
use ndarray::Array2;
use ndarray_npy::{ReadNpyError, ReadNpyExt};
use simeval_domain::ProjectionMatrix;
use simeval_domain::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Load a 2-D projection matrix
///
/// `float64` arrays are read as-is. `float32` arrays, which is what most
/// training code saves, are widened to `f64`.
pub fn load_projection_matrix<P: AsRef<Path>>(path: P) -> Result<ProjectionMatrix> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).io_context(format!(
        "Failed to read projection matrix from {}",
        path.display()
    ))?;

    let values = match Array2::<f64>::read_npy(bytes.as_slice()) {
        Ok(values) => values,
        Err(ReadNpyError::WrongDescriptor(_)) => Array2::<f32>::read_npy(bytes.as_slice())
            .matrix_context(format!(
                "Projection matrix {} is neither float64 nor float32",
                path.display()
            ))?
            .mapv(f64::from),
        Err(err) => {
            return Err(Error::matrix_with_source(
                format!("Failed to decode projection matrix {}", path.display()),
                err,
            ));
        }
    };

    debug!(
        path = %path.display(),
        rows = values.nrows(),
        cols = values.ncols(),
        "Loaded projection matrix"
    );
    ProjectionMatrix::new(values)
}
