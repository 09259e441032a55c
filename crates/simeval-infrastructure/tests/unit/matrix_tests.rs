//! Projection matrix loader tests

use ndarray::{Array1, Array2, array};
use ndarray_npy::WriteNpyExt;
use simeval_domain::Error;
use simeval_infrastructure::io::load_projection_matrix;
use std::fs::File;

#[test]
fn test_load_float64_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matrix.npy");
    let values: Array2<f64> = array![[1.0, 0.5], [0.0, -2.0], [3.0, 4.0]];
    values.write_npy(File::create(&path).unwrap()).unwrap();

    let matrix = load_projection_matrix(&path).unwrap();
    assert_eq!(matrix.input_dim(), 3);
    assert_eq!(matrix.output_dim(), 2);
    assert_eq!(matrix.as_array(), &values);
}

#[test]
fn test_load_float32_matrix_is_widened() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matrix_f32.npy");
    let values: Array2<f32> = array![[1.0, 0.25], [0.5, -1.0]];
    values.write_npy(File::create(&path).unwrap()).unwrap();

    let matrix = load_projection_matrix(&path).unwrap();
    assert_eq!(matrix.as_array(), &values.mapv(f64::from));
}

#[test]
fn test_load_one_dimensional_array_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vector.npy");
    let values: Array1<f64> = array![1.0, 2.0];
    values.write_npy(File::create(&path).unwrap()).unwrap();

    let result = load_projection_matrix(&path);
    assert!(matches!(result, Err(Error::Matrix { .. })));
}

#[test]
fn test_load_integer_matrix_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ints.npy");
    let values: Array2<i32> = array![[1, 2], [3, 4]];
    values.write_npy(File::create(&path).unwrap()).unwrap();

    assert!(matches!(
        load_projection_matrix(&path),
        Err(Error::Matrix { .. })
    ));
}

#[test]
fn test_load_missing_matrix_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_projection_matrix(dir.path().join("absent.npy"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_load_empty_matrix_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.npy");
    let values = Array2::<f64>::zeros((0, 3));
    values.write_npy(File::create(&path).unwrap()).unwrap();

    assert!(matches!(
        load_projection_matrix(&path),
        Err(Error::Matrix { .. })
    ));
}
