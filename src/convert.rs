//! Utilities for handing the reader's output to external matrix libraries

use ndarray::Array2;
use sprs::CsMat;

use crate::csr::Csr;
use crate::header::MatrixDescription;

/// Converts a [`Csr`] matrix to the sprs `CsMat` format
pub fn to_sprs(csr: &Csr) -> CsMat<f64> {
    CsMat::new(
        (csr.num_rows, csr.num_cols),
        csr.row_pointers.clone(),
        csr.column_indices.clone(),
        csr.values.clone(),
    )
}

/// Converts a dense column-major buffer, as accumulated by
/// [`DenseCallback`](crate::DenseCallback) for a non-complex matrix,
/// into an ndarray `Array2`
///
/// # Panics
///
/// Panics if `data.len()` is not `num_rows * num_cols`; interleaved
/// complex buffers are not supported here.
pub fn to_ndarray(description: &MatrixDescription, data: &[f64]) -> Array2<f64> {
    let num_rows = description.num_rows;
    let num_cols = description.num_cols;
    assert_eq!(
        data.len(),
        num_rows * num_cols,
        "to_ndarray expects a scalar dense buffer of num_rows * num_cols values"
    );
    Array2::from_shape_fn((num_rows, num_cols), |(r, c)| data[r + c * num_rows])
}
