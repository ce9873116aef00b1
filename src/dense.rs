//! A callback that materializes the matrix into a dense array

use crate::callback::Callback;
use crate::header::{MatrixDescription, MatrixField, MatrixSymmetry};

/// A [`Callback`] storing the data in a dense, flat, column-major buffer
///
/// On `start_matrix` the buffer is allocated as `num_rows * num_cols`
/// doubles, doubled for complex matrices, where the real and imaginary
/// parts are interleaved: logical cell `i = row + col * num_rows` lives
/// at offsets `2 * i` (real) and `2 * i + 1` (imaginary).
///
/// Non-general symmetries are expanded here: every stored entry is also
/// written to its mirror cell, sign-adjusted for skew-symmetric and
/// Hermitian matrices. The mirror write is not special-cased on the
/// diagonal, so a diagonal entry of a skew-symmetric or Hermitian
/// matrix is overwritten by its own negated counterpart.
///
/// Duplicate entries overwrite; the last write at a cell wins.
///
/// # Panics
///
/// `set_matrix_element` panics if an entry's indices lie outside the
/// declared dimensions. Structural validation beyond well-formedness is
/// out of scope for the reader, so out-of-range indices surface as an
/// index panic rather than an error.
#[derive(Debug, Default)]
pub struct DenseCallback {
    description: Option<MatrixDescription>,
    num_rows: usize,
    complex: bool,
    data: Vec<f64>,
}

impl DenseCallback {
    /// Creates a callback with no storage; the buffer is allocated when
    /// the matrix is started
    pub fn new() -> Self {
        Self::default()
    }

    /// The dense column-major buffer accumulated so far
    ///
    /// Empty until `start_matrix` has been called. Complete once
    /// `finish_matrix` has been called.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the callback and returns the dense buffer
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    fn set(&mut self, row: usize, col: usize, value: f64, imag: f64) {
        let index = row + col * self.num_rows;
        if self.complex {
            self.data[2 * index] = value;
            self.data[2 * index + 1] = imag;
        } else {
            self.data[index] = value;
        }
    }
}

impl Callback for DenseCallback {
    fn start_matrix(&mut self, description: &MatrixDescription) {
        self.description = Some(*description);
        self.num_rows = description.num_rows;
        self.complex = description.field == MatrixField::Complex;
        let mut length = description.num_rows * description.num_cols;
        if self.complex {
            length *= 2;
        }
        self.data = vec![0.0; length];
    }

    fn matrix_description(&self) -> Option<&MatrixDescription> {
        self.description.as_ref()
    }

    fn set_matrix_element(&mut self, row: usize, col: usize, value: f64, imag: Option<f64>) {
        let imag = imag.unwrap_or(0.0);
        self.set(row, col, value, imag);
        // The symmetry is part of the description, which is immutable
        // after start_matrix
        let symmetry = match &self.description {
            Some(description) => description.symmetry,
            None => return,
        };
        match symmetry {
            MatrixSymmetry::General => {}
            MatrixSymmetry::Symmetric => self.set(col, row, value, imag),
            MatrixSymmetry::SkewSymmetric => self.set(col, row, -value, imag),
            MatrixSymmetry::Hermitian => self.set(col, row, value, -imag),
        }
    }

    fn finish_matrix(&mut self) {
        // Nothing to do: the buffer is already complete
    }
}
