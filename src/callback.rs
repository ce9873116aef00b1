//! The callback protocol through which the reader delivers matrix data

use crate::header::MatrixDescription;

/// Sink for the element events produced by [`read`](crate::read)
///
/// The reader drives an implementation through a fixed sequence per
/// parse: one `start_matrix`, then one `set_matrix_element` per
/// coordinate entry in file order, then one `finish_matrix` once the
/// stream is exhausted. Elements arrive in file order; no ordering
/// across rows or columns is guaranteed beyond that, and duplicate
/// `(row, col)` entries are delivered as-is.
pub trait Callback {
    /// Called exactly once, before any element, with the fully
    /// populated matrix description. Implementations typically allocate
    /// storage here based on the dimensions and field.
    fn start_matrix(&mut self, description: &MatrixDescription);

    /// Returns the description passed to [`start_matrix`], or `None` if
    /// no matrix was started yet
    ///
    /// [`start_matrix`]: Callback::start_matrix
    fn matrix_description(&self) -> Option<&MatrixDescription>;

    /// Called once per coordinate entry, with zero-based indices
    ///
    /// `imag` carries the field-dependent imaginary component:
    /// `Some(imag)` for complex matrices, `Some(0.0)` for integer
    /// matrices, and `None` for real and pattern matrices, where no
    /// imaginary component exists on the wire.
    fn set_matrix_element(&mut self, row: usize, col: usize, value: f64, imag: Option<f64>);

    /// Called exactly once, after all elements, when the stream is
    /// exhausted
    fn finish_matrix(&mut self);
}

/// A [`Callback`] that records the raw element events as triplets
///
/// No symmetry expansion is applied: the recorded entries are exactly
/// the stored entries of the file, in file order. Useful for tests and
/// for callers that want COO-style access to the data.
#[derive(Debug, Default)]
pub struct CollectingCallback {
    description: Option<MatrixDescription>,
    entries: Vec<(usize, usize, f64, Option<f64>)>,
}

impl CollectingCallback {
    /// Creates an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded `(row, col, value, imag)` triplets, in file order
    pub fn entries(&self) -> &[(usize, usize, f64, Option<f64>)] {
        &self.entries
    }

    /// Consumes the collector and returns the recorded triplets
    pub fn into_entries(self) -> Vec<(usize, usize, f64, Option<f64>)> {
        self.entries
    }
}

impl Callback for CollectingCallback {
    fn start_matrix(&mut self, description: &MatrixDescription) {
        self.description = Some(*description);
        self.entries.reserve(description.num_non_zeros);
    }

    fn matrix_description(&self) -> Option<&MatrixDescription> {
        self.description.as_ref()
    }

    fn set_matrix_element(&mut self, row: usize, col: usize, value: f64, imag: Option<f64>) {
        self.entries.push((row, col, value, imag));
    }

    fn finish_matrix(&mut self) {
        // Nothing to do: the entries are already complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{MatrixField, MatrixFormat, MatrixSymmetry};

    fn description() -> MatrixDescription {
        MatrixDescription {
            format: MatrixFormat::Coordinate,
            field: MatrixField::Real,
            symmetry: MatrixSymmetry::General,
            num_rows: 3,
            num_cols: 3,
            num_non_zeros: 2,
        }
    }

    #[test]
    fn test_collects_in_file_order() {
        let mut callback = CollectingCallback::new();
        assert!(callback.matrix_description().is_none());

        callback.start_matrix(&description());
        callback.set_matrix_element(2, 0, 4.0, None);
        callback.set_matrix_element(0, 1, -1.5, None);
        callback.finish_matrix();

        assert_eq!(callback.matrix_description().unwrap().num_rows, 3);
        assert_eq!(
            callback.entries(),
            &[(2, 0, 4.0, None), (0, 1, -1.5, None)]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut callback = CollectingCallback::new();
        callback.start_matrix(&description());
        callback.set_matrix_element(1, 1, 1.0, None);
        callback.set_matrix_element(1, 1, 2.0, None);
        callback.finish_matrix();

        assert_eq!(callback.entries().len(), 2);
    }
}
