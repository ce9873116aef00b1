//! Compressed Sparse Row (CSR) output of the reader

use std::io::BufRead;

use crate::callback::Callback;
use crate::dense::DenseCallback;
use crate::error::{Error, Result};
use crate::header::MatrixDescription;
use crate::reader::read;

/// The magnitude threshold below which a value counts as a structural
/// zero during dense-to-sparse compaction
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// The CSR format stores a sparse matrix using three arrays:
/// - `row_pointers`: indices into `column_indices` and `values`, of size
///   `num_rows + 1`, with `row_pointers[num_rows] == nnz`
/// - `column_indices`: column index of each nonzero, of size nnz
/// - `values`: the nonzero values, of size nnz
///
/// Instances are produced by [`compact`] or [`read_csr`] as an immutable
/// snapshot; within each row the entries appear in increasing column
/// order, since compaction scans the columns in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Csr {
    /// Number of rows in the matrix
    pub num_rows: usize,

    /// Number of columns in the matrix
    pub num_cols: usize,

    /// Row pointers (size: num_rows + 1)
    pub row_pointers: Vec<usize>,

    /// Column indices (size: nnz)
    pub column_indices: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<f64>,
}

impl Csr {
    /// Creates a new CSR matrix with the given dimensions and data
    ///
    /// # Arguments
    ///
    /// * `num_rows` - Number of rows
    /// * `num_cols` - Number of columns
    /// * `row_pointers` - Row pointers
    /// * `column_indices` - Column indices
    /// * `values` - Non-zero values
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - `row_pointers.len()` must be `num_rows + 1`
    /// - `column_indices.len()` must equal `values.len()`
    /// - `row_pointers[num_rows]` must equal `values.len()`
    pub fn new(
        num_rows: usize,
        num_cols: usize,
        row_pointers: Vec<usize>,
        column_indices: Vec<usize>,
        values: Vec<f64>,
    ) -> Self {
        assert_eq!(
            row_pointers.len(),
            num_rows + 1,
            "row_pointers.len() must be num_rows + 1"
        );
        assert_eq!(
            column_indices.len(),
            values.len(),
            "column_indices.len() must equal values.len()"
        );
        assert_eq!(
            row_pointers[num_rows],
            values.len(),
            "row_pointers[num_rows] must equal values.len()"
        );

        Self {
            num_rows,
            num_cols,
            row_pointers,
            column_indices,
            values,
        }
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the non-zero elements in row `r`
    ///
    /// Each item is a tuple `(column_index, value)`.
    pub fn row_iter(&self, r: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        assert!(r < self.num_rows, "Row index out of bounds");

        let start = self.row_pointers[r];
        let end = self.row_pointers[r + 1];

        self.column_indices[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, &val)| (col, val))
    }
}

/// Compacts a dense column-major buffer into a [`Csr`] matrix
///
/// Any value with `abs(value) < epsilon` is treated as a structural
/// zero. A first pass counts the surviving entries, since the declared
/// nonzero count of a symmetric matrix understates the expanded count;
/// a second pass walks rows outer, columns inner over the column-major
/// buffer and appends the survivors. A row pointer is recorded for
/// every row, so `row_pointers` is monotonically non-decreasing and an
/// empty row r has `row_pointers[r] == row_pointers[r + 1]`.
///
/// # Arguments
///
/// * `description` - The matrix description the buffer was built from
/// * `data` - The dense column-major buffer, `num_rows * num_cols` long
/// * `epsilon` - The structural-zero threshold
///
/// # Panics
///
/// Panics if `data.len()` is not `num_rows * num_cols`. In particular
/// the interleaved buffer of a complex matrix is rejected: complex CSR
/// construction is out of scope.
pub fn compact(description: &MatrixDescription, data: &[f64], epsilon: f64) -> Csr {
    let num_rows = description.num_rows;
    let num_cols = description.num_cols;
    assert_eq!(
        data.len(),
        num_rows * num_cols,
        "compact expects a scalar dense buffer of num_rows * num_cols values"
    );

    let num_non_zeros = data.iter().filter(|value| value.abs() >= epsilon).count();

    let mut row_pointers = vec![0; num_rows + 1];
    row_pointers[num_rows] = num_non_zeros;
    let mut column_indices = Vec::with_capacity(num_non_zeros);
    let mut values = Vec::with_capacity(num_non_zeros);

    for r in 0..num_rows {
        row_pointers[r] = values.len();
        for c in 0..num_cols {
            let value = data[r + c * num_rows];
            if value.abs() >= epsilon {
                column_indices.push(c);
                values.push(value);
            }
        }
    }

    Csr::new(num_rows, num_cols, row_pointers, column_indices, values)
}

/// Reads MatrixMarket data from the given source and returns it as a
/// [`Csr`] matrix
///
/// This materializes a full dense matrix internally via
/// [`DenseCallback`] and compacts it with [`DEFAULT_EPSILON`], so it is
/// meant for moderately sized matrices.
///
/// # Errors
///
/// Fails with the reader's error on any structural violation, and with
/// a size-line error if the stream ends before a size line was seen.
///
/// # Panics
///
/// Panics for complex matrices, whose interleaved dense buffer cannot
/// be compacted; see [`compact`].
///
/// # Examples
///
/// ```
/// use matmarket::read_csr;
///
/// let data: &[u8] = b"%%MatrixMarket matrix coordinate real general\n\
///                     2 2 2\n\
///                     1 1 5.0\n\
///                     2 2 7.0\n";
/// let csr = read_csr(data).unwrap();
/// assert_eq!(csr.values, vec![5.0, 7.0]);
/// assert_eq!(csr.column_indices, vec![0, 1]);
/// assert_eq!(csr.row_pointers, vec![0, 1, 2]);
/// ```
pub fn read_csr<R: BufRead>(reader: R) -> Result<Csr> {
    let mut callback = DenseCallback::new();
    read(reader, &mut callback)?;
    let description = match callback.matrix_description() {
        Some(description) => *description,
        None => {
            return Err(Error::SizeLine {
                message: "the stream ended before a size line was found".to_string(),
            })
        }
    };
    Ok(compact(&description, callback.data(), DEFAULT_EPSILON))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{MatrixField, MatrixFormat, MatrixSymmetry};

    fn description(num_rows: usize, num_cols: usize) -> MatrixDescription {
        MatrixDescription {
            format: MatrixFormat::Coordinate,
            field: MatrixField::Real,
            symmetry: MatrixSymmetry::General,
            num_rows,
            num_cols,
            num_non_zeros: 0,
        }
    }

    #[test]
    fn test_compact_scans_rows_in_column_order() {
        // column-major 2x2: [a00, a10, a01, a11]
        let data = vec![5.0, 0.0, 0.0, 7.0];
        let csr = compact(&description(2, 2), &data, DEFAULT_EPSILON);

        assert_eq!(csr.values, vec![5.0, 7.0]);
        assert_eq!(csr.column_indices, vec![0, 1]);
        assert_eq!(csr.row_pointers, vec![0, 1, 2]);
    }

    #[test]
    fn test_compact_empty_rows_get_pointers() {
        // 3x3 with entries only in rows 0 and 2
        let mut data = vec![0.0; 9];
        data[0 + 1 * 3] = 2.0; // (0,1)
        data[2 + 0 * 3] = 4.0; // (2,0)
        data[2 + 2 * 3] = 6.0; // (2,2)
        let csr = compact(&description(3, 3), &data, DEFAULT_EPSILON);

        assert_eq!(csr.row_pointers, vec![0, 1, 1, 3]);
        assert_eq!(csr.column_indices, vec![1, 0, 2]);
        assert_eq!(csr.values, vec![2.0, 4.0, 6.0]);
        let row1: Vec<_> = csr.row_iter(1).collect();
        assert!(row1.is_empty());
    }

    #[test]
    fn test_compact_epsilon_drops_small_values() {
        let data = vec![1.0, 1e-12, -1e-12, -2.0];
        let csr = compact(&description(2, 2), &data, DEFAULT_EPSILON);

        assert_eq!(csr.nnz(), 2);
        assert_eq!(csr.values, vec![1.0, -2.0]);
        assert_eq!(csr.column_indices, vec![0, 1]);
    }

    #[test]
    fn test_compact_keeps_negative_values() {
        let data = vec![-3.0, 0.0, 0.0, 0.0];
        let csr = compact(&description(2, 2), &data, DEFAULT_EPSILON);
        assert_eq!(csr.values, vec![-3.0]);
    }

    #[test]
    fn test_compact_all_zero_matrix() {
        let data = vec![0.0; 6];
        let csr = compact(&description(2, 3), &data, DEFAULT_EPSILON);

        assert_eq!(csr.nnz(), 0);
        assert_eq!(csr.row_pointers, vec![0, 0, 0]);
    }

    #[test]
    fn test_row_iter() {
        let csr = Csr::new(
            3,
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
        );

        let row0: Vec<_> = csr.row_iter(0).collect();
        assert_eq!(row0, vec![(0, 1.0), (1, 2.0)]);

        let row2: Vec<_> = csr.row_iter(2).collect();
        assert_eq!(row2, vec![(0, 4.0), (2, 5.0)]);
    }

    #[test]
    #[should_panic(expected = "row_pointers.len() must be num_rows + 1")]
    fn test_invalid_row_pointers() {
        Csr::new(3, 3, vec![0, 2, 3], vec![0, 1, 1], vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_read_csr_missing_size_line() {
        let data: &[u8] = b"%%MatrixMarket matrix coordinate real general\n% only comments\n";
        let result = read_csr(data);
        assert!(matches!(result, Err(Error::SizeLine { .. })));
    }

    #[test]
    fn test_read_csr_symmetric_expansion() {
        let data: &[u8] = b"%%MatrixMarket matrix coordinate real symmetric\n\
                            2 2 1\n\
                            2 1 3.0\n";
        let csr = read_csr(data).unwrap();

        assert_eq!(csr.values, vec![3.0, 3.0]);
        assert_eq!(csr.column_indices, vec![1, 0]);
        assert_eq!(csr.row_pointers, vec![0, 1, 2]);
    }
}
