//! Dense row-major snapshot

use alloc::vec;
use alloc::vec::Vec;

use super::Dok;
use crate::{Matrix, MatrixElement, Result, Shape, SparseMatrix, SpdokError};

/// Dense sizes at or above this many cells are logged when most of them
/// are zero
const LARGE_DENSE_CELLS: usize = 1 << 24;

/// Fully populated `rows * cols` array in row-major order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "super::parts::DenseParts<T>",
        bound(deserialize = "T: MatrixElement + serde::Deserialize<'de>")
    )
)]
pub struct Dense<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: MatrixElement> Dense<T> {
    /// All-zero `rows x cols` array
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[track_caller]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        match Self::try_zeros(rows, cols) {
            Ok(dense) => dense,
            Err(err) => panic!("{err}: {rows}x{cols}"),
        }
    }

    pub fn try_zeros(rows: usize, cols: usize) -> Result<Self> {
        let shape = Shape::new(rows, cols);
        let len = shape.dense_len()?;
        Ok(Self {
            shape,
            data: vec![T::ZERO; len],
        })
    }

    /// Wrap row-major data
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    #[track_caller]
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<T>) -> Self {
        let len = data.len();
        match Self::try_from_row_major(rows, cols, data) {
            Ok(dense) => dense,
            Err(err) => panic!("{err}: {len} values for {rows}x{cols} matrix"),
        }
    }

    pub fn try_from_row_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let shape = Shape::new(rows, cols);
        if shape.dense_len()? != data.len() {
            return Err(SpdokError::LengthMismatch);
        }
        Ok(Self { shape, data })
    }

    /// Materialize any sparse matrix
    ///
    /// Zero-initialized, then one accumulation per stored entry at
    /// `row * cols + col`; formats that may repeat a coordinate come out
    /// summed.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[track_caller]
    pub fn from_sparse<M>(matrix: &M) -> Self
    where
        M: SparseMatrix<Element = T> + ?Sized,
    {
        let (rows, cols) = matrix.dimensions();
        let mut dense = Self::zeros(rows, cols);

        let cells = dense.data.len();
        let nnz = matrix.nnz();
        if cells >= LARGE_DENSE_CELLS && nnz < cells / 64 {
            log::warn!(
                target: "spdok_perf",
                "materializing {rows}x{cols} dense array for only {nnz} stored entries"
            );
        }

        matrix.for_each_nonzero(|row, col, value| {
            let cell = &mut dense.data[row * cols + col];
            *cell = cell.add(value);
        });
        dense
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Value at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.shape.assert_in_bounds(row, col);
        self.data[row * self.shape.cols + col]
    }

    /// Overwrite `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.shape.assert_in_bounds(row, col);
        self.data[row * self.shape.cols + col] = value;
    }

    /// Values of row `row`
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[track_caller]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(
            row < self.shape.rows,
            "row {row} out of range for {} matrix",
            self.shape
        );
        let start = row * self.shape.cols;
        &self.data[start..start + self.shape.cols]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Non-zero cells as `(row, col, value)`, row-major
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + Clone + '_ {
        let cols = self.shape.cols;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, value)| !value.is_zero())
            .map(move |(i, &value)| (i / cols, i % cols, value))
    }

    pub fn to_dok(&self) -> Dok<T> {
        Dok::from_dense(self)
    }
}

impl<T: MatrixElement> Matrix for Dense<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        self.shape.dims()
    }

    fn try_at(&self, row: usize, col: usize) -> Result<T> {
        self.shape.check(row, col)?;
        Ok(self.data[row * self.shape.cols + col])
    }
}

impl<T: MatrixElement> SparseMatrix for Dense<T> {
    /// Counts non-zero cells; O(rows * cols)
    fn nnz(&self) -> usize {
        self.data.iter().filter(|value| !value.is_zero()).count()
    }

    fn for_each_nonzero<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, T),
    {
        for (row, col, value) in self.iter() {
            visit(row, col, value);
        }
    }
}

impl<T: MatrixElement> From<&Dok<T>> for Dense<T> {
    fn from(dok: &Dok<T>) -> Self {
        dok.to_dense()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dok() {
        let mut dok = Dok::new(3, 4);
        dok.set(0, 0, 1.0);
        dok.set(2, 3, 6.0);
        dok.set(1, 2, -2.0);

        let dense = dok.to_dense();
        assert_eq!(dense.shape(), Shape::new(3, 4));
        assert_eq!(
            dense.as_slice(),
            &[
                1.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, -2.0, 0.0, //
                0.0, 0.0, 0.0, 6.0,
            ]
        );
        assert_eq!(dense.row(2), &[0.0, 0.0, 0.0, 6.0]);
    }

    #[test]
    fn test_independent_of_source() {
        let mut dok = Dok::new(2, 2);
        dok.set(0, 1, 3);
        let mut dense = dok.to_dense();
        dense.set(0, 1, 9);
        dense.set(1, 1, 4);
        assert_eq!(dok.get(0, 1), 3);
        assert_eq!(dok.nnz(), 1);
    }

    #[test]
    fn test_degenerate_shapes() {
        for (rows, cols) in [(0, 0), (0, 5), (5, 0)] {
            let dense = Dok::<f64>::new(rows, cols).to_dense();
            assert_eq!(dense.dimensions(), (rows, cols));
            assert!(dense.as_slice().is_empty());
        }
    }

    #[test]
    fn test_try_from_row_major() {
        assert!(Dense::try_from_row_major(2, 2, vec![1, 2, 3, 4]).is_ok());
        assert_eq!(
            Dense::try_from_row_major(2, 2, vec![1, 2, 3]).unwrap_err(),
            SpdokError::LengthMismatch
        );
        assert_eq!(
            Dense::<u32>::try_zeros(usize::MAX, 2).unwrap_err(),
            SpdokError::InvalidDimensions
        );
    }

    #[test]
    fn test_nonzero_iteration() {
        let dense = Dense::from_row_major(2, 3, vec![0.0, 1.5, 0.0, -0.0, 0.0, 2.5]);
        assert_eq!(dense.nnz(), 2);
        let entries: Vec<_> = dense.iter().collect();
        assert_eq!(entries, vec![(0, 1, 1.5), (1, 2, 2.5)]);
        assert_eq!(dense.to_dok().nnz(), 2);
    }

    #[test]
    #[should_panic(expected = "Array lengths do not match: 3 values for 2x2 matrix")]
    fn test_from_row_major_length_mismatch() {
        Dense::from_row_major(2, 2, vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "Index out of range")]
    fn test_set_out_of_range() {
        Dense::<f64>::zeros(2, 2).set(0, 2, 1.0);
    }
}
