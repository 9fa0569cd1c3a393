//! Logical transpose views
//!
//! A view swaps the dimensions and the two index arguments on every access
//! and never copies the wrapped storage.

use crate::traits::{Matrix, SparseMatrix};
use crate::Result;

#[cfg(feature = "alloc")]
use crate::{storage::Dok, MatrixElement};

/// Read-only transpose of any matrix
///
/// `Transpose::new(&m).at(i, j) == m.at(j, i)`. Wrap a reference to borrow
/// or an owned matrix to move it in; `into_inner` gives it back.
#[derive(Debug, Clone, Copy)]
pub struct Transpose<M> {
    inner: M,
}

impl<M> Transpose<M> {
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }

    /// The untransposed matrix
    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: Matrix> Matrix for Transpose<M> {
    type Element = M::Element;

    fn dimensions(&self) -> (usize, usize) {
        let (rows, cols) = self.inner.dimensions();
        (cols, rows)
    }

    fn try_at(&self, row: usize, col: usize) -> Result<Self::Element> {
        self.inner.try_at(col, row)
    }
}

impl<M: SparseMatrix> SparseMatrix for Transpose<M> {
    fn nnz(&self) -> usize {
        self.inner.nnz()
    }

    fn for_each_nonzero<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, Self::Element),
    {
        self.inner.for_each_nonzero(|r, c, v| visit(c, r, v));
    }
}

/// Writable transpose of a dictionary-of-keys store
///
/// Writes land in the same entry map as the store it was taken from.
#[cfg(feature = "alloc")]
#[derive(Debug)]
pub struct TransposeMut<'a, T: MatrixElement> {
    inner: &'a mut Dok<T>,
}

#[cfg(feature = "alloc")]
impl<'a, T: MatrixElement> TransposeMut<'a, T> {
    pub(crate) fn new(inner: &'a mut Dok<T>) -> Self {
        Self { inner }
    }

    /// Value at `(row, col)` of the transposed matrix
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.at(row, col)
    }

    /// Write `(row, col)` of the transposed matrix, i.e. `(col, row)` of
    /// the underlying store
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.dimensions_shape().assert_in_bounds(row, col);
        self.inner.set(col, row, value);
    }

    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.inner.try_set(col, row, value)
    }

    fn dimensions_shape(&self) -> crate::Shape {
        self.inner.shape().transposed()
    }
}

#[cfg(feature = "alloc")]
impl<T: MatrixElement> Matrix for TransposeMut<'_, T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        self.dimensions_shape().dims()
    }

    fn try_at(&self, row: usize, col: usize) -> Result<T> {
        self.inner.try_get(col, row)
    }
}

#[cfg(feature = "alloc")]
impl<T: MatrixElement> SparseMatrix for TransposeMut<'_, T> {
    fn nnz(&self) -> usize {
        self.inner.nnz()
    }

    fn for_each_nonzero<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, T),
    {
        self.inner.for_each_nonzero(|r, c, v| visit(c, r, v));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Dense;
    use alloc::vec;

    fn sample() -> Dok<f64> {
        Dok::from_dense(&Dense::from_row_major(
            3,
            4,
            vec![
                1.0, 0.0, 0.0, 0.0, //
                0.0, 2.0, 0.0, 0.0, //
                0.0, 0.0, 3.0, 6.0,
            ],
        ))
    }

    #[test]
    fn test_transpose_view() {
        let dok = sample();
        let expected = Dense::from_row_major(
            4,
            3,
            vec![
                1.0, 0.0, 0.0, //
                0.0, 2.0, 0.0, //
                0.0, 0.0, 3.0, //
                0.0, 0.0, 6.0,
            ],
        );

        let t = dok.t();
        assert_eq!(t.dimensions(), (4, 3));
        assert!(crate::equal(&t, &expected));
        for i in 0..4 {
            for j in 0..3 {
                assert_eq!(t.at(i, j), dok.at(j, i));
            }
        }
    }

    #[test]
    fn test_transpose_view_nonzero_visits_swapped() {
        let dok = sample();
        let mut visits = 0;
        dok.t().for_each_nonzero(|r, c, v| {
            assert_eq!(dok.get(c, r), v);
            visits += 1;
        });
        assert_eq!(visits, dok.nnz());
    }

    #[test]
    fn test_double_transpose_is_identity() {
        let dok = sample();
        let tt = Transpose::new(dok.t());
        assert_eq!(tt.dimensions(), dok.dimensions());
        assert!(crate::equal(&tt, &dok));
    }

    #[test]
    fn test_transpose_mut_writes_through() {
        let mut dok = sample();
        {
            let mut t = dok.t_mut();
            assert_eq!(t.dimensions(), (4, 3));
            t.set(3, 0, 9.0);
            t.set(2, 2, 0.0);
            assert_eq!(t.get(3, 0), 9.0);
        }
        assert_eq!(dok.get(0, 3), 9.0);
        assert_eq!(dok.get(2, 2), 0.0);
        assert_eq!(dok.nnz(), 4);
    }

    #[test]
    #[should_panic(expected = "Index out of range")]
    fn test_transpose_mut_checks_transposed_bounds() {
        let mut dok = sample();
        // (0, 3) is valid for the 3x4 store but not for its 4x3 transpose
        dok.t_mut().set(0, 3, 1.0);
    }

    #[test]
    #[should_panic(expected = "Index out of range: (0, 3) in 4x3 matrix")]
    fn test_transpose_view_at_out_of_range() {
        let dok = sample();
        dok.t().at(0, 3);
    }
}
