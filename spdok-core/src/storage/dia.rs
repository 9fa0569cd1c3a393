//! Main-diagonal (DIA) snapshot

use alloc::vec::Vec;

use super::compressed::BandLayout;
use super::{Coo, Csc, Csr, Dense, Dok};
use crate::{Matrix, MatrixElement, Result, Shape, SparseMatrix, SpdokError};

/// A matrix whose only non-zeros lie on the main diagonal
///
/// `diagonal[i]` is the value at `(i, i)`; the vector always holds
/// `min(rows, cols)` values, zeros included.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "super::parts::DiaParts<T>",
        bound(deserialize = "T: MatrixElement + serde::Deserialize<'de>")
    )
)]
pub struct Dia<T> {
    shape: Shape,
    diagonal: Vec<T>,
}

impl<T: MatrixElement> Dia<T> {
    /// All-zero `rows x cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            shape: Shape::new(rows, cols),
            diagonal: alloc::vec![T::ZERO; rows.min(cols)],
        }
    }

    /// Wrap a main diagonal of exactly `min(rows, cols)` values
    pub fn try_from_diagonal(rows: usize, cols: usize, diagonal: Vec<T>) -> Result<Self> {
        if diagonal.len() != rows.min(cols) {
            return Err(SpdokError::LengthMismatch);
        }
        Ok(Self {
            shape: Shape::new(rows, cols),
            diagonal,
        })
    }

    /// Like [`Dia::try_from_diagonal`]
    ///
    /// # Panics
    ///
    /// Panics if the diagonal length is not `min(rows, cols)`.
    #[track_caller]
    pub fn from_diagonal(rows: usize, cols: usize, diagonal: Vec<T>) -> Self {
        let len = diagonal.len();
        match Self::try_from_diagonal(rows, cols, diagonal) {
            Ok(dia) => dia,
            Err(err) => panic!("{err}: diagonal of {len} for {rows}x{cols} matrix"),
        }
    }

    /// Main diagonal of any matrix; off-diagonal entries are dropped
    pub fn diagonal_of<M>(matrix: &M) -> Self
    where
        M: Matrix<Element = T> + ?Sized,
    {
        let (rows, cols) = matrix.dimensions();
        let diagonal = (0..rows.min(cols))
            .map(|i| matrix.try_at(i, i).unwrap_or(T::ZERO))
            .collect();
        Self {
            shape: Shape::new(rows, cols),
            diagonal,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn diagonal(&self) -> &[T] {
        &self.diagonal
    }

    /// Non-zero `(i, i, value)` entries in ascending `i`
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + Clone + '_ {
        self.diagonal
            .iter()
            .enumerate()
            .filter(|(_, value)| !value.is_zero())
            .map(|(i, &value)| (i, i, value))
    }

    pub fn into_diagonal(self) -> Vec<T> {
        self.diagonal
    }

    /// The transpose; a diagonal matrix only swaps its shape
    pub fn into_transpose(self) -> Dia<T> {
        Self {
            shape: self.shape.transposed(),
            diagonal: self.diagonal,
        }
    }

    pub fn to_csr(&self) -> Csr<T> {
        // One entry per band at most, so every band is already ordered
        Csr::from_layout(self.shape, BandLayout::scatter(self.shape.rows, self.iter()))
    }

    pub fn to_csc(&self) -> Csc<T> {
        Csc::from_layout(self.shape, BandLayout::scatter(self.shape.cols, self.iter()))
    }

    pub fn to_coo(&self) -> Coo<T> {
        let (rows, values): (Vec<usize>, Vec<T>) = self.iter().map(|(i, _, v)| (i, v)).unzip();
        Coo::from_parts_unchecked(self.shape, rows.clone(), rows, values)
    }

    pub fn to_dense(&self) -> Dense<T> {
        Dense::from_sparse(self)
    }

    pub fn to_dok(&self) -> Dok<T> {
        let mut dok: Dok<T> = Dok::with_capacity(self.shape.rows, self.shape.cols, self.nnz());
        dok.extend(self.iter());
        dok
    }
}

impl<T: MatrixElement> Matrix for Dia<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        self.shape.dims()
    }

    fn try_at(&self, row: usize, col: usize) -> Result<T> {
        self.shape.check(row, col)?;
        Ok(if row == col { self.diagonal[row] } else { T::ZERO })
    }
}

impl<T: MatrixElement> SparseMatrix for Dia<T> {
    /// Non-zero values on the diagonal
    fn nnz(&self) -> usize {
        self.diagonal.iter().filter(|value| !value.is_zero()).count()
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

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> Dia<f64> {
        // [[5, 0, 0, 0],
        //  [0, 0, 0, 0],
        //  [0, 0, 3, 0],
        //  [0, 0, 0, 7],
        //  [0, 0, 0, 0]]
        Dia::from_diagonal(5, 4, vec![5.0, 0.0, 3.0, 7.0])
    }

    #[test]
    fn test_element_access() {
        let dia = sample();
        assert_eq!(dia.dimensions(), (5, 4));
        assert_eq!(dia.at(2, 2), 3.0);
        assert_eq!(dia.at(2, 3), 0.0);
        assert_eq!(dia.at(4, 3), 0.0);
        assert_eq!(dia.nnz(), 3);
        assert_eq!(dia.try_at(5, 0), Err(SpdokError::IndexOutOfBounds));
    }

    #[test]
    fn test_visits_skip_zero_diagonal() {
        let mut seen = vec![];
        sample().for_each_nonzero(|r, c, v| seen.push((r, c, v)));
        assert_eq!(seen, vec![(0, 0, 5.0), (2, 2, 3.0), (3, 3, 7.0)]);
    }

    #[test]
    fn test_conversions() {
        let dia = sample();

        let csr = dia.to_csr();
        assert_eq!(csr.offsets(), &[0, 1, 1, 2, 3, 3]);
        assert_eq!(csr.indices(), &[0, 2, 3]);

        let csc = dia.to_csc();
        assert_eq!(csc.offsets(), &[0, 1, 1, 2, 3]);
        assert_eq!(csc.values(), &[5.0, 3.0, 7.0]);

        let dense = dia.to_dense();
        assert_eq!(dense.at(3, 3), 7.0);
        assert!(crate::equal(&dense, &dia));
        assert!(crate::equal(&dia.to_coo(), &dia));
        assert_eq!(dia.to_dok().nnz(), 3);
    }

    #[test]
    fn test_diagonal_of_drops_off_diagonal() {
        let mut dok = Dok::new(3, 5);
        dok.set(0, 0, 1);
        dok.set(0, 4, 9);
        dok.set(2, 2, 4);

        let dia = Dia::diagonal_of(&dok);
        assert_eq!(dia.shape(), Shape::new(3, 5));
        assert_eq!(dia.diagonal(), &[1, 0, 4]);
        assert_eq!(dia.at(0, 4), 0);
    }

    #[test]
    fn test_transpose_and_degenerate() {
        let t = sample().into_transpose();
        assert_eq!(t.dimensions(), (4, 5));
        assert!(crate::equal(&t, &sample().t()));

        let empty = Dia::<i32>::new(0, 7);
        assert!(empty.diagonal().is_empty());
        assert_eq!(empty.to_csr().offsets(), &[0]);
    }

    #[test]
    fn test_diagonal_length_checked() {
        assert_eq!(
            Dia::try_from_diagonal(2, 3, vec![1, 2, 3]).unwrap_err(),
            SpdokError::LengthMismatch
        );
    }

    #[test]
    #[should_panic(expected = "Array lengths do not match: diagonal of 1 for 2x2 matrix")]
    fn test_from_diagonal_wrong_length() {
        Dia::from_diagonal(2, 2, vec![1.0]);
    }
}
