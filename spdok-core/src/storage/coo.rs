//! Coordinate (COO) snapshot

use alloc::vec::Vec;

use super::compressed::{BandLayout, SortStrategy};
use super::{Csc, Csr, Dense, Dok};
use crate::validation::validate_coo_parts;
use crate::{Matrix, MatrixElement, Result, Shape, SparseMatrix};

/// Three parallel arrays of row index, column index and value
///
/// Snapshots taken from a [`Dok`] hold each coordinate once, in no
/// particular order. A COO assembled with [`Coo::try_from_parts`] may
/// repeat a coordinate; repeats are summed on access and on conversion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "super::parts::CooParts<T>",
        bound(deserialize = "T: MatrixElement + serde::Deserialize<'de>")
    )
)]
pub struct Coo<T> {
    shape: Shape,
    row_indices: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: MatrixElement> Coo<T> {
    /// Empty `rows x cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_parts_unchecked(Shape::new(rows, cols), Vec::new(), Vec::new(), Vec::new())
    }

    /// Assemble from parallel arrays, validating lengths and bounds
    pub fn try_from_parts(
        rows: usize,
        cols: usize,
        row_indices: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        validate_coo_parts(rows, cols, &row_indices, &col_indices, values.len())?;
        Ok(Self::from_parts_unchecked(
            Shape::new(rows, cols),
            row_indices,
            col_indices,
            values,
        ))
    }

    pub(crate) fn from_parts_unchecked(
        shape: Shape,
        row_indices: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        Self {
            shape,
            row_indices,
            col_indices,
            values,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of stored triples
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Stored `(row, col, value)` triples in storage order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, usize, T)> + Clone + '_ {
        self.row_indices
            .iter()
            .zip(&self.col_indices)
            .zip(&self.values)
            .map(|((&row, &col), &value)| (row, col, value))
    }

    /// Split into `(shape, row indices, column indices, values)`
    pub fn into_parts(self) -> (Shape, Vec<usize>, Vec<usize>, Vec<T>) {
        (self.shape, self.row_indices, self.col_indices, self.values)
    }

    /// Transposed matrix; swaps the index arrays without touching values
    pub fn transpose(self) -> Coo<T> {
        Self {
            shape: self.shape.transposed(),
            row_indices: self.col_indices,
            col_indices: self.row_indices,
            values: self.values,
        }
    }

    pub fn to_csr(&self) -> Csr<T> {
        let layout = self.merged_layout(self.shape.rows, self.shape.cols, self.iter());
        Csr::from_layout(self.shape, layout)
    }

    pub fn to_csc(&self) -> Csc<T> {
        let entries = self.iter().map(|(row, col, value)| (col, row, value));
        let layout = self.merged_layout(self.shape.cols, self.shape.rows, entries);
        Csc::from_layout(self.shape, layout)
    }

    pub fn to_dense(&self) -> Dense<T> {
        Dense::from_sparse(self)
    }

    /// Dictionary-of-keys copy; repeated coordinates are summed
    pub fn to_dok(&self) -> Dok<T> {
        let mut dok: Dok<T> = Dok::with_capacity(self.shape.rows, self.shape.cols, self.nnz());
        for (row, col, value) in self.iter() {
            let sum = dok.get(row, col).add(value);
            dok.set(row, col, sum);
        }
        dok
    }

    fn merged_layout<I>(&self, major_len: usize, minor_len: usize, entries: I) -> BandLayout<T>
    where
        I: Iterator<Item = (usize, usize, T)> + Clone,
    {
        let mut layout = BandLayout::build(major_len, minor_len, entries, SortStrategy::Auto);
        layout.merge_duplicates();
        layout
    }
}

impl<T: MatrixElement> Matrix for Coo<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        self.shape.dims()
    }

    /// Linear scan summing every triple stored at `(row, col)`
    fn try_at(&self, row: usize, col: usize) -> Result<T> {
        self.shape.check(row, col)?;
        Ok(self
            .iter()
            .filter(|&(r, c, _)| r == row && c == col)
            .fold(T::ZERO, |acc, (_, _, value)| acc.add(value)))
    }
}

impl<T: MatrixElement> SparseMatrix for Coo<T> {
    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn for_each_nonzero<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, T),
    {
        // Parts built outside a store may carry explicit zeros
        for (row, col, value) in self.iter().filter(|(_, _, value)| !value.is_zero()) {
            visit(row, col, value);
        }
    }
}

impl<T: MatrixElement> From<&Dok<T>> for Coo<T> {
    fn from(dok: &Dok<T>) -> Self {
        dok.to_coo()
    }
}
