//! Compressed Sparse Column (CSC) snapshot

use alloc::vec::Vec;

use super::compressed::{band_lookup, BandEntries, BandLayout, SortStrategy};
use super::{Coo, Csr, Dense, Dok};
use crate::validation::validate_compressed_parts;
use crate::{Matrix, MatrixElement, Result, Shape, SparseMatrix};

/// Column offsets plus row indices and values grouped by column
///
/// Column `c` occupies `offsets[c]..offsets[c + 1]` of `indices` and
/// `values`, with row indices strictly ascending inside the band.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "super::parts::CompressedParts<T>",
        bound(deserialize = "T: MatrixElement + serde::Deserialize<'de>")
    )
)]
pub struct Csc<T> {
    shape: Shape,
    offsets: Vec<usize>,
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: MatrixElement> Csc<T> {
    /// Empty `rows x cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            shape: Shape::new(rows, cols),
            offsets: alloc::vec![0; cols + 1],
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Assemble from raw arrays, validating the whole layout
    pub fn try_from_parts(
        rows: usize,
        cols: usize,
        offsets: Vec<usize>,
        indices: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        validate_compressed_parts(cols, rows, &offsets, &indices, values.len())?;
        Ok(Self {
            shape: Shape::new(rows, cols),
            offsets,
            indices,
            values,
        })
    }

    /// Wrap a layout whose bands are columns, already ordered
    ///
    /// Every band must be strictly ascending by minor index and every
    /// minor index in range. Layouts from [`BandLayout::build`] satisfy
    /// this; only debug builds check it.
    pub fn from_layout(shape: Shape, layout: BandLayout<T>) -> Self {
        let (offsets, indices, values) = layout.into_parts();
        debug_assert_eq!(
            validate_compressed_parts(shape.cols, shape.rows, &offsets, &indices, values.len()),
            Ok(())
        );
        Self {
            shape,
            offsets,
            indices,
            values,
        }
    }

    pub(crate) fn from_raw(
        shape: Shape,
        offsets: Vec<usize>,
        indices: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        Self {
            shape,
            offsets,
            indices,
            values,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Row index of every stored entry, band by band
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Row indices and values of column `col`
    ///
    /// # Panics
    ///
    /// Panics if `col >= cols`.
    #[track_caller]
    pub fn col(&self, col: usize) -> (&[usize], &[T]) {
        assert!(
            col < self.shape.cols,
            "column {col} out of range for {} matrix",
            self.shape
        );
        let band = self.offsets[col]..self.offsets[col + 1];
        (&self.indices[band.clone()], &self.values[band])
    }

    /// Stored `(row, col, value)` entries, column by column in row order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, usize, T)> + Clone + '_ {
        BandEntries::new(&self.offsets, &self.indices, &self.values)
            .map(|(col, row, value)| (row, col, value))
    }

    /// Split into `(shape, offsets, row indices, values)`
    pub fn into_parts(self) -> (Shape, Vec<usize>, Vec<usize>, Vec<T>) {
        (self.shape, self.offsets, self.indices, self.values)
    }

    /// The transpose, reusing the same arrays as a CSR layout
    pub fn into_transpose(self) -> Csr<T> {
        Csr::from_raw(self.shape.transposed(), self.offsets, self.indices, self.values)
    }

    /// Same matrix compressed by row
    pub fn to_csr(&self) -> Csr<T> {
        // Column-ordered input keeps every row band ordered by column
        let layout = BandLayout::scatter(self.shape.rows, self.iter());
        Csr::from_layout(self.shape, layout)
    }

    pub fn to_coo(&self) -> Coo<T> {
        let mut col_indices = Vec::with_capacity(self.nnz());
        for (col, band) in self.offsets.windows(2).enumerate() {
            col_indices.extend(core::iter::repeat(col).take(band[1] - band[0]));
        }
        Coo::from_parts_unchecked(
            self.shape,
            self.indices.clone(),
            col_indices,
            self.values.clone(),
        )
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

impl<T: MatrixElement> Matrix for Csc<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        self.shape.dims()
    }

    fn try_at(&self, row: usize, col: usize) -> Result<T> {
        self.shape.check(row, col)?;
        Ok(band_lookup(
            &self.offsets,
            &self.indices,
            &self.values,
            col,
            row,
        ))
    }
}

impl<T: MatrixElement> SparseMatrix for Csc<T> {
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

impl<T: MatrixElement> From<&Dok<T>> for Csc<T> {
    fn from(dok: &Dok<T>) -> Self {
        dok.to_csc_with(SortStrategy::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpdokError;
    use alloc::vec;

    fn sample() -> Dok<f64> {
        // [[5, 0, 0, 1],
        //  [0, 2, 0, 6],
        //  [0, 0, 3, 0],
        //  [0, 0, 0, 7],
        //  [0, 0, 4, 0]]
        Dok::try_from_triplets(
            5,
            4,
            [
                (0, 3, 1.0),
                (1, 1, 2.0),
                (2, 2, 3.0),
                (4, 2, 4.0),
                (0, 0, 5.0),
                (1, 3, 6.0),
                (3, 3, 7.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_layout_from_dok() {
        for strategy in [SortStrategy::Auto, SortStrategy::Counting, SortStrategy::Comparison] {
            let csc = sample().to_csc_with(strategy);
            assert_eq!(csc.offsets(), &[0, 1, 2, 4, 7]);
            assert_eq!(csc.indices(), &[0, 1, 2, 4, 0, 1, 3]);
            assert_eq!(csc.values(), &[5.0, 2.0, 3.0, 4.0, 1.0, 6.0, 7.0]);
        }
    }

    #[test]
    fn test_element_access() {
        let dok = sample();
        let csc = dok.to_csc();
        assert!(crate::equal(&csc, &dok));
        assert_eq!(csc.at(4, 2), 4.0);
        assert_eq!(csc.at(3, 2), 0.0);
        assert_eq!(csc.col(3), (&[0usize, 1, 3][..], &[1.0, 6.0, 7.0][..]));
    }

    #[test]
    fn test_empty_columns() {
        let mut dok = Dok::new(2, 5);
        dok.set(1, 3, 2.0);
        let csc = dok.to_csc();
        assert_eq!(csc.offsets(), &[0, 0, 0, 0, 1, 1]);

        let empty = Dok::<f64>::new(0, 4).to_csc();
        assert_eq!(empty.offsets(), &[0, 0, 0, 0, 0]);
        assert_eq!(empty, Csc::new(0, 4));
    }

    #[test]
    fn test_conversions() {
        let dok = sample();
        let csc = dok.to_csc();

        assert_eq!(csc.to_csr(), dok.to_csr());
        assert!(crate::equal(&csc.to_coo(), &dok));
        assert_eq!(csc.to_dok(), dok);
        assert_eq!(csc.to_dense(), dok.to_dense());
    }

    #[test]
    fn test_into_transpose() {
        let dok = sample();
        let t = dok.to_csc().into_transpose();
        assert_eq!(t.dimensions(), (4, 5));
        assert!(crate::equal(&t, &dok.t()));
    }

    #[test]
    fn test_try_from_parts() {
        let csc = Csc::try_from_parts(3, 2, vec![0, 2, 3], vec![0, 2, 1], vec![1, 2, 3]).unwrap();
        assert_eq!(csc.at(2, 0), 2);
        assert_eq!(csc.at(1, 1), 3);

        assert_eq!(
            Csc::try_from_parts(3, 2, vec![0, 2, 3], vec![0, 3, 1], vec![1, 2, 3]).unwrap_err(),
            SpdokError::IndexOutOfBounds
        );
    }

    #[test]
    fn test_explicit_zeros_not_visited() {
        let csc = Csc::try_from_parts(3, 1, vec![0, 2], vec![1, 2], vec![0.0, -1.5]).unwrap();
        assert_eq!(SparseMatrix::nnz(&csc), 2);

        let mut seen = vec![];
        csc.for_each_nonzero(|r, c, v| seen.push((r, c, v)));
        assert_eq!(seen, vec![(2, 0, -1.5)]);
        assert_eq!(crate::MatrixOperations::get_col(&csc, 0), vec![(2, -1.5)]);
    }

    #[test]
    #[should_panic(expected = "column 4 out of range")]
    fn test_col_out_of_range() {
        sample().to_csc().col(4);
    }
}
