//! Compressed Sparse Row (CSR) snapshot

use alloc::vec::Vec;

use super::compressed::{band_lookup, BandEntries, BandLayout, SortStrategy};
use super::{Coo, Csc, Dense, Dok};
use crate::validation::validate_compressed_parts;
use crate::{Matrix, MatrixElement, Result, Shape, SparseMatrix};

/// Row offsets plus column indices and values grouped by row
///
/// Row `r` occupies `offsets[r]..offsets[r + 1]` of `indices` and
/// `values`, with column indices strictly ascending inside the band.
/// `offsets` has `rows + 1` entries, starts at zero and ends at `nnz`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "super::parts::CompressedParts<T>",
        bound(deserialize = "T: MatrixElement + serde::Deserialize<'de>")
    )
)]
pub struct Csr<T> {
    shape: Shape,
    offsets: Vec<usize>,
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: MatrixElement> Csr<T> {
    /// Empty `rows x cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            shape: Shape::new(rows, cols),
            offsets: alloc::vec![0; rows + 1],
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
        validate_compressed_parts(rows, cols, &offsets, &indices, values.len())?;
        Ok(Self {
            shape: Shape::new(rows, cols),
            offsets,
            indices,
            values,
        })
    }

    /// Wrap a layout whose bands are rows, already ordered
    ///
    /// Every band must be strictly ascending by minor index and every
    /// minor index in range. Layouts from [`BandLayout::build`] satisfy
    /// this; only debug builds check it.
    pub fn from_layout(shape: Shape, layout: BandLayout<T>) -> Self {
        let (offsets, indices, values) = layout.into_parts();
        debug_assert_eq!(
            validate_compressed_parts(shape.rows, shape.cols, &offsets, &indices, values.len()),
            Ok(())
        );
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

    /// Column index of every stored entry, band by band
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Column indices and values of row `row`
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[track_caller]
    pub fn row(&self, row: usize) -> (&[usize], &[T]) {
        assert!(
            row < self.shape.rows,
            "row {row} out of range for {} matrix",
            self.shape
        );
        let band = self.offsets[row]..self.offsets[row + 1];
        (&self.indices[band.clone()], &self.values[band])
    }

    /// Stored `(row, col, value)` entries, row by row in column order
    pub fn iter(&self) -> BandEntries<'_, T> {
        BandEntries::new(&self.offsets, &self.indices, &self.values)
    }

    /// Split into `(shape, offsets, column indices, values)`
    pub fn into_parts(self) -> (Shape, Vec<usize>, Vec<usize>, Vec<T>) {
        (self.shape, self.offsets, self.indices, self.values)
    }

    /// The transpose, reusing the same arrays as a CSC layout
    pub fn into_transpose(self) -> Csc<T> {
        Csc::from_raw(self.shape.transposed(), self.offsets, self.indices, self.values)
    }

    /// Same matrix compressed by column
    pub fn to_csc(&self) -> Csc<T> {
        let entries = self.iter().map(|(row, col, value)| (col, row, value));
        // Entries arrive row by row, so a stable scatter by column leaves
        // every column band ordered by row already
        let layout = BandLayout::scatter(self.shape.cols, entries);
        Csc::from_layout(self.shape, layout)
    }

    pub fn to_coo(&self) -> Coo<T> {
        let mut row_indices = Vec::with_capacity(self.nnz());
        for (row, band) in self.offsets.windows(2).enumerate() {
            row_indices.extend(core::iter::repeat(row).take(band[1] - band[0]));
        }
        Coo::from_parts_unchecked(
            self.shape,
            row_indices,
            self.indices.clone(),
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
}

impl<T: MatrixElement> Matrix for Csr<T> {
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
            row,
            col,
        ))
    }
}

impl<T: MatrixElement> SparseMatrix for Csr<T> {
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

impl<T: MatrixElement> From<&Dok<T>> for Csr<T> {
    fn from(dok: &Dok<T>) -> Self {
        dok.to_csr_with(SortStrategy::Auto)
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
        let mut dok = Dok::new(5, 4);
        for (r, c, v) in [
            (0, 3, 1.0),
            (1, 1, 2.0),
            (2, 2, 3.0),
            (4, 2, 4.0),
            (0, 0, 5.0),
            (1, 3, 6.0),
            (3, 3, 7.0),
        ] {
            dok.set(r, c, v);
        }
        dok
    }

    #[test]
    fn test_layout_from_dok() {
        for strategy in [SortStrategy::Auto, SortStrategy::Counting, SortStrategy::Comparison] {
            let csr = sample().to_csr_with(strategy);
            assert_eq!(csr.offsets(), &[0, 2, 4, 5, 6, 7]);
            assert_eq!(csr.indices(), &[0, 3, 1, 3, 2, 3, 2]);
            assert_eq!(csr.values(), &[5.0, 1.0, 2.0, 6.0, 3.0, 7.0, 4.0]);
        }
    }

    #[test]
    fn test_element_access() {
        let dok = sample();
        let csr = dok.to_csr();
        assert!(crate::equal(&csr, &dok));
        assert_eq!(csr.at(1, 3), 6.0);
        assert_eq!(csr.at(1, 2), 0.0);
        assert_eq!(csr.row(1), (&[1usize, 3][..], &[2.0, 6.0][..]));
    }

    #[test]
    fn test_empty_rows_and_matrices() {
        let mut dok = Dok::new(4, 3);
        dok.set(2, 1, 1.0);
        let csr = dok.to_csr();
        assert_eq!(csr.offsets(), &[0, 0, 0, 1, 1]);
        assert_eq!(csr.row(0), (&[][..], &[][..]));

        let empty = Dok::<f64>::new(3, 3).to_csr();
        assert_eq!(empty.offsets(), &[0, 0, 0, 0]);
        assert_eq!(empty.nnz(), 0);

        let degenerate = Dok::<f64>::new(0, 0).to_csr();
        assert_eq!(degenerate.offsets(), &[0]);
        assert_eq!(degenerate.dimensions(), (0, 0));
        assert_eq!(Csr::<f64>::new(0, 0), degenerate);
    }

    #[test]
    fn test_fully_dense_store() {
        let mut dok = Dok::new(3, 3);
        for r in 0..3 {
            for c in 0..3 {
                dok.set(r, c, (r * 3 + c + 1) as i64);
            }
        }
        let csr = dok.to_csr();
        assert_eq!(csr.offsets(), &[0, 3, 6, 9]);
        assert_eq!(csr.indices(), &[0, 1, 2, 0, 1, 2, 0, 1, 2]);
        assert_eq!(csr.values(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_conversions() {
        let dok = sample();
        let csr = dok.to_csr();

        let csc = csr.to_csc();
        assert!(crate::equal(&csc, &dok));
        assert_eq!(csc, dok.to_csc());

        assert!(crate::equal(&csr.to_coo(), &dok));
        assert_eq!(csr.to_dok(), dok);
        assert_eq!(csr.to_dense(), dok.to_dense());
    }

    #[test]
    fn test_into_transpose() {
        let dok = sample();
        let t = dok.to_csr().into_transpose();
        assert_eq!(t.dimensions(), (4, 5));
        assert!(crate::equal(&t, &dok.t()));
    }

    #[test]
    fn test_try_from_parts() {
        let csr = Csr::try_from_parts(2, 3, vec![0, 2, 3], vec![0, 2, 1], vec![1, 2, 3]).unwrap();
        assert_eq!(csr.at(0, 2), 2);
        assert_eq!(csr.at(1, 1), 3);

        assert_eq!(
            Csr::try_from_parts(2, 3, vec![0, 2, 3], vec![2, 0, 1], vec![1, 2, 3]).unwrap_err(),
            SpdokError::UnsortedIndices
        );
        assert_eq!(
            Csr::try_from_parts(2, 3, vec![0, 3], vec![0, 1, 2], vec![1, 2, 3]).unwrap_err(),
            SpdokError::InvalidOffsets
        );
    }

    #[test]
    fn test_explicit_zeros_not_visited() {
        let csr = Csr::try_from_parts(1, 3, vec![0, 2], vec![0, 2], vec![0, 5]).unwrap();
        assert_eq!(SparseMatrix::nnz(&csr), 2);

        let mut seen = vec![];
        csr.for_each_nonzero(|r, c, v| seen.push((r, c, v)));
        assert_eq!(seen, vec![(0, 2, 5)]);
        assert_eq!(csr.get_element(0, 0), None);
        assert_eq!(csr.to_dok().nnz(), 1);
    }

    #[test]
    #[should_panic(expected = "row 5 out of range for 5x4 matrix")]
    fn test_row_out_of_range() {
        sample().to_csr().row(5);
    }
}
