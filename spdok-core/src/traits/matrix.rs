//! Core matrix abstraction traits
//!
//! Every storage format implements these so that downstream consumers
//! (solvers, printers, comparisons) never depend on a concrete layout.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::MatrixElement;
use crate::transpose::Transpose;
use crate::Result;

/// Minimal read contract shared by every format
pub trait Matrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get the value at `(row, col)`, zero when nothing is stored there
    ///
    /// Returns `IndexOutOfBounds` outside `[0, rows) x [0, cols)`.
    fn try_at(&self, row: usize, col: usize) -> Result<Self::Element>;

    /// Get the value at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    #[track_caller]
    fn at(&self, row: usize, col: usize) -> Self::Element {
        match self.try_at(row, col) {
            Ok(value) => value,
            Err(err) => {
                let (rows, cols) = self.dimensions();
                panic!("{err}: ({row}, {col}) in {rows}x{cols} matrix")
            }
        }
    }

    fn nrows(&self) -> usize {
        self.dimensions().0
    }

    fn ncols(&self) -> usize {
        self.dimensions().1
    }

    /// Logical transpose borrowing this matrix; nothing is copied
    fn t(&self) -> Transpose<&Self>
    where
        Self: Sized,
    {
        Transpose::new(self)
    }
}

/// Sparse access on top of the read contract
pub trait SparseMatrix: Matrix {
    /// Get number of elements stored
    ///
    /// Snapshots derived from a store hold only non-zeros. Snapshots
    /// assembled from raw parts may also hold explicit zeros and, for
    /// COO, repeated coordinates; both count here.
    fn nnz(&self) -> usize;

    /// Visit every stored non-zero entry exactly once
    ///
    /// Explicit zeros are skipped. Repeated COO coordinates are visited
    /// once per stored triple, so consumers that accumulate see their sum.
    /// Order is unspecified but stable for an unmodified matrix. The
    /// shared borrow rules out mutation while visiting.
    fn for_each_nonzero<F>(&self, visit: F)
    where
        F: FnMut(usize, usize, Self::Element);

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is zero (not stored) or if the
    /// position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element> {
        self.try_at(row, col).ok().filter(|value| !value.is_zero())
    }
}

/// Extension trait for row/column extraction (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// Get all non-zero elements in a row as `(col, value)`
    ///
    /// Elements are returned in column order.
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)> {
        let mut row = Vec::new();
        self.for_each_nonzero(|r, c, v| {
            if r == row_index {
                row.push((c, v));
            }
        });
        row.sort_unstable_by_key(|&(c, _)| c);
        row
    }

    /// Get all non-zero elements in a column as `(row, value)`
    ///
    /// Elements are returned in row order.
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)> {
        let mut col = Vec::new();
        self.for_each_nonzero(|r, c, v| {
            if c == col_index {
                col.push((r, v));
            }
        });
        col.sort_unstable_by_key(|&(r, _)| r);
        col
    }
}

#[cfg(feature = "alloc")]
impl<M: SparseMatrix + ?Sized> MatrixOperations for M {}

impl<M: Matrix + ?Sized> Matrix for &M {
    type Element = M::Element;

    fn dimensions(&self) -> (usize, usize) {
        (**self).dimensions()
    }

    fn try_at(&self, row: usize, col: usize) -> Result<Self::Element> {
        (**self).try_at(row, col)
    }
}

impl<M: SparseMatrix + ?Sized> SparseMatrix for &M {
    fn nnz(&self) -> usize {
        (**self).nnz()
    }

    fn for_each_nonzero<F>(&self, visit: F)
    where
        F: FnMut(usize, usize, Self::Element),
    {
        (**self).for_each_nonzero(visit)
    }
}
