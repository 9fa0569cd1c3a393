//! Dictionary-of-keys store
//!
//! The mutable system of record. Every other format is a snapshot derived
//! from it on demand.

use alloc::vec::Vec;
use hashbrown::hash_map;
use hashbrown::HashMap;

use super::compressed::{BandLayout, SortStrategy};
use super::{Coo, Csc, Csr, Dense, Snapshot};
use crate::transpose::TransposeMut;
use crate::{Key, Matrix, MatrixElement, MatrixFormat, Result, Shape, SparseMatrix, SpdokError};

/// Sparse matrix stored as a mapping from coordinate to non-zero value
///
/// Invariants, held across every write:
/// - every stored key lies inside `shape`;
/// - no stored value is zero: writing zero removes the entry.
///
/// Out-of-range access is a programmer error. `get`, `set` and `at` panic
/// on it; `try_get` and `try_set` return `IndexOutOfBounds` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Dok<T: MatrixElement> {
    shape: Shape,
    entries: HashMap<Key, T>,
}

impl<T: MatrixElement> Dok<T> {
    /// Create an empty `rows x cols` store
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_shape(Shape::new(rows, cols))
    }

    pub fn with_shape(shape: Shape) -> Self {
        Self {
            shape,
            entries: HashMap::new(),
        }
    }

    /// Create an empty store with room for `capacity` entries
    pub fn with_capacity(rows: usize, cols: usize, capacity: usize) -> Self {
        Self {
            shape: Shape::new(rows, cols),
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Create an empty store from signed dimensions
    ///
    /// # Panics
    ///
    /// Panics if either dimension is negative.
    #[track_caller]
    pub fn from_signed(rows: isize, cols: isize) -> Self {
        match Self::try_from_signed(rows, cols) {
            Ok(dok) => dok,
            Err(err) => panic!("{err}: {rows}x{cols}"),
        }
    }

    pub fn try_from_signed(rows: isize, cols: isize) -> Result<Self> {
        Shape::try_from((rows, cols)).map(Self::with_shape)
    }

    /// Build a store from `(row, col, value)` triples
    ///
    /// Triples are applied as writes in order: a later triple for the same
    /// coordinate replaces an earlier one and zero values remove.
    pub fn try_from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut dok = Self::new(rows, cols);
        for (row, col, value) in triplets {
            dok.try_set(row, col, value)?;
        }
        Ok(dok)
    }

    /// Store every non-zero cell of a dense array
    pub fn from_dense(dense: &Dense<T>) -> Self {
        let mut dok = Self::with_shape(dense.shape());
        for (row, col, value) in dense.iter() {
            dok.entries.insert(Key::new(row, col), value);
        }
        dok
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Dimensions as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.shape.dims()
    }

    /// Number of stored non-zero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Value at `(row, col)`, zero if nothing is stored there
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.shape.assert_in_bounds(row, col);
        self.lookup(row, col)
    }

    pub fn try_get(&self, row: usize, col: usize) -> Result<T> {
        self.shape.check(row, col)?;
        Ok(self.lookup(row, col))
    }

    /// Insert, update or remove the entry at `(row, col)`
    ///
    /// Writing zero removes any stored entry, so a cell that was non-zero
    /// and is later zeroed no longer counts towards `nnz`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.shape.assert_in_bounds(row, col);
        self.store(row, col, value);
    }

    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.shape.check(row, col)?;
        self.store(row, col, value);
        Ok(())
    }

    /// Whether a non-zero value is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&Key::new(row, col))
    }

    /// Remove every entry, keeping the shape
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Lazy iterator over stored `(row, col, value)` entries
    ///
    /// Restartable: every call walks the whole store again.
    pub fn iter(&self) -> NonZeros<'_, T> {
        NonZeros {
            inner: self.entries.iter(),
        }
    }

    /// Writable transpose view over the same entries
    pub fn t_mut(&mut self) -> TransposeMut<'_, T> {
        TransposeMut::new(self)
    }

    /// Independent copy of this store
    pub fn to_dok(&self) -> Dok<T> {
        self.clone()
    }

    /// Coordinate snapshot; triple order follows the map's iteration order
    pub fn to_coo(&self) -> Coo<T> {
        let nnz = self.nnz();
        let mut row_indices = Vec::with_capacity(nnz);
        let mut col_indices = Vec::with_capacity(nnz);
        let mut values = Vec::with_capacity(nnz);
        for (row, col, value) in self.iter() {
            row_indices.push(row);
            col_indices.push(col);
            values.push(value);
        }
        Coo::from_parts_unchecked(self.shape, row_indices, col_indices, values)
    }

    pub fn to_csr(&self) -> Csr<T> {
        self.to_csr_with(SortStrategy::Auto)
    }

    /// Compressed-row snapshot with an explicit band-ordering strategy
    pub fn to_csr_with(&self, strategy: SortStrategy) -> Csr<T> {
        let layout = BandLayout::build(self.shape.rows, self.shape.cols, self.iter(), strategy);
        Csr::from_layout(self.shape, layout)
    }

    pub fn to_csc(&self) -> Csc<T> {
        self.to_csc_with(SortStrategy::Auto)
    }

    /// Compressed-column snapshot with an explicit band-ordering strategy
    pub fn to_csc_with(&self, strategy: SortStrategy) -> Csc<T> {
        let entries = self.iter().map(|(row, col, value)| (col, row, value));
        let layout = BandLayout::build(self.shape.cols, self.shape.rows, entries, strategy);
        Csc::from_layout(self.shape, layout)
    }

    /// Dense row-major snapshot
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn to_dense(&self) -> Dense<T> {
        Dense::from_sparse(self)
    }

    /// Export to the requested format
    pub fn export(&self, format: MatrixFormat) -> Snapshot<T> {
        match format {
            MatrixFormat::Dok => Snapshot::Dok(self.to_dok()),
            MatrixFormat::Coo => Snapshot::Coo(self.to_coo()),
            MatrixFormat::Csr => Snapshot::Csr(self.to_csr()),
            MatrixFormat::Csc => Snapshot::Csc(self.to_csc()),
            MatrixFormat::Dense => Snapshot::Dense(self.to_dense()),
        }
    }

    fn lookup(&self, row: usize, col: usize) -> T {
        self.entries
            .get(&Key::new(row, col))
            .copied()
            .unwrap_or(T::ZERO)
    }

    fn store(&mut self, row: usize, col: usize, value: T) {
        let key = Key::new(row, col);
        if value.is_zero() {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, value);
        }
    }
}

impl<T: MatrixElement> Matrix for Dok<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        self.shape.dims()
    }

    fn try_at(&self, row: usize, col: usize) -> Result<T> {
        self.try_get(row, col)
    }
}

impl<T: MatrixElement> SparseMatrix for Dok<T> {
    fn nnz(&self) -> usize {
        self.entries.len()
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

impl<T: MatrixElement> Extend<(usize, usize, T)> for Dok<T> {
    /// Apply each triple as a `set`
    ///
    /// # Panics
    ///
    /// Panics on the first out-of-range coordinate.
    fn extend<I: IntoIterator<Item = (usize, usize, T)>>(&mut self, iter: I) {
        for (row, col, value) in iter {
            self.set(row, col, value);
        }
    }
}

impl<'a, T: MatrixElement> IntoIterator for &'a Dok<T> {
    type Item = (usize, usize, T);
    type IntoIter = NonZeros<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: MatrixElement> TryFrom<(isize, isize)> for Dok<T> {
    type Error = SpdokError;

    fn try_from((rows, cols): (isize, isize)) -> Result<Self> {
        Self::try_from_signed(rows, cols)
    }
}

/// Iterator over the stored entries of a [`Dok`]
#[derive(Clone)]
pub struct NonZeros<'a, T> {
    inner: hash_map::Iter<'a, Key, T>,
}

impl<T: MatrixElement> Iterator for NonZeros<'_, T> {
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, &value)| (key.row, key.col, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: MatrixElement> ExactSizeIterator for NonZeros<'_, T> {}

impl<T: MatrixElement> core::iter::FusedIterator for NonZeros<'_, T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for NonZeros<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.inner.clone()).finish()
    }
}
