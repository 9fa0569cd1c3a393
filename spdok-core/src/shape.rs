//! Matrix shape and coordinate validation

use crate::validation::bounds::{check_dense_len, check_index, check_signed_dimensions};
use crate::{Result, SpdokError};

/// Number of rows and columns of a matrix
///
/// Fixed for the lifetime of a store. Negative dimensions cannot be
/// expressed here; the signed entry point is `Shape::try_from((isize, isize))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Dimensions as `(rows, cols)`
    pub const fn dims(self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Shape with rows and columns swapped
    pub const fn transposed(self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// True when either dimension is zero
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Check that `(row, col)` addresses a cell of this shape
    pub const fn check(self, row: usize, col: usize) -> Result<()> {
        check_index(row, col, self.rows, self.cols)
    }

    /// Number of cells, `rows * cols`, checked for overflow
    pub const fn dense_len(self) -> Result<usize> {
        check_dense_len(self.rows, self.cols)
    }

    /// Abort on an out-of-range coordinate
    ///
    /// Used by the panicking accessors; the message names the coordinate
    /// and the shape.
    #[track_caller]
    pub fn assert_in_bounds(self, row: usize, col: usize) {
        if let Err(err) = self.check(row, col) {
            panic!(
                "{err}: ({row}, {col}) in {}x{} matrix",
                self.rows, self.cols
            );
        }
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

impl TryFrom<(isize, isize)> for Shape {
    type Error = SpdokError;

    fn try_from((rows, cols): (isize, isize)) -> Result<Self> {
        let (rows, cols) = check_signed_dimensions(rows, cols)?;
        Ok(Self { rows, cols })
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
