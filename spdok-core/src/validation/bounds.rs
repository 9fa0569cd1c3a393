//! Coordinate and dimension bounds validation
//!
//! Pure arithmetic checks with no allocation, shared by every storage
//! format before it touches its data.

use crate::SpdokError;

/// Validate that `(row, col)` lies inside a `rows x cols` matrix
pub const fn check_index(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Result<(), SpdokError> {
    if row >= rows || col >= cols {
        return Err(SpdokError::IndexOutOfBounds);
    }
    Ok(())
}

/// Number of cells in a `rows x cols` matrix with overflow protection
pub const fn check_dense_len(rows: usize, cols: usize) -> Result<usize, SpdokError> {
    match rows.checked_mul(cols) {
        Some(len) => Ok(len),
        None => Err(SpdokError::InvalidDimensions),
    }
}

/// Convert signed dimensions, rejecting negative values
pub const fn check_signed_dimensions(
    rows: isize,
    cols: isize,
) -> Result<(usize, usize), SpdokError> {
    if rows < 0 || cols < 0 {
        return Err(SpdokError::InvalidDimensions);
    }
    Ok((rows as usize, cols as usize))
}
