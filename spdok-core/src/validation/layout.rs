//! Structural validation for externally supplied sparse layouts
//!
//! Snapshots built by this crate are correct by construction. These checks
//! guard the `try_from_parts` constructors and deserialization.

use crate::SpdokError;

/// Validate coordinate-format arrays against a `rows x cols` shape
pub fn validate_coo_parts(
    rows: usize,
    cols: usize,
    row_indices: &[usize],
    col_indices: &[usize],
    values_len: usize,
) -> Result<(), SpdokError> {
    if row_indices.len() != values_len || col_indices.len() != values_len {
        return Err(SpdokError::LengthMismatch);
    }
    if row_indices.iter().any(|&r| r >= rows) || col_indices.iter().any(|&c| c >= cols) {
        return Err(SpdokError::IndexOutOfBounds);
    }
    Ok(())
}

/// Validate a compressed (CSR or CSC) layout
///
/// `major_len` is the number of bands (rows for CSR, columns for CSC) and
/// `minor_len` the extent of the indices stored inside each band.
pub fn validate_compressed_parts(
    major_len: usize,
    minor_len: usize,
    offsets: &[usize],
    indices: &[usize],
    values_len: usize,
) -> Result<(), SpdokError> {
    if indices.len() != values_len {
        return Err(SpdokError::LengthMismatch);
    }
    // `major_len` may come from untrusted input, so `+ 1` must not overflow
    if major_len.checked_add(1) != Some(offsets.len()) {
        return Err(SpdokError::InvalidOffsets);
    }
    if offsets.first().copied() != Some(0) || offsets.last().copied() != Some(values_len) {
        return Err(SpdokError::InvalidOffsets);
    }
    if offsets.windows(2).any(|w| w[0] > w[1]) {
        return Err(SpdokError::InvalidOffsets);
    }

    for band in offsets.windows(2) {
        let minor = &indices[band[0]..band[1]];
        if minor.iter().any(|&i| i >= minor_len) {
            return Err(SpdokError::IndexOutOfBounds);
        }
        if minor.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SpdokError::UnsortedIndices);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_coo_parts() {
        assert_eq!(validate_coo_parts(2, 3, &[0, 1], &[2, 0], 2), Ok(()));
        assert_eq!(validate_coo_parts(0, 0, &[], &[], 0), Ok(()));
        assert_eq!(
            validate_coo_parts(2, 3, &[0, 1], &[2], 2),
            Err(SpdokError::LengthMismatch)
        );
        assert_eq!(
            validate_coo_parts(2, 3, &[0, 2], &[2, 0], 2),
            Err(SpdokError::IndexOutOfBounds)
        );
        assert_eq!(
            validate_coo_parts(2, 3, &[0, 1], &[3, 0], 2),
            Err(SpdokError::IndexOutOfBounds)
        );
    }

    #[test]
    fn test_validate_compressed_parts() {
        // [[1, 0, 2], [0, 3, 0]]
        assert_eq!(
            validate_compressed_parts(2, 3, &[0, 2, 3], &[0, 2, 1], 3),
            Ok(())
        );

        // Empty matrix, all-zero offsets
        assert_eq!(validate_compressed_parts(4, 4, &[0; 5], &[], 0), Ok(()));
        assert_eq!(validate_compressed_parts(0, 0, &[0], &[], 0), Ok(()));
    }

    #[test]
    fn test_validate_compressed_offsets() {
        assert_eq!(
            validate_compressed_parts(2, 3, &[0, 2], &[0, 2], 2),
            Err(SpdokError::InvalidOffsets)
        );
        assert_eq!(
            validate_compressed_parts(1, 3, &[1, 1], &[0], 1),
            Err(SpdokError::InvalidOffsets)
        );
        assert_eq!(
            validate_compressed_parts(1, 3, &[0, 1], &[0, 1], 2),
            Err(SpdokError::InvalidOffsets)
        );
        assert_eq!(
            validate_compressed_parts(2, 3, &[0, 2, 1], &[0], 1),
            Err(SpdokError::InvalidOffsets)
        );
        assert_eq!(
            validate_compressed_parts(1, 3, &[0, 1], &[0], 2),
            Err(SpdokError::LengthMismatch)
        );
    }

    #[test]
    fn test_validate_compressed_huge_major_len() {
        assert_eq!(
            validate_compressed_parts(usize::MAX, 3, &[0], &[], 0),
            Err(SpdokError::InvalidOffsets)
        );
        assert_eq!(
            validate_compressed_parts(usize::MAX, 3, &[0, 0], &[], 0),
            Err(SpdokError::InvalidOffsets)
        );
    }

    #[test]
    fn test_validate_compressed_band_order() {
        assert_eq!(
            validate_compressed_parts(1, 3, &[0, 2], &[1, 1], 2),
            Err(SpdokError::UnsortedIndices)
        );
        assert_eq!(
            validate_compressed_parts(1, 3, &[0, 2], &[2, 0], 2),
            Err(SpdokError::UnsortedIndices)
        );
        assert_eq!(
            validate_compressed_parts(1, 3, &[0, 1], &[3], 1),
            Err(SpdokError::IndexOutOfBounds)
        );
    }
}
