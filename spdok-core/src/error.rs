//! Error types for spdok operations
//!
//! Two kinds are programmer errors (`InvalidDimensions`, `IndexOutOfBounds`):
//! the panicking entry points (`Dok::from_signed`, `get`, `set`, `at`) abort with
//! them, and the `try_*` twins hand them back. The layout kinds only come
//! out of `try_from_parts` when arrays are supplied from outside.

/// Errors that can occur during spdok operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpdokError {
    /// Negative dimensions, or `rows * cols` overflowing `usize`
    InvalidDimensions,
    /// Coordinate outside `[0, rows) x [0, cols)`
    IndexOutOfBounds,
    /// Parallel arrays of different lengths, or a dense buffer whose
    /// length is not `rows * cols`
    LengthMismatch,
    /// Offset array of the wrong length, not starting at zero, decreasing,
    /// or not ending at the number of stored entries
    InvalidOffsets,
    /// Minor indices inside a band not strictly ascending
    UnsortedIndices,
}

/// Broad classification of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Misuse of the API: never expected in a correct program
    Usage,
    /// Externally supplied arrays do not describe a valid layout
    Layout,
}

impl SpdokError {
    /// Classify this error
    pub const fn category(self) -> ErrorCategory {
        match self {
            SpdokError::InvalidDimensions | SpdokError::IndexOutOfBounds => ErrorCategory::Usage,
            SpdokError::LengthMismatch
            | SpdokError::InvalidOffsets
            | SpdokError::UnsortedIndices => ErrorCategory::Layout,
        }
    }
}

impl core::fmt::Display for SpdokError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SpdokError::InvalidDimensions => "Invalid matrix dimensions",
            SpdokError::IndexOutOfBounds => "Index out of range",
            SpdokError::LengthMismatch => "Array lengths do not match",
            SpdokError::InvalidOffsets => "Invalid band offsets",
            SpdokError::UnsortedIndices => "Band indices not strictly ascending",
        };
        write!(f, "{msg}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpdokError {}

/// Result type for spdok operations
pub type Result<T> = core::result::Result<T, SpdokError>;
