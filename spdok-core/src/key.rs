//! Coordinate keys for dictionary-of-keys storage

/// An immutable `(row, col)` coordinate used as a mapping key
///
/// Two keys are equal iff both components are equal. Keys order
/// row-major: first by row, then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
    pub row: usize,
    pub col: usize,
}

impl Key {
    /// Create a key for the given coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The same position seen through a transpose
    pub const fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }
}

impl From<(usize, usize)> for Key {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Key> for (usize, usize) {
    fn from(key: Key) -> Self {
        (key.row, key.col)
    }
}
