//! Export format tags

/// Formats a [`Dok`](crate::Dok) can be exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixFormat {
    /// Dictionary of keys - mapping from coordinate to value
    Dok,
    /// Coordinate (COO) format - row, col, value triplets
    Coo,
    /// Compressed Sparse Row (CSR) format
    Csr,
    /// Compressed Sparse Column (CSC) format
    Csc,
    /// Row-major dense array
    Dense,
}

impl MatrixFormat {
    /// Every format a store can be exported to
    pub const ALL: [MatrixFormat; 5] = [
        MatrixFormat::Dok,
        MatrixFormat::Coo,
        MatrixFormat::Csr,
        MatrixFormat::Csc,
        MatrixFormat::Dense,
    ];

    /// Whether the format stores only non-zero entries
    pub const fn is_sparse(self) -> bool {
        !matches!(self, MatrixFormat::Dense)
    }
}

impl core::fmt::Display for MatrixFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixFormat::Dok => write!(f, "DOK"),
            MatrixFormat::Coo => write!(f, "COO"),
            MatrixFormat::Csr => write!(f, "CSR"),
            MatrixFormat::Csc => write!(f, "CSC"),
            MatrixFormat::Dense => write!(f, "Dense"),
        }
    }
}
