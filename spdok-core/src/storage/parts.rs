//! Raw serialized forms of the snapshots
//!
//! Deserialization lands here first and reaches the snapshot types only
//! through their validating constructors.

use alloc::vec::Vec;

use super::{Coo, Csc, Csr, Dense, Dia};
use crate::{MatrixElement, Shape, SpdokError};

#[derive(serde::Deserialize)]
pub(crate) struct CooParts<T> {
    shape: Shape,
    row_indices: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: MatrixElement> TryFrom<CooParts<T>> for Coo<T> {
    type Error = SpdokError;

    fn try_from(parts: CooParts<T>) -> Result<Self, Self::Error> {
        Coo::try_from_parts(
            parts.shape.rows,
            parts.shape.cols,
            parts.row_indices,
            parts.col_indices,
            parts.values,
        )
    }
}

/// Shared by CSR and CSC; which axis the bands follow is decided by the
/// target type
#[derive(serde::Deserialize)]
pub(crate) struct CompressedParts<T> {
    shape: Shape,
    offsets: Vec<usize>,
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: MatrixElement> TryFrom<CompressedParts<T>> for Csr<T> {
    type Error = SpdokError;

    fn try_from(parts: CompressedParts<T>) -> Result<Self, Self::Error> {
        Csr::try_from_parts(
            parts.shape.rows,
            parts.shape.cols,
            parts.offsets,
            parts.indices,
            parts.values,
        )
    }
}

impl<T: MatrixElement> TryFrom<CompressedParts<T>> for Csc<T> {
    type Error = SpdokError;

    fn try_from(parts: CompressedParts<T>) -> Result<Self, Self::Error> {
        Csc::try_from_parts(
            parts.shape.rows,
            parts.shape.cols,
            parts.offsets,
            parts.indices,
            parts.values,
        )
    }
}

#[derive(serde::Deserialize)]
pub(crate) struct DenseParts<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: MatrixElement> TryFrom<DenseParts<T>> for Dense<T> {
    type Error = SpdokError;

    fn try_from(parts: DenseParts<T>) -> Result<Self, Self::Error> {
        Dense::try_from_row_major(parts.shape.rows, parts.shape.cols, parts.data)
    }
}

#[derive(serde::Deserialize)]
pub(crate) struct DiaParts<T> {
    shape: Shape,
    diagonal: Vec<T>,
}

impl<T: MatrixElement> TryFrom<DiaParts<T>> for Dia<T> {
    type Error = SpdokError;

    fn try_from(parts: DiaParts<T>) -> Result<Self, Self::Error> {
        Dia::try_from_diagonal(parts.shape.rows, parts.shape.cols, parts.diagonal)
    }
}
