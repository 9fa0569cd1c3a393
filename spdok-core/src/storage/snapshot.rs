//! Format-erased export

use super::{Coo, Csc, Csr, Dense, Dok};
use crate::{Matrix, MatrixElement, MatrixFormat, Result, SparseMatrix};

/// A matrix in any of the supported formats
///
/// Returned by [`Dok::export`]. Implements the read contract, so callers
/// holding a `Snapshot` do not care which layout sits underneath.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot<T: MatrixElement> {
    Dok(Dok<T>),
    Coo(Coo<T>),
    Csr(Csr<T>),
    Csc(Csc<T>),
    Dense(Dense<T>),
}

macro_rules! dispatch {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            Snapshot::Dok($m) => $body,
            Snapshot::Coo($m) => $body,
            Snapshot::Csr($m) => $body,
            Snapshot::Csc($m) => $body,
            Snapshot::Dense($m) => $body,
        }
    };
}

impl<T: MatrixElement> Snapshot<T> {
    pub fn format(&self) -> MatrixFormat {
        match self {
            Snapshot::Dok(_) => MatrixFormat::Dok,
            Snapshot::Coo(_) => MatrixFormat::Coo,
            Snapshot::Csr(_) => MatrixFormat::Csr,
            Snapshot::Csc(_) => MatrixFormat::Csc,
            Snapshot::Dense(_) => MatrixFormat::Dense,
        }
    }

    /// Back to a dictionary-of-keys store
    pub fn into_dok(self) -> Dok<T> {
        match self {
            Snapshot::Dok(m) => m,
            other => dispatch!(&other, m => m.to_dok()),
        }
    }
}

impl<T: MatrixElement> Matrix for Snapshot<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        dispatch!(self, m => Matrix::dimensions(m))
    }

    fn try_at(&self, row: usize, col: usize) -> Result<T> {
        dispatch!(self, m => m.try_at(row, col))
    }
}

impl<T: MatrixElement> SparseMatrix for Snapshot<T> {
    fn nnz(&self) -> usize {
        dispatch!(self, m => SparseMatrix::nnz(m))
    }

    fn for_each_nonzero<F>(&self, visit: F)
    where
        F: FnMut(usize, usize, T),
    {
        dispatch!(self, m => m.for_each_nonzero(visit))
    }
}

impl<T: MatrixElement> From<Dok<T>> for Snapshot<T> {
    fn from(m: Dok<T>) -> Self {
        Snapshot::Dok(m)
    }
}

impl<T: MatrixElement> From<Coo<T>> for Snapshot<T> {
    fn from(m: Coo<T>) -> Self {
        Snapshot::Coo(m)
    }
}

impl<T: MatrixElement> From<Csr<T>> for Snapshot<T> {
    fn from(m: Csr<T>) -> Self {
        Snapshot::Csr(m)
    }
}

impl<T: MatrixElement> From<Csc<T>> for Snapshot<T> {
    fn from(m: Csc<T>) -> Self {
        Snapshot::Csc(m)
    }
}

impl<T: MatrixElement> From<Dense<T>> for Snapshot<T> {
    fn from(m: Dense<T>) -> Self {
        Snapshot::Dense(m)
    }
}
