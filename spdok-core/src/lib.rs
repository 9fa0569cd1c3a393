#![no_std]

//! spdok core - sparse matrix storage formats and read traits
//!
//! This crate holds the data structures: a mutable dictionary-of-keys
//! store plus owned COO, CSR, CSC and dense snapshots derived from it,
//! a main-diagonal format, logical transpose views, and the traits
//! consumers read matrices through. It performs no I/O.
//!
//! ```
//! use spdok_core::{Dok, Matrix, SparseMatrix};
//!
//! let mut m = Dok::new(3, 4);
//! m.set(0, 3, 1.5);
//! m.set(2, 1, -2.0);
//! m.set(0, 3, 0.0); // writing zero removes the entry
//!
//! let csr = m.to_csr();
//! assert_eq!(csr.nnz(), 1);
//! assert_eq!(csr.at(2, 1), -2.0);
//! assert_eq!(m.t().at(1, 2), -2.0);
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod compare;
pub mod error;
pub mod format;
pub mod key;
pub mod shape;
#[cfg(feature = "alloc")]
pub mod storage;
pub mod traits;
pub mod transpose;
pub mod validation;

pub use compare::{equal, equal_approx};
pub use error::{ErrorCategory, Result, SpdokError};
pub use format::MatrixFormat;
pub use key::Key;
pub use shape::Shape;
#[cfg(feature = "alloc")]
pub use storage::{
    BandEntries, BandLayout, Coo, Csc, Csr, Dense, Dia, Dok, NonZeros, Snapshot, SortStrategy,
};
#[cfg(feature = "alloc")]
pub use traits::MatrixOperations;
pub use traits::{Matrix, MatrixElement, SparseMatrix};
#[cfg(feature = "alloc")]
pub use transpose::TransposeMut;
pub use transpose::Transpose;

/// Everything needed to build, mutate and read matrices
pub mod prelude {
    #[cfg(feature = "alloc")]
    pub use crate::storage::{Coo, Csc, Csr, Dense, Dia, Dok, Snapshot, SortStrategy};
    #[cfg(feature = "alloc")]
    pub use crate::traits::MatrixOperations;
    pub use crate::traits::{Matrix, MatrixElement, SparseMatrix};
    pub use crate::{MatrixFormat, Shape, SpdokError};
}
