//! Abstract interfaces shared by every storage format
//!
//! Element constraints and the read contract consumers program against.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
pub use matrix::{Matrix, SparseMatrix};
