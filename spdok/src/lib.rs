//! spdok - sparse matrix storage with format conversion
//!
//! A mutable dictionary-of-keys store and the snapshots derived from it.
//! Writes go to the store; reads and exports come from any format through
//! one set of traits.
//!
//! ## Architecture
//!
//! - **spdok-core**: `no_std` data structures, read traits, validation
//! - **spdok**: std extras on top: parallel conversion, JSON, tuning config
//!
//! ## Quick Start
//!
//! ```rust
//! use spdok::{ConvertConfig, Dok, Matrix, MatrixFormat, ParallelConvert, SparseMatrix};
//!
//! let mut m = Dok::new(5, 4);
//! m.set(0, 3, 1.0);
//! m.set(1, 1, 2.0);
//! m.set(4, 2, 4.0);
//!
//! let csr = m.to_csr();
//! assert_eq!(csr.offsets(), &[0, 1, 2, 2, 2, 3]);
//!
//! let csc = m.par_to_csc(&ConvertConfig::default());
//! assert_eq!(csc.at(4, 2), 4.0);
//!
//! let snapshot = m.export(MatrixFormat::Dense);
//! assert_eq!(snapshot.nnz(), 3);
//! ```
//!
//! ## Features
//!
//! - **parallel** (default): rayon-backed [`ParallelConvert`]
//! - **serde** (default): serde derives on snapshots and [`to_json`] / [`from_json`]

// Re-export core abstractions and storage formats
pub use spdok_core::{
    // Core traits
    Matrix, MatrixElement, MatrixOperations, SparseMatrix,
    // Formats
    BandEntries, BandLayout, Coo, Csc, Csr, Dense, Dia, Dok, NonZeros, Snapshot, SortStrategy,
    // Views and helpers
    equal, equal_approx, Key, Shape, Transpose, TransposeMut,
    // Tags
    MatrixFormat,
    // Error handling
    ErrorCategory, Result, SpdokError,
};
pub use spdok_core::{prelude, validation};

pub mod config;
#[cfg(feature = "serde")]
pub mod json;
#[cfg(feature = "parallel")]
pub mod parallel;

pub use config::ConvertConfig;
#[cfg(feature = "serde")]
pub use json::{from_json, to_json};
#[cfg(feature = "parallel")]
pub use parallel::ParallelConvert;
