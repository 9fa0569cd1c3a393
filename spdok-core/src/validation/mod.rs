//! Validation utilities
//!
//! Pure checks on coordinates, dimensions and array layouts. No allocation.

pub mod bounds;
pub mod layout;

pub use bounds::{check_dense_len, check_index, check_signed_dimensions};
pub use layout::{validate_compressed_parts, validate_coo_parts};
