//! Storage formats
//!
//! [`Dok`] is the mutable store. [`Coo`], [`Csr`], [`Csc`] and [`Dense`]
//! are owned snapshots derived from it; none of them shares memory with
//! the store they came from. [`Dia`] holds just a main diagonal and
//! converts into the same snapshots.

mod compressed;
mod coo;
mod csc;
mod csr;
mod dense;
mod dia;
mod dok;
#[cfg(feature = "serde")]
mod parts;
mod snapshot;

pub use compressed::{
    BandEntries, BandLayout, SortStrategy, COUNTING_MINOR_FACTOR, COUNTING_SCRATCH_LIMIT,
};
pub use coo::Coo;
pub use csc::Csc;
pub use csr::Csr;
pub use dense::Dense;
pub use dia::Dia;
pub use dok::{Dok, NonZeros};
pub use snapshot::Snapshot;
