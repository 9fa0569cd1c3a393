//! JSON encoding of snapshots
//!
//! Decoding goes through the same validation as `try_from_parts`, so a
//! malformed document never yields a snapshot that breaks its layout
//! invariants.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode a snapshot (or a [`Shape`](spdok_core::Shape), [`Key`](spdok_core::Key)) as JSON
pub fn to_json<S: Serialize + ?Sized>(snapshot: &S) -> serde_json::Result<String> {
    serde_json::to_string(snapshot)
}

/// Decode a snapshot from JSON, validating its layout
pub fn from_json<S: DeserializeOwned>(json: &str) -> serde_json::Result<S> {
    serde_json::from_str(json)
}
