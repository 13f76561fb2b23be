//! Record trait for consistent interfaces between the concrete record kinds
//!
//! This trait provides a common interface for record operations, allowing
//! generic code (the manager, the storage round-trip) to work with both
//! students and employees.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Result, RosterError};

/// A flat field-name → value mapping, the durable shape of every record.
pub type RecordMap = Map<String, Value>;

/// Trait for record operations shared between Student and Employee
pub trait Record: Sized {
    /// Kind name used in error messages and lookups (e.g. "student")
    const KIND: &'static str;

    /// Explicit set of fields permitted to change after construction
    type Patch;

    /// The record's unique identifier (non-empty, stable for its lifetime)
    fn id(&self) -> &str;

    /// Serialize to a flat mapping. Always includes `id`. Pure.
    fn to_record(&self) -> RecordMap;

    /// Inverse of `to_record`
    ///
    /// # Errors
    /// Returns `MalformedRecord` when required keys are absent, of the
    /// wrong type, or fail field validation.
    fn from_record(record: &RecordMap) -> Result<Self>;

    /// Apply a patch, producing a new record with the same `id`
    ///
    /// # Errors
    /// Returns `Validation` when a patched field fails validation; the
    /// original record is untouched in that case.
    fn apply(&self, patch: Self::Patch) -> Result<Self>;
}

/// Decode a record mapping into a concrete type, surfacing serde failures
/// as `MalformedRecord`
pub(crate) fn decode<T: DeserializeOwned>(kind: &'static str, record: &RecordMap) -> Result<T> {
    serde_json::from_value(Value::Object(record.clone())).map_err(|e| {
        RosterError::MalformedRecord {
            kind,
            reason: e.to_string(),
        }
    })
}
