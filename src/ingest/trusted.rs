use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::record::Record;

/// Trusted ingest failed to coerce a value into the record's shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot coerce trusted input into `{record}`: {reason}")]
pub struct CoercionError {
    /// Record type requested.
    pub record: &'static str,
    /// Deserializer diagnostic, naming the offending key where known.
    pub reason: String,
}

impl CoercionError {
    fn new(record: &'static str, err: serde_json::Error) -> Self {
        let reason = err.to_string();
        debug!(record, %reason, "trusted ingest coercion failed");
        Self { record, reason }
    }
}

/// Builds a record from a structured value emitted by a trusted producer.
///
/// # Trust precondition
///
/// Only pass values produced by a co-located component that this process
/// already trusts, such as a native proving backend. Never use this function
/// for network payloads, user-supplied JSON or files that other tooling may
/// have modified; use [`ingest_validated`](super::ingest_validated) there.
///
/// The value's shape is still checked against the record's Rust type: a
/// missing required key, a wrong JSON type or unparsable hex fails with
/// [`CoercionError`]. Range checks, unknown-key rejection and record
/// invariants are skipped.
pub fn ingest_trusted<R: Record>(value: Value) -> Result<R, CoercionError> {
    serde_json::from_value(value).map_err(|err| CoercionError::new(R::schema().name, err))
}

/// Like [`ingest_trusted`], for JSON text received from a trusted producer.
///
/// The same trust precondition applies.
pub fn ingest_trusted_str<R: Record>(json: &str) -> Result<R, CoercionError> {
    serde_json::from_str(json).map_err(|err| CoercionError::new(R::schema().name, err))
}
