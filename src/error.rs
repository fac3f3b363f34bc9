//! Umbrella error for callers that combine several codec stages.

use thiserror::Error;

use crate::config::ConfigError;
use crate::hex::InvalidHex;
use crate::ingest::{CoercionError, SchemaValidationError};
use crate::ser::SerError;

/// Any failure the codec layer can report.
///
/// Each stage keeps its own error type; this enum only wraps them so that a
/// caller chaining hex decoding, binary decoding and ingest can use `?`
/// throughout while still matching on the original kind.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Binary framing or field failure.
    #[error(transparent)]
    Ser(#[from] SerError),
    /// Malformed hex text.
    #[error(transparent)]
    Hex(#[from] InvalidHex),
    /// Trusted ingest could not coerce the value.
    #[error(transparent)]
    Coercion(#[from] CoercionError),
    /// Validated ingest rejected the value.
    #[error(transparent)]
    Schema(#[from] SchemaValidationError),
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias over [`CodecError`].
pub type CodecResult<T> = core::result::Result<T, CodecError>;
