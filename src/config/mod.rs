//! Limits consulted by validated ingest.
//!
//! The binary codec has no tunables: its layout is fixed and its reads are
//! bounded by the input. Only the validated ingest path accepts a
//! configuration, loaded from TOML:
//!
//! ```toml
//! max_blob_bytes = 65536
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on a single variable-length payload accepted from untrusted input.
pub const DEFAULT_MAX_BLOB_BYTES: usize = 1 << 20;

/// Configuration for [`ingest_validated_with`](crate::ingest::ingest_validated_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IngestConfig {
    /// Largest decoded blob accepted, in bytes.
    pub max_blob_bytes: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_blob_bytes: DEFAULT_MAX_BLOB_BYTES,
        }
    }
}

impl IngestConfig {
    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Configuration could not be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed TOML or unknown key.
    #[error("invalid ingest configuration: {0}")]
    Toml(#[from] toml::de::Error),
}
