use thiserror::Error;

/// Canonical serialization error surfaced while decoding binary records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerError {
    /// A primitive read needed more bytes than the cursor still holds.
    #[error("field `{field}` needs {needed} bytes but only {remaining} remain")]
    Underflow {
        /// Field that was being processed.
        field: &'static str,
        /// Number of bytes requested.
        needed: usize,
        /// Number of bytes left in the cursor.
        remaining: usize,
    },
    /// A fixed-width value was handed a slice of the wrong width.
    #[error("field `{field}` expects {expected} bytes, got {actual}")]
    MalformedField {
        /// Field that was being processed.
        field: &'static str,
        /// Declared width of the field.
        expected: usize,
        /// Width of the bytes supplied.
        actual: usize,
    },
    /// The buffer ended before every declared field of a record was read.
    #[error("record `{record}` truncated while reading field `{field}`")]
    TruncatedRecord {
        /// Record whose decode was interrupted.
        record: &'static str,
        /// Field that could not be completed.
        field: &'static str,
    },
    /// Additional bytes remained after consuming the last declared field.
    #[error("record `{record}` left {remaining} trailing bytes after offset {consumed}")]
    TrailingBytes {
        /// Record that was decoded.
        record: &'static str,
        /// Position reached by the decoder.
        consumed: usize,
        /// Number of remaining bytes.
        remaining: usize,
    },
    /// Encountered a byte outside the allowed set (boolean or option tag).
    #[error("field `{field}` holds invalid tag byte {value:#04x}")]
    InvalidValue {
        /// Field that was being processed.
        field: &'static str,
        /// Offending byte.
        value: u8,
    },
    /// A variable-length payload does not fit its `u32` length prefix.
    #[error("payload of {len} bytes exceeds the u32 length prefix")]
    LengthOverflow {
        /// Length of the rejected payload.
        len: usize,
    },
}

impl SerError {
    /// Creates an underflow error helper.
    pub fn underflow(field: &'static str, needed: usize, remaining: usize) -> Self {
        SerError::Underflow {
            field,
            needed,
            remaining,
        }
    }

    /// Creates a malformed-field error helper.
    pub fn malformed(field: &'static str, expected: usize, actual: usize) -> Self {
        SerError::MalformedField {
            field,
            expected,
            actual,
        }
    }

    /// Creates a trailing-bytes error helper.
    pub fn trailing_bytes(record: &'static str, consumed: usize, remaining: usize) -> Self {
        SerError::TrailingBytes {
            record,
            consumed,
            remaining,
        }
    }

    /// Creates an invalid-value error helper.
    pub fn invalid_value(field: &'static str, value: u8) -> Self {
        SerError::InvalidValue { field, value }
    }

    /// Lifts a primitive underflow into a record-level truncation.
    ///
    /// Every other error is returned unchanged.
    pub fn into_truncated(self, record: &'static str) -> Self {
        match self {
            SerError::Underflow { field, .. } => SerError::TruncatedRecord { record, field },
            other => other,
        }
    }
}

/// Convenient alias for serialization results.
pub type SerResult<T> = core::result::Result<T, SerError>;
