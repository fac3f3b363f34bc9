use core::fmt;

use thiserror::Error;

use crate::hex::InvalidHex;

/// What went wrong with one field of a structured value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    /// A required key is absent.
    #[error("missing required field")]
    Missing,
    /// A required key is present but `null`.
    #[error("null is not allowed for a required field")]
    UnexpectedNull,
    /// The JSON type does not match the declared field type.
    #[error("expected {expected}, found {found}")]
    WrongType {
        /// Declared type.
        expected: String,
        /// JSON type encountered.
        found: &'static str,
    },
    /// Integer does not fit the declared width.
    #[error("value {value} exceeds maximum {max}")]
    OutOfRange {
        /// Value supplied.
        value: u64,
        /// Largest value the width allows.
        max: u64,
    },
    /// String is not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(InvalidHex),
    /// Fixed byte array of the wrong length.
    #[error("expected {expected} bytes, got {actual}")]
    WrongLength {
        /// Declared length.
        expected: usize,
        /// Decoded length.
        actual: usize,
    },
    /// Variable-length payload larger than the configured limit.
    #[error("payload of {actual} bytes exceeds limit of {max}")]
    TooLong {
        /// Configured limit.
        max: usize,
        /// Decoded length.
        actual: usize,
    },
    /// Key not declared by the record.
    #[error("unknown field")]
    UnknownField,
    /// A record invariant failed.
    #[error("{0}")]
    Constraint(String),
}

/// A single schema violation located by its dotted field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path from the record root; empty for the root itself.
    pub path: String,
    /// Nature of the violation.
    pub kind: ViolationKind,
}

impl Violation {
    /// Creates a violation at `path`.
    pub fn new(path: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Creates a record-invariant violation.
    pub fn constraint(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(path, ViolationKind::Constraint(message.into()))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "<root>: {}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

/// Appends `name` to a dotted path.
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}.{name}")
    }
}
