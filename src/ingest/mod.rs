//! Construction of records from structured (JSON) values.
//!
//! There are two entry points with different trust preconditions, and no
//! flag that switches between them:
//!
//! * [`ingest_validated`] checks every field against the record schema and
//!   reports all violations. Use it for anything that crossed a trust
//!   boundary.
//! * [`ingest_trusted`] deserializes straight into the record's Rust type.
//!   Use it only for values emitted by a co-located, trusted producer.
//!
//! Structured form: one JSON object per record keyed by field name, integers
//! as numbers, byte fields as hex strings, absent optionals as `null` or a
//! missing key.

mod trusted;
mod validated;
mod violation;

pub use trusted::{ingest_trusted, ingest_trusted_str, CoercionError};
pub use validated::{ingest_validated, ingest_validated_with, SchemaValidationError};
pub use violation::{join_path, Violation, ViolationKind};
