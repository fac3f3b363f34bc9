//! Canonical binary and hex encoding for composite protocol records.
//!
//! Records such as proof bundles, gas-accounting entries and rollup inputs
//! are declared with [`define_record!`]. Each declaration yields a fixed,
//! big-endian binary layout (see [`record::Record::encode`] and
//! [`record::Record::decode`]), a lowercase hex form for text channels
//! ([`hex`]) and two ingest paths from structured JSON values ([`ingest`]):
//! a validated one for untrusted input and a typed fast path for trusted
//! producers.
//!
//! Every operation is a pure function over its inputs: no I/O, no locks, no
//! global state. Decoding is strict; a buffer must hold exactly one record.

pub mod artifact;
pub mod config;
pub mod error;
pub mod field;
pub mod hex;
pub mod ingest;
pub mod record;
pub mod records;
pub mod ser;

pub use error::{CodecError, CodecResult};
pub use field::{Blob, FixedBytes};
pub use record::Record;
pub use ser::EncodedBuffer;
