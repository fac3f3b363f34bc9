//! Canonical serialization helpers for protocol records.
//!
//! Integers are written big-endian at their natural width, booleans as a
//! single `0`/`1` byte, optional values behind a one-byte tag and
//! variable-length payloads behind a `u32` length prefix. Nothing in this
//! layer emits a magic number, version byte or checksum.

mod buffer;
mod bytes;
mod collections;
mod cursor;
mod error;
mod ints;

pub use buffer::EncodedBuffer;
pub use bytes::{ensure_consumed, read_prefixed_bytes, write_bytes, write_prefixed_bytes};
pub use collections::{read_option, write_option};
pub use cursor::{ByteReader, ByteWriter};
pub use error::{SerError, SerResult};
pub(crate) use ints::decode_bool;
pub use ints::{
    ensure_u32, read_bool, read_u16, read_u32, read_u64, read_u8, write_bool, write_u16,
    write_u32, write_u64, write_u8,
};
