//! Field-level codecs.
//!
//! Every type that can appear as a record field implements [`Field`]. Fixed
//! width primitives additionally implement [`FixedWidth`], which decodes from
//! a slice of exactly the declared width.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hex;
use crate::ingest::Violation;
use crate::record::RecordSchema;
use crate::ser::{self, ByteReader, ByteWriter, SerError, SerResult};

/// Semantic type of a declared field.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    /// Big-endian unsigned integer of `width` bytes.
    Uint {
        /// Width in bytes.
        width: usize,
    },
    /// Single-byte boolean.
    Bool,
    /// Raw byte array of a fixed length.
    FixedBytes {
        /// Length in bytes.
        len: usize,
    },
    /// `u32` length prefix followed by the payload.
    Blob,
    /// Nested record encoded inline.
    Record(fn() -> &'static RecordSchema),
}

impl FieldType {
    /// Short human-readable name used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            FieldType::Uint { width } => format!("u{}", width * 8),
            FieldType::Bool => "bool".to_owned(),
            FieldType::FixedBytes { len } => format!("bytes{len}"),
            FieldType::Blob => "blob".to_owned(),
            FieldType::Record(schema) => schema().name.to_owned(),
        }
    }
}

/// Primitive with a canonical fixed-width encoding.
pub trait FixedWidth: Sized {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Appends the canonical encoding.
    fn put(&self, out: &mut ByteWriter);

    /// Decodes from a slice that must be exactly [`Self::WIDTH`] bytes long.
    fn from_exact(bytes: &[u8], field: &'static str) -> SerResult<Self>;
}

/// A value that can be stored in a record field.
pub trait Field: Sized {
    /// Declared semantic type.
    const TYPE: FieldType;
    /// Whether the field may be absent.
    const NULLABLE: bool = false;

    /// Writes the value at the writer's current position.
    fn write(&self, out: &mut ByteWriter);

    /// Reads the value from the cursor's current position.
    fn read(reader: &mut ByteReader<'_>, field: &'static str) -> SerResult<Self>;

    /// Runs value-level invariants, appending failures under `path`.
    fn check(&self, path: &str, violations: &mut Vec<Violation>) {
        let _ = (path, violations);
    }
}

macro_rules! uint_field {
    ($($ty:ty => $write:path, $read:path;)+) => {$(
        impl FixedWidth for $ty {
            const WIDTH: usize = core::mem::size_of::<$ty>();

            fn put(&self, out: &mut ByteWriter) {
                $write(out, *self);
            }

            fn from_exact(bytes: &[u8], field: &'static str) -> SerResult<Self> {
                let raw = <[u8; core::mem::size_of::<$ty>()]>::try_from(bytes)
                    .map_err(|_| SerError::malformed(field, Self::WIDTH, bytes.len()))?;
                Ok(<$ty>::from_be_bytes(raw))
            }
        }

        impl Field for $ty {
            const TYPE: FieldType = FieldType::Uint { width: <$ty as FixedWidth>::WIDTH };

            fn write(&self, out: &mut ByteWriter) {
                self.put(out);
            }

            fn read(reader: &mut ByteReader<'_>, field: &'static str) -> SerResult<Self> {
                $read(reader, field)
            }
        }
    )+};
}

uint_field! {
    u8 => ser::write_u8, ser::read_u8;
    u16 => ser::write_u16, ser::read_u16;
    u32 => ser::write_u32, ser::read_u32;
    u64 => ser::write_u64, ser::read_u64;
}

impl FixedWidth for bool {
    const WIDTH: usize = 1;

    fn put(&self, out: &mut ByteWriter) {
        ser::write_bool(out, *self);
    }

    fn from_exact(bytes: &[u8], field: &'static str) -> SerResult<Self> {
        match bytes {
            [byte] => ser::decode_bool(*byte, field),
            _ => Err(SerError::malformed(field, Self::WIDTH, bytes.len())),
        }
    }
}

impl Field for bool {
    const TYPE: FieldType = FieldType::Bool;

    fn write(&self, out: &mut ByteWriter) {
        self.put(out);
    }

    fn read(reader: &mut ByteReader<'_>, field: &'static str) -> SerResult<Self> {
        ser::read_bool(reader, field)
    }
}

/// Fixed-length byte array, rendered as hex in structured form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedBytes<const N: usize>(pub [u8; N]);

impl<const N: usize> FixedBytes<N> {
    /// Wraps a byte array.
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Array filled with a single byte value.
    pub const fn repeat(byte: u8) -> Self {
        Self([byte; N])
    }

    /// Copies from a slice, failing unless it is exactly `N` bytes long.
    pub fn from_slice(bytes: &[u8], field: &'static str) -> SerResult<Self> {
        Self::from_exact(bytes, field)
    }

    /// Parses a hex string of exactly `N` bytes.
    pub fn from_hex(text: &str) -> Result<Self, hex::InvalidHex> {
        hex::from_hex_array(text).map(Self)
    }

    /// Returns the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for FixedBytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> fmt::Debug for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBytes<{}>({})", N, hex::to_hex(&self.0))
    }
}

impl<const N: usize> fmt::Display for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::to_hex(&self.0))
    }
}

impl<const N: usize> FixedWidth for FixedBytes<N> {
    const WIDTH: usize = N;

    fn put(&self, out: &mut ByteWriter) {
        ser::write_bytes(out, &self.0);
    }

    fn from_exact(bytes: &[u8], field: &'static str) -> SerResult<Self> {
        <[u8; N]>::try_from(bytes)
            .map(Self)
            .map_err(|_| SerError::malformed(field, N, bytes.len()))
    }
}

impl<const N: usize> Field for FixedBytes<N> {
    const TYPE: FieldType = FieldType::FixedBytes { len: N };

    fn write(&self, out: &mut ByteWriter) {
        self.put(out);
    }

    fn read(reader: &mut ByteReader<'_>, field: &'static str) -> SerResult<Self> {
        reader.read_array::<N>(field).map(Self)
    }
}

impl<const N: usize> Serialize for FixedBytes<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::to_hex(&self.0))
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedBytes<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

/// Variable-length payload written behind a `u32` length prefix.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(Vec<u8>);

impl Blob {
    /// Wraps a payload, rejecting anything the `u32` prefix cannot describe.
    pub fn new(bytes: Vec<u8>) -> SerResult<Self> {
        ser::ensure_u32(bytes.len())?;
        Ok(Self(bytes))
    }

    /// Empty payload.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Payload bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Releases the payload.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({})", hex::to_hex(&self.0))
    }
}

impl Field for Blob {
    const TYPE: FieldType = FieldType::Blob;

    fn write(&self, out: &mut ByteWriter) {
        let written = ser::write_prefixed_bytes(out, &self.0);
        debug_assert!(written.is_ok(), "blob length is bounded by Blob::new");
    }

    fn read(reader: &mut ByteReader<'_>, field: &'static str) -> SerResult<Self> {
        ser::read_prefixed_bytes(reader, field).map(Self)
    }
}

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::to_hex(&self.0))
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let bytes = hex::from_hex(&text).map_err(serde::de::Error::custom)?;
        Self::new(bytes).map_err(serde::de::Error::custom)
    }
}

impl<T: Field> Field for Option<T> {
    const TYPE: FieldType = T::TYPE;
    const NULLABLE: bool = true;

    fn write(&self, out: &mut ByteWriter) {
        ser::write_option(out, self, |out, inner| inner.write(out));
    }

    fn read(reader: &mut ByteReader<'_>, field: &'static str) -> SerResult<Self> {
        ser::read_option(reader, field, |reader| T::read(reader, field))
    }

    fn check(&self, path: &str, violations: &mut Vec<Violation>) {
        if let Some(inner) = self {
            inner.check(path, violations);
        }
    }
}
