//! Owned output of a record encode.

use crate::hex::{self, InvalidHex};

/// Immutable byte sequence holding exactly one serialized record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedBuffer {
    bytes: Vec<u8>,
}

impl EncodedBuffer {
    /// Wraps bytes produced by an encoder or received from a peer.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns the underlying byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Releases the owned bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hex form of the buffer.
    pub fn to_hex(&self) -> String {
        hex::to_hex(&self.bytes)
    }

    /// Parses a hex string back into a buffer.
    pub fn from_hex(text: &str) -> Result<Self, InvalidHex> {
        hex::from_hex(text).map(Self::new)
    }

    /// BLAKE3 digest of the buffer contents.
    pub fn digest(&self) -> [u8; 32] {
        blake3::hash(&self.bytes).into()
    }
}

impl AsRef<[u8]> for EncodedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for EncodedBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}
