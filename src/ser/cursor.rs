use super::buffer::EncodedBuffer;
use super::error::{SerError, SerResult};

/// Forward-only cursor over a byte slice providing structured reads with error context.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new cursor over the provided byte slice.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Returns the current offset within the slice.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Returns the number of bytes remaining in the cursor.
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Reads exactly `len` bytes from the cursor.
    pub fn read_fixed(&mut self, len: usize, field: &'static str) -> SerResult<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(SerError::underflow(field, len, remaining));
        }
        let start = self.offset;
        self.offset += len;
        Ok(&self.bytes[start..start + len])
    }

    /// Reads a fixed-size byte array from the cursor.
    pub fn read_array<const N: usize>(&mut self, field: &'static str) -> SerResult<[u8; N]> {
        let bytes = self.read_fixed(N, field)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }
}

impl<'a> From<&'a [u8]> for ByteReader<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ByteReader::new(bytes)
    }
}

/// Append-only writer producing an [`EncodedBuffer`].
#[derive(Debug, Default, Clone)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Appends raw bytes and advances the write offset.
    pub fn write_fixed(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> usize {
        self.bytes.len()
    }

    /// Seals the writer into an immutable buffer.
    pub fn finish(self) -> EncodedBuffer {
        EncodedBuffer::new(self.bytes)
    }
}
