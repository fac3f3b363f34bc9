use super::cursor::{ByteReader, ByteWriter};
use super::error::{SerError, SerResult};
use super::ints;

/// Appends raw bytes to the output buffer.
pub fn write_bytes(out: &mut ByteWriter, bytes: &[u8]) {
    out.write_fixed(bytes);
}

/// Writes a `u32` length prefix followed by the provided bytes.
pub fn write_prefixed_bytes(out: &mut ByteWriter, bytes: &[u8]) -> SerResult<()> {
    let len = ints::ensure_u32(bytes.len())?;
    ints::write_u32(out, len);
    write_bytes(out, bytes);
    Ok(())
}

/// Reads a `u32` length prefix and returns the owned payload bytes.
///
/// The prefix is checked against the remaining input before anything is
/// allocated, so a forged length cannot trigger a large allocation.
pub fn read_prefixed_bytes(cursor: &mut ByteReader<'_>, field: &'static str) -> SerResult<Vec<u8>> {
    let len = ints::read_u32(cursor, field)? as usize;
    cursor.read_fixed(len, field).map(<[u8]>::to_vec)
}

/// Ensures that the reader consumed all bytes, otherwise returns a trailing-bytes error.
pub fn ensure_consumed(cursor: &ByteReader<'_>, record: &'static str) -> SerResult<()> {
    let remaining = cursor.remaining();
    if remaining == 0 {
        Ok(())
    } else {
        Err(SerError::trailing_bytes(record, cursor.position(), remaining))
    }
}
