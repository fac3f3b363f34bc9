use super::cursor::{ByteReader, ByteWriter};
use super::error::{SerError, SerResult};

/// Encodes a `u8` into the output buffer.
pub fn write_u8(out: &mut ByteWriter, value: u8) {
    out.write_fixed(&[value]);
}

/// Encodes a `u16` in big-endian order.
pub fn write_u16(out: &mut ByteWriter, value: u16) {
    out.write_fixed(&value.to_be_bytes());
}

/// Encodes a `u32` in big-endian order.
pub fn write_u32(out: &mut ByteWriter, value: u32) {
    out.write_fixed(&value.to_be_bytes());
}

/// Encodes a `u64` in big-endian order.
pub fn write_u64(out: &mut ByteWriter, value: u64) {
    out.write_fixed(&value.to_be_bytes());
}

/// Writes a boolean flag as a single byte (`0` or `1`).
pub fn write_bool(out: &mut ByteWriter, value: bool) {
    write_u8(out, value as u8);
}

/// Converts a `usize` into a `u32` length prefix.
pub fn ensure_u32(value: usize) -> SerResult<u32> {
    u32::try_from(value).map_err(|_| SerError::LengthOverflow { len: value })
}

/// Reads a `u8` from the cursor.
pub fn read_u8(cursor: &mut ByteReader<'_>, field: &'static str) -> SerResult<u8> {
    Ok(cursor.read_array::<1>(field)?[0])
}

/// Reads a `u16` in big-endian order.
pub fn read_u16(cursor: &mut ByteReader<'_>, field: &'static str) -> SerResult<u16> {
    cursor.read_array::<2>(field).map(u16::from_be_bytes)
}

/// Reads a `u32` in big-endian order.
pub fn read_u32(cursor: &mut ByteReader<'_>, field: &'static str) -> SerResult<u32> {
    cursor.read_array::<4>(field).map(u32::from_be_bytes)
}

/// Reads a `u64` in big-endian order.
pub fn read_u64(cursor: &mut ByteReader<'_>, field: &'static str) -> SerResult<u64> {
    cursor.read_array::<8>(field).map(u64::from_be_bytes)
}

/// Reads a boolean flag encoded as `0` or `1`.
pub fn read_bool(cursor: &mut ByteReader<'_>, field: &'static str) -> SerResult<bool> {
    decode_bool(read_u8(cursor, field)?, field)
}

pub(crate) fn decode_bool(byte: u8, field: &'static str) -> SerResult<bool> {
    match byte {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(SerError::invalid_value(field, other)),
    }
}
