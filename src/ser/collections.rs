use super::cursor::{ByteReader, ByteWriter};
use super::error::{SerError, SerResult};
use super::ints;

/// Writes an optional value with a `u8` discriminant (0 = None, 1 = Some).
pub fn write_option<T, F>(out: &mut ByteWriter, value: &Option<T>, write: F)
where
    F: FnOnce(&mut ByteWriter, &T),
{
    match value {
        Some(inner) => {
            ints::write_u8(out, 1);
            write(out, inner);
        }
        None => ints::write_u8(out, 0),
    }
}

/// Reads an optional value encoded with a `u8` discriminant.
pub fn read_option<'a, T, F>(
    cursor: &mut ByteReader<'a>,
    field: &'static str,
    read: F,
) -> SerResult<Option<T>>
where
    F: FnOnce(&mut ByteReader<'a>) -> SerResult<T>,
{
    match ints::read_u8(cursor, field)? {
        0 => Ok(None),
        1 => Ok(Some(read(cursor)?)),
        tag => Err(SerError::invalid_value(field, tag)),
    }
}
