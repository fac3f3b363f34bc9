//! Textual hex form of encoded buffers.
//!
//! Output is always lowercase with no prefix. Input may carry a `0x` (or
//! `0X`) prefix and any mix of letter case.

use thiserror::Error;

/// Rejected hex input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidHex {
    /// The digit count (prefix excluded) is odd.
    #[error("hex input has odd length {len}")]
    OddLength {
        /// Number of hex digits after the optional prefix.
        len: usize,
    },
    /// A character outside `[0-9a-fA-F]` was found.
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Byte offset into the input, prefix included.
        index: usize,
    },
    /// The decoded byte count differs from the fixed length requested.
    #[error("expected {expected} bytes of hex, got {actual}")]
    WrongLength {
        /// Byte length requested by the caller.
        expected: usize,
        /// Byte length actually decoded.
        actual: usize,
    },
}

/// Maps each byte to two lowercase hex characters.
pub fn to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Decodes a hex string, accepting an optional `0x` prefix.
pub fn from_hex(text: &str) -> Result<Vec<u8>, InvalidHex> {
    let (offset, digits) = strip_prefix(text);
    ::hex::decode(digits).map_err(|err| match err {
        ::hex::FromHexError::InvalidHexCharacter { c, index } => {
            let index = offset + index;
            // The decoder reports a single byte; recover the full character.
            let character = text.get(index..).and_then(|rest| rest.chars().next()).unwrap_or(c);
            InvalidHex::InvalidCharacter { character, index }
        }
        ::hex::FromHexError::OddLength | ::hex::FromHexError::InvalidStringLength => {
            InvalidHex::OddLength { len: digits.len() }
        }
    })
}

/// Decodes a hex string into exactly `N` bytes.
pub fn from_hex_array<const N: usize>(text: &str) -> Result<[u8; N], InvalidHex> {
    let bytes = from_hex(text)?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| InvalidHex::WrongLength {
        expected: N,
        actual: bytes.len(),
    })
}

fn strip_prefix(text: &str) -> (usize, &str) {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(rest) => (2, rest),
        None => (0, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn encodes_lowercase_without_prefix() {
        assert_eq!(to_hex(&[0x00, 0x2a, 0xde, 0xad, 0xBE, 0xef]), "002adeadbeef");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn accepts_prefix_and_mixed_case() {
        assert_eq!(from_hex("0xDeAdBeEf").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(from_hex("0XFF").unwrap(), vec![0xff]);
        assert_eq!(from_hex("0x").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn rejects_odd_length() {
        assert_eq!(from_hex("0xabc"), Err(InvalidHex::OddLength { len: 3 }));
    }

    #[test]
    fn reports_character_offset_in_full_input() {
        assert_eq!(
            from_hex("0x00zz"),
            Err(InvalidHex::InvalidCharacter {
                character: 'z',
                index: 4,
            })
        );
        assert!(matches!(
            from_hex("0g"),
            Err(InvalidHex::InvalidCharacter { character: 'g', index: 1 })
        ));
    }

    #[test]
    fn non_ascii_input_reports_whole_character() {
        assert_eq!(
            from_hex("éé"),
            Err(InvalidHex::InvalidCharacter {
                character: 'é',
                index: 0,
            })
        );
        assert_eq!(
            from_hex("0x00éé"),
            Err(InvalidHex::InvalidCharacter {
                character: 'é',
                index: 4,
            })
        );
        assert_snapshot!(
            from_hex("0x00éé").unwrap_err().to_string(),
            @"invalid hex character 'é' at index 4"
        );
    }

    #[test]
    fn fixed_arrays_require_exact_length() {
        assert_eq!(from_hex_array::<2>("beef").unwrap(), [0xbe, 0xef]);
        assert_eq!(
            from_hex_array::<4>("beef"),
            Err(InvalidHex::WrongLength {
                expected: 4,
                actual: 2,
            })
        );
    }
}
