use serde::Serialize;

use super::error::HexError;
use super::layout;
use super::reader::strip_comments_and_whitespace;

/// Cleaned hex digits and the bytes they encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexDump {
    pub digits: String,
    pub bytes: Vec<u8>,
}

impl HexDump {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Parse annotated hex text (comments and whitespace allowed).
pub fn parse_hex_text(text: &str) -> Result<HexDump, HexError> {
    let digits = strip_comments_and_whitespace(text);
    let bytes = decode_hex_digits(&digits)?;
    Ok(HexDump { digits, bytes })
}

/// Decode a bare digit string. Odd lengths are rejected, never truncated.
///
/// Characters are checked before the length, so `digits` in `OddLength`
/// always counts ASCII hex digits.
pub fn decode_hex_digits(digits: &str) -> Result<Vec<u8>, HexError> {
    if let Some((index, character)) = digits
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(HexError::InvalidCharacter { character, index });
    }
    if digits.len() % layout::DIGITS_PER_BYTE != 0 {
        return Err(HexError::OddLength {
            digits: digits.len(),
        });
    }
    ::hex::decode(digits).map_err(|err| match err {
        ::hex::FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidCharacter {
            character: c,
            index,
        },
        ::hex::FromHexError::OddLength | ::hex::FromHexError::InvalidStringLength => {
            HexError::OddLength {
                digits: digits.len(),
            }
        }
    })
}
