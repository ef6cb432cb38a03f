use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DecodeError;

/// Fixed-width numeric kinds understood by the scalar codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 10] = [
        ScalarKind::I8,
        ScalarKind::U8,
        ScalarKind::I16,
        ScalarKind::U16,
        ScalarKind::I32,
        ScalarKind::U32,
        ScalarKind::I64,
        ScalarKind::U64,
        ScalarKind::F32,
        ScalarKind::F64,
    ];

    pub const fn width(self) -> usize {
        match self {
            ScalarKind::I8 | ScalarKind::U8 => 1,
            ScalarKind::I16 | ScalarKind::U16 => 2,
            ScalarKind::I32 | ScalarKind::U32 | ScalarKind::F32 => 4,
            ScalarKind::I64 | ScalarKind::U64 | ScalarKind::F64 => 8,
        }
    }

    /// C-style type name used in schemas and trace output.
    pub const fn c_name(self) -> &'static str {
        match self {
            ScalarKind::I8 => "int8_t",
            ScalarKind::U8 => "uint8_t",
            ScalarKind::I16 => "int16_t",
            ScalarKind::U16 => "uint16_t",
            ScalarKind::I32 => "int32_t",
            ScalarKind::U32 => "uint32_t",
            ScalarKind::I64 => "int64_t",
            ScalarKind::U64 => "uint64_t",
            ScalarKind::F32 => "float",
            ScalarKind::F64 => "double",
        }
    }

    pub fn from_c_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.c_name() == name)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_name())
    }
}

/// Byte order of a scalar. Network order (big) is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    #[default]
    Big,
    Little,
}

/// Decoded scalar, widened to 64 bits for integers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    UInt(u64),
    F32(f32),
    F64(f64),
}

impl Scalar {
    pub fn as_u64(self) -> Option<u64> {
        match self {
            Scalar::UInt(v) => Some(v),
            Scalar::Int(v) => u64::try_from(v).ok(),
            Scalar::F32(_) | Scalar::F64(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::UInt(v) => write!(f, "{v}"),
            Scalar::F32(v) => write!(f, "{v}"),
            Scalar::F64(v) => write!(f, "{v}"),
        }
    }
}

/// Decode one scalar from the front of `bytes`.
///
/// Only the first `kind.width()` bytes are read; anything after them is
/// left alone.
///
/// # Errors
/// Returns `DecodeError::TruncatedInput` when fewer than `kind.width()`
/// bytes are supplied.
pub fn decode_scalar(bytes: &[u8], kind: ScalarKind, endian: Endian) -> Result<Scalar, DecodeError> {
    let width = kind.width();
    let span = bytes.get(..width).ok_or(DecodeError::TruncatedInput {
        kind,
        needed: width,
        actual: bytes.len(),
    })?;

    let mut raw = [0u8; 8];
    raw[..width].copy_from_slice(span);
    if endian == Endian::Little {
        raw[..width].reverse();
    }
    // raw[..width] is now big-endian.
    let be = &raw[..width];

    let value = match kind {
        ScalarKind::I8 => Scalar::Int(i8::from_be_bytes([be[0]]) as i64),
        ScalarKind::U8 => Scalar::UInt(be[0] as u64),
        ScalarKind::I16 => Scalar::Int(i16::from_be_bytes([be[0], be[1]]) as i64),
        ScalarKind::U16 => Scalar::UInt(u16::from_be_bytes([be[0], be[1]]) as u64),
        ScalarKind::I32 => Scalar::Int(i32::from_be_bytes([be[0], be[1], be[2], be[3]]) as i64),
        ScalarKind::U32 => Scalar::UInt(u32::from_be_bytes([be[0], be[1], be[2], be[3]]) as u64),
        ScalarKind::F32 => Scalar::F32(f32::from_be_bytes([be[0], be[1], be[2], be[3]])),
        ScalarKind::I64 => Scalar::Int(i64::from_be_bytes(raw)),
        ScalarKind::U64 => Scalar::UInt(u64::from_be_bytes(raw)),
        ScalarKind::F64 => Scalar::F64(f64::from_be_bytes(raw)),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{Endian, Scalar, ScalarKind, decode_scalar};
    use crate::decode::error::DecodeError;

    #[test]
    fn widths_match_kinds() {
        assert_eq!(ScalarKind::I8.width(), 1);
        assert_eq!(ScalarKind::U16.width(), 2);
        assert_eq!(ScalarKind::F32.width(), 4);
        assert_eq!(ScalarKind::I64.width(), 8);
        assert_eq!(ScalarKind::F64.width(), 8);
    }

    #[test]
    fn c_names_round_trip() {
        for kind in ScalarKind::ALL {
            assert_eq!(ScalarKind::from_c_name(kind.c_name()), Some(kind));
        }
        assert_eq!(ScalarKind::from_c_name("uint128_t"), None);
    }

    #[test]
    fn decode_u32_big_endian() {
        let value = decode_scalar(&[0, 0, 0, 0x2a], ScalarKind::U32, Endian::Big).unwrap();
        assert_eq!(value, Scalar::UInt(42));
    }

    #[test]
    fn decode_u32_little_endian() {
        let value = decode_scalar(&[0x2a, 0, 0, 0], ScalarKind::U32, Endian::Little).unwrap();
        assert_eq!(value, Scalar::UInt(42));
    }

    #[test]
    fn decode_signed_twos_complement() {
        assert_eq!(
            decode_scalar(&[0xff], ScalarKind::I8, Endian::Big).unwrap(),
            Scalar::Int(-1)
        );
        assert_eq!(
            decode_scalar(&[0xff, 0xfe], ScalarKind::I16, Endian::Big).unwrap(),
            Scalar::Int(-2)
        );
        assert_eq!(
            decode_scalar(&[0xfe, 0xff], ScalarKind::I16, Endian::Little).unwrap(),
            Scalar::Int(-2)
        );
        assert_eq!(
            decode_scalar(&[0x80, 0, 0, 0, 0, 0, 0, 0], ScalarKind::I64, Endian::Big).unwrap(),
            Scalar::Int(i64::MIN)
        );
    }

    #[test]
    fn decode_u64_max() {
        let value = decode_scalar(&[0xff; 8], ScalarKind::U64, Endian::Big).unwrap();
        assert_eq!(value, Scalar::UInt(u64::MAX));
    }

    #[test]
    fn decode_floats() {
        let value = decode_scalar(&1.5f32.to_be_bytes(), ScalarKind::F32, Endian::Big).unwrap();
        assert_eq!(value, Scalar::F32(1.5));
        let value = decode_scalar(&(-0.25f64).to_le_bytes(), ScalarKind::F64, Endian::Little)
            .unwrap();
        assert_eq!(value, Scalar::F64(-0.25));
    }

    #[test]
    fn ignores_trailing_bytes() {
        let value = decode_scalar(&[0x01, 0x02, 0x03], ScalarKind::U16, Endian::Big).unwrap();
        assert_eq!(value, Scalar::UInt(0x0102));
    }

    #[test]
    fn truncated_input() {
        let err = decode_scalar(&[0x00, 0x01], ScalarKind::U32, Endian::Big).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TruncatedInput {
                kind: ScalarKind::U32,
                needed: 4,
                actual: 2
            }
        ));
    }

    #[test]
    fn scalar_display() {
        assert_eq!(Scalar::Int(-7).to_string(), "-7");
        assert_eq!(Scalar::UInt(42).to_string(), "42");
        assert_eq!(Scalar::F32(1.5).to_string(), "1.5");
    }

    #[test]
    fn scalar_as_u64() {
        assert_eq!(Scalar::UInt(3).as_u64(), Some(3));
        assert_eq!(Scalar::Int(-1).as_u64(), None);
        assert_eq!(Scalar::F64(1.0).as_u64(), None);
    }
}
