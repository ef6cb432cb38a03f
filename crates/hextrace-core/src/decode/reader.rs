use super::error::DecodeError;
use super::scalar::{Endian, Scalar, ScalarKind, decode_scalar};

/// Read-only view over a byte buffer with a forward-only offset.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    pub fn require(&self, needed: usize) -> Result<(), DecodeError> {
        if self.remaining() < needed {
            return Err(DecodeError::BufferUnderrun {
                offset: self.offset,
                needed,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Consume exactly `count` bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], DecodeError> {
        self.require(count)?;
        let start = self.offset;
        let end = start + count;
        let bytes = &self.buffer[start..end];
        self.offset = end;
        Ok(bytes)
    }

    /// Consume one scalar, returning it with the raw bytes it came from.
    pub fn read_scalar(
        &mut self,
        kind: ScalarKind,
        endian: Endian,
    ) -> Result<(Scalar, &'a [u8]), DecodeError> {
        let bytes = self.read_bytes(kind.width())?;
        let value = decode_scalar(bytes, kind, endian)?;
        Ok((value, bytes))
    }

    /// Consume an unsigned length prefix. Prefixes are always big-endian,
    /// whatever the byte order of the elements they count.
    pub fn read_length_prefix(
        &mut self,
        width: PrefixWidth,
    ) -> Result<(u64, &'a [u8]), DecodeError> {
        let (value, bytes) = self.read_scalar(width.kind(), Endian::Big)?;
        let count = value.as_u64().unwrap_or_default();
        Ok((count, bytes))
    }
}

/// Width of a vector length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixWidth {
    U8,
    U16,
    U32,
}

impl PrefixWidth {
    pub fn from_bytes(width: usize) -> Option<Self> {
        match width {
            1 => Some(PrefixWidth::U8),
            2 => Some(PrefixWidth::U16),
            4 => Some(PrefixWidth::U32),
            _ => None,
        }
    }

    pub const fn bytes(self) -> usize {
        self.kind().width()
    }

    pub const fn kind(self) -> ScalarKind {
        match self {
            PrefixWidth::U8 => ScalarKind::U8,
            PrefixWidth::U16 => ScalarKind::U16,
            PrefixWidth::U32 => ScalarKind::U32,
        }
    }
}
