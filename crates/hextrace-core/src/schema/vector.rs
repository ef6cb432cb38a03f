use crate::decode::PrefixWidth;

use super::error::SchemaError;
use super::types::{ByteSize, Type};

/// How a vector learns its element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorLength {
    /// Count read from an unsigned big-endian prefix.
    Prefixed(PrefixWidth),
    Fixed(usize),
}

/// Repetition of an element type.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    name: String,
    element: Type,
    length: VectorLength,
}

impl Vector {
    /// Build a vector from raw sizing parameters.
    ///
    /// Exactly one of `prefix_width > 0` and `fixed_count` must be given;
    /// the prefix width must be 1, 2 or 4 bytes.
    ///
    /// # Errors
    /// Returns `SchemaError::Configuration` for contradictory or unsupported
    /// sizing, or for elements whose decode can consume no bytes.
    pub fn new(
        name: impl Into<String>,
        element: impl Into<Type>,
        prefix_width: usize,
        fixed_count: Option<usize>,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let length = match (prefix_width, fixed_count) {
            (0, None) => {
                return Err(SchemaError::configuration(
                    &name,
                    "vector needs a length prefix or a fixed count",
                ));
            }
            (0, Some(count)) => VectorLength::Fixed(count),
            (width, None) => VectorLength::Prefixed(PrefixWidth::from_bytes(width).ok_or_else(
                || {
                    SchemaError::configuration(
                        &name,
                        format!("unsupported length prefix width {width} (expected 1, 2 or 4)"),
                    )
                },
            )?),
            (_, Some(_)) => {
                return Err(SchemaError::configuration(
                    &name,
                    "vector cannot have both a length prefix and a fixed count",
                ));
            }
        };
        let element = element.into();
        if element.min_size() == 0 {
            return Err(SchemaError::configuration(
                &name,
                format!("element type '{}' may occupy no bytes", element.name()),
            ));
        }
        Ok(Self {
            name,
            element,
            length,
        })
    }

    pub fn prefixed(
        name: impl Into<String>,
        element: impl Into<Type>,
        width: PrefixWidth,
    ) -> Result<Self, SchemaError> {
        Self::new(name, element, width.bytes(), None)
    }

    pub fn fixed(
        name: impl Into<String>,
        element: impl Into<Type>,
        count: usize,
    ) -> Result<Self, SchemaError> {
        Self::new(name, element, 0, Some(count))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> &Type {
        &self.element
    }

    pub fn length(&self) -> VectorLength {
        self.length
    }

    pub fn prefix_width(&self) -> usize {
        match self.length {
            VectorLength::Prefixed(width) => width.bytes(),
            VectorLength::Fixed(_) => 0,
        }
    }

    pub fn fixed_count(&self) -> Option<usize> {
        match self.length {
            VectorLength::Prefixed(_) => None,
            VectorLength::Fixed(count) => Some(count),
        }
    }

    /// Prefix bytes, or the fixed count times the element minimum.
    pub fn min_size(&self) -> usize {
        match self.length {
            VectorLength::Prefixed(width) => width.bytes(),
            VectorLength::Fixed(count) => count.saturating_mul(self.element.min_size()),
        }
    }

    pub fn static_size(&self) -> ByteSize {
        match (self.length, self.element.static_size()) {
            (VectorLength::Fixed(count), ByteSize::Known(size)) => count
                .checked_mul(size)
                .map_or(ByteSize::Dynamic, ByteSize::Known),
            _ => ByteSize::Dynamic,
        }
    }
}
