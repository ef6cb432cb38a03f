use crate::decode::{Endian, ScalarKind};

use super::layout;

/// Fixed-width scalar type. The byte width always follows from the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Primitive {
    kind: ScalarKind,
    endian: Endian,
}

pub const INT8_T: Primitive = Primitive::new(ScalarKind::I8);
pub const UINT8_T: Primitive = Primitive::new(ScalarKind::U8);
pub const INT16_T: Primitive = Primitive::new(ScalarKind::I16);
pub const UINT16_T: Primitive = Primitive::new(ScalarKind::U16);
pub const INT32_T: Primitive = Primitive::new(ScalarKind::I32);
pub const UINT32_T: Primitive = Primitive::new(ScalarKind::U32);
pub const INT64_T: Primitive = Primitive::new(ScalarKind::I64);
pub const UINT64_T: Primitive = Primitive::new(ScalarKind::U64);
pub const FLOAT: Primitive = Primitive::new(ScalarKind::F32);
pub const DOUBLE: Primitive = Primitive::new(ScalarKind::F64);

impl Primitive {
    /// Big-endian primitive of the given kind.
    pub const fn new(kind: ScalarKind) -> Self {
        Self {
            kind,
            endian: Endian::Big,
        }
    }

    pub const fn with_endian(self, endian: Endian) -> Self {
        Self {
            kind: self.kind,
            endian,
        }
    }

    pub const fn little_endian(self) -> Self {
        self.with_endian(Endian::Little)
    }

    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub const fn endian(&self) -> Endian {
        self.endian
    }

    pub const fn width(&self) -> usize {
        self.kind.width()
    }

    pub const fn name(&self) -> &'static str {
        self.kind.c_name()
    }

    /// Parse a type reference such as `uint32_t` or `int16_t@le`.
    ///
    /// # Examples
    /// ```
    /// use hextrace_core::{Endian, Primitive, UINT16_T};
    ///
    /// assert_eq!(Primitive::parse("uint16_t"), Some(UINT16_T));
    /// let le = Primitive::parse("uint16_t@le").unwrap();
    /// assert_eq!(le.endian(), Endian::Little);
    /// assert_eq!(Primitive::parse("uint16_t@xx"), None);
    /// ```
    pub fn parse(reference: &str) -> Option<Self> {
        let (name, endian) = match reference.split_once(layout::ENDIAN_SEPARATOR) {
            Some((name, layout::BIG_ENDIAN_SUFFIX)) => (name, Endian::Big),
            Some((name, layout::LITTLE_ENDIAN_SUFFIX)) => (name, Endian::Little),
            Some(_) => return None,
            None => (reference, Endian::Big),
        };
        ScalarKind::from_c_name(name).map(|kind| Primitive::new(kind).with_endian(endian))
    }

    /// Inverse of [`Primitive::parse`]; big-endian names carry no suffix.
    pub fn reference(&self) -> String {
        match self.endian {
            Endian::Big => self.name().to_string(),
            Endian::Little => format!(
                "{}{}{}",
                self.name(),
                layout::ENDIAN_SEPARATOR,
                layout::LITTLE_ENDIAN_SUFFIX
            ),
        }
    }
}
