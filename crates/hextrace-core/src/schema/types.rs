use std::sync::Arc;

use super::primitive::Primitive;
use super::structure::Struct;
use super::vector::Vector;

/// Byte span of a type as far as it can be known before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteSize {
    Known(usize),
    /// Depends on a length prefix read at decode time.
    Dynamic,
}

impl ByteSize {
    pub fn known(self) -> Option<usize> {
        match self {
            ByteSize::Known(n) => Some(n),
            ByteSize::Dynamic => None,
        }
    }
}

/// How a field's bytes are laid out and consumed.
///
/// Composite variants are reference counted so one definition can back any
/// number of fields, and a built schema can be shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Primitive(Primitive),
    Vector(Arc<Vector>),
    Struct(Arc<Struct>),
}

impl Type {
    pub fn name(&self) -> &str {
        match self {
            Type::Primitive(p) => p.name(),
            Type::Vector(v) => v.name(),
            Type::Struct(s) => s.name(),
        }
    }

    pub fn static_size(&self) -> ByteSize {
        match self {
            Type::Primitive(p) => ByteSize::Known(p.width()),
            Type::Vector(v) => v.static_size(),
            Type::Struct(s) => s.static_size(),
        }
    }

    /// Fewest bytes one decode can consume, whatever the input says.
    pub fn min_size(&self) -> usize {
        match self {
            Type::Primitive(p) => p.width(),
            Type::Vector(v) => v.min_size(),
            Type::Struct(s) => s.min_size(),
        }
    }
}

impl From<Primitive> for Type {
    fn from(value: Primitive) -> Self {
        Type::Primitive(value)
    }
}

impl From<Vector> for Type {
    fn from(value: Vector) -> Self {
        Type::Vector(Arc::new(value))
    }
}

impl From<Arc<Vector>> for Type {
    fn from(value: Arc<Vector>) -> Self {
        Type::Vector(value)
    }
}

impl From<Struct> for Type {
    fn from(value: Struct) -> Self {
        Type::Struct(Arc::new(value))
    }
}

impl From<Arc<Struct>> for Type {
    fn from(value: Arc<Struct>) -> Self {
        Type::Struct(value)
    }
}

/// A named slot: the display name for one use of a type.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: Type,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}
