//! Schema description: the type hierarchy and the schema tree.
//!
//! A [`Type`] is one of three closed variants: a fixed-width [`Primitive`],
//! a [`Vector`] repeating an element type, or a [`Struct`] of named fields.
//! Types carry no per-use state; the display name of each use lives in the
//! [`Field`] that binds it, so one type value can back many fields.
//!
//! A [`Schema`] orders fields together with labels and indentation markers,
//! and can be built in code or loaded from a JSON [`SchemaDoc`].
//!
//! Sizing rules are checked when a type is built, never while decoding:
//! a vector needs exactly one of a length prefix (1, 2 or 4 bytes) or a
//! fixed count.

pub mod doc;
pub mod error;
pub mod layout;
pub mod primitive;
pub mod sample;
pub mod structure;
pub mod tree;
pub mod types;
pub mod vector;

pub use doc::{EntryDoc, FieldDoc, SchemaDoc, TypeDef, load_schema_file};
pub use error::SchemaError;
pub use primitive::{
    DOUBLE, FLOAT, INT8_T, INT16_T, INT32_T, INT64_T, Primitive, UINT8_T, UINT16_T, UINT32_T,
    UINT64_T,
};
pub use sample::sample_schema;
pub use structure::Struct;
pub use tree::{Entry, Schema};
pub use types::{ByteSize, Field, Type};
pub use vector::{Vector, VectorLength};
