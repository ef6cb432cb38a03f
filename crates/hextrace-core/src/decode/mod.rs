//! Byte-level decoding.
//!
//! `reader` owns the forward-only cursor, `scalar` the fixed-width numeric
//! codec, and `value` the decoded value tree. Nothing here knows about
//! schemas or trace output.

pub mod error;
pub mod reader;
pub mod scalar;
pub mod value;

pub use error::DecodeError;
pub use reader::{ByteCursor, PrefixWidth};
pub use scalar::{Endian, Scalar, ScalarKind, decode_scalar};
pub use value::{FieldValue, Value};
