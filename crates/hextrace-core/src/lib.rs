//! hextrace core library: schema-driven tracing of hex captures.
//!
//! A capture is hex text (comments and whitespace allowed) that the
//! `source` layer turns into bytes. A [`Schema`] describes the expected
//! layout as a tree of named fields over three kinds of [`Type`]:
//! fixed-width primitives, length-prefixed or fixed-count vectors, and
//! structs. The trace engine walks the schema against the bytes and
//! produces an indented, line-per-field [`Trace`] plus the decoded values.
//!
//! Decoding is byte-oriented and side-effect free; file access stays in
//! `source` and in [`load_schema_file`].
//!
//! Invariants:
//! - The cursor never rewinds; every field starts where the previous ended.
//! - Each primitive consumes exactly its width, never more.
//! - Vector length prefixes are unsigned big-endian, whatever the element
//!   byte order.
//! - The same schema and bytes always give the same trace.
//!
//! Version française (résumé):
//! Cette crate décode une capture hexadécimale selon un schéma déclaratif
//! (primitives, vecteurs préfixés, structures) et produit une trace indentée.
//! Les E/S restent dans `source`; le décodage est pur et déterministe.
//!
//! # Examples
//! ```
//! use hextrace_core::{INT16_T, Schema, Struct, UINT16_T, trace_hex};
//!
//! let pair = Struct::new("Pair", Vec::new())
//!     .field("a", INT16_T)
//!     .field("b", UINT16_T);
//! let schema = Schema::new().label("Frame").indent().field("pair", pair).unindent();
//!
//! let trace = trace_hex(&schema, "FFFF 0001 # a = -1, b = 1")?;
//! assert_eq!(trace.consumed_bytes, 4);
//! assert!(trace.render().contains("a = -1"));
//! # Ok::<(), hextrace_core::TraceError>(())
//! ```

mod decode;
mod schema;
mod source;
mod trace;

pub use decode::{
    ByteCursor, DecodeError, Endian, FieldValue, PrefixWidth, Scalar, ScalarKind, Value,
    decode_scalar,
};
pub use schema::{
    ByteSize, DOUBLE, Entry, EntryDoc, FLOAT, Field, FieldDoc, INT8_T, INT16_T, INT32_T, INT64_T,
    Primitive, Schema, SchemaDoc, SchemaError, Struct, Type, TypeDef, UINT8_T, UINT16_T,
    UINT32_T, UINT64_T, Vector, VectorLength, load_schema_file, sample_schema,
};
pub use source::{HexDump, HexError, SourceError, decode_hex_digits, parse_hex_text, read_hex_file};
pub use trace::{DecodedField, ElementIndex, LineKind, Trace, TraceError, TraceLine, run};

/// Current version of the serialized [`Trace`] layout.
pub const TRACE_FORMAT_VERSION: u32 = 1;

/// Parse annotated hex text and trace it against `schema`.
///
/// # Errors
/// `TraceError::MalformedHex` before anything is decoded if the text is not
/// an even number of hex digits; otherwise any error from [`run`].
pub fn trace_hex(schema: &Schema, text: &str) -> Result<Trace, TraceError> {
    let dump = parse_hex_text(text)?;
    run(schema, &dump.bytes)
}
