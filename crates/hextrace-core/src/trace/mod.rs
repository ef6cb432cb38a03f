//! Trace engine.
//!
//! A pass walks the schema tree depth-first against a fresh byte cursor.
//! Labels and fields emit one line each at the current nesting depth;
//! vectors and structs emit a header line and nest their contents one level
//! deeper. The cursor only moves forward, and running out of bytes is only
//! discovered when a read comes up short.
//!
//! Each pass owns its cursor and depth counter, so a schema can be traced
//! against many inputs, from many threads, without interference.

pub mod error;
pub mod layout;
pub mod line;

mod engine;

use std::fmt;

use serde::Serialize;
use tracing::debug_span;

use crate::decode::Value;
use crate::schema::Schema;

pub use error::TraceError;
pub use line::{ElementIndex, LineKind, TraceLine};

use engine::Tracer;

/// Top-level field decoded during a pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedField {
    pub name: String,
    pub offset: usize,
    /// Bytes consumed by this field, nested content included.
    pub size: usize,
    pub value: Value,
}

/// Result of a successful pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub format_version: u32,
    pub input_bytes: usize,
    pub consumed_bytes: usize,
    /// Nesting depth once the schema was exhausted.
    pub final_depth: usize,
    pub lines: Vec<TraceLine>,
    pub fields: Vec<DecodedField>,
}

impl Trace {
    pub fn remaining_bytes(&self) -> usize {
        self.input_bytes - self.consumed_bytes
    }

    pub fn field(&self, name: &str) -> Option<&DecodedField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Text rendering, one line per entry, newline terminated.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Decode `bytes` against `schema`.
///
/// # Errors
/// Fails on the first read that runs past the end of the input, or on an
/// unindent marker that would take the depth below zero. No partial trace
/// is returned.
///
/// # Examples
/// ```
/// use hextrace_core::{Schema, UINT32_T, run};
///
/// let schema = Schema::new().field("count", UINT32_T);
/// let trace = run(&schema, &[0x00, 0x00, 0x00, 0x2a])?;
/// assert!(trace.render().contains("count = 42"));
/// assert_eq!(trace.consumed_bytes, 4);
/// # Ok::<(), hextrace_core::TraceError>(())
/// ```
pub fn run(schema: &Schema, bytes: &[u8]) -> Result<Trace, TraceError> {
    let _span = debug_span!("trace", bytes = bytes.len()).entered();
    let mut tracer = Tracer::new(bytes);
    tracer.walk(schema.entries())?;
    Ok(tracer.finish())
}
