use tracing::{debug, trace};

use crate::TRACE_FORMAT_VERSION;
use crate::decode::{ByteCursor, DecodeError, FieldValue, Value};
use crate::schema::{Entry, Primitive, Struct, Type, Vector, VectorLength};

use super::error::TraceError;
use super::line::{ElementIndex, LineKind, TraceLine, field_text, label_text};
use super::{DecodedField, Trace};

/// State of one trace pass: the cursor, the nesting depth and the lines
/// emitted so far. Never shared between passes.
pub(crate) struct Tracer<'a> {
    cursor: ByteCursor<'a>,
    depth: usize,
    lines: Vec<TraceLine>,
    fields: Vec<DecodedField>,
    last_field: Option<String>,
}

impl<'a> Tracer<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: ByteCursor::new(bytes),
            depth: 0,
            lines: Vec::new(),
            fields: Vec::new(),
            last_field: None,
        }
    }

    pub(crate) fn walk(&mut self, entries: &[Entry]) -> Result<(), TraceError> {
        for entry in entries {
            match entry {
                Entry::Label(label) => {
                    trace!(depth = self.depth, label = %label, "label");
                    self.emit(LineKind::Label, None, label_text(label));
                }
                Entry::Indent => self.depth += 1,
                Entry::Unindent => {
                    self.depth = match self.depth.checked_sub(1) {
                        Some(depth) => depth,
                        None => return Err(self.invalid("unindent below depth zero")),
                    };
                }
                Entry::ResetIndent => self.depth = 0,
                Entry::Group(inner) => self.walk(inner)?,
                Entry::Field(field) => {
                    let offset = self.cursor.offset();
                    let value = self.decode(&field.ty, &field.name, None)?;
                    self.fields.push(DecodedField {
                        name: field.name.clone(),
                        offset,
                        size: self.cursor.offset() - offset,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> Trace {
        Trace {
            format_version: TRACE_FORMAT_VERSION,
            input_bytes: self.cursor.len(),
            consumed_bytes: self.cursor.offset(),
            final_depth: self.depth,
            lines: self.lines,
            fields: self.fields,
        }
    }

    fn decode(
        &mut self,
        ty: &Type,
        name: &str,
        element: Option<ElementIndex>,
    ) -> Result<Value, TraceError> {
        self.last_field = Some(name.to_string());
        match ty {
            Type::Primitive(primitive) => self.decode_primitive(primitive, name, element),
            Type::Vector(vector) => self.decode_vector(vector, name, element),
            Type::Struct(structure) => self.decode_struct(structure, name, element),
        }
    }

    fn decode_primitive(
        &mut self,
        primitive: &Primitive,
        name: &str,
        element: Option<ElementIndex>,
    ) -> Result<Value, TraceError> {
        let offset = self.cursor.offset();
        let (scalar, raw) = self
            .cursor
            .read_scalar(primitive.kind(), primitive.endian())
            .map_err(|source| decode_error(name, offset, source))?;
        debug!(field = name, offset, kind = %primitive.kind(), value = %scalar, "decoded primitive");
        self.emit(LineKind::Scalar, element, field_text(raw, name, scalar));
        Ok(Value::Scalar(scalar))
    }

    fn decode_vector(
        &mut self,
        vector: &Vector,
        name: &str,
        element: Option<ElementIndex>,
    ) -> Result<Value, TraceError> {
        let offset = self.cursor.offset();
        let (count, prefix) = match vector.length() {
            VectorLength::Prefixed(width) => self
                .cursor
                .read_length_prefix(width)
                .map_err(|source| decode_error(name, offset, source))?,
            VectorLength::Fixed(count) => (count as u64, &[][..]),
        };
        debug!(field = name, vector = vector.name(), offset, count, "decoding vector");
        let summary = format!("{}[{count}]", vector.element().name());
        self.emit(LineKind::Vector, element, field_text(prefix, name, summary));

        self.depth += 1;
        let mut items = Vec::new();
        for index in 1..=count {
            let element_name = format!("{name}[{index}/{count}]");
            let position = ElementIndex {
                index,
                total: count,
            };
            items.push(self.decode(vector.element(), &element_name, Some(position))?);
        }
        self.depth -= 1;

        Ok(Value::Vector { count, items })
    }

    fn decode_struct(
        &mut self,
        structure: &Struct,
        name: &str,
        element: Option<ElementIndex>,
    ) -> Result<Value, TraceError> {
        debug!(
            field = name,
            structure = structure.name(),
            offset = self.cursor.offset(),
            "decoding struct"
        );
        let summary = format!("struct {}", structure.name());
        self.emit(LineKind::Struct, element, field_text(&[], name, summary));

        self.depth += 1;
        let mut fields = Vec::with_capacity(structure.fields().len());
        for field in structure.fields() {
            let value = self.decode(&field.ty, &field.name, None)?;
            fields.push(FieldValue {
                name: field.name.clone(),
                value,
            });
        }
        self.depth -= 1;

        Ok(Value::Struct {
            type_name: structure.name().to_string(),
            fields,
        })
    }

    fn emit(&mut self, kind: LineKind, element: Option<ElementIndex>, text: String) {
        self.lines.push(TraceLine {
            depth: self.depth,
            kind,
            element,
            text,
        });
    }

    fn invalid(&self, reason: &'static str) -> TraceError {
        TraceError::InvalidSchema {
            offset: self.cursor.offset(),
            field: self.last_field.clone(),
            reason,
        }
    }
}

fn decode_error(field: &str, offset: usize, source: DecodeError) -> TraceError {
    TraceError::Decode {
        field: field.to_string(),
        offset,
        source,
    }
}
