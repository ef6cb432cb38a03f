use super::types::{ByteSize, Field, Type};

/// Ordered aggregate of named fields, decoded back to back.
#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    name: String,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Append a field, builder style.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<Type>) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn min_size(&self) -> usize {
        self.fields
            .iter()
            .fold(0usize, |total, field| total.saturating_add(field.ty.min_size()))
    }

    /// Sum of field sizes, or `Dynamic` if any field is.
    pub fn static_size(&self) -> ByteSize {
        self.fields
            .iter()
            .try_fold(0usize, |total, field| {
                field
                    .ty
                    .static_size()
                    .known()
                    .and_then(|size| total.checked_add(size))
            })
            .map_or(ByteSize::Dynamic, ByteSize::Known)
    }
}

#[cfg(test)]
mod tests {
    use super::Struct;
    use crate::schema::primitive::{DOUBLE, INT16_T, UINT8_T};
    use crate::schema::types::ByteSize;
    use crate::schema::vector::Vector;

    #[test]
    fn builder_keeps_declared_order() {
        let s = Struct::new("Sample", Vec::new())
            .field("b", INT16_T)
            .field("a", DOUBLE);
        let names: Vec<_> = s.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(s.static_size(), ByteSize::Known(10));
    }

    #[test]
    fn nested_fixed_vector_is_known() {
        let raw = Vector::fixed("raw", UINT8_T, 5).unwrap();
        let s = Struct::new("Sample", Vec::new()).field("raw", raw);
        assert_eq!(s.static_size(), ByteSize::Known(5));
    }

    #[test]
    fn empty_struct_has_zero_size() {
        assert_eq!(Struct::new("Empty", Vec::new()).static_size(), ByteSize::Known(0));
    }
}
