use super::layout;
use super::types::{Field, Type};

/// One element of a schema tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Field(Field),
    /// Section heading printed as `[label]`.
    Label(String),
    Indent,
    Unindent,
    ResetIndent,
    Group(Vec<Entry>),
}

impl Entry {
    /// Interpret a bare string: indentation markers or a label.
    ///
    /// # Examples
    /// ```
    /// use hextrace_core::Entry;
    ///
    /// assert_eq!(Entry::from_marker(">>INDENT<<"), Entry::Indent);
    /// assert_eq!(Entry::from_marker("Header"), Entry::Label("Header".to_string()));
    /// ```
    pub fn from_marker(text: &str) -> Self {
        match text {
            layout::INDENT_MARKER => Entry::Indent,
            layout::UNINDENT_MARKER => Entry::Unindent,
            layout::RESET_INDENT_MARKER => Entry::ResetIndent,
            label => Entry::Label(label.to_string()),
        }
    }

    /// Inverse of [`Entry::from_marker`] for marker and label entries.
    pub fn marker_text(&self) -> Option<&str> {
        match self {
            Entry::Indent => Some(layout::INDENT_MARKER),
            Entry::Unindent => Some(layout::UNINDENT_MARKER),
            Entry::ResetIndent => Some(layout::RESET_INDENT_MARKER),
            Entry::Label(label) => Some(label),
            Entry::Field(_) | Entry::Group(_) => None,
        }
    }
}

impl From<Field> for Entry {
    fn from(value: Field) -> Self {
        Entry::Field(value)
    }
}

/// Declarative decode order: fields and layout markers, possibly nested.
///
/// # Examples
/// ```
/// use hextrace_core::{INT16_T, Schema, UINT32_T};
///
/// let schema = Schema::new()
///     .label("Header")
///     .indent()
///     .field("count", UINT32_T)
///     .group(Schema::new().field("delta", INT16_T))
///     .unindent();
/// assert_eq!(schema.entries().len(), 5);
/// assert_eq!(schema.field_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    entries: Vec<Entry>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: impl Into<Entry>) {
        self.entries.push(entry.into());
    }

    pub fn entry(mut self, entry: impl Into<Entry>) -> Self {
        self.push(entry);
        self
    }

    pub fn field(self, name: impl Into<String>, ty: impl Into<Type>) -> Self {
        self.entry(Field::new(name, ty))
    }

    pub fn label(self, label: impl Into<String>) -> Self {
        self.entry(Entry::Label(label.into()))
    }

    pub fn indent(self) -> Self {
        self.entry(Entry::Indent)
    }

    pub fn unindent(self) -> Self {
        self.entry(Entry::Unindent)
    }

    pub fn reset_indent(self) -> Self {
        self.entry(Entry::ResetIndent)
    }

    pub fn group(self, group: Schema) -> Self {
        self.entry(Entry::Group(group.entries))
    }

    /// Number of field bindings, counting those inside groups.
    pub fn field_count(&self) -> usize {
        fn count(entries: &[Entry]) -> usize {
            entries
                .iter()
                .map(|entry| match entry {
                    Entry::Field(_) => 1,
                    Entry::Group(inner) => count(inner),
                    _ => 0,
                })
                .sum()
        }
        count(&self.entries)
    }
}
