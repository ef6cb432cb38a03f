use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::SchemaError;
use super::primitive::Primitive;
use super::structure::Struct;
use super::tree::{Entry, Schema};
use super::types::{Field, Type};
use super::vector::Vector;

/// JSON form of a schema.
///
/// Named composite types are declared up front in `types`; each may refer
/// to primitives and to types declared before it. `entries` is the schema
/// tree: strings are markers or labels, objects are fields, arrays are
/// nested groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaDoc {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeDef>,
    pub entries: Vec<EntryDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDef {
    Vector {
        name: String,
        element: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefix: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        count: Option<usize>,
    },
    Struct {
        name: String,
        fields: Vec<FieldDoc>,
    },
}

impl TypeDef {
    pub fn name(&self) -> &str {
        match self {
            TypeDef::Vector { name, .. } | TypeDef::Struct { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryDoc {
    Marker(String),
    Field(FieldDoc),
    Group(Vec<EntryDoc>),
}

impl SchemaDoc {
    pub fn from_json(text: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve type references and build the schema tree.
    pub fn build(&self) -> Result<Schema, SchemaError> {
        let mut registry = TypeRegistry::default();
        for def in &self.types {
            registry.define(def)?;
        }
        let entries = self
            .entries
            .iter()
            .map(|entry| registry.entry(entry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Schema::from_entries(entries))
    }

    /// Describe an in-memory schema as a document.
    ///
    /// Composite types are emitted once each, dependencies first. Two
    /// different definitions sharing a name cannot be expressed and fail
    /// with `SchemaError::DuplicateType`.
    pub fn from_schema(schema: &Schema) -> Result<Self, SchemaError> {
        let mut collector = TypeCollector::default();
        let entries = schema
            .entries()
            .iter()
            .map(|entry| collector.entry(entry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            types: collector.defs,
            entries,
        })
    }
}

/// Load and build a schema from a JSON file.
pub fn load_schema_file(path: &Path) -> Result<Schema, SchemaError> {
    let text = fs::read_to_string(path)?;
    let doc = SchemaDoc::from_json(&text)?;
    let schema = doc.build()?;
    debug!(
        path = %path.display(),
        types = doc.types.len(),
        fields = schema.field_count(),
        "loaded schema"
    );
    Ok(schema)
}

#[derive(Default)]
struct TypeRegistry {
    types: HashMap<String, Type>,
}

impl TypeRegistry {
    fn resolve(&self, reference: &str) -> Result<Type, SchemaError> {
        if let Some(primitive) = Primitive::parse(reference) {
            return Ok(primitive.into());
        }
        self.types
            .get(reference)
            .cloned()
            .ok_or_else(|| SchemaError::UnknownType {
                name: reference.to_string(),
            })
    }

    fn define(&mut self, def: &TypeDef) -> Result<(), SchemaError> {
        let name = def.name();
        if Primitive::parse(name).is_some() || self.types.contains_key(name) {
            return Err(SchemaError::DuplicateType {
                name: name.to_string(),
            });
        }
        let ty = match def {
            TypeDef::Vector {
                name,
                element,
                prefix,
                count,
            } => {
                let element = self.resolve(element)?;
                Type::from(Vector::new(name.clone(), element, prefix.unwrap_or(0), *count)?)
            }
            TypeDef::Struct { name, fields } => {
                let fields = fields
                    .iter()
                    .map(|field| self.field(field))
                    .collect::<Result<Vec<_>, _>>()?;
                Type::from(Struct::new(name.clone(), fields))
            }
        };
        self.types.insert(name.to_string(), ty);
        Ok(())
    }

    fn field(&self, doc: &FieldDoc) -> Result<Field, SchemaError> {
        Ok(Field::new(doc.name.clone(), self.resolve(&doc.ty)?))
    }

    fn entry(&self, doc: &EntryDoc) -> Result<Entry, SchemaError> {
        Ok(match doc {
            EntryDoc::Marker(text) => Entry::from_marker(text),
            EntryDoc::Field(field) => Entry::Field(self.field(field)?),
            EntryDoc::Group(entries) => Entry::Group(
                entries
                    .iter()
                    .map(|entry| self.entry(entry))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        })
    }
}

#[derive(Default)]
struct TypeCollector {
    defs: Vec<TypeDef>,
    seen: HashMap<String, Type>,
}

impl TypeCollector {
    fn reference(&mut self, ty: &Type) -> Result<String, SchemaError> {
        let def = match ty {
            Type::Primitive(primitive) => return Ok(primitive.reference()),
            Type::Vector(vector) => TypeDef::Vector {
                name: vector.name().to_string(),
                element: self.reference(vector.element())?,
                prefix: Some(vector.prefix_width()).filter(|width| *width > 0),
                count: vector.fixed_count(),
            },
            Type::Struct(structure) => TypeDef::Struct {
                name: structure.name().to_string(),
                fields: structure
                    .fields()
                    .iter()
                    .map(|field| self.field(field))
                    .collect::<Result<Vec<_>, _>>()?,
            },
        };
        let name = ty.name().to_string();
        match self.seen.get(&name) {
            Some(existing) if existing == ty => {}
            Some(_) => return Err(SchemaError::DuplicateType { name }),
            None => {
                self.seen.insert(name.clone(), ty.clone());
                self.defs.push(def);
            }
        }
        Ok(name)
    }

    fn field(&mut self, field: &Field) -> Result<FieldDoc, SchemaError> {
        Ok(FieldDoc {
            name: field.name.clone(),
            ty: self.reference(&field.ty)?,
        })
    }

    fn entry(&mut self, entry: &Entry) -> Result<EntryDoc, SchemaError> {
        Ok(match entry {
            Entry::Field(field) => EntryDoc::Field(self.field(field)?),
            Entry::Group(entries) => EntryDoc::Group(
                entries
                    .iter()
                    .map(|entry| self.entry(entry))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Entry::Label(label) => EntryDoc::Marker(label.clone()),
            marker => EntryDoc::Marker(marker.marker_text().unwrap_or_default().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryDoc, SchemaDoc, TypeDef};
    use crate::decode::Endian;
    use crate::schema::error::SchemaError;
    use crate::schema::primitive::{INT16_T, UINT8_T};
    use crate::schema::structure::Struct;
    use crate::schema::tree::{Entry, Schema};
    use crate::schema::types::Type;
    use crate::schema::vector::Vector;

    const DOC: &str = r#"{
        "types": [
            { "kind": "vector", "name": "Bytes", "element": "uint8_t", "prefix": 4 },
            { "kind": "struct", "name": "Point",
              "fields": [ { "name": "x", "type": "int16_t" },
                          { "name": "y", "type": "int16_t@le" } ] }
        ],
        "entries": [
            "Header",
            ">>INDENT<<",
            { "name": "count", "type": "uint32_t" },
            [ { "name": "origin", "type": "Point" }, { "name": "payload", "type": "Bytes" } ],
            ">>UNINDENT<<",
            ">>RESETINDENT<<"
        ]
    }"#;

    #[test]
    fn build_document() {
        let schema = SchemaDoc::from_json(DOC).unwrap().build().unwrap();
        let entries = schema.entries();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0], Entry::Label("Header".to_string()));
        assert_eq!(entries[1], Entry::Indent);
        assert_eq!(entries[4], Entry::Unindent);
        assert_eq!(entries[5], Entry::ResetIndent);
        assert_eq!(schema.field_count(), 3);

        let Entry::Group(group) = &entries[3] else {
            panic!("expected group");
        };
        let Entry::Field(origin) = &group[0] else {
            panic!("expected field");
        };
        let Type::Struct(point) = &origin.ty else {
            panic!("expected struct");
        };
        assert_eq!(point.name(), "Point");
        let Type::Primitive(y) = &point.fields()[1].ty else {
            panic!("expected primitive");
        };
        assert_eq!(y.endian(), Endian::Little);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let doc = r#"{ "entries": [ { "name": "x", "type": "Nope" } ] }"#;
        let err = SchemaDoc::from_json(doc).unwrap().build().unwrap_err();
        assert!(matches!(err, SchemaError::UnknownType { ref name } if name == "Nope"));
        assert!(err.is_invalid_schema());
    }

    #[test]
    fn forward_reference_is_rejected() {
        let doc = r#"{
            "types": [
                { "kind": "vector", "name": "Points", "element": "Point", "count": 2 },
                { "kind": "struct", "name": "Point", "fields": [] }
            ],
            "entries": []
        }"#;
        let err = SchemaDoc::from_json(doc).unwrap().build().unwrap_err();
        assert!(matches!(err, SchemaError::UnknownType { .. }));
    }

    #[test]
    fn duplicate_and_primitive_names_are_rejected() {
        let doc = r#"{
            "types": [
                { "kind": "struct", "name": "A", "fields": [] },
                { "kind": "struct", "name": "A", "fields": [] }
            ],
            "entries": []
        }"#;
        let err = SchemaDoc::from_json(doc).unwrap().build().unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType { .. }));
        assert!(err.is_invalid_schema());

        let doc = r#"{
            "types": [ { "kind": "struct", "name": "uint8_t", "fields": [] } ],
            "entries": []
        }"#;
        let err = SchemaDoc::from_json(doc).unwrap().build().unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType { .. }));
    }

    #[test]
    fn contradictory_vector_is_configuration_error() {
        let doc = r#"{
            "types": [ { "kind": "vector", "name": "V", "element": "uint8_t" } ],
            "entries": []
        }"#;
        let err = SchemaDoc::from_json(doc).unwrap().build().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn vector_over_empty_fixed_vector_is_configuration_error() {
        let doc = r#"{
            "types": [
                { "kind": "vector", "name": "Inner", "element": "uint8_t", "prefix": 1 },
                { "kind": "vector", "name": "Empty", "element": "Inner", "count": 0 },
                { "kind": "vector", "name": "Outer", "element": "Empty", "prefix": 4 }
            ],
            "entries": [ { "name": "outer", "type": "Outer" } ]
        }"#;
        let err = SchemaDoc::from_json(doc).unwrap().build().unwrap_err();
        assert!(matches!(err, SchemaError::Configuration { ref name, .. } if name == "Outer"));
    }

    #[test]
    fn unknown_document_fields_are_rejected() {
        let err = SchemaDoc::from_json(r#"{ "entries": [], "extra": 1 }"#).unwrap_err();
        assert!(matches!(err, SchemaError::Document(_)));
        assert!(err.is_invalid_schema());
        assert!(!err.is_configuration());
    }

    #[test]
    fn from_schema_lists_dependencies_first() {
        let point = Type::from(Struct::new("Point", Vec::new()).field("x", INT16_T));
        let points = Vector::fixed("Points", point.clone(), 2).unwrap();
        let schema = Schema::new()
            .label("Shapes")
            .indent()
            .field("origin", point)
            .field("corners", points)
            .field("flags", UINT8_T.little_endian());

        let doc = SchemaDoc::from_schema(&schema).unwrap();
        let names: Vec<_> = doc.types.iter().map(TypeDef::name).collect();
        assert_eq!(names, ["Point", "Points"]);
        assert_eq!(doc.entries[0], EntryDoc::Marker("Shapes".to_string()));
        assert_eq!(doc.entries[1], EntryDoc::Marker(">>INDENT<<".to_string()));
        let EntryDoc::Field(flags) = &doc.entries[4] else {
            panic!("expected field");
        };
        assert_eq!(flags.ty, "uint8_t@le");

        let rebuilt = doc.build().unwrap();
        assert_eq!(rebuilt, schema);
    }

    #[test]
    fn from_schema_rejects_conflicting_names() {
        let a = Struct::new("Same", Vec::new()).field("x", INT16_T);
        let b = Struct::new("Same", Vec::new()).field("y", UINT8_T);
        let schema = Schema::new().field("a", a).field("b", b);
        let err = SchemaDoc::from_schema(&schema).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType { .. }));
    }
}
