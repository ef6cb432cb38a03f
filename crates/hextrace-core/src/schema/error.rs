use thiserror::Error;

/// Errors raised while building or loading a schema.
///
/// `Configuration` covers contradictory sizing (a vector with both or
/// neither of a length prefix and a fixed count); everything else makes the
/// schema invalid as a whole.
///
/// # Examples
/// ```
/// use hextrace_core::{SchemaError, UINT8_T, Vector};
///
/// let err = Vector::new("data", UINT8_T, 0, None).unwrap_err();
/// assert!(matches!(err, SchemaError::Configuration { .. }));
/// assert!(err.is_configuration());
/// assert!(!err.is_invalid_schema());
/// ```
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("configuration error in '{name}': {reason}")]
    Configuration { name: String, reason: String },
    #[error("unknown type '{name}'")]
    UnknownType { name: String },
    #[error("duplicate type definition '{name}'")]
    DuplicateType { name: String },
    #[error("schema document error: {0}")]
    Document(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, SchemaError::Configuration { .. })
    }

    /// Unknown or duplicate type names, or a document that does not match
    /// the schema layout.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(
            self,
            SchemaError::UnknownType { .. }
                | SchemaError::DuplicateType { .. }
                | SchemaError::Document(_)
        )
    }

    pub(crate) fn configuration(name: &str, reason: impl Into<String>) -> Self {
        SchemaError::Configuration {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
