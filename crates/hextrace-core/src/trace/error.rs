use thiserror::Error;

use crate::decode::DecodeError;
use crate::source::HexError;

/// Errors that abort a trace pass.
///
/// Decoding failures carry the name of the field being decoded and the byte
/// offset the failing read started at.
///
/// # Examples
/// ```
/// use hextrace_core::{Schema, TraceError, UINT32_T, trace_hex};
///
/// let schema = Schema::new().field("count", UINT32_T);
/// let err = trace_hex(&schema, "0000").unwrap_err();
/// assert!(matches!(err, TraceError::Decode { ref field, offset: 0, .. } if field == "count"));
/// ```
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("malformed hex input: {0}")]
    MalformedHex(#[from] HexError),
    #[error("failed to decode '{field}' at offset {offset}: {source}")]
    Decode {
        field: String,
        offset: usize,
        #[source]
        source: DecodeError,
    },
    #[error("invalid schema at offset {offset}: {reason}")]
    InvalidSchema {
        offset: usize,
        /// Last field decoded before the offending entry, if any.
        field: Option<String>,
        reason: &'static str,
    },
}

impl TraceError {
    /// Byte offset the pass had reached, when the failure happened mid-pass.
    pub fn offset(&self) -> Option<usize> {
        match self {
            TraceError::MalformedHex(_) => None,
            TraceError::Decode { offset, .. } | TraceError::InvalidSchema { offset, .. } => {
                Some(*offset)
            }
        }
    }
}
