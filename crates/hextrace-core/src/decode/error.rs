use thiserror::Error;

use super::scalar::ScalarKind;

/// Errors returned by byte-level decoding.
///
/// # Examples
/// ```
/// use hextrace_core::{ByteCursor, DecodeError};
///
/// let mut cursor = ByteCursor::new(&[0x00, 0x01, 0x02, 0x03]);
/// cursor.read_bytes(2)?;
/// let err = cursor.read_bytes(4).unwrap_err();
/// assert_eq!(err, DecodeError::BufferUnderrun { offset: 2, needed: 4, remaining: 2 });
/// assert!(err.to_string().contains("buffer underrun"));
/// # Ok::<(), DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("truncated input: {kind} needs {needed} bytes, got {actual}")]
    TruncatedInput {
        kind: ScalarKind,
        needed: usize,
        actual: usize,
    },
    #[error("buffer underrun at offset {offset}: need {needed} bytes, {remaining} remaining")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
}
