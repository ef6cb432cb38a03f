use thiserror::Error;

/// Errors returned while turning hex text into bytes.
///
/// # Examples
/// ```
/// use hextrace_core::{HexError, parse_hex_text};
///
/// let err = parse_hex_text("0A B").unwrap_err();
/// assert_eq!(err, HexError::OddLength { digits: 3 });
/// assert!(err.to_string().contains("odd number of hex digits"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("odd number of hex digits: {digits}")]
    OddLength { digits: usize },
    #[error("invalid hex character {character:?} at digit {index}")]
    InvalidCharacter { character: char, index: usize },
}
