/// Starts a comment that runs to the end of the line.
pub const COMMENT_MARKER: char = '#';

/// Hex digits per decoded byte.
pub const DIGITS_PER_BYTE: usize = 2;
