pub const INDENT_MARKER: &str = ">>INDENT<<";
pub const UNINDENT_MARKER: &str = ">>UNINDENT<<";
pub const RESET_INDENT_MARKER: &str = ">>RESETINDENT<<";

/// Separates a primitive name from a byte-order override (`uint16_t@le`).
pub const ENDIAN_SEPARATOR: char = '@';
pub const BIG_ENDIAN_SUFFIX: &str = "be";
pub const LITTLE_ENDIAN_SUFFIX: &str = "le";
