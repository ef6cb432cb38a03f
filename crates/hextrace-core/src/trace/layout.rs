/// Repeated once per nesting level at the start of each line.
pub const INDENT: &str = "\t";

/// Hex digits shown before the preview is cut short.
pub const HEX_PREVIEW_DIGITS: usize = 16;
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Column width the preview is padded to, so names line up.
pub const PREVIEW_COLUMN_WIDTH: usize = HEX_PREVIEW_DIGITS + 4;
