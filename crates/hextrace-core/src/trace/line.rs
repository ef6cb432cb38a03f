use std::fmt;

use serde::Serialize;

use super::layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Label,
    Scalar,
    Vector,
    Struct,
}

/// Position of a vector element, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementIndex {
    pub index: u64,
    pub total: u64,
}

/// One line of trace output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceLine {
    pub depth: usize,
    pub kind: LineKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<ElementIndex>,
    pub text: String,
}

impl TraceLine {
    pub fn render(&self) -> String {
        format!("{}{}", layout::INDENT.repeat(self.depth), self.text)
    }
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_str(layout::INDENT)?;
        }
        f.write_str(&self.text)
    }
}

/// Lowercase hex of `bytes`, cut to the preview width with an ellipsis.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use hextrace_core::trace::line::hex_preview;
///
/// assert_eq!(hex_preview(&[0xde, 0xad]), "dead");
/// assert_eq!(hex_preview(&[0xff; 9]), "ffffffffffffffff...");
/// ```
pub fn hex_preview(bytes: &[u8]) -> String {
    let mut digits = hex::encode(bytes);
    if digits.len() > layout::HEX_PREVIEW_DIGITS {
        digits.truncate(layout::HEX_PREVIEW_DIGITS);
        digits.push_str(layout::PREVIEW_ELLIPSIS);
    }
    digits
}

/// `<preview padded> <name> = <value>`, with a leading separator space.
pub fn field_text(bytes: &[u8], name: &str, value: impl fmt::Display) -> String {
    format!(
        " {:<width$} {name} = {value}",
        hex_preview(bytes),
        width = layout::PREVIEW_COLUMN_WIDTH
    )
}

pub fn label_text(label: &str) -> String {
    format!("[{label}]")
}
