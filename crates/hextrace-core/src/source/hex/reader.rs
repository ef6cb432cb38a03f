use super::layout;

/// Remove `#` comments (to end of line) and every whitespace character.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use hextrace_core::source::hex::reader::strip_comments_and_whitespace;
///
/// let text = "00 00 # header\n00 2a\n";
/// assert_eq!(strip_comments_and_whitespace(text), "0000002a");
/// ```
pub fn strip_comments_and_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| match line.find(layout::COMMENT_MARKER) {
            Some(pos) => &line[..pos],
            None => line,
        })
        .flat_map(str::chars)
        .filter(|c| !c.is_whitespace())
        .collect()
}
