//! Shared text utilities for diagram processing
//!
//! Labels in the diagram language carry an explicit two-character line-break
//! marker (`\n` written literally) instead of real newlines. Widths are
//! always measured in terminal columns, never bytes.

use unicode_width::UnicodeWidthChar;

/// The literal marker that splits a label into display lines
pub const LINE_BREAK_MARKER: &str = "\\n";

/// Split a label on the line-break marker.
///
/// An empty label yields a single empty line, so every label occupies at
/// least one row.
///
/// # Example
/// ```
/// use lifeline::core::split_lines;
///
/// assert_eq!(split_lines(r"req\nresp"), vec!["req", "resp"]);
/// assert_eq!(split_lines(""), vec![""]);
/// ```
pub fn split_lines(label: &str) -> Vec<&str> {
    label.split(LINE_BREAK_MARKER).collect()
}

/// Number of display lines in a label
pub fn line_count(label: &str) -> usize {
    label.matches(LINE_BREAK_MARKER).count() + 1
}

/// Column width of a single character.
///
/// Every character occupies at least one column so that measuring and drawing
/// agree even for control or combining characters.
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(1).max(1)
}

/// Column width of a string
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Width of the widest display line of a label
pub fn max_line_width(label: &str) -> usize {
    split_lines(label)
        .into_iter()
        .map(display_width)
        .max()
        .unwrap_or(0)
}

/// Center `s` within `width` columns using `fill`.
///
/// Odd leftovers go to the right side. Strings already at least `width`
/// columns wide are returned unchanged.
pub fn center(s: &str, fill: char, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let left = (width - current) / 2;
    let right = width - current - left;

    let mut out = String::with_capacity(s.len() + left + right);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(s);
    out.extend(std::iter::repeat(fill).take(right));
    out
}
