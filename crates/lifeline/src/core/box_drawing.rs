//! Shared box drawing characters for diagram rendering
//!
//! This module provides consistent box and arrow characters across the
//! renderer, supporting both ASCII and Unicode modes.

use super::CharacterSet;

/// Box drawing characters for rendering rectangular shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    /// T-junction pointing right (right wall of a box sitting on a line)
    pub t_right: char,
    /// T-junction pointing left (left wall of a box sitting on a line)
    pub t_left: char,
}

impl BoxChars {
    /// Standard rectangle box characters
    pub fn rectangle(style: CharacterSet) -> Self {
        match style {
            CharacterSet::Ascii => Self::ascii(),
            CharacterSet::Unicode => Self::unicode(),
        }
    }

    /// Note box: a rectangle whose top-right corner is folded into a
    /// double-line glyph so notes read differently from messages
    pub fn note(style: CharacterSet) -> Self {
        let top_right = match style {
            CharacterSet::Ascii => '#',
            CharacterSet::Unicode => '╗',
        };
        Self {
            top_right,
            ..Self::rectangle(style)
        }
    }

    /// ASCII-only box characters
    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            t_right: '+',
            t_left: '+',
        }
    }

    /// Unicode box characters
    pub fn unicode() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
            t_right: '├',
            t_left: '┤',
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Line drawing characters for lifelines and message arrows
///
/// Each arrow part has a primary and an alternate glyph. The alternate body is
/// the dashed stroke, the alternate head is the `->>` arrowhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineChars {
    pub lifeline: char,
    pub body: char,
    pub alt_body: char,
    pub vertical: char,
    pub alt_vertical: char,
    pub forward_head: &'static str,
    pub alt_forward_head: &'static str,
    pub backward_head: &'static str,
    pub alt_backward_head: &'static str,
}

impl LineChars {
    /// Get line characters for the given style
    pub fn new(style: CharacterSet) -> Self {
        match style {
            CharacterSet::Ascii => Self::ascii(),
            CharacterSet::Unicode => Self::unicode(),
        }
    }

    /// ASCII line characters
    pub fn ascii() -> Self {
        Self {
            lifeline: '|',
            body: '-',
            alt_body: '.',
            vertical: '|',
            alt_vertical: ':',
            forward_head: ">",
            alt_forward_head: ">>",
            backward_head: "<",
            alt_backward_head: "<<",
        }
    }

    /// Unicode line characters
    pub fn unicode() -> Self {
        Self {
            lifeline: '│',
            body: '─',
            alt_body: '-',
            vertical: '│',
            alt_vertical: '¦',
            forward_head: "▶",
            alt_forward_head: ">",
            backward_head: "◀",
            alt_backward_head: "<",
        }
    }

    /// Horizontal stroke, dashed when `alt_body` is set
    pub fn body(&self, alt_body: bool) -> char {
        if alt_body {
            self.alt_body
        } else {
            self.body
        }
    }

    /// Vertical stroke of a self loop, dashed when `alt_body` is set
    pub fn vertical(&self, alt_body: bool) -> char {
        if alt_body {
            self.alt_vertical
        } else {
            self.vertical
        }
    }

    pub fn forward_head(&self, alt_end: bool) -> &'static str {
        if alt_end {
            self.alt_forward_head
        } else {
            self.forward_head
        }
    }

    pub fn backward_head(&self, alt_end: bool) -> &'static str {
        if alt_end {
            self.alt_backward_head
        } else {
            self.backward_head
        }
    }
}

impl Default for LineChars {
    fn default() -> Self {
        Self::unicode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_chars_ascii() {
        let chars = BoxChars::rectangle(CharacterSet::Ascii);
        assert_eq!(chars.top_left, '+');
        assert_eq!(chars.horizontal, '-');
    }

    #[test]
    fn test_box_chars_unicode() {
        let chars = BoxChars::rectangle(CharacterSet::Unicode);
        assert_eq!(chars.top_left, '┌');
        assert_eq!(chars.t_left, '┤');
        assert_eq!(chars.t_right, '├');
    }

    #[test]
    fn test_note_chars_only_change_top_right() {
        let note = BoxChars::note(CharacterSet::Unicode);
        assert_eq!(note.top_right, '╗');
        assert_eq!(note.bottom_right, '┘');
        assert_eq!(BoxChars::note(CharacterSet::Ascii).top_right, '#');
    }

    #[test]
    fn test_line_chars_styles() {
        let chars = LineChars::new(CharacterSet::Unicode);
        assert_eq!(chars.body(false), '─');
        assert_eq!(chars.body(true), '-');
        assert_eq!(chars.vertical(true), '¦');
        assert_eq!(chars.forward_head(false), "▶");
        assert_eq!(chars.backward_head(true), "<");
    }

    #[test]
    fn test_line_chars_ascii_alt_heads_are_double() {
        let chars = LineChars::new(CharacterSet::Ascii);
        assert_eq!(chars.forward_head(true), ">>");
        assert_eq!(chars.backward_head(true), "<<");
        assert_eq!(chars.lifeline, '|');
    }
}
