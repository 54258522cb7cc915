//! Text blocks for the pieces of a sequence diagram
//!
//! Every function here returns the rows of one block, left-aligned at column
//! zero. The renderer decides where a block goes and lays lifelines over it.

use super::database::ArrowStyle;
use crate::core::{center, display_width, split_lines, BoxChars, CharacterSet, LineChars};

/// Horizontal run of a self loop before it turns down
pub const LOOP_RUN: usize = 4;

/// Columns of the stroke between a lifeline and a message box
pub const ARROW_START: usize = 2;

/// Inner padding on each side of a box label
pub const BOX_PADDING: usize = 1;

/// Every glyph the renderer needs for one character set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub boxes: BoxChars,
    pub notes: BoxChars,
    pub lines: LineChars,
}

impl Glyphs {
    pub fn new(style: CharacterSet) -> Self {
        Self {
            boxes: BoxChars::rectangle(style),
            notes: BoxChars::note(style),
            lines: LineChars::new(style),
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new(CharacterSet::default())
    }
}

/// Draw `label` in a bordered box, one row per display line, centered.
///
/// Boxes shorter than `height` lines get empty bordered rows so that a row
/// of headers lines up.
pub fn box_lines(label: &str, height: usize, chars: &BoxChars) -> Vec<String> {
    let lines = split_lines(label);
    let inner = lines.iter().map(|l| display_width(l)).max().unwrap_or(0) + 2 * BOX_PADDING;
    let rule = repeat(chars.horizontal, inner);

    let mut rows = Vec::with_capacity(height.max(lines.len()) + 2);
    rows.push(format!("{}{}{}", chars.top_left, rule, chars.top_right));
    for line in &lines {
        rows.push(format!("{}{}{}", chars.vertical, center(line, ' ', inner), chars.vertical));
    }
    for _ in lines.len()..height {
        rows.push(format!("{}{}{}", chars.vertical, repeat(' ', inner), chars.vertical));
    }
    rows.push(format!("{}{}{}", chars.bottom_left, rule, chars.bottom_right));
    rows
}

/// A box whose first content row has tee walls so an arrow can run through it
pub fn message_box(label: &str, chars: &BoxChars) -> Vec<String> {
    let mut rows = box_lines(label, 0, chars);
    let walls = rows[1].chars().count();
    let inner: String = rows[1].chars().skip(1).take(walls - 2).collect();
    rows[1] = format!("{}{}{}", chars.t_left, inner, chars.t_right);
    rows
}

/// A box with the folded corner used for notes
pub fn note_box(label: &str, glyphs: &Glyphs) -> Vec<String> {
    box_lines(label, 0, &glyphs.notes)
}

/// Loop that leaves a lifeline, carries the text and comes back:
///
/// ```text
/// ────┐
///     │text
/// ◀───┘
/// ```
pub fn self_loop(label: &str, style: ArrowStyle, glyphs: &Glyphs) -> Vec<String> {
    let body = glyphs.lines.body(style.alt_body);
    let head = glyphs.lines.backward_head(style.alt_end);
    let vertical = glyphs.lines.vertical(style.alt_body);

    let mut rows = vec![format!("{}{}", repeat(body, LOOP_RUN), glyphs.boxes.top_right)];
    for line in split_lines(label) {
        rows.push(format!("{}{}{}", repeat(' ', LOOP_RUN), vertical, line));
    }
    let run = LOOP_RUN.saturating_sub(display_width(head));
    rows.push(format!("{}{}{}", head, repeat(body, run), glyphs.boxes.bottom_right));
    rows
}

/// Left-to-right arrow: start stroke, message box, body, head
pub fn forward_message(
    label: &str,
    body_len: usize,
    style: ArrowStyle,
    glyphs: &Glyphs,
) -> Vec<String> {
    let stroke = glyphs.lines.body(style.alt_body);
    let head = glyphs.lines.forward_head(style.alt_end);

    message_box(label, &glyphs.boxes)
        .into_iter()
        .enumerate()
        .map(|(i, row)| match i {
            1 => format!(
                "{}{}{}{}",
                repeat(stroke, ARROW_START),
                row,
                repeat(stroke, body_len),
                head
            ),
            _ => format!("{}{}", repeat(' ', ARROW_START), row),
        })
        .collect()
}

/// Right-to-left arrow: head, body, message box, start stroke
pub fn backward_message(
    label: &str,
    body_len: usize,
    style: ArrowStyle,
    glyphs: &Glyphs,
) -> Vec<String> {
    let stroke = glyphs.lines.body(style.alt_body);
    let head = glyphs.lines.backward_head(style.alt_end);
    let indent = display_width(head) + body_len;

    message_box(label, &glyphs.boxes)
        .into_iter()
        .enumerate()
        .map(|(i, row)| match i {
            1 => format!(
                "{}{}{}{}",
                head,
                repeat(stroke, body_len),
                row,
                repeat(stroke, ARROW_START)
            ),
            _ => format!("{}{}", repeat(' ', indent), row),
        })
        .collect()
}

fn repeat(c: char, n: usize) -> String {
    std::iter::repeat(c).take(n).collect()
}
