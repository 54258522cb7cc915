//! Sequence diagram layout algorithm
//!
//! Computes the horizontal span of every participant box. The base pass
//! packs header boxes side by side; the expansion pass then walks the events
//! in document order and pushes participants right until every message and
//! note fits between the lifelines it spans. Shifts only ever accumulate, so
//! an event never undoes room made for an earlier one.

use tracing::{debug, span, trace, Level};

use super::database::{Diagram, Event, Message, MessageKind, Note, Side};
use crate::core::{display_width, max_line_width, CharacterSet, LineChars};

/// Extra columns a self loop needs beyond its text: loop run (4), loop wall
/// (1) and the pad after the text (1)
pub const SELF_MESSAGE_ALLOWANCE: usize = 6;

/// Extra columns a message between two participants needs beyond its text:
/// arrow start (2), box walls (2), inner padding (2), minimum body (1) and
/// arrowhead (1)
pub const MESSAGE_ALLOWANCE: usize = 8;

/// Extra columns a note needs beyond its text: gap (1), box walls (2), inner
/// padding (2) and gap (1)
pub const NOTE_ALLOWANCE: usize = 6;

/// Columns a box adds around its widest line: two walls and two pads
pub const BOX_DECORATION: usize = 4;

/// Horizontal column span of one participant header box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub begin: usize,
    pub end: usize,
}

impl Offset {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Lifeline column. For odd widths this is the exact center column.
    pub fn middle(&self) -> usize {
        self.begin + (self.end - self.begin + 1) / 2
    }

    pub fn width(&self) -> usize {
        self.end - self.begin + 1
    }

    fn shift(&mut self, by: usize) {
        self.begin += by;
        self.end += by;
    }
}

/// Sequence diagram layout algorithm
pub struct SequenceLayoutAlgorithm {
    lines: LineChars,
}

impl SequenceLayoutAlgorithm {
    pub fn new() -> Self {
        Self::with_style(CharacterSet::default())
    }

    pub fn with_style(style: CharacterSet) -> Self {
        Self {
            lines: LineChars::new(style),
        }
    }

    /// Compute one offset per participant, indexed by order
    pub fn layout(&self, diagram: &Diagram) -> Vec<Offset> {
        let layout_span = span!(
            Level::INFO,
            "compute_offsets",
            participant_count = diagram.participant_count(),
            event_count = diagram.events().len()
        );
        let _enter = layout_span.enter();

        let mut offsets = base_offsets(diagram);

        for event in diagram.events() {
            let Some((shift_start, shift)) = self.required_shift(event, &offsets) else {
                continue;
            };
            if shift_start >= offsets.len() || shift == 0 {
                continue;
            }
            debug!(shift_start, shift, "Shifting participants");
            for offset in &mut offsets[shift_start..] {
                offset.shift(shift);
            }
        }

        trace!(?offsets, "Offsets computed");
        offsets
    }

    /// First participant index to shift and the shift amount for one event.
    /// Titles and participant declarations need no room.
    fn required_shift(&self, event: &Event, offsets: &[Offset]) -> Option<(usize, usize)> {
        match event {
            Event::Title(_) | Event::Participant(_) => None,
            Event::Message(message) => {
                let start = shift_start_for_message(message);
                if start >= offsets.len() {
                    return Some((start, 0));
                }
                let length = max_line_width(&message.text) + self.message_allowance(message);
                let diff = match message.kind() {
                    MessageKind::SelfMessage => {
                        gap(offsets[message.from].middle(), offsets[start].middle())
                    }
                    MessageKind::Forward | MessageKind::Backward => {
                        let (left, right) = ordered(message.from, message.to);
                        gap(offsets[left].middle(), offsets[right].middle())
                    }
                };
                Some((start, length.saturating_sub(diff)))
            }
            Event::Note(note) => {
                let start = shift_start_for_note(note);
                if start >= offsets.len() {
                    return Some((start, 0));
                }
                let length = max_line_width(&note.text) + NOTE_ALLOWANCE;
                let diff = match start {
                    // Left of the first participant: the virtual left edge
                    // sits at column -1
                    0 => offsets[0].middle(),
                    _ => gap(offsets[start - 1].middle(), offsets[start].middle()),
                };
                Some((start, length.saturating_sub(diff)))
            }
        }
    }

    fn message_allowance(&self, message: &Message) -> usize {
        match message.kind() {
            MessageKind::SelfMessage => SELF_MESSAGE_ALLOWANCE,
            MessageKind::Forward | MessageKind::Backward => {
                MESSAGE_ALLOWANCE + self.style_adjustment(message)
            }
        }
    }

    /// Extra columns taken by the arrowhead drawn for this style
    fn style_adjustment(&self, message: &Message) -> usize {
        let head = match message.kind() {
            MessageKind::Backward => self.lines.backward_head(message.style.alt_end),
            _ => self.lines.forward_head(message.style.alt_end),
        };
        let primary = match message.kind() {
            MessageKind::Backward => self.lines.backward_head,
            _ => self.lines.forward_head,
        };
        display_width(head).saturating_sub(display_width(primary))
    }
}

impl Default for SequenceLayoutAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

/// Offsets for the default Unicode glyph set
pub fn compute_offsets(diagram: &Diagram) -> Vec<Offset> {
    SequenceLayoutAlgorithm::new().layout(diagram)
}

/// Header boxes packed side by side with no gap
fn base_offsets(diagram: &Diagram) -> Vec<Offset> {
    let mut offsets: Vec<Offset> = Vec::with_capacity(diagram.participant_count());
    for participant in diagram.participants() {
        let begin = offsets.last().map_or(0, |previous| previous.end + 1);
        let width = max_line_width(&participant.name) + BOX_DECORATION;
        offsets.push(Offset::new(begin, begin + width - 1));
    }
    offsets
}

fn shift_start_for_message(message: &Message) -> usize {
    match message.kind() {
        MessageKind::SelfMessage => message.from + 1,
        MessageKind::Forward => message.to,
        MessageKind::Backward => message.from,
    }
}

fn shift_start_for_note(note: &Note) -> usize {
    match note.side {
        Side::Right => note.participant + 1,
        Side::Left => note.participant,
    }
}

/// Free columns strictly between two lifelines
fn gap(left_middle: usize, right_middle: usize) -> usize {
    right_middle.saturating_sub(left_middle + 1)
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
