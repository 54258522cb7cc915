//! Sequence diagram renderer
//!
//! Turns a parsed diagram into text. Header boxes go on top and bottom, every
//! message or note becomes a block of rows in between, and lifelines are laid
//! over alternating blocks (or rows) so that arrows stay readable.

use tracing::{debug, span, trace, Level};

use super::database::{Diagram, Event, Message, MessageKind, Note, Side};
use super::glyphs::{
    backward_message, box_lines, forward_message, note_box, self_loop, Glyphs, ARROW_START,
};
use super::layout::{Offset, SequenceLayoutAlgorithm, BOX_DECORATION};
use crate::core::{
    center, display_width, line_count, max_line_width, split_lines, AsciiCanvas, CharacterSet,
    LifelineFill, RenderConfig,
};

/// Sequence diagram renderer
pub struct SequenceRenderer {
    config: RenderConfig,
}

impl SequenceRenderer {
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
        }
    }

    pub fn with_style(style: CharacterSet) -> Self {
        Self::with_config(RenderConfig::default().with_style(style))
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the diagram. Rows are right-trimmed and joined with `\n`, with
    /// no trailing newline.
    pub fn render(&self, diagram: &Diagram) -> String {
        let render_span = span!(
            Level::INFO,
            "render_sequence",
            participant_count = diagram.participant_count(),
            event_count = diagram.events().len(),
            style = %self.config.style,
            fill = %self.config.lifeline_fill
        );
        let _enter = render_span.enter();

        if diagram.participants().is_empty() {
            debug!("No participants, rendering title only");
            return diagram
                .title()
                .map(|title| split_lines(title).join("\n"))
                .unwrap_or_default();
        }

        let offsets = SequenceLayoutAlgorithm::with_style(self.config.style).layout(diagram);
        let mut context = RenderContext::new(diagram, offsets, &self.config);
        context.draw();
        context.finish()
    }
}

impl Default for SequenceRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Columns an event block covers. Lifelines at or outside the span are drawn
/// over the block; those strictly inside would cut through it.
#[derive(Debug, Clone, Copy)]
struct Span {
    /// `None` when the block starts left of every lifeline
    start: Option<usize>,
    end: usize,
}

impl Span {
    fn between(a: usize, b: usize) -> Self {
        Self {
            start: Some(a.min(b)),
            end: a.max(b),
        }
    }

    fn keeps_lifeline(&self, column: usize) -> bool {
        self.start.is_some_and(|start| column <= start) || column >= self.end
    }
}

/// Mutable state of one render call
struct RenderContext<'a> {
    diagram: &'a Diagram,
    offsets: Vec<Offset>,
    glyphs: Glyphs,
    fill: LifelineFill,
    lifeline_toggle: bool,
    canvas: AsciiCanvas,
    row: usize,
    title: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    fn new(diagram: &'a Diagram, offsets: Vec<Offset>, config: &RenderConfig) -> Self {
        Self {
            diagram,
            offsets,
            glyphs: Glyphs::new(config.style),
            fill: config.lifeline_fill,
            lifeline_toggle: true,
            canvas: AsciiCanvas::new(0, 0),
            row: 0,
            title: None,
        }
    }

    fn draw(&mut self) {
        self.add_headers();
        if self.fill == LifelineFill::PerEvent {
            self.add_full_lifeline();
        }

        let diagram = self.diagram;
        for event in diagram.events() {
            self.add_event(event);
        }

        match self.fill {
            LifelineFill::PerEvent => {
                if !self.lifeline_toggle {
                    self.add_blank_row();
                }
                self.add_full_lifeline();
            }
            LifelineFill::PerRow => {
                if self.lifeline_toggle {
                    self.add_full_lifeline();
                }
            }
        }
        self.add_headers();
    }

    /// Prepend the title, if any, and assemble the final text
    fn finish(self) -> String {
        let mut rows = Vec::new();
        if let Some(title) = self.title {
            let width = self.offsets.last().map_or(0, |offset| offset.end);
            for line in split_lines(title) {
                rows.push(center(line, ' ', width).trim_end().to_string());
            }
            rows.push(String::new());
        }
        rows.extend(self.canvas.rows());
        rows.join("\n")
    }

    fn add_headers(&mut self) {
        let height = self
            .diagram
            .participants()
            .iter()
            .map(|participant| line_count(&participant.name))
            .max()
            .unwrap_or(0);

        for (participant, offset) in self.diagram.participants().iter().zip(&self.offsets) {
            let rows = box_lines(&participant.name, height, &self.glyphs.boxes);
            for (i, line) in rows.iter().enumerate() {
                self.canvas.draw_text(offset.begin, self.row + i, line);
            }
        }
        self.row += height + 2;
    }

    fn add_full_lifeline(&mut self) {
        for offset in &self.offsets {
            self.canvas
                .set_char(offset.middle(), self.row, self.glyphs.lines.lifeline);
        }
        self.row += 1;
    }

    fn add_blank_row(&mut self) {
        self.canvas.ensure_size(0, self.row + 1);
        self.row += 1;
    }

    fn add_event(&mut self, event: &'a Event) {
        let (column, block, span) = match event {
            Event::Title(text) => {
                self.title = Some(text.as_str());
                return;
            }
            Event::Participant(_) => return,
            Event::Message(message) => self.message_block(message),
            Event::Note(note) => self.note_block(note),
        };
        trace!(column, rows = block.len(), ?span, "Placing event block");

        for line in &block {
            self.canvas.ensure_size(0, self.row + 1);
            self.canvas.draw_text(column, self.row, line);
            if self.lifeline_toggle {
                self.fill_lifelines(span);
            }
            if self.fill == LifelineFill::PerRow {
                self.lifeline_toggle = !self.lifeline_toggle;
            }
            self.row += 1;
        }
        if self.fill == LifelineFill::PerEvent {
            self.lifeline_toggle = !self.lifeline_toggle;
        }
    }

    fn fill_lifelines(&mut self, span: Span) {
        for offset in &self.offsets {
            let column = offset.middle();
            if span.keeps_lifeline(column) {
                self.canvas
                    .set_char(column, self.row, self.glyphs.lines.lifeline);
            }
        }
    }

    fn middle(&self, order: usize) -> usize {
        self.offsets[order].middle()
    }

    /// Next participant to the right, or the last one
    fn clamped_next(&self, order: usize) -> usize {
        (order + 1).min(self.offsets.len() - 1)
    }

    fn message_block(&self, message: &Message) -> (usize, Vec<String>, Span) {
        let from = self.middle(message.from);
        let to = self.middle(message.to);
        let text_width = max_line_width(&message.text);

        match message.kind() {
            MessageKind::SelfMessage => {
                let next = self.middle(self.clamped_next(message.from));
                let block = self_loop(&message.text, message.style, &self.glyphs);
                (from + 1, block, Span::between(from, next))
            }
            MessageKind::Forward => {
                let head = self.glyphs.lines.forward_head(message.style.alt_end);
                let body = body_length(from, to, text_width, head);
                let block = forward_message(&message.text, body, message.style, &self.glyphs);
                (from + 1, block, Span::between(from, to))
            }
            MessageKind::Backward => {
                let head = self.glyphs.lines.backward_head(message.style.alt_end);
                let body = body_length(to, from, text_width, head);
                let block = backward_message(&message.text, body, message.style, &self.glyphs);
                (to + 1, block, Span::between(to, from))
            }
        }
    }

    fn note_block(&self, note: &Note) -> (usize, Vec<String>, Span) {
        let block = note_box(&note.text, &self.glyphs);
        let middle = self.middle(note.participant);

        match (note.side, note.participant) {
            (Side::Right, order) => {
                let next = self.middle(self.clamped_next(order));
                (middle + 2, block, Span::between(middle, next))
            }
            (Side::Left, 0) => (
                0,
                block,
                Span {
                    start: None,
                    end: middle,
                },
            ),
            (Side::Left, order) => {
                let box_width = max_line_width(&note.text) + BOX_DECORATION;
                assert!(
                    middle > box_width,
                    "note box of width {box_width} does not fit left of column {middle}"
                );
                let previous = self.middle(order - 1);
                (middle - 1 - box_width, block, Span::between(previous, middle))
            }
        }
    }
}

/// Arrow body that fills the room between two lifelines once the start
/// stroke, message box and head are placed
fn body_length(left_middle: usize, right_middle: usize, text_width: usize, head: &str) -> usize {
    let room = right_middle.saturating_sub(left_middle + 1);
    room.saturating_sub(ARROW_START + text_width + BOX_DECORATION + display_width(head))
}
