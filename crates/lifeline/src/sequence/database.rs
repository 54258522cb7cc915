//! Sequence diagram model
//!
//! Stores participants and the ordered events of a sequence diagram. The
//! diagram owns everything; events refer to participants by their order.

use std::collections::HashMap;
use std::fmt;

/// A participant in the sequence diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Display name, may contain the `\n` line-break marker
    pub name: String,
    /// 0-based position, assigned on first appearance
    pub order: usize,
}

/// Arrow drawing flags parsed from `->`, `-->`, `->>` and `-->>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ArrowStyle {
    /// Dashed instead of solid body (`--`)
    pub alt_body: bool,
    /// Alternate arrowhead (`>>`)
    pub alt_end: bool,
}

impl ArrowStyle {
    pub fn new(alt_body: bool, alt_end: bool) -> Self {
        Self { alt_body, alt_end }
    }

    /// Parse an arrow token, `None` if it is not one of the four arrows
    pub fn from_arrow(arrow: &str) -> Option<Self> {
        match arrow {
            "->" => Some(Self::new(false, false)),
            "-->" => Some(Self::new(true, false)),
            "->>" => Some(Self::new(false, true)),
            "-->>" => Some(Self::new(true, true)),
            _ => None,
        }
    }

    /// The arrow token this style was parsed from
    pub fn arrow(&self) -> &'static str {
        match (self.alt_body, self.alt_end) {
            (false, false) => "->",
            (true, false) => "-->",
            (false, true) => "->>",
            (true, true) => "-->>",
        }
    }
}

impl fmt::Display for ArrowStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.arrow())
    }
}

/// Direction of a message, derived from participant order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Sender and receiver are the same participant
    SelfMessage,
    /// Sender is left of the receiver
    Forward,
    /// Sender is right of the receiver
    Backward,
}

/// A message between participants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub from: usize,
    pub to: usize,
    pub text: String,
    pub style: ArrowStyle,
}

impl Message {
    pub fn new(from: usize, to: usize, text: impl Into<String>) -> Self {
        Self {
            from,
            to,
            text: text.into(),
            style: ArrowStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ArrowStyle) -> Self {
        self.style = style;
        self
    }

    pub fn kind(&self) -> MessageKind {
        match self.from.cmp(&self.to) {
            std::cmp::Ordering::Equal => MessageKind::SelfMessage,
            std::cmp::Ordering::Less => MessageKind::Forward,
            std::cmp::Ordering::Greater => MessageKind::Backward,
        }
    }
}

/// Which side of its participant a note is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A note attached to one participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub participant: usize,
    pub side: Side,
    pub text: String,
}

/// One statement of the diagram, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Title(String),
    /// Explicit `participant` declaration, by order
    Participant(usize),
    Message(Message),
    Note(Note),
}

/// Sequence diagram: ordered events plus the participants they mention
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    participants: Vec<Participant>,
    by_name: HashMap<String, usize>,
    events: Vec<Event>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a participant by name, creating it with the next order if
    /// this is its first mention. Returns the order.
    pub fn get_or_create_participant(&mut self, name: &str) -> usize {
        if let Some(&order) = self.by_name.get(name) {
            return order;
        }
        let order = self.participants.len();
        self.participants.push(Participant {
            name: name.to_string(),
            order,
        });
        self.by_name.insert(name.to_string(), order);
        order
    }

    pub fn add_title(&mut self, text: impl Into<String>) {
        self.events.push(Event::Title(text.into()));
    }

    /// Record a `participant` declaration, creating the participant if needed
    pub fn declare_participant(&mut self, name: &str) -> usize {
        let order = self.get_or_create_participant(name);
        self.events.push(Event::Participant(order));
        order
    }

    /// Add a message between two named participants
    pub fn add_message(&mut self, from: &str, to: &str, text: &str, style: ArrowStyle) {
        let from = self.get_or_create_participant(from);
        let to = self.get_or_create_participant(to);
        self.events
            .push(Event::Message(Message::new(from, to, text).with_style(style)));
    }

    /// Add a note beside a named participant
    pub fn add_note(&mut self, participant: &str, side: Side, text: &str) {
        let participant = self.get_or_create_participant(participant);
        self.events.push(Event::Note(Note {
            participant,
            side,
            text: text.to_string(),
        }));
    }

    /// Append an event as is, without resolving names
    #[cfg(test)]
    pub(crate) fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get all participants in order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.by_name.get(name).map(|&order| &self.participants[order])
    }

    /// Get all events in document order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Number of message events
    pub fn message_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Message(_)))
            .count()
    }

    /// The title shown above the diagram; the last `title` statement wins
    pub fn title(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            Event::Title(text) => Some(text.as_str()),
            _ => None,
        })
    }

    fn name(&self, order: usize) -> &str {
        &self.participants[order].name
    }

    fn write_event(&self, f: &mut fmt::Formatter<'_>, event: &Event) -> fmt::Result {
        match event {
            Event::Title(text) => write!(f, "title {}", text),
            Event::Participant(order) => write!(f, "participant {}", self.name(*order)),
            Event::Message(message) => write!(
                f,
                "{}{}{}:{}",
                self.name(message.from),
                message.style,
                self.name(message.to),
                message.text
            ),
            Event::Note(note) => write!(
                f,
                "note {} of {}:{}",
                note.side,
                self.name(note.participant),
                note.text
            ),
        }
    }
}

/// Re-serializes the diagram as grammar text, one statement per line
impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            self.write_event(f, event)?;
        }
        Ok(())
    }
}
