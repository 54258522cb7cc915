//! Sequence diagrams
//!
//! Parses the line-oriented sequence language and renders it as box-drawing
//! text.
//!
//! Syntax example:
//! ```text
//! title Example Tattler
//! participant Dad
//! Brother 1->Brother 2:secret
//! note left of Sister:*eavesdrop*
//! Sister->Dad:tattle
//! ```

mod database;
pub mod glyphs;
mod layout;
mod parser;
mod renderer;

pub use database::{
    ArrowStyle, Diagram, Event, Message, MessageKind, Note, Participant, Side,
};
pub use layout::{
    compute_offsets, Offset, SequenceLayoutAlgorithm, BOX_DECORATION, MESSAGE_ALLOWANCE,
    NOTE_ALLOWANCE, SELF_MESSAGE_ALLOWANCE,
};
pub use parser::{SequenceParser, Statement};
pub use renderer::SequenceRenderer;
