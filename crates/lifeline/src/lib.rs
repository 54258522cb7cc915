//! Lifeline - Render text sequence diagrams as box-drawing art
//!
//! A library for parsing a small sequence diagram language and rendering it
//! with Unicode box-drawing (or plain ASCII) characters.
//!
//! # Quick Start
//!
//! ```rust
//! use lifeline::render;
//!
//! let input = "Alice->Bob:Hello\nBob-->Alice:Hi there";
//! let text = render(input).unwrap();
//! assert!(text.contains("Hello"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use lifeline::prelude::*;
//!
//! let parser = SequenceParser::new();
//! let diagram = parser.parse("title Demo\nAlice->Alice:think").unwrap();
//! assert_eq!(diagram.participant_count(), 1);
//!
//! // Offsets are recomputed on every render, never cached on the diagram
//! let offsets = compute_offsets(&diagram);
//! assert_eq!(offsets[0].middle(), 4);
//!
//! let renderer = SequenceRenderer::with_style(CharacterSet::Ascii);
//! let text = renderer.render(&diagram);
//! assert_eq!(text.lines().next(), Some("  Demo"));
//! ```

pub mod core;
pub mod sequence;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{CharacterSet, DiagramError, LifelineFill, RenderConfig};
    pub use crate::sequence::{
        compute_offsets, ArrowStyle, Diagram, Event, MessageKind, Offset,
        SequenceLayoutAlgorithm, SequenceParser, SequenceRenderer, Side,
    };
}

use crate::sequence::{Diagram, SequenceParser, SequenceRenderer};

/// Render sequence diagram text with the default configuration
///
/// Uses the Unicode character set and per-event lifeline fill.
///
/// # Arguments
/// * `input` - Diagram text, one statement per line
///
/// # Returns
/// * `Ok(String)` - The rendered diagram, without a trailing newline
/// * `Err` - If any line fails to parse
///
/// # Example
/// ```rust
/// use lifeline::render;
///
/// let text = render("a->b:ping").unwrap();
/// assert!(text.contains("┤ ping ├"));
/// ```
pub fn render(input: &str) -> anyhow::Result<String> {
    render_with_config(input, &RenderConfig::default())
}

/// Render sequence diagram text with a specific character set
///
/// # Example
/// ```rust
/// use lifeline::{render_with_style, CharacterSet};
///
/// let ascii = render_with_style("a->b:ping", CharacterSet::Ascii).unwrap();
/// assert!(ascii.is_ascii());
/// ```
pub fn render_with_style(input: &str, style: CharacterSet) -> anyhow::Result<String> {
    render_with_config(input, &RenderConfig::default().with_style(style))
}

/// Render sequence diagram text with a full rendering configuration
pub fn render_with_config(input: &str, config: &RenderConfig) -> anyhow::Result<String> {
    let diagram = parse(input)?;
    Ok(SequenceRenderer::with_config(*config).render(&diagram))
}

/// Parse sequence diagram text without rendering
///
/// # Example
/// ```rust
/// use lifeline::parse;
///
/// let diagram = parse("alice->bob:msg").unwrap();
/// assert_eq!(diagram.participant_count(), 2);
/// assert_eq!(diagram.to_string(), "alice->bob:msg");
///
/// let err = parse("alice->bob:msg\n").unwrap_err();
/// assert_eq!(err.to_string(), "Line 2: Syntax error.");
/// ```
pub fn parse(input: &str) -> Result<Diagram, DiagramError> {
    SequenceParser::new().parse(input)
}

/// Render an already parsed diagram with the default configuration
pub fn render_diagram(diagram: &Diagram) -> String {
    SequenceRenderer::new().render(diagram)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_message() {
        let output = render("a->b:hi").unwrap();
        assert!(output.contains("┤ hi ├─▶"));
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn test_render_with_style_ascii() {
        let output = render_with_style("a->b:hi", CharacterSet::Ascii).unwrap();
        assert!(output.is_ascii());
        assert!(output.contains("+ hi +->"));
    }

    #[test]
    fn test_parse_error_is_propagated() {
        let err = render("a->b:hi\nnonsense").unwrap_err();
        assert_eq!(err.to_string(), "Line 2: Syntax error.");
    }

    #[test]
    fn test_render_diagram_matches_render() {
        let diagram = parse("a->b:hi").unwrap();
        assert_eq!(render_diagram(&diagram), render("a->b:hi").unwrap());
    }
}
