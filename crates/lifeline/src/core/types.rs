//! Core type definitions for rendering configuration
//!
//! This module contains the knobs a caller can turn on the renderer:
//! which character set to draw with and how lifelines are filled in.

use std::fmt;
use std::str::FromStr;

/// Character set for rendering output
///
/// Controls which characters are used for drawing boxes, arrows and lifelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CharacterSet {
    /// Pure ASCII characters only: + - | . > <
    Ascii,
    /// Unicode box-drawing characters: ┌ ┐ └ ┘ ─ │ ▶ ◀
    #[default]
    Unicode,
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterSet::Ascii => write!(f, "ascii"),
            CharacterSet::Unicode => write!(f, "unicode"),
        }
    }
}

impl FromStr for CharacterSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascii" => Ok(CharacterSet::Ascii),
            "unicode" => Ok(CharacterSet::Unicode),
            _ => Err(format!("Unknown character set: {}", s)),
        }
    }
}

/// How often lifelines are redrawn behind rendered events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum LifelineFill {
    /// Every other message or note gets its block filled
    #[default]
    PerEvent,
    /// Every other emitted row gets filled, giving dashed lifelines
    PerRow,
}

impl fmt::Display for LifelineFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifelineFill::PerEvent => write!(f, "per-event"),
            LifelineFill::PerRow => write!(f, "per-row"),
        }
    }
}

impl FromStr for LifelineFill {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "per-event" | "event" => Ok(LifelineFill::PerEvent),
            "per-row" | "row" => Ok(LifelineFill::PerRow),
            _ => Err(format!("Unknown lifeline fill mode: {}", s)),
        }
    }
}

/// Rendering configuration shared by the library API and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub style: CharacterSet,
    pub lifeline_fill: LifelineFill,
}

impl RenderConfig {
    pub fn new(style: CharacterSet, lifeline_fill: LifelineFill) -> Self {
        Self {
            style,
            lifeline_fill,
        }
    }

    pub fn with_style(mut self, style: CharacterSet) -> Self {
        self.style = style;
        self
    }

    pub fn with_lifeline_fill(mut self, lifeline_fill: LifelineFill) -> Self {
        self.lifeline_fill = lifeline_fill;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_set_display() {
        assert_eq!(CharacterSet::Ascii.to_string(), "ascii");
        assert_eq!(CharacterSet::Unicode.to_string(), "unicode");
    }

    #[test]
    fn test_character_set_from_str() {
        assert_eq!("ASCII".parse::<CharacterSet>(), Ok(CharacterSet::Ascii));
        assert_eq!("unicode".parse::<CharacterSet>(), Ok(CharacterSet::Unicode));
        assert!("braille".parse::<CharacterSet>().is_err());
    }

    #[test]
    fn test_lifeline_fill_round_trip() {
        for fill in [LifelineFill::PerEvent, LifelineFill::PerRow] {
            assert_eq!(fill.to_string().parse::<LifelineFill>(), Ok(fill));
        }
    }

    #[test]
    fn test_render_config_builders() {
        let config = RenderConfig::default()
            .with_style(CharacterSet::Ascii)
            .with_lifeline_fill(LifelineFill::PerRow);
        assert_eq!(
            config,
            RenderConfig::new(CharacterSet::Ascii, LifelineFill::PerRow)
        );
        assert_eq!(RenderConfig::default().style, CharacterSet::Unicode);
        assert_eq!(RenderConfig::default().lifeline_fill, LifelineFill::PerEvent);
    }
}
