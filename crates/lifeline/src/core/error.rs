//! Core error types for diagram processing
//!
//! Parsing is the only stage that can fail on user input. Rendering is total
//! over any successfully parsed diagram.

use thiserror::Error;

/// Core error types for diagram processing
#[derive(Error, Debug)]
pub enum DiagramError {
    /// A non-empty or empty line that matches no statement of the grammar
    #[error("Line {line}: Syntax error.")]
    SyntaxError { line: usize },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new syntax error for a 1-based line number
    pub fn syntax_error(line: usize) -> Self {
        Self::SyntaxError { line }
    }

    /// The 1-based line number of a syntax error
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::SyntaxError { line } => Some(*line),
            Self::IoError { .. } => None,
        }
    }
}
