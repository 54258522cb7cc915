//! Core building blocks shared by the sequence diagram pipeline
//!
//! Character grid, glyph sets, text measurement, configuration types,
//! errors and logging.

mod box_drawing;
mod canvas;
mod error;
pub mod logging;
mod text;
mod types;

pub use box_drawing::*;
pub use canvas::*;
pub use error::*;
pub use logging::*;
pub use text::*;
pub use types::*;
