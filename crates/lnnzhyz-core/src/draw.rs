//! Stroke styling for the rendered script.
//!
//! The whole text renders as a single SVG `<path>`; this module describes how
//! that path is stroked.
mod stroke;

pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin};
