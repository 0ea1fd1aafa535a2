//! SVG path data writer.
//!
//! All coordinates are integral script units, so commands are written without
//! any float formatting.

use std::fmt::Write;

use lnnzhyz_core::glyph::{Flip, Stroke};

/// Accumulates the `d` attribute of the script path.
#[derive(Debug, Default, Clone)]
pub(crate) struct PathData {
    d: String,
}

impl PathData {
    /// Absolute move, `M{x},{y}`.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.push(format_args!("M{x},{y}"));
    }

    /// Absolute horizontal line, `H{x}`.
    pub fn horizontal_to(&mut self, x: i32) {
        self.push(format_args!("H{x}"));
    }

    /// Relative horizontal line, `h{dx}`.
    pub fn horizontal(&mut self, dx: i32) {
        self.push(format_args!("h{dx}"));
    }

    /// Relative vertical line, `v{dy}`.
    pub fn vertical(&mut self, dy: i32) {
        self.push(format_args!("v{dy}"));
    }

    /// Move to `origin` and replay `strokes` from there.
    ///
    /// Strokes are mirrored by `flip` first; stems lose length when `shrink`
    /// is set. [`Stroke::At`] moves become absolute moves relative to
    /// `origin`.
    pub fn fragment(&mut self, origin: (i32, i32), strokes: &[Stroke], flip: Flip, shrink: bool) {
        let (ox, oy) = origin;
        self.move_to(ox, oy);
        self.strokes(origin, strokes, flip, shrink);
    }

    /// Replay `strokes` from the current pen position.
    pub fn strokes(&mut self, origin: (i32, i32), strokes: &[Stroke], flip: Flip, shrink: bool) {
        let (ox, oy) = origin;
        for stroke in strokes {
            match stroke.flipped(flip).shrunk(shrink) {
                Stroke::H(dx) => self.horizontal(dx),
                Stroke::V(dy) | Stroke::Stem(dy) => self.vertical(dy),
                Stroke::M(dx, dy) => self.push(format_args!("m{dx},{dy}")),
                Stroke::At(dx, dy) => self.move_to(ox + dx, oy + dy),
            }
        }
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.d
    }

    pub fn into_string(self) -> String {
        self.d
    }

    fn push(&mut self, command: std::fmt::Arguments<'_>) {
        // Writing into a String cannot fail
        let _ = self.d.write_fmt(command);
    }
}
