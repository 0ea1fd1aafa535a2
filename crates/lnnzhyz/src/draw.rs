//! Layout of compiled text into a single SVG path.
//!
//! [`draw`] walks a [`CompiledText`] once and produces a [`Drawing`]: the raw
//! path data together with the bounding geometry needed to embed it inline.
//! [`Drawing::to_svg`] wraps it in a standalone `<svg>` element.
//!
//! # Example
//!
//! ```
//! # use lnnzhyz::draw::{draw, DrawOptions};
//! # use lnnzhyz::stroke::StrokeDefinition;
//! let text = lnnzhyz_parser::compile_mandarin("ni3_hau3").unwrap();
//! let drawing = draw(&text, &DrawOptions::default()).unwrap();
//!
//! assert_eq!(drawing.width(), 24.0);
//! assert!(drawing.to_svg(&StrokeDefinition::default()).contains("<path"));
//! ```

mod layout;
mod path;

use log::debug;
use thiserror::Error;

use lnnzhyz_core::{draw::StrokeDefinition, semantic::CompiledText};

use layout::LayoutContext;

/// Errors raised while laying out a text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    #[error("no glyph for consonant `{0}`")]
    UnknownConsonant(String),

    #[error("no affix glyph for consonant `{0}`")]
    UnknownAffixConsonant(String),

    #[error("no glyph for modifier `{0}`")]
    UnknownModifier(String),

    #[error("stroke width {0} is out of range, expected a value between 0 and 2")]
    InvalidStrokeWidth(f32),
}

/// Options controlling the drawn geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOptions {
    stroke_width: f32,
}

impl DrawOptions {
    /// Creates options with the given stroke width.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidStrokeWidth`] unless `0 < stroke_width < 2`.
    pub fn new(stroke_width: f32) -> Result<Self, DrawError> {
        let options = Self { stroke_width };
        options.validate()?;
        Ok(options)
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    fn validate(&self) -> Result<(), DrawError> {
        if self.stroke_width > 0.0 && self.stroke_width < 2.0 {
            Ok(())
        } else {
            Err(DrawError::InvalidStrokeWidth(self.stroke_width))
        }
    }
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self { stroke_width: 1.0 }
    }
}

/// A drawn text: path data plus the box it must be displayed in.
///
/// Lengths are in script units, where one column is 12 units high and a
/// line of text is 16 units (one em) high.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    stroke_width: f32,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    height_ems: f32,
    vertical_align_ems: f32,
    d: String,
}

impl Drawing {
    fn new(width: i32, stroke_width: f32, d: String) -> Self {
        let half = stroke_width / 2.0;
        let top = -2.0 - half;
        let height = 16.0 + stroke_width;
        Self {
            stroke_width,
            left: -0.5 - half,
            top,
            width: width as f32,
            height,
            height_ems: height / 16.0,
            vertical_align_ems: top / 16.0,
            d,
        }
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Left edge of the view box.
    pub fn left(&self) -> f32 {
        self.left
    }

    /// Top edge of the view box, above the proper noun marks.
    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Height of the image relative to the surrounding font size.
    pub fn height_ems(&self) -> f32 {
        self.height_ems
    }

    /// Vertical offset aligning the bottom line with the text baseline.
    pub fn vertical_align_ems(&self) -> f32 {
        self.vertical_align_ems
    }

    /// The SVG path data.
    pub fn d(&self) -> &str {
        &self.d
    }

    /// Render the drawing as an inline SVG image.
    ///
    /// Paint, cap and join come from `stroke`; the stroke width is always the
    /// one the drawing was laid out with.
    pub fn to_svg(&self, stroke: &StrokeDefinition) -> String {
        crate::export::svg::render(self, stroke).to_string()
    }
}

/// Lay out `text` into a [`Drawing`].
///
/// # Errors
///
/// Returns a [`DrawError`] when the options are invalid or an element has no
/// glyph. No partial drawing is returned.
pub fn draw(text: &CompiledText, options: &DrawOptions) -> Result<Drawing, DrawError> {
    options.validate()?;

    let mut context = LayoutContext::new();
    for word in text.words() {
        context.draw_word(word)?;
    }

    let width = context.x();
    debug!(
        words = text.words().len(),
        width = width,
        stroke_width = options.stroke_width();
        "Text drawn"
    );
    Ok(Drawing::new(
        width,
        options.stroke_width(),
        context.into_path().into_string(),
    ))
}
