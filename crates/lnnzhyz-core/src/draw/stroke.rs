//! Stroke definitions for the script path.
//!
//! # Overview
//!
//! Exported types:
//! - [`StrokeDefinition`]: paint, width, cap and join of the path stroke
//! - [`StrokeCap`]: Enum defining how line endpoints are rendered (butt, round, square)
//! - [`StrokeJoin`]: Enum defining how line corners are rendered (miter, round, bevel)
//! - [`apply_stroke!`](crate::apply_stroke!): Macro for applying stroke attributes to SVG elements
//!
//! # Applying to SVG Elements
//!
//! ```
//! use lnnzhyz_core::draw::StrokeDefinition;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::default();
//! let path = svg_element::Path::new().set("d", "M0,0h6");
//!
//! // Apply stroke attributes (paint, opacity, width, cap, join)
//! let path = lnnzhyz_core::apply_stroke!(path, &stroke);
//! ```
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `paint` | `stroke`, `stroke-opacity` | `"currentColor"`, `0.5` |
//! | `width` | `stroke-width` | `1` |
//! | `cap` | `stroke-linecap` | `"butt"`, `"round"`, `"square"` |
//! | `join` | `stroke-linejoin` | `"round"`, `"bevel"` (omitted for miter) |

use std::str::FromStr;

use crate::color::Paint;

/// Defines how line endpoints are rendered.
///
/// Maps directly to SVG `stroke-linecap` attribute values. Square caps close
/// the corners of the script's right-angled strokes, so they are the default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    #[default]
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for StrokeCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "invalid stroke cap `{s}`, valid values: butt, round, square"
            )),
        }
    }
}

/// Defines how line corners (joins) are rendered.
///
/// Maps directly to SVG `stroke-linejoin` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp corner with mitered point (SVG default)
    #[default]
    Miter,
    /// Rounded corner
    Round,
    /// Beveled (cut-off) corner
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value, or `None` for the SVG default.
    pub fn to_svg_value(&self) -> Option<&'static str> {
        match self {
            Self::Miter => None,
            Self::Round => Some("round"),
            Self::Bevel => Some("bevel"),
        }
    }
}

impl FromStr for StrokeJoin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "miter" => Ok(Self::Miter),
            "round" => Ok(Self::Round),
            "bevel" => Ok(Self::Bevel),
            _ => Err(format!(
                "invalid stroke join `{s}`, valid values: miter, round, bevel"
            )),
        }
    }
}

/// A stroke definition for the rendered path.
///
/// # Examples
///
/// ```
/// use lnnzhyz_core::color::Paint;
/// use lnnzhyz_core::draw::{StrokeCap, StrokeDefinition};
///
/// // currentColor, 1 unit wide, square caps
/// let stroke = StrokeDefinition::default();
/// assert_eq!(stroke.cap(), StrokeCap::Square);
///
/// let mut stroke = StrokeDefinition::new(Paint::new("teal").unwrap(), 1.5);
/// stroke.set_cap(StrokeCap::Round);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    paint: Paint,
    width: f32,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given paint and width.
    pub fn new(paint: Paint, width: f32) -> Self {
        Self {
            paint,
            width,
            ..Self::default()
        }
    }

    /// Returns the stroke paint.
    pub fn paint(&self) -> Paint {
        self.paint
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the stroke join style.
    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    /// Sets the stroke paint.
    pub fn set_paint(&mut self, paint: Paint) {
        self.paint = paint;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the stroke cap style.
    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }

    /// Sets the stroke join style.
    pub fn set_join(&mut self, join: StrokeJoin) {
        self.join = join;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            paint: Paint::default(),
            width: 1.0,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets `stroke`, `stroke-width` and `stroke-linecap`; `stroke-opacity` and
/// `stroke-linejoin` are only emitted when they differ from the SVG defaults.
///
/// # Examples
///
/// ```
/// use lnnzhyz_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::default();
/// let path = svg_element::Path::new().set("fill", "none");
///
/// let path = lnnzhyz_core::apply_stroke!(path, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.paint().to_string())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value());

        if let Some(opacity) = $stroke.paint().opacity() {
            elem = elem.set("stroke-opacity", opacity);
        }
        if let Some(join) = $stroke.join().to_svg_value() {
            elem = elem.set("stroke-linejoin", join);
        }

        elem
    }};
}
