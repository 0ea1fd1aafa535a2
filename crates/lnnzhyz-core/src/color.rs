//! Color handling for rendered script.
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and [`Paint`], the value of a stroke: either a fixed
//! color or the surrounding text color.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use lnnzhyz_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

/// The paint of a stroke.
///
/// [`Paint::CurrentColor`] lets inline script inherit the color of the text
/// it sits in.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Paint {
    #[default]
    CurrentColor,
    Color(Color),
}

impl Paint {
    /// Parse a paint value: `currentColor` or any CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use lnnzhyz_core::color::Paint;
    ///
    /// assert_eq!(Paint::new("currentColor").unwrap(), Paint::CurrentColor);
    /// assert!(Paint::new("navy").is_ok());
    /// assert!(Paint::new("not-a-color").is_err());
    /// ```
    pub fn new(value: &str) -> Result<Self, String> {
        if value.eq_ignore_ascii_case("currentcolor") {
            return Ok(Self::CurrentColor);
        }
        Color::new(value).map(Self::Color)
    }

    /// Returns the opacity to emit, if the paint is not fully opaque.
    pub fn opacity(&self) -> Option<f32> {
        match self {
            Self::CurrentColor => None,
            Self::Color(color) if color.alpha() < 1.0 => Some(color.alpha()),
            Self::Color(_) => None,
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentColor => write!(f, "currentColor"),
            Self::Color(color) => write!(f, "{color}"),
        }
    }
}
