//! Configuration types for script rendering.
//!
//! This module provides configuration structures that control how text is
//! compiled and drawn. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`DrawConfig`] - Geometry options such as the stroke width.
//! - [`StyleConfig`] - Visual styling of the stroke: color, cap and join.
//! - [`InputConfig`] - The default input [`Language`].
//!
//! # Example
//!
//! ```
//! # use lnnzhyz::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().stroke_paint().is_ok());
//! assert!(config.draw().options().is_ok());
//! ```

use serde::Deserialize;

use lnnzhyz_core::{
    color::Paint,
    draw::{StrokeCap, StrokeDefinition, StrokeJoin},
};
use lnnzhyz_parser::Language;

use crate::draw::{DrawError, DrawOptions};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Draw configuration section.
    #[serde(default)]
    draw: DrawConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Input configuration section.
    #[serde(default)]
    input: InputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(draw: DrawConfig, style: StyleConfig, input: InputConfig) -> Self {
        Self { draw, style, input }
    }

    /// Returns the draw configuration.
    pub fn draw(&self) -> &DrawConfig {
        &self.draw
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the input configuration.
    pub fn input(&self) -> &InputConfig {
        &self.input
    }

    /// Returns a mutable reference to the input configuration.
    pub fn input_mut(&mut self) -> &mut InputConfig {
        &mut self.input
    }

    /// Builds the [`StrokeDefinition`] for rendered SVG.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured stroke color, cap or join cannot
    /// be parsed.
    pub fn stroke(&self) -> Result<StrokeDefinition, String> {
        let mut stroke = StrokeDefinition::new(self.style.stroke_paint()?, self.draw.stroke_width);
        stroke.set_cap(self.style.stroke_cap()?);
        stroke.set_join(self.style.stroke_join()?);
        Ok(stroke)
    }
}

/// Geometry configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DrawConfig {
    /// Stroke width in script units, between 0 and 2 exclusive.
    #[serde(default = "default_stroke_width")]
    stroke_width: f32,
}

fn default_stroke_width() -> f32 {
    1.0
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            stroke_width: default_stroke_width(),
        }
    }
}

impl DrawConfig {
    pub fn new(stroke_width: f32) -> Self {
        Self { stroke_width }
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Returns validated [`DrawOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidStrokeWidth`] for an out of range width.
    pub fn options(&self) -> Result<DrawOptions, DrawError> {
        DrawOptions::new(self.stroke_width)
    }
}

/// Visual styling configuration for rendered SVG.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Stroke paint as `currentColor` or a CSS color string.
    #[serde(default)]
    stroke_color: Option<String>,

    /// Line cap: `butt`, `round` or `square`.
    #[serde(default)]
    stroke_cap: Option<String>,

    /// Line join: `miter`, `round` or `bevel`.
    #[serde(default)]
    stroke_join: Option<String>,
}

impl StyleConfig {
    pub fn new(stroke_color: Option<String>) -> Self {
        Self {
            stroke_color,
            ..Self::default()
        }
    }

    /// Sets the line cap name, parsed by [`Self::stroke_cap`].
    pub fn with_stroke_cap(mut self, cap: impl Into<String>) -> Self {
        self.stroke_cap = Some(cap.into());
        self
    }

    /// Sets the line join name, parsed by [`Self::stroke_join`].
    pub fn with_stroke_join(mut self, join: impl Into<String>) -> Self {
        self.stroke_join = Some(join.into());
        self
    }

    /// Returns the parsed stroke [`Paint`], `currentColor` when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn stroke_paint(&self) -> Result<Paint, String> {
        self.stroke_color
            .as_deref()
            .map(Paint::new)
            .transpose()
            .map(Option::unwrap_or_default)
            .map_err(|err| format!("Invalid stroke color in config: {err}"))
    }

    /// Returns the parsed [`StrokeCap`], square when unset.
    ///
    /// # Errors
    ///
    /// Returns an error naming the valid caps for an unknown value.
    pub fn stroke_cap(&self) -> Result<StrokeCap, String> {
        self.stroke_cap
            .as_deref()
            .map(str::parse)
            .transpose()
            .map(Option::unwrap_or_default)
            .map_err(|err| format!("Invalid stroke cap in config: {err}"))
    }

    /// Returns the parsed [`StrokeJoin`], miter when unset.
    ///
    /// # Errors
    ///
    /// Returns an error naming the valid joins for an unknown value.
    pub fn stroke_join(&self) -> Result<StrokeJoin, String> {
        self.stroke_join
            .as_deref()
            .map(str::parse)
            .transpose()
            .map(Option::unwrap_or_default)
            .map_err(|err| format!("Invalid stroke join in config: {err}"))
    }
}

/// Input configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct InputConfig {
    /// Language of the input text.
    #[serde(default)]
    language: Language,
}

impl InputConfig {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}
