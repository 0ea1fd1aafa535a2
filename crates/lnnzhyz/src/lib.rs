//! LNNZHYZ - Renders romanized text in the LNNZHYZ script.
//!
//! Compilation, layout, and SVG rendering for the LNNZHYZ script. Mandarin
//! written in LNNZHYZ romanization and Shidinn written in its chat alphabet
//! are both supported.

pub mod config;
pub mod draw;

mod error;
mod export;

pub use lnnzhyz_core::{color, draw as stroke, glyph, notation, semantic};
pub use lnnzhyz_parser::{CompileError, Language, Span, UnknownLanguage};

pub use error::LnnzhyzError;

use log::{debug, info, trace};

use config::AppConfig;
use draw::{DrawOptions, Drawing};
use semantic::CompiledText;

/// Builder for compiling and rendering script text.
///
/// This provides an API for processing text through compilation, layout,
/// and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use lnnzhyz::{Language, ScriptBuilder, config::AppConfig};
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = ScriptBuilder::new(config);
///
/// // Compile source to the character model
/// let text = builder.compile(Language::Mandarin, "ni3_hau3")
///     .expect("Failed to compile");
///
/// // Render the text to SVG
/// let svg = builder.render_svg(&text)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = ScriptBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    config: AppConfig,
}

impl ScriptBuilder {
    /// Create a new script builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including draw and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Compile romanized source into a [`CompiledText`].
    ///
    /// # Arguments
    ///
    /// * `language` - Language the source is written in
    /// * `source` - Romanized text
    ///
    /// # Errors
    ///
    /// Returns [`LnnzhyzError::Compile`] with every invalid character
    /// reported, together with the source.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use lnnzhyz::{Language, ScriptBuilder};
    ///
    /// let builder = ScriptBuilder::default();
    /// let text = builder.compile(Language::Shidinn, "Vnu8_AHL")
    ///     .expect("Failed to compile text");
    /// ```
    pub fn compile(&self, language: Language, source: &str) -> Result<CompiledText, LnnzhyzError> {
        info!(language = language.name(); "Compiling text");

        let text = lnnzhyz_parser::compile(language, source)
            .map_err(|err| LnnzhyzError::new_compile_error(err, source))?;

        debug!(characters = text.character_count(); "Text compiled successfully");
        trace!(text:? = text; "Compiled text");

        Ok(text)
    }

    /// Lay out a compiled text with the configured stroke width.
    ///
    /// # Errors
    ///
    /// Returns [`LnnzhyzError::Draw`] for an invalid stroke width or an
    /// element without a glyph.
    pub fn draw(&self, text: &CompiledText) -> Result<Drawing, LnnzhyzError> {
        let options = self.config.draw().options()?;
        Ok(draw::draw(text, &options)?)
    }

    /// Render a compiled text to an inline SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`LnnzhyzError::Config`] if the configured stroke color is
    /// invalid, or any error of [`ScriptBuilder::draw`].
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use lnnzhyz::{Language, ScriptBuilder};
    ///
    /// let builder = ScriptBuilder::default();
    /// let text = builder.compile(Language::Mandarin, "ni3_hau3")
    ///     .expect("Failed to compile");
    ///
    /// let svg = builder.render_svg(&text)
    ///     .expect("Failed to render text");
    ///
    /// println!("{}", svg);
    /// ```
    pub fn render_svg(&self, text: &CompiledText) -> Result<String, LnnzhyzError> {
        let stroke = self.config.stroke().map_err(LnnzhyzError::Config)?;
        let drawing = self.draw(text)?;

        info!(width = drawing.width(); "SVG rendered successfully");
        Ok(drawing.to_svg(&stroke))
    }
}

/// Compile Mandarin text and lay it out.
///
/// # Errors
///
/// Returns [`LnnzhyzError::Compile`] for invalid input and
/// [`LnnzhyzError::Draw`] for invalid options.
///
/// # Examples
///
/// ```
/// use lnnzhyz::{draw::DrawOptions, draw_mandarin};
///
/// let drawing = draw_mandarin("ni3_hau3", &DrawOptions::default()).unwrap();
/// assert_eq!(drawing.height(), 17.0);
/// ```
pub fn draw_mandarin(input: &str, options: &DrawOptions) -> Result<Drawing, LnnzhyzError> {
    draw_language(Language::Mandarin, input, options)
}

/// Compile Shidinn text and lay it out.
///
/// # Errors
///
/// See [`draw_mandarin`].
pub fn draw_shidinn(input: &str, options: &DrawOptions) -> Result<Drawing, LnnzhyzError> {
    draw_language(Language::Shidinn, input, options)
}

fn draw_language(
    language: Language,
    input: &str,
    options: &DrawOptions,
) -> Result<Drawing, LnnzhyzError> {
    let text = lnnzhyz_parser::compile(language, input)
        .map_err(|err| LnnzhyzError::new_compile_error(err, input))?;
    Ok(draw::draw(&text, options)?)
}
