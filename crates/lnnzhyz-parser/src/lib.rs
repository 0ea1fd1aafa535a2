//! # LNNZHYZ Parser
//!
//! Compiler from romanized text to the [`CompiledText`] model. Two
//! languages are supported: Mandarin written in the LNNZHYZ romanization and
//! Shidinn written in the Shidinn chat alphabet.
//!
//! Both share the same surface syntax:
//!
//! - words are separated by whitespace;
//! - characters in a word are separated by `_`, or by a `-` that marks a
//!   morpheme boundary;
//! - a `^` before a character marks it as part of a proper noun.
//!
//! ## Usage
//!
//! ```
//! # use lnnzhyz_parser::{compile_mandarin, CompileError};
//! use lnnzhyz_core::semantic::Element;
//!
//! fn main() -> Result<(), CompileError> {
//!     let text = compile_mandarin("ni3_hau3")?;
//!     assert_eq!(text.words()[0][0].main(), &Element::consonant("n"));
//!     Ok(())
//! }
//! ```

pub mod error;
mod grammar;
mod mandarin;
mod shidinn;
mod span;
mod tokenizer;

use std::{fmt, str::FromStr};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use lnnzhyz_core::semantic::{Character, CompiledText};

pub use error::CompileError;
pub use span::Span;

use error::{Diagnostic, DiagnosticCollector, ErrorCode};
use grammar::Grammar;
use tokenizer::Token;

/// The language a text is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Mandarin,
    Shidinn,
}

impl Language {
    pub fn name(self) -> &'static str {
        match self {
            Self::Mandarin => "mandarin",
            Self::Shidinn => "shidinn",
        }
    }

    fn grammar(self) -> &'static Grammar {
        match self {
            Self::Mandarin => &mandarin::GRAMMAR,
            Self::Shidinn => &shidinn::GRAMMAR,
        }
    }

    fn invalid_character(self, token: &Token<'_>) -> Diagnostic {
        match self {
            Self::Mandarin => Diagnostic::error(format!(
                "invalid Mandarin character `{}`",
                token.body
            ))
            .with_code(ErrorCode::E100)
            .with_label(token.body_span, "no syllable, interjection or letteral matches")
            .with_help("syllables end with a tone digit `1`-`4`; letterals are capitalized"),
            Self::Shidinn => Diagnostic::error(format!(
                "invalid Shidinn character `{}`",
                token.body
            ))
            .with_code(ErrorCode::E101)
            .with_label(token.body_span, "letters do not form a character")
            .with_help("a character needs an onset letter followed by a nucleus or a glide"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown language name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language `{0}`, valid values: mandarin, shidinn")]
pub struct UnknownLanguage(String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mandarin" => Ok(Self::Mandarin),
            "shidinn" => Ok(Self::Shidinn),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Span from the first to the last character of a word, markers included.
fn word_span(word: &[Token<'_>]) -> Option<Span> {
    let first = word.first()?.span;
    Some(word.iter().fold(first, |span, token| span.union(token.span)))
}

fn compile_character(language: Language, token: &Token<'_>) -> Result<Character, Diagnostic> {
    if token.body.is_empty() {
        return Err(Diagnostic::error("empty character")
            .with_code(ErrorCode::E102)
            .with_label(token.span, "character has no letters")
            .with_help("remove the extra separator"));
    }

    language
        .grammar()
        .apply(token.body)
        .map(|body| body.into_character(token.proper, token.hyphen))
        .ok_or_else(|| language.invalid_character(token))
}

/// Points a diagnostic at the word holding the failed character, unless
/// the word is that character alone.
fn in_word(diagnostic: Diagnostic, token: &Token<'_>, word: Option<Span>) -> Diagnostic {
    match word {
        Some(word) if word != token.span => {
            diagnostic.with_secondary_label(word, "in this word")
        }
        _ => diagnostic,
    }
}

/// Compile `source` written in `language` into a [`CompiledText`].
///
/// Every character is compiled; all invalid characters are reported
/// together in the returned [`CompileError`].
///
/// # Arguments
///
/// * `language` - The grammar to compile with
/// * `source` - Romanized text, possibly surrounded by whitespace
///
/// # Errors
///
/// Returns a [`CompileError`] with one diagnostic per invalid or empty
/// character. No partial text is returned.
///
/// # Example
///
/// ```
/// # use lnnzhyz_parser::{compile, Language};
/// let text = compile(Language::Shidinn, "Vnu8_AHL ^xdi8_aho").unwrap();
///
/// assert_eq!(text.words().len(), 2);
/// assert!(text.words()[1][0].is_proper());
/// ```
pub fn compile(language: Language, source: &str) -> Result<CompiledText, CompileError> {
    let words = tokenizer::tokenize(source)?;

    let mut collector = DiagnosticCollector::new();
    let mut compiled = Vec::with_capacity(words.len());
    for word in &words {
        let span = word_span(word);
        let mut characters = Vec::with_capacity(word.len());
        for token in word {
            match compile_character(language, token) {
                Ok(character) => characters.push(character),
                Err(diagnostic) => collector.emit(in_word(diagnostic, token, span)),
            }
        }
        compiled.push(characters);
    }

    let text = CompiledText::new(compiled);
    debug!(
        language = language.name(),
        words = text.words().len(),
        characters = text.character_count();
        "Compiled text"
    );
    collector.finish(text)
}

/// Compile Mandarin text written in LNNZHYZ romanization.
///
/// Syllables carry a tone digit `1`-`4`; letterals are capitalized.
///
/// # Errors
///
/// See [`compile`].
pub fn compile_mandarin(source: &str) -> Result<CompiledText, CompileError> {
    compile(Language::Mandarin, source)
}

/// Compile Shidinn text written in the Shidinn chat alphabet.
///
/// # Errors
///
/// See [`compile`].
pub fn compile_shidinn(source: &str) -> Result<CompiledText, CompileError> {
    compile(Language::Shidinn, source)
}
