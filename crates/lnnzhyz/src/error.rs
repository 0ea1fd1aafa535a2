//! Error types for script rendering.
//!
//! This module provides the main error type [`LnnzhyzError`] which wraps
//! the error conditions of every stage of the pipeline.

use std::io;

use thiserror::Error;

use lnnzhyz_core::notation::NotationError;
use lnnzhyz_parser::CompileError;

use crate::draw::DrawError;

/// The main error type for rendering operations.
///
/// # Diagnostic Variants
///
/// The `Compile` variant keeps the source text next to the diagnostics so
/// that callers can render them with source snippets.
#[derive(Debug, Error)]
pub enum LnnzhyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Compile { err: CompileError, src: String },

    #[error("Draw error: {0}")]
    Draw(#[from] DrawError),

    #[error("Notation error: {0}")]
    Notation(#[from] NotationError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LnnzhyzError {
    /// Create a new `Compile` error with the associated source text.
    pub fn new_compile_error(err: CompileError, src: impl Into<String>) -> Self {
        Self::Compile {
            err,
            src: src.into(),
        }
    }
}
