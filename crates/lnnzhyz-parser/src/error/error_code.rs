//! Error codes for the compiler diagnostics.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Tokenizer errors
//! - `E1xx` - Grammar errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Tokenizer Errors (E0xx)
    // =========================================================================
    /// Malformed input.
    ///
    /// The input could not be split into words and characters.
    E001,

    // =========================================================================
    // Grammar Errors (E1xx)
    // =========================================================================
    /// Invalid Mandarin character.
    ///
    /// The character is neither a toned syllable, an interjection nor a
    /// letteral.
    E100,

    /// Invalid Shidinn character.
    ///
    /// The letters do not form radicals around an onset and a nucleus, and
    /// the character is not a single letter.
    E101,

    /// Empty character.
    ///
    /// Two separators follow each other, or a character holds only markers.
    E102,
}

impl ErrorCode {
    /// Returns the code as written in diagnostics, e.g. `E100`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
        }
    }

    /// Returns a short description of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed input",
            ErrorCode::E100 => "invalid Mandarin character",
            ErrorCode::E101 => "invalid Shidinn character",
            ErrorCode::E102 => "empty character",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
