//! Error adapter for converting LnnzhyzError to miette diagnostics.
//!
//! This module provides the bridge between the library's error types and
//! miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! A [`lnnzhyz::CompileError`] reports every invalid character of a text;
//! each diagnostic is rendered independently with its own source snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use lnnzhyz::LnnzhyzError;
use lnnzhyz_parser::error::Diagnostic;

/// Adapter for a single compiler diagnostic.
///
/// Labels are converted once, when the adapter is built. The failed
/// character is the primary label; the word around it, when the word holds
/// more than that character, is a secondary one.
#[derive(Debug)]
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
    labels: Vec<LabeledSpan>,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter over `src`.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        let labels = diag
            .labels()
            .iter()
            .map(|label| {
                let message = Some(label.message().to_string());
                let span = to_source_span(label.span());
                if label.is_primary() {
                    LabeledSpan::new_primary_with_span(message, span)
                } else {
                    LabeledSpan::new_with_span(message, span)
                }
            })
            .collect();
        Self { diag, src, labels }
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    /// The diagnostic's own help, or else the description of its code.
    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = self
            .diag
            .help()
            .or_else(|| self.diag.code().map(|code| code.description()))?;
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.labels.is_empty() {
            return None;
        }
        Some(Box::new(self.labels.iter().cloned()))
    }
}

/// Adapter for non-diagnostic [`LnnzhyzError`] variants.
///
/// This adapter handles errors that don't carry source spans, such as I/O,
/// draw and configuration errors.
pub struct ErrorAdapter<'a>(pub &'a LnnzhyzError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            LnnzhyzError::Io(_) => "lnnzhyz::io",
            LnnzhyzError::Compile { .. } => return None,
            LnnzhyzError::Draw(_) => "lnnzhyz::draw",
            LnnzhyzError::Notation(_) => "lnnzhyz::notation",
            LnnzhyzError::Config(_) => "lnnzhyz::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            LnnzhyzError::Io(_) => "pass `-` as input or output to use standard input or output",
            LnnzhyzError::Draw(_) => "check `stroke_width` in the [draw] configuration section",
            LnnzhyzError::Config(_) => "see the [draw], [style] and [input] configuration sections",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a single diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

fn to_source_span(span: lnnzhyz_parser::Span) -> SourceSpan {
    (span.start(), span.len()).into()
}

/// Convert a [`LnnzhyzError`] into a list of reportable errors.
///
/// For [`LnnzhyzError::Compile`], this returns one [`Reportable`] for
/// each diagnostic in the error. For other error variants, this returns a
/// single [`Reportable`].
pub fn to_reportables(err: &LnnzhyzError) -> Vec<Reportable<'_>> {
    match err {
        LnnzhyzError::Compile {
            err: compile_err,
            src,
        } => compile_err
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use lnnzhyz::{CompileError, Span, draw::DrawError};
    use lnnzhyz_parser::error::ErrorCode;

    use super::*;

    #[test]
    fn test_compile_error_per_diagnostic() {
        let err = lnnzhyz_parser::compile_mandarin("ni3 xyz q9").unwrap_err();
        let err = LnnzhyzError::new_compile_error(err, "ni3 xyz q9");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "invalid Mandarin character `xyz`");
        assert_eq!(reportables[1].to_string(), "invalid Mandarin character `q9`");

        let code = reportables[0].code().unwrap().to_string();
        assert_eq!(code, "E100");
        assert!(reportables[0].help().is_some());
    }

    #[test]
    fn test_word_label_is_secondary() {
        let src = "ni3_xyz hau3";
        let err = lnnzhyz_parser::compile_mandarin(src).unwrap_err();
        let err = LnnzhyzError::new_compile_error(err, src);

        let reportables = to_reportables(&err);
        let labels: Vec<_> = reportables[0].labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert_eq!((labels[0].offset(), labels[0].len()), (4, 3));
        assert!(!labels[1].primary());
        assert_eq!((labels[1].offset(), labels[1].len()), (0, 7));
        assert_eq!(labels[1].label(), Some("in this word"));
        assert!(reportables[0].source_code().is_some());
    }

    #[test]
    fn test_help_falls_back_to_code_description() {
        let diag = Diagnostic::error("empty character")
            .with_code(ErrorCode::E102)
            .with_label(Span::new(4..4), "here");
        let err = LnnzhyzError::new_compile_error(CompileError::from(diag), "ni3__hau3");

        let reportables = to_reportables(&err);
        assert_eq!(reportables[0].help().unwrap().to_string(), "empty character");

        let bare = Diagnostic::error("no code");
        let err = LnnzhyzError::new_compile_error(CompileError::from(bare), "");
        let reportables = to_reportables(&err);
        assert!(reportables[0].help().is_none());
        assert!(reportables[0].labels().is_none());
    }

    #[test]
    fn test_non_compile_error() {
        let err = LnnzhyzError::Draw(DrawError::UnknownModifier("xx".to_string()));

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Draw error: no glyph for modifier `xx`");
                assert_eq!(e.code().unwrap().to_string(), "lnnzhyz::draw");
                assert!(e.source_code().is_none());
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_io_error_help() {
        let err = LnnzhyzError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let reportables = to_reportables(&err);

        assert_eq!(reportables[0].code().unwrap().to_string(), "lnnzhyz::io");
        assert!(reportables[0].help().unwrap().to_string().contains("standard input"));
    }

    #[test]
    fn test_config_error_code() {
        let err = LnnzhyzError::Config("bad".to_string());
        let reportables = to_reportables(&err);

        assert_eq!(reportables[0].code().unwrap().to_string(), "lnnzhyz::config");
        assert!(reportables[0].help().is_some());
    }
}
