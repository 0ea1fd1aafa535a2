//! Collector for accumulating diagnostics while compiling a text.

use crate::error::{CompileError, Diagnostic};

/// Accumulates diagnostics so that every invalid character is reported, not
/// only the first one.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection, returning `value` if nothing was emitted.
    pub(crate) fn finish<T>(self, value: T) -> Result<T, CompileError> {
        if self.diagnostics.is_empty() {
            Ok(value)
        } else {
            Err(CompileError::new(self.diagnostics))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_new_finish_ok() {
        let collector = DiagnosticCollector::new();
        assert_eq!(collector.finish(7), Ok(7));
    }

    #[test]
    fn test_collector_emit_multiple_finish_err() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::error("error 1"));
        collector.emit(Diagnostic::error("error 2"));

        let err = collector.finish(()).unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.diagnostics()[1].message(), "error 2");
    }
}
