//! Diagnostics for the LNNZHYZ compiler.
//!
//! Every failure is reported as a [`Diagnostic`] carrying an [`ErrorCode`], a
//! message and a labeled [`Span`](crate::Span) pointing at the offending
//! character. Compilation keeps going after an invalid character so that a
//! single [`CompileError`] lists every problem in the input.
//!
//! # Example
//!
//! ```
//! # use lnnzhyz_parser::error::{Diagnostic, ErrorCode};
//! # use lnnzhyz_parser::Span;
//!
//! let diag = Diagnostic::error("invalid Mandarin character `xyz`")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(4..7), "no syllable or letteral matches")
//!     .with_help("end every syllable with a tone digit `1`-`4`");
//!
//! assert_eq!(diag.to_string(), "error[E100]: invalid Mandarin character `xyz`");
//! ```

mod collector;
mod compile_error;
mod diagnostic;
mod error_code;
mod label;

pub(crate) use collector::DiagnosticCollector;

pub use compile_error::CompileError;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
