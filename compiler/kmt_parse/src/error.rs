//! Parse error type.

use kmt_diagnostic::{Diagnostic, ErrorCode};
use kmt_ir::SourceSpan;

/// A syntax error at the token where parsing could not continue.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Span of the offending token.
    pub span: SourceSpan,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: SourceSpan) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_span(self.span)
    }
}
