//! Lexer error types.

use kmt_diagnostic::{Diagnostic, ErrorCode};
use kmt_ir::SourceSpan;

/// A lexer error: where it happened and what it was.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: SourceSpan,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Missing closing `"`.
    UnterminatedString,
    /// A character that starts no token.
    UnexpectedCharacter(char),
    /// Source longer than a span offset can address.
    SourceTooLarge,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: SourceSpan) -> Self {
        LexError { span, kind }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter(_) => ErrorCode::E0002,
            LexErrorKind::SourceTooLarge => ErrorCode::E0003,
        }
    }

    pub fn message(&self) -> String {
        match self.kind {
            LexErrorKind::UnterminatedString => "Unterminated string literal".to_string(),
            LexErrorKind::UnexpectedCharacter(c) => format!("Unexpected character '{c}'"),
            LexErrorKind::SourceTooLarge => format!(
                "Source is too large: at most {} bytes are supported",
                u32::MAX
            ),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.message())
            .with_span(self.span)
    }
}
