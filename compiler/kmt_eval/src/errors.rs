//! Evaluation failures.
//!
//! A [`RuntimeError`] is a user-facing problem with a source location and
//! becomes exactly one diagnostic. [`EvalError::Cancelled`] is not a user
//! problem and is never turned into a diagnostic.

use kmt_diagnostic::{Diagnostic, ErrorCode};
use kmt_ir::{BinaryOp, SourceSpan};

/// Result of any evaluation step.
pub type EvalResult<T> = Result<T, EvalError>;

/// What went wrong. `Display` is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeErrorKind {
    #[error("Sequence bounds must be integers")]
    BoundsNotIntegers,
    #[error("Sequence start must be <= end")]
    StartAfterEnd,
    #[error("Sequence range is too large")]
    RangeTooLarge,
    #[error("Sequence is too large to materialize")]
    TooLargeToMaterialize,
    /// `map` or `reduce` received a number.
    #[error("{0} expects a sequence")]
    ExpectsSequence(&'static str),
    #[error("reduce neutral element must be a number")]
    NeutralNotNumber,
    #[error("Operator '{0}' expects numbers")]
    OperatorExpectsNumbers(BinaryOp),
    #[error("Unary '{0}' expects a number")]
    UnaryExpectsNumber(&'static str),
    #[error("Lambda must return a number")]
    LambdaNotNumber,
    #[error("Undefined variable '{0}'")]
    UndefinedVariable(String),
    #[error("Unsupported expression in numeric lambda")]
    UnsupportedInNumericLambda,
}

impl RuntimeErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            RuntimeErrorKind::BoundsNotIntegers => ErrorCode::E6001,
            RuntimeErrorKind::StartAfterEnd => ErrorCode::E6002,
            RuntimeErrorKind::RangeTooLarge => ErrorCode::E6003,
            RuntimeErrorKind::TooLargeToMaterialize => ErrorCode::E6004,
            RuntimeErrorKind::ExpectsSequence(_)
            | RuntimeErrorKind::NeutralNotNumber
            | RuntimeErrorKind::OperatorExpectsNumbers(_)
            | RuntimeErrorKind::UnaryExpectsNumber(_)
            | RuntimeErrorKind::LambdaNotNumber => ErrorCode::E6005,
            RuntimeErrorKind::UndefinedVariable(_) => ErrorCode::E6006,
            RuntimeErrorKind::UnsupportedInNumericLambda => ErrorCode::E6007,
        }
    }
}

/// A located runtime failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub span: SourceSpan,
}

impl RuntimeError {
    #[cold]
    pub fn new(kind: RuntimeErrorKind, span: SourceSpan) -> Self {
        RuntimeError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_span(self.span)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("evaluation was cancelled")]
    Cancelled,
}

impl EvalError {
    #[cold]
    pub(crate) fn runtime(kind: RuntimeErrorKind, span: SourceSpan) -> Self {
        EvalError::Runtime(RuntimeError::new(kind, span))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, EvalError::Cancelled)
    }
}
