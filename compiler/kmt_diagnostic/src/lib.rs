//! Diagnostic system for kmt.
//!
//! Every stage reports problems as [`Diagnostic`] values returned next to its
//! (possibly partial) result. Nothing is thrown across stage boundaries.
//!
//! A diagnostic carries:
//! - an [`ErrorCode`] for searchability (`E0xxx` lexer, `E1xxx` parser,
//!   `E2xxx` binder, `E6xxx` runtime)
//! - a message saying what went wrong
//! - the [`SourceSpan`](kmt_ir::SourceSpan) saying where
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is type-level proof that at least one error was
//! recorded. The binder returns `Result<_, ErrorGuaranteed>` from every
//! fallible step, so a failed expression cannot be dropped silently.
//!
//! ```text
//! let guarantee = self.error(diagnostic);   // only way to get one
//! fn bind_expr(..) -> Result<BoundExpr, ErrorGuaranteed> { ... }
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
mod guarantee;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::{ErrorCode, Stage};
pub use guarantee::ErrorGuaranteed;

/// Number of error-severity diagnostics in `diagnostics`.
pub fn error_count(diagnostics: &[Diagnostic]) -> usize {
    diagnostics.iter().filter(|d| d.is_error()).count()
}
