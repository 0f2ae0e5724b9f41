//! kmt - a small numeric language with parallel sequence combinators.
//!
//! This crate wires the stages together and hosts the `kmt` binary.
//!
//! # Architecture
//!
//! ```text
//! source
//!     │
//!     ▼
//! kmt_lexer::lex() ──► TokenList       (E0xxx)
//!     │
//!     ▼
//! kmt_parse::parse() ──► Program       (E1xxx)
//!     │
//!     ▼
//! kmt_types::bind() ──► BoundProgram   (E2xxx)
//!     │
//!     ▼
//! Interpreter::evaluate() ──► output   (E6xxx)
//! ```
//!
//! [`analyze`] is the single entry point for embedders: source text in,
//! output text plus span-carrying diagnostics out. Diagnostics from an
//! earlier stage stop the pipeline, so a result never carries both output
//! and diagnostics.

mod analysis;
pub mod commands;
pub mod tracing_setup;

pub use analysis::{analyze, AnalysisOptions, AnalysisResult, Analyzer, Cancelled};
pub use kmt_diagnostic::{Diagnostic, ErrorCode, Severity};
pub use kmt_eval::{CancellationToken, EvalConfig};
pub use kmt_ir::SourceSpan;
pub use kmt_lexer::lex;
