//! kmt evaluation: runtime values and the interpreter.
//!
//! [`Interpreter::evaluate`] runs a [`kmt_types::BoundProgram`] and returns
//! the text written by `out`/`print` together with the final globals.
//!
//! # Architecture
//!
//! - [`Value`]: a number with both `i64` and `f64` views, or a sequence
//!   (a lazy integer range or a dense `f64` buffer produced by `map`)
//! - `evaluate_binary` / `evaluate_unary`: enum-dispatched arithmetic
//! - [`Environment`] and [`Scope`]: globals, and the isolated parameter
//!   scope of a lambda body
//! - `parallel`: chunked `map`/`reduce`/fused map-reduce on rayon
//! - [`CancellationToken`]: cooperative stop, checked between statements
//!   and inside chunk loops
//!
//! A runtime failure is a [`RuntimeError`] with a span and an `E6xxx` code;
//! cancellation is the separate [`EvalError::Cancelled`].

mod cancel;
mod config;
mod environment;
pub mod errors;
mod format;
mod interpreter;
mod operators;
mod parallel;
pub mod value;

pub use cancel::CancellationToken;
pub use config::{EvalConfig, DEFAULT_CHUNK_SIZE};
pub use environment::{Environment, Scope};
pub use errors::{EvalError, EvalResult, RuntimeError, RuntimeErrorKind};
pub use format::DISPLAY_LIMIT;
pub use interpreter::{EvaluationOutput, Interpreter};
pub use operators::{evaluate_binary, evaluate_unary};
pub use value::{ArraySequence, NumberValue, RangeSequence, Sequence, SequenceFactory, Value};
