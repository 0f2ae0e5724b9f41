//! Type checking for kmt.
//!
//! [`bind`] walks a parsed [`Program`] once, in statement order, and produces
//! a [`BoundProgram`]: the same tree with names resolved, literals parsed and
//! a [`Type`] on every expression.
//!
//! # Rules
//!
//! - Numbers are `Int` or `Double`. `+ - *` stay `Int` only when both
//!   operands are `Int`; `/` and `^` are always `Double`; unary minus keeps
//!   its operand's type. The only conversion is implicit `Int` to `Double`.
//! - `{a, b}` needs `Int` bounds and has type `Sequence<Int>`.
//! - `map` and `reduce` bodies are bound in a scope holding only their own
//!   parameters. Globals are not visible inside a lambda.
//! - A `reduce` is `Double` if either its neutral element or its body is.
//!
//! # Failure
//!
//! A statement whose expression fails to bind is left out of the bound
//! program; its diagnostics are returned alongside. Later statements still
//! bind, but a failed `var` does not define its name.
//!
//! Binding is a pure function of the input tree: binding the same program
//! twice yields equal results.

mod binder;
mod bound;
mod env;
mod ty;

use kmt_diagnostic::Diagnostic;
use kmt_ir::Program;

pub use bound::{BoundExpr, BoundExprKind, BoundProgram, BoundStmt, BoundStmtKind, Literal};
pub use ty::{NumberType, Type};

use binder::Binder;

/// The bound program plus semantic diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct BindOutput {
    pub program: BoundProgram,
    pub diagnostics: Vec<Diagnostic>,
}

impl BindOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Bind and type-check a parsed program.
#[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
pub fn bind(program: &Program) -> BindOutput {
    let (program, diagnostics) = Binder::default().bind_program(program);
    tracing::debug!(
        globals = program.globals.len(),
        errors = diagnostics.len(),
        "bound"
    );
    BindOutput {
        program,
        diagnostics,
    }
}
