//! Statement execution.

use kmt_types::{BoundStmt, BoundStmtKind};

use super::expr::eval_expr;
use super::EvalContext;
use crate::environment::Environment;
use crate::errors::EvalResult;

pub(super) fn exec_stmt(
    ctx: EvalContext<'_>,
    stmt: &BoundStmt,
    env: &mut Environment,
    output: &mut String,
) -> EvalResult<()> {
    match &stmt.kind {
        BoundStmtKind::Var { name, init } => {
            let value = eval_expr(ctx, init, &env.scope())?;
            tracing::trace!(name = %name, ty = value.type_name(), "define");
            env.define(name.as_str(), value);
        }
        BoundStmtKind::Out(expr) => {
            let value = eval_expr(ctx, expr, &env.scope())?;
            output.push_str(&value.to_string());
            output.push('\n');
        }
        // No newline: `print` writes its text verbatim.
        BoundStmtKind::Print(text) => output.push_str(text),
    }
    Ok(())
}
