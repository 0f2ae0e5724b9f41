//! Lambda bodies of `map` and `reduce`.
//!
//! A body built only from literals, parameters and arithmetic is
//! *pure-numeric*: it is evaluated by direct substitution of the arguments,
//! with no [`Value`](crate::value::Value) boxing and no scope. Anything else
//! goes through the general evaluator in an isolated parameter scope. Both
//! paths give the same results.

use kmt_ir::SourceSpan;
use kmt_stack::ensure_sufficient_stack;
use kmt_types::{BoundExpr, BoundExprKind};
use smallvec::SmallVec;

use super::expr::{eval_expr, literal_value, require_number};
use super::EvalContext;
use crate::environment::Scope;
use crate::errors::{EvalError, EvalResult, RuntimeErrorKind};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::value::NumberValue;

type Bindings<'a> = SmallVec<[(&'a str, NumberValue); 2]>;

/// A lambda ready to be called from any thread.
pub(crate) struct Lambda<'a> {
    params: SmallVec<[&'a str; 2]>,
    body: &'a BoundExpr,
    numeric: bool,
}

impl<'a> Lambda<'a> {
    /// `param -> body`
    pub(crate) fn single(param: &'a str, body: &'a BoundExpr) -> Self {
        Lambda::new(SmallVec::from_slice(&[param]), body)
    }

    /// `accumulator element -> body`
    pub(crate) fn pair(accumulator: &'a str, element: &'a str, body: &'a BoundExpr) -> Self {
        Lambda::new(SmallVec::from_slice(&[accumulator, element]), body)
    }

    fn new(params: SmallVec<[&'a str; 2]>, body: &'a BoundExpr) -> Self {
        Lambda {
            params,
            body,
            numeric: is_pure_numeric(body),
        }
    }

    pub(crate) fn is_numeric(&self) -> bool {
        self.numeric
    }

    /// Call a one-parameter lambda.
    pub(crate) fn apply(&self, ctx: EvalContext<'_>, value: NumberValue) -> EvalResult<NumberValue> {
        self.call(ctx, &[value])
    }

    /// Call a two-parameter lambda.
    pub(crate) fn combine(
        &self,
        ctx: EvalContext<'_>,
        accumulator: NumberValue,
        element: NumberValue,
    ) -> EvalResult<NumberValue> {
        self.call(ctx, &[accumulator, element])
    }

    fn call(&self, ctx: EvalContext<'_>, args: &[NumberValue]) -> EvalResult<NumberValue> {
        self.call_via(ctx, args, self.numeric)
    }

    fn call_via(
        &self,
        ctx: EvalContext<'_>,
        args: &[NumberValue],
        numeric: bool,
    ) -> EvalResult<NumberValue> {
        let bindings: Bindings<'_> = self
            .params
            .iter()
            .copied()
            .zip(args.iter().copied())
            .collect();
        if numeric {
            eval_numeric(self.body, &bindings)
        } else {
            let value = eval_expr(ctx, self.body, &Scope::Lambda(bindings))?;
            require_number(value, RuntimeErrorKind::LambdaNotNumber, self.body.span)
        }
    }
}

/// Literals, variables, unary and binary only.
fn is_pure_numeric(expr: &BoundExpr) -> bool {
    ensure_sufficient_stack(|| match &expr.kind {
        BoundExprKind::Literal(_) | BoundExprKind::Variable(_) => true,
        BoundExprKind::Unary { operand, .. } => is_pure_numeric(operand),
        BoundExprKind::Binary { left, right, .. } => {
            is_pure_numeric(left) && is_pure_numeric(right)
        }
        BoundExprKind::Sequence { .. } | BoundExprKind::Map { .. } | BoundExprKind::Reduce { .. } => {
            false
        }
    })
}

/// Substitution evaluator. Later bindings shadow earlier ones.
fn eval_numeric(expr: &BoundExpr, bindings: &[(&str, NumberValue)]) -> EvalResult<NumberValue> {
    ensure_sufficient_stack(|| match &expr.kind {
        BoundExprKind::Literal(literal) => Ok(literal_value(*literal)),
        BoundExprKind::Variable(name) => lookup(bindings, name, expr.span),
        BoundExprKind::Unary { op, operand } => {
            Ok(evaluate_unary(*op, eval_numeric(operand, bindings)?))
        }
        BoundExprKind::Binary { left, op, right } => {
            let left = eval_numeric(left, bindings)?;
            let right = eval_numeric(right, bindings)?;
            Ok(evaluate_binary(left, *op, right))
        }
        BoundExprKind::Sequence { .. } | BoundExprKind::Map { .. } | BoundExprKind::Reduce { .. } => {
            Err(EvalError::runtime(
                RuntimeErrorKind::UnsupportedInNumericLambda,
                expr.span,
            ))
        }
    })
}

fn lookup(bindings: &[(&str, NumberValue)], name: &str, span: SourceSpan) -> EvalResult<NumberValue> {
    bindings
        .iter()
        .rev()
        .find(|(n, _)| *n == name)
        .map(|&(_, v)| v)
        .ok_or_else(|| EvalError::runtime(RuntimeErrorKind::UndefinedVariable(name.to_owned()), span))
}

#[cfg(test)]
mod tests;
