//! Expression evaluation.

use kmt_ir::SourceSpan;
use kmt_stack::ensure_sufficient_stack;
use kmt_types::{BoundExpr, BoundExprKind, Literal, NumberType};

use super::{EvalContext, Lambda};
use crate::environment::Scope;
use crate::errors::{EvalError, EvalResult, RuntimeErrorKind};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::parallel;
use crate::value::{NumberValue, Sequence, SequenceFactory, Value};

/// Evaluate `expr`, resolving identifiers in `scope` only.
pub(crate) fn eval_expr(
    ctx: EvalContext<'_>,
    expr: &BoundExpr,
    scope: &Scope<'_>,
) -> EvalResult<Value> {
    ensure_sufficient_stack(|| eval_expr_inner(ctx, expr, scope))
}

fn eval_expr_inner(ctx: EvalContext<'_>, expr: &BoundExpr, scope: &Scope<'_>) -> EvalResult<Value> {
    let span = expr.span;
    match &expr.kind {
        BoundExprKind::Literal(literal) => Ok(Value::Number(literal_value(*literal))),

        BoundExprKind::Variable(name) => scope.lookup(name).ok_or_else(|| {
            EvalError::runtime(RuntimeErrorKind::UndefinedVariable(name.clone()), span)
        }),

        BoundExprKind::Unary { op, operand } => {
            let operand = eval_expr(ctx, operand, scope)?;
            let operand =
                require_number(operand, RuntimeErrorKind::UnaryExpectsNumber(op.symbol()), span)?;
            Ok(Value::Number(evaluate_unary(*op, operand)))
        }

        BoundExprKind::Binary { left, op, right } => {
            let left = eval_expr(ctx, left, scope)?;
            let left = require_number(left, RuntimeErrorKind::OperatorExpectsNumbers(*op), span)?;
            let right = eval_expr(ctx, right, scope)?;
            let right = require_number(right, RuntimeErrorKind::OperatorExpectsNumbers(*op), span)?;
            Ok(Value::Number(evaluate_binary(left, *op, right)))
        }

        BoundExprKind::Sequence { start, end } => {
            let start = eval_expr(ctx, start, scope)?;
            let start = require_number(start, RuntimeErrorKind::BoundsNotIntegers, span)?;
            let end = eval_expr(ctx, end, scope)?;
            let end = require_number(end, RuntimeErrorKind::BoundsNotIntegers, span)?;
            Ok(Value::Sequence(SequenceFactory::range(start, end, span)?))
        }

        BoundExprKind::Map {
            sequence,
            param,
            body,
        } => {
            let input = eval_sequence(ctx, sequence, scope, "map")?;
            // Bound maps are always typed `Sequence(element)`.
            let element = expr.ty.element().unwrap_or(NumberType::Double);
            let mapper = Lambda::single(param, body);
            let mapped = parallel::map(ctx, &input, &mapper, element, span)?;
            Ok(Value::Sequence(mapped))
        }

        BoundExprKind::Reduce {
            sequence,
            neutral,
            accumulator,
            element,
            body,
        } => {
            let reducer = Lambda::pair(accumulator, element, body);

            // reduce(map(s, f), n, g) runs as one pass without materialising map(s, f).
            if let BoundExprKind::Map {
                sequence: inner,
                param,
                body: map_body,
            } = &sequence.kind
            {
                let input = eval_sequence(ctx, inner, scope, "map")?;
                let neutral = eval_neutral(ctx, neutral, scope)?;
                let mapper = Lambda::single(param, map_body);
                let result = parallel::map_reduce(ctx, &input, &mapper, neutral, &reducer)?;
                return Ok(Value::Number(result));
            }

            let input = eval_sequence(ctx, sequence, scope, "reduce")?;
            let neutral = eval_neutral(ctx, neutral, scope)?;
            let result = parallel::reduce(ctx, &input, neutral, &reducer)?;
            Ok(Value::Number(result))
        }
    }
}

pub(super) fn literal_value(literal: Literal) -> NumberValue {
    match literal {
        Literal::Int(v) => NumberValue::from_int(v),
        Literal::Double(v) => NumberValue::from_double(v),
    }
}

fn eval_sequence(
    ctx: EvalContext<'_>,
    expr: &BoundExpr,
    scope: &Scope<'_>,
    combinator: &'static str,
) -> EvalResult<Sequence> {
    match eval_expr(ctx, expr, scope)? {
        Value::Sequence(seq) => Ok(seq),
        Value::Number(_) => Err(EvalError::runtime(
            RuntimeErrorKind::ExpectsSequence(combinator),
            expr.span,
        )),
    }
}

fn eval_neutral(
    ctx: EvalContext<'_>,
    expr: &BoundExpr,
    scope: &Scope<'_>,
) -> EvalResult<NumberValue> {
    let value = eval_expr(ctx, expr, scope)?;
    require_number(value, RuntimeErrorKind::NeutralNotNumber, expr.span)
}

pub(super) fn require_number(
    value: Value,
    kind: RuntimeErrorKind,
    span: SourceSpan,
) -> EvalResult<NumberValue> {
    match value {
        Value::Number(n) => Ok(n),
        Value::Sequence(_) => Err(EvalError::runtime(kind, span)),
    }
}
