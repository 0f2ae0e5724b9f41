use super::*;
use pretty_assertions::assert_eq;

use crate::cancel::CancellationToken;
use crate::errors::RuntimeErrorKind;
use crate::interpreter::tests::bound;
use kmt_types::BoundStmtKind;

/// The bound body of the first combinator in `out <source>`.
fn body(source: &str) -> BoundExpr {
    let program = bound(&format!("out {source}"));
    match &program.statements[0].kind {
        BoundStmtKind::Out(expr) => match &expr.kind {
            BoundExprKind::Map { body, .. } | BoundExprKind::Reduce { body, .. } => {
                (**body).clone()
            }
            other => panic!("not a combinator: {other:?}"),
        },
        other => panic!("not an out statement: {other:?}"),
    }
}

fn ctx(cancel: &CancellationToken) -> EvalContext<'_> {
    EvalContext {
        chunk_size: 10_000,
        cancel,
    }
}

#[test]
fn test_classification() {
    assert!(is_pure_numeric(&body("map({1, 2}, i -> -i * 2 + 1 / i ^ 2)")));
    assert!(is_pure_numeric(&body("map({1, 2}, i -> 7)")));
    assert!(!is_pure_numeric(&body(
        "map({1, 2}, i -> reduce({1, i}, 0, a b -> a + b))"
    )));
}

#[test]
fn test_paths_agree_for_single_parameter() {
    let token = CancellationToken::new();
    let body = body("map({1, 2}, x -> -x ^ 2 / 3 + x * 4 - 1)");
    let lambda = Lambda::single("x", &body);
    assert!(lambda.is_numeric());
    for v in [-3, 0, 1, 17] {
        let arg = [NumberValue::from_int(v)];
        assert_eq!(
            lambda.call_via(ctx(&token), &arg, true),
            lambda.call_via(ctx(&token), &arg, false)
        );
    }
}

#[test]
fn test_paths_agree_for_pair_with_shadowing() {
    let token = CancellationToken::new();
    let body = body("reduce({1, 2}, 0.5, a a -> a * 10)");
    let lambda = Lambda::pair("a", "a", &body);
    let args = [NumberValue::from_double(0.5), NumberValue::from_int(3)];
    let fast = lambda.call_via(ctx(&token), &args, true);
    let general = lambda.call_via(ctx(&token), &args, false);
    assert_eq!(fast, Ok(NumberValue::from_int(30)));
    assert_eq!(fast, general);
}

#[test]
fn test_apply_and_combine() {
    let token = CancellationToken::new();
    let map_body = body("map({1, 2}, i -> i + 1)");
    assert_eq!(
        Lambda::single("i", &map_body).apply(ctx(&token), NumberValue::from_int(4)),
        Ok(NumberValue::from_int(5))
    );
    let reduce_body = body("reduce({1, 2}, 0, acc e -> acc - e)");
    assert_eq!(
        Lambda::pair("acc", "e", &reduce_body).combine(
            ctx(&token),
            NumberValue::from_int(10),
            NumberValue::from_int(3)
        ),
        Ok(NumberValue::from_int(7))
    );
}

#[test]
fn test_numeric_path_rejects_sequences() {
    let body = body("map({1, 2}, i -> reduce({1, i}, 0, a b -> a + b))");
    let err = eval_numeric(&body, &[("i", NumberValue::from_int(1))]).unwrap_err();
    match err {
        EvalError::Runtime(err) => {
            assert_eq!(err.kind, RuntimeErrorKind::UnsupportedInNumericLambda);
            assert_eq!(err.span, body.span);
        }
        EvalError::Cancelled => panic!("unexpected cancellation"),
    }
}

#[test]
fn test_unbound_name_is_undefined() {
    let body = body("map({1, 2}, i -> i + 1)");
    let err = eval_numeric(&body, &[("j", NumberValue::from_int(1))]).unwrap_err();
    assert_eq!(
        err,
        EvalError::runtime(
            RuntimeErrorKind::UndefinedVariable("i".into()),
            match &body.kind {
                BoundExprKind::Binary { left, .. } => left.span,
                _ => unreachable!(),
            }
        )
    );
}
