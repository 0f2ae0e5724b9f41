//! Numeric operator semantics.
//!
//! The operator sets are closed enums, so dispatch is a plain `match` and
//! every operator is handled. Shape checks (is this a number at all?) are
//! the interpreter's job; these functions only see numbers.

use kmt_ir::{BinaryOp, UnaryOp};

use crate::value::NumberValue;

/// `+ - *` stay integral (wrapping on overflow) when both sides are `Int`.
/// `/` and `^` are always computed in `f64`.
pub fn evaluate_binary(left: NumberValue, op: BinaryOp, right: NumberValue) -> NumberValue {
    let both_int = left.is_int() && right.is_int();
    match op {
        BinaryOp::Add if both_int => NumberValue::from_int(left.as_i64().wrapping_add(right.as_i64())),
        BinaryOp::Sub if both_int => NumberValue::from_int(left.as_i64().wrapping_sub(right.as_i64())),
        BinaryOp::Mul if both_int => NumberValue::from_int(left.as_i64().wrapping_mul(right.as_i64())),
        BinaryOp::Add => NumberValue::from_double(left.as_f64() + right.as_f64()),
        BinaryOp::Sub => NumberValue::from_double(left.as_f64() - right.as_f64()),
        BinaryOp::Mul => NumberValue::from_double(left.as_f64() * right.as_f64()),
        BinaryOp::Div => NumberValue::from_double(left.as_f64() / right.as_f64()),
        BinaryOp::Pow => NumberValue::from_double(left.as_f64().powf(right.as_f64())),
    }
}

pub fn evaluate_unary(op: UnaryOp, operand: NumberValue) -> NumberValue {
    match op {
        UnaryOp::Neg if operand.is_int() => NumberValue::from_int(operand.as_i64().wrapping_neg()),
        UnaryOp::Neg => NumberValue::from_double(-operand.as_f64()),
    }
}
