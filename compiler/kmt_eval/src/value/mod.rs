//! Runtime values.
//!
//! A [`Value`] is either a single number or a sequence of numbers. Numbers
//! keep both an `i64` and an `f64` view so arithmetic never has to re-parse
//! or re-convert on the hot path.

mod number;
mod sequence;

pub use number::NumberValue;
pub use sequence::{ArraySequence, RangeSequence, Sequence, SequenceFactory};

use kmt_types::NumberType;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(NumberValue),
    Sequence(Sequence),
}

impl Value {
    #[inline]
    pub fn int(value: i64) -> Self {
        Value::Number(NumberValue::from_int(value))
    }

    #[inline]
    pub fn double(value: f64) -> Self {
        Value::Number(NumberValue::from_double(value))
    }

    pub fn as_number(&self) -> Option<NumberValue> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Sequence(_) => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Sequence(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    /// Human-readable shape, for debugging output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(n) => match n.kind() {
                NumberType::Int => "Int",
                NumberType::Double => "Double",
            },
            Value::Sequence(_) => "Sequence",
        }
    }
}

impl From<NumberValue> for Value {
    fn from(n: NumberValue) -> Self {
        Value::Number(n)
    }
}

impl From<Sequence> for Value {
    fn from(s: Sequence) -> Self {
        Value::Sequence(s)
    }
}
