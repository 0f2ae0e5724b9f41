//! Text form of runtime values, as written by `out`.
//!
//! - `Int`: decimal.
//! - `Double`: shortest text that parses back to the same `f64`, always with
//!   a fractional part or exponent (`18.0`, `0.5`, `1e300`).
//! - Sequences: `{a, b, c}`. Past [`DISPLAY_LIMIT`] elements only the first
//!   ones and the last are shown: `{1, 2, ..., 20, ..., 100}`. Empty is `{}`.

use std::fmt::{self, Write};

use kmt_types::NumberType;

use crate::value::{NumberValue, Sequence, Value};

/// Leading elements printed before eliding the rest of a sequence.
pub const DISPLAY_LIMIT: usize = 20;

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            NumberType::Int => write!(f, "{}", self.as_i64()),
            NumberType::Double => write!(f, "{:?}", self.as_f64()),
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.len();
        f.write_char('{')?;
        for (i, item) in self.iter().take(DISPLAY_LIMIT).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        if len > DISPLAY_LIMIT {
            write!(f, ", ..., {}", self.get_in_bounds(len - 1))?;
        }
        f.write_char('}')
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => n.fmt(f),
            Value::Sequence(s) => s.fmt(f),
        }
    }
}
