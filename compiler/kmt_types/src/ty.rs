//! The type lattice: two number types and sequences of them.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NumberType {
    Int,
    Double,
}

impl NumberType {
    /// Result type of `+ - *`: Int only if both sides are Int.
    #[must_use]
    pub fn merge(self, other: NumberType) -> NumberType {
        if self == NumberType::Int && other == NumberType::Int {
            NumberType::Int
        } else {
            NumberType::Double
        }
    }
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberType::Int => write!(f, "Int"),
            NumberType::Double => write!(f, "Double"),
        }
    }
}

/// The static type of an expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Number(NumberType),
    /// Sequence with the given element type.
    Sequence(NumberType),
}

impl Type {
    pub const INT: Type = Type::Number(NumberType::Int);
    pub const DOUBLE: Type = Type::Number(NumberType::Double);

    pub fn as_number(self) -> Option<NumberType> {
        match self {
            Type::Number(n) => Some(n),
            Type::Sequence(_) => None,
        }
    }

    pub fn element(self) -> Option<NumberType> {
        match self {
            Type::Sequence(e) => Some(e),
            Type::Number(_) => None,
        }
    }
}

impl From<NumberType> for Type {
    fn from(n: NumberType) -> Self {
        Type::Number(n)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Number(n) => write!(f, "{n}"),
            Type::Sequence(e) => write!(f, "Sequence<{e}>"),
        }
    }
}

#[cfg(test)]
mod tests;
