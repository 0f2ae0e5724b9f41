use kmt_types::NumberType;

/// A number with both representations populated.
///
/// `kind` says which one is authoritative. An `Int` converts exactly to its
/// `f64` view only up to 2^53; a `Double` truncates toward zero (saturating
/// at the `i64` bounds, NaN becomes 0) for its `i64` view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NumberValue {
    kind: NumberType,
    double: f64,
    long: i64,
}

impl NumberValue {
    #[inline]
    pub fn from_int(value: i64) -> Self {
        NumberValue {
            kind: NumberType::Int,
            double: value as f64,
            long: value,
        }
    }

    #[inline]
    pub fn from_double(value: f64) -> Self {
        NumberValue {
            kind: NumberType::Double,
            double: value,
            long: value as i64,
        }
    }

    /// Rewrap a raw `f64` as the given kind.
    #[inline]
    pub fn from_f64_as(kind: NumberType, value: f64) -> Self {
        match kind {
            NumberType::Int => NumberValue::from_int(value as i64),
            NumberType::Double => NumberValue::from_double(value),
        }
    }

    #[inline]
    pub fn kind(self) -> NumberType {
        self.kind
    }

    #[inline]
    pub fn is_int(self) -> bool {
        self.kind == NumberType::Int
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.double
    }

    #[inline]
    pub fn as_i64(self) -> i64 {
        self.long
    }
}
