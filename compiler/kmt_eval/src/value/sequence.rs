use std::sync::Arc;

use kmt_ir::SourceSpan;
use kmt_types::NumberType;

use super::NumberValue;
use crate::errors::{RuntimeError, RuntimeErrorKind};

/// Inclusive integer range `{start, end}`. Never materialised.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RangeSequence {
    start: i64,
    end: i64,
}

impl RangeSequence {
    /// An empty range results when `end < start`.
    pub fn new(start: i64, end: i64) -> Self {
        RangeSequence { start, end }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn len(&self) -> usize {
        let len = (i128::from(self.end) - i128::from(self.start) + 1).max(0);
        usize::try_from(len).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Element `index`; callers keep `index < len()`.
    #[inline]
    pub fn get(&self, index: usize) -> NumberValue {
        NumberValue::from_int(self.start.wrapping_add(index as i64))
    }
}

/// Dense, shared result of a `map`.
///
/// Elements are stored as `f64` and rewrapped as `element` on read.
#[derive(Clone, Debug, PartialEq)]
pub struct ArraySequence {
    element: NumberType,
    data: Arc<[f64]>,
}

impl ArraySequence {
    pub fn new(element: NumberType, data: impl Into<Arc<[f64]>>) -> Self {
        ArraySequence {
            element,
            data: data.into(),
        }
    }

    pub fn element_type(&self) -> NumberType {
        self.element
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NumberValue> {
        self.data
            .get(index)
            .map(|&raw| NumberValue::from_f64_as(self.element, raw))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Sequence {
    Range(RangeSequence),
    Array(ArraySequence),
}

impl Sequence {
    pub fn element_type(&self) -> NumberType {
        match self {
            Sequence::Range(_) => NumberType::Int,
            Sequence::Array(array) => array.element_type(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Sequence::Range(range) => range.len(),
            Sequence::Array(array) => array.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<NumberValue> {
        match self {
            Sequence::Range(range) => (index < range.len()).then(|| range.get(index)),
            Sequence::Array(array) => array.get(index),
        }
    }

    /// Element `index` for callers that already bounded the index by `len()`.
    ///
    /// Out-of-range indices read as zero instead of panicking.
    #[inline]
    pub(crate) fn get_in_bounds(&self, index: usize) -> NumberValue {
        match self {
            Sequence::Range(range) => range.get(index),
            Sequence::Array(array) => array
                .get(index)
                .unwrap_or_else(|| NumberValue::from_f64_as(array.element_type(), 0.0)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = NumberValue> + '_ {
        (0..self.len()).map(|i| self.get_in_bounds(i))
    }
}

/// Validated construction of `{start, end}` literals.
pub struct SequenceFactory;

impl SequenceFactory {
    /// Both bounds must be `Int`, `start <= end`, and `end - start` must stay
    /// below `i64::MAX` so the length is representable.
    pub fn range(
        start: NumberValue,
        end: NumberValue,
        span: SourceSpan,
    ) -> Result<Sequence, RuntimeError> {
        if !start.is_int() || !end.is_int() {
            return Err(RuntimeError::new(RuntimeErrorKind::BoundsNotIntegers, span));
        }
        let (start, end) = (start.as_i64(), end.as_i64());
        if start > end {
            return Err(RuntimeError::new(RuntimeErrorKind::StartAfterEnd, span));
        }
        match end.checked_sub(start) {
            Some(diff) if diff < i64::MAX => Ok(Sequence::Range(RangeSequence::new(start, end))),
            _ => Err(RuntimeError::new(RuntimeErrorKind::RangeTooLarge, span)),
        }
    }
}
