//! Source location spans.

use std::fmt;
use std::ops::Range;

/// Half-open byte range `[start, start + len)` in the source text.
///
/// `line` and `column` are 1-based and describe the *start* of the span only.
/// Offsets are byte offsets; columns count characters.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct SourceSpan {
    pub start: u32,
    pub len: u32,
    pub line: u32,
    pub column: u32,
}

impl SourceSpan {
    /// Zero-length span at the very beginning of the source.
    pub const DUMMY: SourceSpan = SourceSpan {
        start: 0,
        len: 0,
        line: 1,
        column: 1,
    };

    #[inline]
    pub const fn new(start: u32, len: u32, line: u32, column: u32) -> Self {
        SourceSpan {
            start,
            len,
            line,
            column,
        }
    }

    /// Zero-length span at `offset`.
    #[inline]
    pub const fn point(offset: u32, line: u32, column: u32) -> Self {
        SourceSpan::new(offset, 0, line, column)
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start + self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// Span from the start of `self` to the end of `other`.
    ///
    /// Keeps `self`'s line and column. If `other` ends before `self` starts
    /// the result is empty rather than negative.
    #[inline]
    #[must_use]
    pub fn merge(self, other: SourceSpan) -> SourceSpan {
        SourceSpan {
            start: self.start,
            len: other.end().saturating_sub(self.start),
            line: self.line,
            column: self.column,
        }
    }

    /// Byte range, for slicing the source.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl Default for SourceSpan {
    fn default() -> Self {
        SourceSpan::DUMMY
    }
}

impl fmt::Debug for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}@{}:{}",
            self.start,
            self.end(),
            self.line,
            self.column
        )
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::SourceSpan;
    crate::static_assert_size!(SourceSpan, 16);
}

#[cfg(test)]
mod tests;
