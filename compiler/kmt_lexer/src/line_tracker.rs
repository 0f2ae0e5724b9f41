//! Line/column bookkeeping.

/// Walks the source forward, keeping the 1-based line and column of its
/// current offset.
///
/// `\n` starts a new line; every other character, `\r` included, advances the
/// column by one.
pub(crate) struct LineTracker<'src> {
    source: &'src str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'src> LineTracker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        LineTracker {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Advance to `target` and return `(line, column)` there.
    ///
    /// Targets behind the current offset return the current position.
    pub(crate) fn advance_to(&mut self, target: usize) -> (u32, u32) {
        if target > self.offset {
            let Some(rest) = self.source.get(self.offset..) else {
                return (self.line, self.column);
            };
            for (i, c) in rest.char_indices() {
                if self.offset + i >= target {
                    self.offset = target;
                    return (self.line, self.column);
                }
                if c == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }
            }
            self.offset = self.source.len();
        }
        (self.line, self.column)
    }
}
