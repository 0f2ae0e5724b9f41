use std::fmt;

use crate::{Diagnostic, Severity};

/// Proof that at least one error diagnostic was recorded.
///
/// The only way to obtain one is [`emit`](ErrorGuaranteed::emit), which
/// records the diagnostic in the same call.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    /// Record `diagnostic` as an error in `sink` and return the proof.
    ///
    /// The diagnostic's severity is forced to [`Severity::Error`], so the
    /// guarantee always corresponds to a recorded error.
    pub fn emit(sink: &mut Vec<Diagnostic>, mut diagnostic: Diagnostic) -> Self {
        diagnostic.severity = Severity::Error;
        sink.push(diagnostic);
        ErrorGuaranteed(())
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error(s) emitted")
    }
}

#[cfg(test)]
mod tests;
