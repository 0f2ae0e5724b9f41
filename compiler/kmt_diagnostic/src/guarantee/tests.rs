use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn emitted(sink: &mut Vec<Diagnostic>) -> ErrorGuaranteed {
    ErrorGuaranteed::emit(sink, Diagnostic::error(ErrorCode::E2001))
}

#[test]
fn display_shows_error_message() {
    let g = emitted(&mut Vec::new());
    assert_eq!(g.to_string(), "error(s) emitted");
}

#[test]
fn emit_records_diagnostic_as_error() {
    let mut sink = Vec::new();
    ErrorGuaranteed::emit(&mut sink, Diagnostic::warning(ErrorCode::E2001));
    assert_eq!(sink.len(), 1);
    assert!(sink[0].is_error());
    assert_eq!(crate::error_count(&sink), 1);
}

#[test]
fn each_emit_records_one_diagnostic() {
    let mut sink = Vec::new();
    let g1 = emitted(&mut sink);
    let g2 = emitted(&mut sink);
    assert_eq!(g1, g2);
    assert_eq!(sink.len(), 2);
}
