use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_sets_fields() {
    let span = SourceSpan::new(4, 3, 1, 5);
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("Undefined variable 'n'")
        .with_span(span);

    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.message, "Undefined variable 'n'");
    assert_eq!(diag.span, span);
    assert!(diag.is_error());
}

#[test]
fn warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::E1001);
    assert!(!diag.is_error());
    assert_eq!(diag.span, SourceSpan::DUMMY);
}

#[test]
fn display_includes_code_position_and_message() {
    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("Unexpected character '$'")
        .with_span(SourceSpan::new(10, 1, 2, 3));
    assert_eq!(
        diag.to_string(),
        "error [E0002] at 2:3: Unexpected character '$'"
    );
}

#[test]
fn error_count_ignores_warnings() {
    let diags = vec![
        Diagnostic::error(ErrorCode::E1001),
        Diagnostic::warning(ErrorCode::E1002),
        Diagnostic::error(ErrorCode::E2001),
    ];
    assert_eq!(crate::error_count(&diags), 2);
}
