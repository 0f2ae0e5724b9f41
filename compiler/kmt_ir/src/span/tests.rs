use super::*;

#[test]
fn end_is_exclusive() {
    let span = SourceSpan::new(10, 5, 2, 3);
    assert_eq!(span.end(), 15);
    assert!(span.contains(10));
    assert!(span.contains(14));
    assert!(!span.contains(15));
}

#[test]
fn merge_keeps_first_position() {
    let a = SourceSpan::new(4, 3, 1, 5);
    let b = SourceSpan::new(12, 2, 2, 1);
    let merged = a.merge(b);
    assert_eq!(merged, SourceSpan::new(4, 10, 1, 5));
}

#[test]
fn merge_with_earlier_span_is_empty() {
    let a = SourceSpan::new(10, 2, 1, 11);
    let b = SourceSpan::new(0, 3, 1, 1);
    let merged = a.merge(b);
    assert_eq!(merged.start, 10);
    assert!(merged.is_empty());
}

#[test]
fn display_is_line_and_column() {
    assert_eq!(SourceSpan::new(7, 1, 3, 9).to_string(), "3:9");
    assert_eq!(format!("{:?}", SourceSpan::new(7, 1, 3, 9)), "7..8@3:9");
}

#[test]
fn range_slices_source() {
    let source = "out 42";
    let span = SourceSpan::new(4, 2, 1, 5);
    assert_eq!(&source[span.to_range()], "42");
}

#[test]
fn default_is_dummy() {
    assert_eq!(SourceSpan::default(), SourceSpan::DUMMY);
    assert_eq!(SourceSpan::DUMMY.line, 1);
    assert_eq!(SourceSpan::DUMMY.column, 1);
}
