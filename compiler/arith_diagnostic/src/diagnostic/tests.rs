use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builder_collects_parts() {
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_message("unresolved variable `b`")
        .on_line(2)
        .with_label(Span::new(4, 5), "not assigned on an earlier line")
        .with_note("assign `b` before reading it");

    assert_eq!(diag.code, ErrorCode::E6001);
    assert_eq!(diag.line, Some(2));
    assert_eq!(diag.labels.len(), 1);
    assert_eq!(diag.primary_span(), Some(Span::new(4, 5)));
    assert_eq!(diag.notes, vec!["assign `b` before reading it".to_string()]);
}

#[test]
fn test_primary_span_skips_secondary_labels() {
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_secondary_label(Span::new(4, 5), "opened here")
        .with_label(Span::new(9, 9), "expected `)`");
    assert_eq!(diag.primary_span(), Some(Span::new(9, 9)));
}

#[test]
fn test_display_header() {
    let diag = Diagnostic::error(ErrorCode::E1002).with_message("expected expression");
    assert_eq!(diag.to_string(), "error[E1002]: expected expression");
}
