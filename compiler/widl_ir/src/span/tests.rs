use super::*;
use pretty_assertions::assert_eq;

#[test]
fn new_collapses_inverted_ranges() {
    assert_eq!(Span::new(5, 3), Span { start: 5, end: 5 });
    assert_eq!(Span::new(2, 9), Span { start: 2, end: 9 });
}

#[test]
fn inclusive_bounds() {
    let span = Span::new(10, 14);
    assert_eq!(span.width(), 5);
    assert!(span.contains(10));
    assert!(span.contains(14));
    assert!(!span.contains(15));
    assert_eq!(span.to_range(), 10..15);
}

#[test]
fn merge_and_contains_span() {
    let a = Span::new(4, 8);
    let b = Span::new(6, 12);
    let merged = a.merge(b);
    assert_eq!(merged, Span::new(4, 12));
    assert!(merged.contains_span(a));
    assert!(merged.contains_span(b));
    assert!(!a.contains_span(b));
}

#[test]
fn slice_resolves_source_text() {
    let source = "interface Foo {};";
    assert_eq!(Span::new(10, 12).slice(source), Some("Foo"));
    assert_eq!(Span::new(16, 20).slice(source), None);
}

#[test]
fn display() {
    assert_eq!(Span::new(3, 7).to_string(), "3..=7");
}
