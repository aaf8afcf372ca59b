use super::*;
use pretty_assertions::assert_eq;

/// Mirrors the shape of nested type parsing: one frame per `<`.
fn nesting_depth(source: &[u8]) -> usize {
    ensure_sufficient_stack(|| match source.split_first() {
        Some((b'<', rest)) => 1 + nesting_depth(rest),
        _ => 0,
    })
}

#[test]
fn passes_through_the_result() {
    assert_eq!(ensure_sufficient_stack(|| "sequence"), "sequence");
    let parsed: Result<u8, String> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(parsed, Ok(7));
}

#[test]
fn shallow_nesting() {
    assert_eq!(nesting_depth(b"<<<long>>>"), 3);
}

#[test]
fn deep_nesting_does_not_overflow() {
    let source = vec![b'<'; 200_000];
    assert_eq!(nesting_depth(&source), 200_000);
}
