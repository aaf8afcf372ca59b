use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_set_contains_nothing() {
    let set = TokenSet::new();
    assert!(set.is_empty());
    for kind in TokenKind::ALL {
        assert!(!set.contains(kind));
    }
}

#[test]
fn builder_and_union() {
    let a = TokenSet::new().with(TokenKind::Comma);
    let b = TokenSet::single(TokenKind::RightParen);
    let both = a.union(b);
    assert!(both.contains(TokenKind::Comma));
    assert!(both.contains(TokenKind::RightParen));
    assert!(!both.contains(TokenKind::LeftParen));
    assert_eq!(both, TokenSet::from([TokenKind::RightParen, TokenKind::Comma]));
}

#[test]
fn iter_is_in_discriminant_order() {
    let set = TokenSet::from([TokenKind::Ellipsis, TokenKind::Eof, TokenKind::Colon]);
    let kinds: Vec<_> = set.iter().collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Eof, TokenKind::Colon, TokenKind::Ellipsis]
    );
}

#[test]
fn format_expected_lists() {
    assert_eq!(TokenSet::new().format_expected(), "nothing");
    assert_eq!(TokenSet::single(TokenKind::Semicolon).format_expected(), "`;`");
    assert_eq!(
        TokenSet::from([TokenKind::Comma, TokenKind::RightParen]).format_expected(),
        "`)` or `,`"
    );
    assert_eq!(
        TokenSet::from([TokenKind::Identifier, TokenKind::Comma, TokenKind::RightParen])
            .format_expected(),
        "identifier, `)`, or `,`"
    );
}
