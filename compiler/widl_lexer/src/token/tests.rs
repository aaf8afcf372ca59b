use super::*;
use pretty_assertions::assert_eq;

#[test]
fn discriminants_are_dense() {
    for (index, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(usize::from(kind.discriminant_index()), index, "{kind:?}");
    }
}

#[test]
fn punctuation_covers_single_rune_marks() {
    for c in "{}()[]<>=;,?:".chars() {
        assert!(TokenKind::punctuation(c).is_some(), "missing {c:?}");
    }
    assert_eq!(TokenKind::punctuation('.'), None);
    assert_eq!(TokenKind::punctuation('a'), None);
}

#[test]
fn end_is_exclusive() {
    let token = Token::new(TokenKind::Identifier, 4, "long");
    assert_eq!(token.end(), 8);
    assert_eq!(Token::eof(12).end(), 12);
}

#[test]
fn is_word_requires_identifier() {
    assert!(Token::new(TokenKind::Identifier, 0, "interface").is_word("interface"));
    assert!(!Token::new(TokenKind::String, 0, "interface").is_word("interface"));
    assert!(!Token::new(TokenKind::Identifier, 0, "interfaces").is_word("interface"));
}

#[test]
fn display_names_carry_text_for_words() {
    assert_eq!(
        Token::new(TokenKind::Identifier, 0, "Foo").to_string(),
        "identifier `Foo`"
    );
    assert_eq!(Token::new(TokenKind::Semicolon, 0, ";").to_string(), "`;`");
    assert_eq!(Token::eof(0).to_string(), "end of input");
}
