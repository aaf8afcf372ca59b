//! Enum values and default values.

use widl_ir::{Literal, LiteralKind, NodeMeta};
use widl_lexer::{TokenKind, TokenSet};
use widl_stack::ensure_sufficient_stack;

use crate::Parser;

const ENUM_VALUE: TokenSet = TokenSet::new()
    .with(TokenKind::Identifier)
    .with(TokenKind::String);

const SCALAR: TokenSet = ENUM_VALUE.with(TokenKind::Number);

impl Parser<'_> {
    /// An identifier or string.
    pub(super) fn enum_value(&mut self) -> Literal {
        self.node(|p| {
            let text = p
                .consume_any(ENUM_VALUE)
                .map(|token| token.text.into_owned())
                .unwrap_or_default();
            Literal::basic(NodeMeta::default(), text)
        })
    }

    /// The value after `=`: an identifier, string or number, a sequence
    /// literal `[a, b]`, or the empty dictionary `{}`.
    pub(super) fn default_value(&mut self) -> Literal {
        ensure_sufficient_stack(|| self.node(|p| {
            let kind = if p.try_consume(TokenKind::LeftBracket).is_some() {
                let mut items = Vec::new();
                while !p.check(TokenKind::RightBracket) && !p.is_at_end() {
                    items.push(p.default_value());
                    if p.try_consume(TokenKind::Comma).is_none() {
                        break;
                    }
                }
                p.consume(TokenKind::RightBracket);
                LiteralKind::Sequence(items)
            } else if p.try_consume(TokenKind::LeftBrace).is_some() {
                p.consume(TokenKind::RightBrace);
                LiteralKind::Basic("{}".to_string())
            } else if let Some(token) = p.try_consume_any(SCALAR) {
                LiteralKind::Basic(token.text.into_owned())
            } else {
                let message = format!("Expected default value, found {}", p.current());
                p.emit_error(message);
                LiteralKind::Basic(String::new())
            };
            Literal::new(NodeMeta::default(), kind)
        }))
    }
}
