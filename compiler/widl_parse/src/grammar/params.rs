//! Parameter lists.

use widl_ir::{Parameter, ParameterFlags};
use widl_lexer::{TokenKind, TokenSet};

use crate::Parser;

const SEPARATOR: TokenSet = TokenSet::new()
    .with(TokenKind::Comma)
    .with(TokenKind::RightParen);

impl Parser<'_> {
    /// `( parameter, ... )`. Stops at the first token that is neither a
    /// `,` nor the closing `)`.
    pub(super) fn parameters(&mut self) -> Vec<Parameter> {
        let mut parameters = Vec::new();
        if self.consume(TokenKind::LeftParen).is_none()
            || self.try_consume(TokenKind::RightParen).is_some()
        {
            return parameters;
        }

        loop {
            parameters.push(self.parameter());
            match self.consume_any(SEPARATOR) {
                Some(token) if token.is(TokenKind::Comma) => {}
                _ => break,
            }
        }
        parameters
    }

    /// `[Annotations] optional Type... name = default`
    fn parameter(&mut self) -> Parameter {
        self.node(|p| {
            let annotations = p.try_annotations();
            let mut flags = ParameterFlags::empty();
            if p.try_consume_word("optional") {
                flags |= ParameterFlags::OPTIONAL;
            }
            let ty = p.parse_type();
            if p.try_consume(TokenKind::Ellipsis).is_some() {
                flags |= ParameterFlags::VARIADIC;
            }
            let name = p.consume_identifier();
            let default = p
                .try_consume(TokenKind::Equals)
                .map(|_| p.default_value());
            Parameter {
                ty,
                name,
                flags,
                default,
                annotations,
                ..Parameter::default()
            }
        })
    }
}

#[cfg(test)]
mod tests;
