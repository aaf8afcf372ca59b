//! Annotation groups: `[Name, Name=Value, Name=(A, B), Name(params)]`.

use widl_ir::{Annotation, AnnotationPayload, NodeMeta};
use widl_lexer::TokenKind;
use widl_stack::ensure_sufficient_stack;

use crate::Parser;

impl Parser<'_> {
    /// Zero or more bracketed groups, concatenated.
    pub(super) fn try_annotations(&mut self) -> Vec<Annotation> {
        let mut annotations = Vec::new();
        while self.try_consume(TokenKind::LeftBracket).is_some() {
            loop {
                annotations.push(self.annotation());
                if self.try_consume(TokenKind::Comma).is_none() {
                    break;
                }
            }
            if self.consume(TokenKind::RightBracket).is_none() {
                break;
            }
        }
        annotations
    }

    /// Recursive through `Name(params)`, whose parameters carry their own
    /// annotations.
    fn annotation(&mut self) -> Annotation {
        ensure_sufficient_stack(|| self.node(|p| {
            let name = p.consume_identifier();
            let payload = if p.try_consume(TokenKind::Equals).is_some() {
                if p.try_consume(TokenKind::LeftParen).is_some() {
                    AnnotationPayload::Values(p.identifier_list())
                } else {
                    AnnotationPayload::Value(p.consume_identifier())
                }
            } else if p.check(TokenKind::LeftParen) {
                AnnotationPayload::Parameters(p.parameters())
            } else {
                AnnotationPayload::None
            };
            Annotation {
                meta: NodeMeta::default(),
                name,
                payload,
            }
        }))
    }

    /// `A, B, C)` after an already consumed `(`.
    fn identifier_list(&mut self) -> Vec<String> {
        let mut identifiers = vec![self.consume_identifier()];
        while self.try_consume(TokenKind::Comma).is_some() {
            identifiers.push(self.consume_identifier());
        }
        self.consume(TokenKind::RightParen);
        identifiers
    }
}

#[cfg(test)]
mod tests;
