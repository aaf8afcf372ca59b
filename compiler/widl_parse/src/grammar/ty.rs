//! Type expressions.
//!
//! ```text
//! type      = base "?"?
//! base      = "any"
//!           | "sequence" "<" type ">"
//!           | "record" "<" type "," type ">"
//!           | "(" type ("or" type)* ")"
//!           | name ("<" (type ("," type)* ","?)? ">")?
//! name      = identifier identifier?     (two-word primitives only)
//! ```

use widl_ir::{NodeMeta, Span, Type, TypeKind};
use widl_lexer::TokenKind;
use widl_stack::ensure_sufficient_stack;

use crate::Parser;

/// Primitive names that may take a second word, with the words allowed.
/// At most one second word is consumed.
const TWO_WORD_PRIMITIVES: [(&str, &[&str]); 3] = [
    ("unsigned", &["short", "long"]),
    ("long", &["long"]),
    ("unrestricted", &["float", "double"]),
];

impl Parser<'_> {
    /// A type, wrapped in `Nullable` when followed by `?`.
    ///
    /// The `Nullable` node spans the base type and the `?`. A second `?`
    /// is an error on that node and is skipped.
    pub fn parse_type(&mut self) -> Type {
        ensure_sufficient_stack(|| {
            let base = self.node(|p| Type::new(NodeMeta::default(), p.base_type()));

            if self.try_consume(TokenKind::QuestionMark).is_none() {
                return base;
            }
            let span = Span::new(base.meta.span.start, self.cursor().previous_end());
            let mut nullable = base.into_nullable(NodeMeta::new(span));

            if self.check(TokenKind::QuestionMark) {
                let error = self.error_node("Nullable type cannot be nullable again".to_string());
                nullable.meta.errors.push(error);
                self.advance();
                nullable.meta.span.end = self.cursor().previous_end();
            }
            nullable
        })
    }

    fn base_type(&mut self) -> TypeKind {
        if self.try_consume_word("any") {
            return TypeKind::Any;
        }

        if self.check_word("sequence") && self.peek(1).is(TokenKind::LeftAngle) {
            self.advance();
            self.advance();
            let element = Box::new(self.parse_type());
            self.consume(TokenKind::RightAngle);
            return TypeKind::Sequence { element };
        }

        if self.check_word("record") && self.peek(1).is(TokenKind::LeftAngle) {
            self.advance();
            self.advance();
            let key = Box::new(self.parse_type());
            self.consume(TokenKind::Comma);
            let value = Box::new(self.parse_type());
            self.consume(TokenKind::RightAngle);
            return TypeKind::Record { key, value };
        }

        if self.try_consume(TokenKind::LeftParen).is_some() {
            let mut members = vec![self.parse_type()];
            while self.try_consume_word("or") {
                members.push(self.parse_type());
            }
            self.consume(TokenKind::RightParen);
            return TypeKind::Union { members };
        }

        let name = self.type_name();
        if self.try_consume(TokenKind::LeftAngle).is_none() {
            return TypeKind::Named { name };
        }

        let mut arguments = Vec::new();
        while !self.check(TokenKind::RightAngle) && !self.is_at_end() {
            arguments.push(self.parse_type());
            if self.try_consume(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.consume(TokenKind::RightAngle);
        TypeKind::Parametrized { name, arguments }
    }

    /// An identifier, joined with one allowed second word for two-word
    /// primitives (`unsigned long`, `unrestricted double`).
    fn type_name(&mut self) -> String {
        let mut name = self.consume_identifier();
        let Some((_, seconds)) = TWO_WORD_PRIMITIVES
            .iter()
            .find(|(first, _)| *first == name)
        else {
            return name;
        };
        if let Some(second) = seconds.iter().find(|second| self.check_word(second)) {
            name.push(' ');
            name.push_str(second);
            self.advance();
        }
        name
    }
}
