//! Declarations and declaration bodies.

use widl_ir::{
    Annotation, Callback, CustomOp, Declaration, Dictionary, Enum, ErrorDeclaration, Interface,
    Iterable, Member, Mixin, Typedef,
};
use widl_lexer::{TokenKind, TokenSet};

use crate::Parser;

/// Keywords that form a whole member on their own: `serializer;`.
const CUSTOM_OPS: [&str; 3] = ["serializer", "jsonifier", "stringifier"];

const BRACE: TokenSet = TokenSet::single(TokenKind::LeftBrace);
const CLOSE_BRACE: TokenSet = TokenSet::single(TokenKind::RightBrace);

/// Contents of an interface or mixin body.
#[derive(Default)]
struct Body {
    members: Vec<Member>,
    custom_ops: Vec<CustomOp>,
    iterable: Option<Iterable>,
}

impl Parser<'_> {
    /// Annotations followed by a declaration keyword and its body.
    pub(super) fn declaration(&mut self) -> Declaration {
        self.node(|p| {
            let annotations = p.try_annotations();

            if p.try_consume_word("partial") {
                if p.try_consume_word("interface") {
                    return p.interface_or_mixin(annotations, true);
                }
                if p.try_consume_word("dictionary") {
                    return Declaration::Dictionary(p.dictionary(annotations, true));
                }
                let message = format!(
                    "Expected `interface` or `dictionary` after `partial`, found {}",
                    p.current()
                );
                return p.error_declaration(annotations, message);
            }

            if p.try_consume_word("interface") {
                p.interface_or_mixin(annotations, false)
            } else if p.try_consume_word("callback") {
                if p.try_consume_word("interface") {
                    let mut interface = p.interface(annotations, false);
                    interface.callback = true;
                    Declaration::Interface(interface)
                } else {
                    Declaration::Callback(p.callback(annotations))
                }
            } else if p.try_consume_word("dictionary") {
                Declaration::Dictionary(p.dictionary(annotations, false))
            } else if p.try_consume_word("enum") {
                Declaration::Enum(p.enumeration(annotations))
            } else if p.try_consume_word("typedef") {
                Declaration::Typedef(p.typedef(annotations))
            } else {
                let message = format!("Expected declaration keyword, found {}", p.current());
                p.error_declaration(annotations, message)
            }
        })
    }

    /// Record `message`, then skip to the next `{`, past the first `}`
    /// after it, and an optional `;`. Braces are not balanced.
    fn error_declaration(&mut self, annotations: Vec<Annotation>, message: String) -> Declaration {
        self.emit_error(message);
        if self.consume_until(BRACE).is_some() {
            self.consume_until(CLOSE_BRACE);
        }
        self.try_consume(TokenKind::Semicolon);
        Declaration::Error(ErrorDeclaration {
            annotations,
            ..ErrorDeclaration::default()
        })
    }

    /// After `interface`: a mixin if `mixin` follows, an interface otherwise.
    fn interface_or_mixin(&mut self, annotations: Vec<Annotation>, partial: bool) -> Declaration {
        if self.try_consume_word("mixin") {
            Declaration::Mixin(self.mixin(annotations, partial))
        } else {
            Declaration::Interface(self.interface(annotations, partial))
        }
    }

    fn interface(&mut self, annotations: Vec<Annotation>, partial: bool) -> Interface {
        let name = self.consume_identifier();
        let inherits = self.inheritance();
        let body = self.body(true);
        Interface {
            name,
            partial,
            inherits,
            annotations,
            members: body.members,
            custom_ops: body.custom_ops,
            iterable: body.iterable,
            ..Interface::default()
        }
    }

    fn mixin(&mut self, annotations: Vec<Annotation>, partial: bool) -> Mixin {
        let name = self.consume_identifier();
        let inherits = self.inheritance();
        let body = self.body(false);
        Mixin {
            name,
            partial,
            inherits,
            annotations,
            members: body.members,
            custom_ops: body.custom_ops,
            iterable: body.iterable,
            ..Mixin::default()
        }
    }

    fn inheritance(&mut self) -> Option<String> {
        self.try_consume(TokenKind::Colon)
            .map(|_| self.consume_identifier())
    }

    /// `{ ... };` of an interface or mixin. A member without its `;` ends
    /// the body loop.
    fn body(&mut self, pair_iterables: bool) -> Body {
        let mut body = Body::default();
        if self.consume(TokenKind::LeftBrace).is_none() {
            return body;
        }

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if CUSTOM_OPS.iter().any(|op| self.check_word(op))
                && self.peek(1).is(TokenKind::Semicolon)
            {
                let custom_op = self.node(|p| CustomOp {
                    name: p.advance().text.into_owned(),
                    ..CustomOp::default()
                });
                body.custom_ops.push(custom_op);
                self.advance();
                continue;
            }

            if self.check_word("iterable") && self.peek(1).is(TokenKind::LeftAngle) {
                body.iterable = Some(self.iterable(pair_iterables));
            } else {
                body.members.push(self.member(false));
            }
            if self.consume(TokenKind::Semicolon).is_none() {
                break;
            }
        }

        self.consume(TokenKind::RightBrace);
        self.consume(TokenKind::Semicolon);
        body
    }

    /// `iterable<V>`, or `iterable<K, V>` when pairs are allowed.
    fn iterable(&mut self, pair_iterables: bool) -> Iterable {
        self.node(|p| {
            p.advance();
            p.consume(TokenKind::LeftAngle);
            let first = p.parse_type();
            let (key_type, value_type) =
                if pair_iterables && p.try_consume(TokenKind::Comma).is_some() {
                    (Some(first), p.parse_type())
                } else {
                    (None, first)
                };
            p.consume(TokenKind::RightAngle);
            Iterable {
                key_type,
                value_type,
                ..Iterable::default()
            }
        })
    }

    fn dictionary(&mut self, annotations: Vec<Annotation>, partial: bool) -> Dictionary {
        let name = self.consume_identifier();
        let inherits = self.inheritance();
        let mut members = Vec::new();

        if self.consume(TokenKind::LeftBrace).is_some() {
            while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
                members.push(self.member(true));
                if self.consume(TokenKind::Semicolon).is_none() {
                    break;
                }
            }
            self.consume(TokenKind::RightBrace);
            self.consume(TokenKind::Semicolon);
        }

        Dictionary {
            name,
            partial,
            inherits,
            annotations,
            members,
            ..Dictionary::default()
        }
    }

    /// `enum Name { "a", "b", };` with at least one value.
    fn enumeration(&mut self, annotations: Vec<Annotation>) -> Enum {
        let name = self.consume_identifier();
        let mut values = Vec::new();

        if self.consume(TokenKind::LeftBrace).is_some() {
            if self.check(TokenKind::RightBrace) {
                let message = format!("Enum `{name}` must have at least one value");
                self.emit_error(message);
            } else {
                loop {
                    values.push(self.enum_value());
                    if self.try_consume(TokenKind::Comma).is_none()
                        || self.check(TokenKind::RightBrace)
                    {
                        break;
                    }
                }
            }
            self.consume(TokenKind::RightBrace);
            self.consume(TokenKind::Semicolon);
        }

        Enum {
            name,
            annotations,
            values,
            ..Enum::default()
        }
    }

    /// `typedef Type Name;`
    fn typedef(&mut self, annotations: Vec<Annotation>) -> Typedef {
        let ty = self.parse_type();
        let name = self.consume_identifier();
        self.consume(TokenKind::Semicolon);
        Typedef {
            name,
            annotations,
            ty,
            ..Typedef::default()
        }
    }

    /// `callback Name = Return (params);` or the bare `callback Name;`.
    fn callback(&mut self, annotations: Vec<Annotation>) -> Callback {
        let name = self.consume_identifier();
        let mut callback = Callback {
            name,
            annotations,
            ..Callback::default()
        };
        if self.try_consume(TokenKind::Semicolon).is_some() {
            return callback;
        }

        self.consume(TokenKind::Equals);
        callback.return_type = Some(self.parse_type());
        callback.parameters = self.parameters();
        self.consume(TokenKind::Semicolon);
        callback
    }
}
