//! Grammar productions.
//!
//! Each module extends `Parser` with the rules for one family of
//! constructs:
//!
//! - `decl`: declarations and their bodies
//! - `member`: interface, mixin and dictionary members
//! - `ty`: type expressions
//! - `params`: parameter lists
//! - `annotations`: bracketed annotation groups
//! - `literal`: enum values and default values
//!
//! Rules never return errors. A rule that finds a problem records it with
//! `emit_error` on the innermost open node and either keeps going or
//! returns what it has; every loop either consumes a token or exits, so
//! malformed input always terminates.

mod annotations;
mod decl;
mod literal;
mod member;
mod params;
mod ty;

use tracing::trace;
use widl_ir::{Declaration, File, Implementation, Includes};
use widl_lexer::TokenKind;

use crate::Parser;

/// Identifier texts that start a declaration.
const DECLARATION_KEYWORDS: [&str; 6] = [
    "interface",
    "partial",
    "callback",
    "dictionary",
    "enum",
    "typedef",
];

impl Parser<'_> {
    /// Parse the whole source.
    ///
    /// # Panics
    ///
    /// Panics if a rule leaves a node open, which is a parser bug.
    pub fn parse_file(mut self) -> File {
        let file = self.node(|p| {
            p.advance();
            let mut declarations = Vec::new();
            loop {
                if p.check(TokenKind::Error) {
                    p.report_lex_error();
                    break;
                }
                if p.is_at_end() {
                    break;
                }
                match p.top_level() {
                    Some(declaration) => {
                        trace!(
                            kind = declaration.kind_name(),
                            name = declaration.name().unwrap_or_default(),
                            "declaration"
                        );
                        declarations.push(declaration);
                    }
                    None => break,
                }
            }
            File {
                declarations,
                ..File::default()
            }
        });
        assert!(
            self.frames.is_empty(),
            "{} node(s) left open after parsing",
            self.frames.len()
        );
        file
    }

    /// One top-level construct, or `None` after recording why the file
    /// cannot be read any further.
    fn top_level(&mut self) -> Option<Declaration> {
        if self.check(TokenKind::LeftBracket)
            || DECLARATION_KEYWORDS
                .iter()
                .any(|keyword| self.check_word(keyword))
        {
            return Some(self.declaration());
        }

        if self.check(TokenKind::Identifier) {
            if self.peek(1).is_word("implements") {
                return Some(Declaration::Implementation(self.implementation()));
            }
            if self.peek(1).is_word("includes") {
                return Some(Declaration::Includes(self.includes()));
            }
        }

        let message = format!("Unexpected token at root level: {}", self.current());
        self.emit_error(message);
        None
    }

    /// `A implements B;`
    fn implementation(&mut self) -> Implementation {
        self.node(|p| {
            let name = p.consume_identifier();
            p.consume_word("implements");
            let source = p.consume_identifier();
            p.consume(TokenKind::Semicolon);
            Implementation {
                name,
                source,
                ..Implementation::default()
            }
        })
    }

    /// `A includes B;`
    fn includes(&mut self) -> Includes {
        self.node(|p| {
            let name = p.consume_identifier();
            p.consume_word("includes");
            let source = p.consume_identifier();
            p.consume(TokenKind::Semicolon);
            Includes {
                name,
                source,
                ..Includes::default()
            }
        })
    }
}
