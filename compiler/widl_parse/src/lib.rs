//! Recursive descent parser for the supported WebIDL subset.
//!
//! Produces a [`widl_ir::File`]. Parsing never fails: syntax problems are
//! recorded as [`ErrorNode`]s on the node that was open when they were
//! found, and the tree built so far is always returned.
//!
//! # Layout
//!
//! - [`Cursor`]: significant-token view over the lookahead buffer.
//! - [`Parser`]: the driver. Construction stack, error protocol, token
//!   tests and consumption helpers.
//! - `grammar`: one module per production family, each extending `Parser`.

mod config;
mod cursor;
mod grammar;
mod operator;

pub use config::ParserConfig;
pub use cursor::Cursor;

use tracing::debug;
use widl_ir::{ErrorNode, File, Node, NodeMeta, Span};
use widl_lexer::{Token, TokenKind, TokenSet};

/// Parse `source` with the default configuration.
pub fn parse(source: &str) -> File {
    parse_with_config(source, ParserConfig::default())
}

pub fn parse_with_config(source: &str, config: ParserConfig) -> File {
    Parser::new(source, config).parse_file()
}

/// A node under construction: where it started, the comments it claimed,
/// and the errors recorded while it was innermost.
struct Frame {
    start: u32,
    comments: Vec<String>,
    errors: Vec<ErrorNode>,
}

/// Parser state for one source text.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    frames: Vec<Frame>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, config: ParserConfig) -> Self {
        Parser {
            cursor: Cursor::new(source, config),
            frames: Vec::new(),
        }
    }

    #[inline]
    pub fn cursor(&self) -> &Cursor<'src> {
        &self.cursor
    }

    #[inline]
    pub fn current(&self) -> &Token<'src> {
        self.cursor.current()
    }

    /// Number of nodes currently open.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn advance(&mut self) -> Token<'src> {
        self.cursor.advance()
    }

    // ─── Construction stack ────────────────────────────────────────

    /// Build a node inside its own frame.
    ///
    /// The frame starts at the current token and claims its pending
    /// comments. When `build` returns, the frame is popped and becomes the
    /// node's [`NodeMeta`]: the span ends at the last consumed token and
    /// every error emitted meanwhile (outside nested frames) is attached.
    /// Because the frame is closed after `build` returns on any path,
    /// early returns inside `build` still produce a decorated node.
    pub fn node<N: Node>(&mut self, build: impl FnOnce(&mut Self) -> N) -> N {
        self.open();
        let mut node = build(self);
        *node.meta_mut() = self.close();
        node
    }

    fn open(&mut self) {
        let start = self.cursor.current_start();
        let comments = self.cursor.take_comments();
        self.frames.push(Frame {
            start,
            comments,
            errors: Vec::new(),
        });
    }

    fn close(&mut self) -> NodeMeta {
        let Some(frame) = self.frames.pop() else {
            panic!(
                "node closed with no open node (current token: {})",
                self.cursor.current()
            );
        };
        NodeMeta {
            span: Span::new(frame.start, self.cursor.previous_end()),
            comments: frame.comments,
            errors: frame.errors,
        }
    }

    // ─── Error protocol ────────────────────────────────────────────

    /// Record a syntax error on the innermost open node.
    ///
    /// Suppressed while a lexical error token is current: that error is
    /// reported once, on the file, and nothing after it is meaningful.
    pub fn emit_error(&mut self, message: impl Into<String>) {
        if self.cursor.check(TokenKind::Error) {
            return;
        }
        let error = self.error_node(message.into());
        self.attach_error(error);
    }

    /// Build an error spanning the current token start to the previous
    /// token end, without attaching it.
    pub fn error_node(&self, message: String) -> ErrorNode {
        ErrorNode {
            span: Span::new(self.cursor.current_start(), self.cursor.previous_end()),
            comments: self.cursor.pending_comments().to_vec(),
            message,
        }
    }

    fn attach_error(&mut self, error: ErrorNode) {
        debug!(
            start = error.span.start,
            end = error.span.end,
            message = %error.message,
            "syntax error"
        );
        let Some(frame) = self.frames.last_mut() else {
            panic!("error emitted with no open node: {}", error.message);
        };
        frame.errors.push(error);
    }

    /// Report the current lexical error token on the innermost open node.
    fn report_lex_error(&mut self) {
        let message = self.cursor.current().text.to_string();
        debug!(pos = self.cursor.current_start(), %message, "lexical error, stopping");
        let error = self.error_node(message);
        self.attach_error(error);
    }

    // ─── Token tests ───────────────────────────────────────────────

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    pub fn check_any(&self, kinds: TokenSet) -> bool {
        self.cursor.check_any(kinds)
    }

    #[inline]
    pub fn check_word(&self, word: &str) -> bool {
        self.cursor.check_word(word)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Significant-token lookahead; `1` is the token after the current one.
    #[inline]
    pub fn peek(&mut self, count: usize) -> &Token<'src> {
        self.cursor.peek_significant(count)
    }

    // ─── Consumption ───────────────────────────────────────────────

    pub fn try_consume(&mut self, kind: TokenKind) -> Option<Token<'src>> {
        self.try_consume_any(TokenSet::single(kind))
    }

    pub fn try_consume_any(&mut self, kinds: TokenSet) -> Option<Token<'src>> {
        if self.check_any(kinds) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of `kind`, or record "Expected ..." and return `None`
    /// without moving.
    pub fn consume(&mut self, kind: TokenKind) -> Option<Token<'src>> {
        self.consume_any(TokenSet::single(kind))
    }

    pub fn consume_any(&mut self, kinds: TokenSet) -> Option<Token<'src>> {
        let token = self.try_consume_any(kinds);
        if token.is_none() {
            let message = format!(
                "Expected {}, found {}",
                kinds.format_expected(),
                self.cursor.current()
            );
            self.emit_error(message);
        }
        token
    }

    pub fn try_consume_word(&mut self, word: &str) -> bool {
        if self.check_word(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn consume_word(&mut self, word: &str) -> bool {
        if self.try_consume_word(word) {
            return true;
        }
        let message = format!("Expected keyword `{word}`, found {}", self.cursor.current());
        self.emit_error(message);
        false
    }

    pub fn try_consume_identifier(&mut self) -> Option<String> {
        self.try_consume(TokenKind::Identifier)
            .map(|token| token.text.into_owned())
    }

    /// Consume an identifier; on mismatch record an error and return an
    /// empty name.
    pub fn consume_identifier(&mut self) -> String {
        if let Some(name) = self.try_consume_identifier() {
            return name;
        }
        let message = format!("Expected identifier, found {}", self.cursor.current());
        self.emit_error(message);
        String::new()
    }

    /// Skip tokens until one of `kinds` is current, then consume it.
    ///
    /// Returns `None` if end of input or a lexical error is reached first.
    pub fn consume_until(&mut self, kinds: TokenSet) -> Option<Token<'src>> {
        loop {
            if let Some(token) = self.try_consume_any(kinds) {
                return Some(token);
            }
            if self.is_at_end() {
                return None;
            }
            self.advance();
        }
    }
}
