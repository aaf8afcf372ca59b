//! Filtered token cursor.
//!
//! Sits between the raw [`Lookahead`] buffer and the grammar: ignored kinds
//! never become current, comment text is gathered for attachment, and
//! peeking applies the same filter without moving the cursor.

use std::mem;

use tracing::trace;
use widl_lexer::{Lookahead, Scanner, Token, TokenKind, TokenSet};

use crate::ParserConfig;

pub struct Cursor<'src> {
    tokens: Lookahead<'src>,
    config: ParserConfig,
    current: Token<'src>,
    previous: Token<'src>,
    /// Comments that preceded `current`, until a node claims them.
    pending_comments: Vec<String>,
    started: bool,
}

impl<'src> Cursor<'src> {
    /// Create a cursor before the first token.
    ///
    /// `current` is a synthetic end-of-input token at offset 0 until the
    /// first [`Cursor::advance`].
    pub fn new(source: &'src str, config: ParserConfig) -> Self {
        Cursor {
            tokens: Lookahead::new(Scanner::new(source)),
            config,
            current: Token::eof(0),
            previous: Token::eof(0),
            pending_comments: Vec::new(),
            started: false,
        }
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.tokens.source()
    }

    #[inline]
    pub fn current(&self) -> &Token<'src> {
        &self.current
    }

    #[inline]
    pub fn previous(&self) -> &Token<'src> {
        &self.previous
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn current_start(&self) -> u32 {
        self.current.position
    }

    /// Inclusive offset of the last byte of the previous token.
    #[inline]
    pub fn previous_end(&self) -> u32 {
        self.previous.end().saturating_sub(1)
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn check_any(&self, kinds: TokenSet) -> bool {
        kinds.contains(self.current.kind)
    }

    /// Identifier whose text is `word`. Keywords are not a lexical class.
    #[inline]
    pub fn check_word(&self, word: &str) -> bool {
        self.current.is_word(word)
    }

    /// True at end of input or on a lexical error; nothing follows either.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::Eof | TokenKind::Error)
    }

    pub fn pending_comments(&self) -> &[String] {
        &self.pending_comments
    }

    /// Claim the comments that preceded the current token.
    pub fn take_comments(&mut self) -> Vec<String> {
        mem::take(&mut self.pending_comments)
    }

    /// Move to the next significant token and return the one left behind.
    ///
    /// Ignored tokens are skipped; the text of comment tokens among them
    /// replaces the pending comment list. Once `Eof` or `Error` is current
    /// the cursor stays put.
    pub fn advance(&mut self) -> Token<'src> {
        if self.started && self.is_at_end() {
            return self.current.clone();
        }
        self.started = true;

        let mut comments = Vec::new();
        let token = loop {
            let token = self.tokens.next_token();
            if self.is_ignored(token.kind) {
                if token.kind == self.config.comment {
                    comments.push(token.text.into_owned());
                }
                continue;
            }
            break token;
        };

        trace!(
            pos = token.position,
            kind = %token.kind,
            text = %token.text,
            comments = comments.len(),
            "advance"
        );

        self.pending_comments = comments;
        let left = mem::replace(&mut self.current, token);
        self.previous = left.clone();
        left
    }

    /// The `count`-th significant token after the current one (`1` is the
    /// token [`Cursor::advance`] would make current).
    ///
    /// Stops early at `Eof` or `Error`, which are returned for any larger
    /// count.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn peek_significant(&mut self, count: usize) -> &Token<'src> {
        assert!(count >= 1, "lookahead count must be >= 1, got {count}");
        if self.is_at_end() && self.started {
            return &self.current;
        }
        let mut seen = 0;
        let mut index = 0;
        loop {
            index += 1;
            let kind = self.tokens.peek(index).kind;
            if matches!(kind, TokenKind::Eof | TokenKind::Error) {
                break;
            }
            if !self.is_ignored(kind) {
                seen += 1;
                if seen == count {
                    break;
                }
            }
        }
        self.tokens.peek(index)
    }

    #[inline]
    fn is_ignored(&self, kind: TokenKind) -> bool {
        // End and error tokens are never skipped, whatever the configuration.
        !matches!(kind, TokenKind::Eof | TokenKind::Error) && self.config.ignored.contains(kind)
    }
}
