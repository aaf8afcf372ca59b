//! Hand-written scanner built from chained scanning states.
//!
//! # Design
//!
//! Each [`ScanState`] has a state method that reads runes, optionally emits
//! one token, and returns the state to continue in. The `Source` state
//! dispatches on the first rune of a lexeme; multi-rune lexemes (identifiers,
//! numbers, strings, comments) are handed to a dedicated state that finishes
//! the lexeme and returns to `Source`. No state ever backtracks.
//!
//! Tokens are pulled lazily through [`Scanner::next_token`] or the
//! [`Iterator`] impl. After `Eof` or `Error` the scanner is halted.

use std::borrow::Cow;

use crate::{LexError, Token, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    /// Between lexemes: dispatch on the next rune.
    Source,
    Identifier,
    Number,
    /// Opening `"` already consumed.
    StringLiteral,
    /// `//` already consumed.
    LineComment,
    /// `/*` already consumed.
    BlockComment,
    /// `Eof` or `Error` was emitted; nothing more is produced.
    Halted,
}

/// Lazy token producer over a source string.
pub struct Scanner<'src> {
    source: &'src str,
    /// Start of the lexeme being scanned.
    start: usize,
    /// Read position.
    pos: usize,
    state: ScanState,
    /// Token emitted by the last state step, not yet handed out.
    pending: Option<Token<'src>>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Scanner {
            source,
            start: 0,
            pos: 0,
            state: ScanState::Source,
            pending: None,
        }
    }

    /// The source being scanned.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// True once `Eof` or `Error` has been emitted.
    pub fn is_halted(&self) -> bool {
        self.state == ScanState::Halted
    }

    /// Produce the next token.
    ///
    /// Runs state steps until one emits. Once halted, keeps returning `Eof`
    /// at the position where scanning stopped.
    pub fn next_token(&mut self) -> Token<'src> {
        loop {
            if let Some(token) = self.pending.take() {
                return token;
            }
            self.state = match self.state {
                ScanState::Source => self.lex_source(),
                ScanState::Identifier => self.lex_identifier(),
                ScanState::Number => self.lex_number(),
                ScanState::StringLiteral => self.lex_string(),
                ScanState::LineComment => self.lex_line_comment(),
                ScanState::BlockComment => self.lex_block_comment(),
                ScanState::Halted => return Token::eof(offset(self.pos)),
            };
        }
    }

    // ─── States ────────────────────────────────────────────────────

    fn lex_source(&mut self) -> ScanState {
        let Some(c) = self.next_char() else {
            self.emit(TokenKind::Eof);
            return ScanState::Halted;
        };

        if let Some(kind) = TokenKind::punctuation(c) {
            self.emit(kind);
            return ScanState::Source;
        }

        match c {
            '.' => {
                if self.accept_str("..") {
                    self.emit(TokenKind::Ellipsis);
                    ScanState::Source
                } else {
                    self.fail(LexError::UnrecognizedCharacter(c))
                }
            }
            '"' => ScanState::StringLiteral,
            '/' => match self.peek_char() {
                Some('/') => {
                    self.next_char();
                    ScanState::LineComment
                }
                Some('*') => {
                    self.next_char();
                    ScanState::BlockComment
                }
                _ => self.fail(LexError::UnrecognizedCharacter(c)),
            },
            '-' if self.peek_char().is_some_and(is_identifier_rune) => ScanState::Number,
            c if c.is_ascii_digit() => ScanState::Number,
            c if c.is_whitespace() => {
                self.emit(TokenKind::Whitespace);
                ScanState::Source
            }
            c if is_identifier_rune(c) => ScanState::Identifier,
            c => self.fail(LexError::UnrecognizedCharacter(c)),
        }
    }

    fn lex_identifier(&mut self) -> ScanState {
        self.eat_while(is_identifier_rune);
        self.emit(TokenKind::Identifier);
        ScanState::Source
    }

    fn lex_number(&mut self) -> ScanState {
        self.eat_while(|c| is_identifier_rune(c) || c == '.');
        self.emit(TokenKind::Number);
        ScanState::Source
    }

    fn lex_string(&mut self) -> ScanState {
        let mut escaped = false;
        loop {
            match self.next_char() {
                None => return self.fail(LexError::UnterminatedString),
                Some('"') if !escaped => break,
                Some(c) => escaped = c == '\\' && !escaped,
            }
        }
        self.emit(TokenKind::String);
        ScanState::Source
    }

    fn lex_line_comment(&mut self) -> ScanState {
        let rest = &self.source.as_bytes()[self.pos..];
        self.pos += memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        self.emit(TokenKind::Comment);
        ScanState::Source
    }

    fn lex_block_comment(&mut self) -> ScanState {
        let rest = &self.source.as_bytes()[self.pos..];
        match memchr::memmem::find(rest, b"*/") {
            Some(close) => {
                self.pos += close + 2;
                self.emit(TokenKind::Comment);
                ScanState::Source
            }
            None => self.fail(LexError::UnterminatedComment),
        }
    }

    // ─── Rune access ───────────────────────────────────────────────

    fn next_char(&mut self) -> Option<char> {
        let c = self.source[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn accept_str(&mut self, expected: &str) -> bool {
        if self.source[self.pos..].starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek_char() {
            if !predicate(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    // ─── Emission ──────────────────────────────────────────────────

    fn emit(&mut self, kind: TokenKind) {
        debug_assert!(self.pending.is_none(), "two tokens emitted in one step");
        self.pending = Some(Token::new(
            kind,
            offset(self.start),
            &self.source[self.start..self.pos],
        ));
        self.start = self.pos;
    }

    /// Emit an error token at the start of the current lexeme and halt.
    fn fail(&mut self, error: LexError) -> ScanState {
        self.pending = Some(Token {
            kind: TokenKind::Error,
            position: offset(self.start),
            text: Cow::Owned(error.to_string()),
        });
        ScanState::Halted
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    /// Yields every token up to and including the terminal `Eof` or `Error`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.state == ScanState::Halted && self.pending.is_none() {
            return None;
        }
        Some(self.next_token())
    }
}

/// Runes allowed in identifiers and after the first rune of a number.
#[inline]
fn is_identifier_rune(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte offsets saturate at `u32::MAX`; sources that large are not supported.
#[inline]
fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}
