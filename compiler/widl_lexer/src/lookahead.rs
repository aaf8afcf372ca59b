//! FIFO lookahead over a [`Scanner`].

use std::collections::VecDeque;

use crate::{Scanner, Token};

/// Scanner wrapper that can peek any number of tokens ahead.
///
/// Tokens come out in exactly the order the scanner produced them; peeking
/// only moves tokens into the buffer, it never skips or reorders. There is
/// no notion of significance here: whitespace and comments are returned
/// like any other token.
pub struct Lookahead<'src> {
    scanner: Scanner<'src>,
    buffered: VecDeque<Token<'src>>,
}

impl<'src> Lookahead<'src> {
    pub fn new(scanner: Scanner<'src>) -> Self {
        Lookahead {
            scanner,
            buffered: VecDeque::new(),
        }
    }

    /// The source being scanned.
    pub fn source(&self) -> &'src str {
        self.scanner.source()
    }

    /// Dequeue a buffered token, or pull a fresh one from the scanner.
    pub fn next_token(&mut self) -> Token<'src> {
        match self.buffered.pop_front() {
            Some(token) => token,
            None => self.scanner.next_token(),
        }
    }

    /// The `count`-th token ahead (`1` is the token `next_token` would return).
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn peek(&mut self, count: usize) -> &Token<'src> {
        assert!(count >= 1, "lookahead count must be >= 1, got {count}");
        while self.buffered.len() < count {
            let token = self.scanner.next_token();
            self.buffered.push_back(token);
        }
        &self.buffered[count - 1]
    }

    /// Number of tokens pulled from the scanner but not yet consumed.
    pub fn buffered_len(&self) -> usize {
        self.buffered.len()
    }
}
