//! Standalone scanner for the supported WebIDL subset.
//!
//! The scanner turns source text into a lazy stream of [`Token`]s. It has no
//! keyword list: every word is an [`TokenKind::Identifier`] and keyword-ness is
//! decided by the parser. Whitespace and comments are emitted as tokens so
//! that callers decide what is significant.
//!
//! [`Lookahead`] wraps a [`Scanner`] with a FIFO so a parser can peek any
//! number of tokens ahead without consuming them.

mod lex_error;
mod lookahead;
mod scanner;
mod token;
mod token_set;

pub use lex_error::LexError;
pub use lookahead::Lookahead;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
pub use token_set::TokenSet;

/// Create a scanner over `source`.
///
/// Tokens are produced on demand; nothing is materialized up front.
pub fn lex(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}
