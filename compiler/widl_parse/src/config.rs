//! Per-parse configuration.

use widl_lexer::{TokenKind, TokenSet};

/// Fixed for the lifetime of one parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Kinds skipped when advancing and when peeking for significant tokens.
    pub ignored: TokenSet,
    /// Kind whose text is collected and attached to the next opened node.
    /// Only has an effect if it is also in `ignored`.
    pub comment: TokenKind,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            ignored: TokenSet::new()
                .with(TokenKind::Whitespace)
                .with(TokenKind::Comment),
            comment: TokenKind::Comment,
        }
    }
}
