//! Token kinds and positioned tokens.

use std::borrow::Cow;
use std::fmt;

/// Lexical class of a token.
///
/// The discriminant doubles as the bit index inside a [`TokenSet`](crate::TokenSet),
/// so the variant count must stay below 32.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// End of input. Text is empty.
    Eof,
    /// Scanner failure. Text is the diagnostic message, not source text.
    Error,
    Whitespace,
    Comment,

    Identifier,
    String,
    Number,

    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftAngle,
    RightAngle,

    Equals,
    Semicolon,
    Comma,
    QuestionMark,
    Colon,
    Ellipsis,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 21] = [
        TokenKind::Eof,
        TokenKind::Error,
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::Identifier,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::LeftAngle,
        TokenKind::RightAngle,
        TokenKind::Equals,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::QuestionMark,
        TokenKind::Colon,
        TokenKind::Ellipsis,
    ];

    /// Bit index used by [`TokenSet`](crate::TokenSet).
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Human-readable name for diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::Error => "error",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::LeftBracket => "`[`",
            TokenKind::RightBracket => "`]`",
            TokenKind::LeftAngle => "`<`",
            TokenKind::RightAngle => "`>`",
            TokenKind::Equals => "`=`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::QuestionMark => "`?`",
            TokenKind::Colon => "`:`",
            TokenKind::Ellipsis => "`...`",
        }
    }

    /// Single-rune punctuation for a character, if it is one.
    pub(crate) const fn punctuation(c: char) -> Option<TokenKind> {
        Some(match c {
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '<' => TokenKind::LeftAngle,
            '>' => TokenKind::RightAngle,
            '=' => TokenKind::Equals,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '?' => TokenKind::QuestionMark,
            ':' => TokenKind::Colon,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified lexeme with its byte position.
///
/// `text` is the exact source slice for every kind except [`TokenKind::Error`],
/// whose text is the rendered [`LexError`](crate::LexError). There is no length
/// field: the slice carries it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Byte offset of the first byte of the lexeme.
    pub position: u32,
    pub text: Cow<'src, str>,
}

impl<'src> Token<'src> {
    /// Token borrowing its text from the source.
    pub fn new(kind: TokenKind, position: u32, text: &'src str) -> Self {
        Token {
            kind,
            position,
            text: Cow::Borrowed(text),
        }
    }

    /// Empty end-of-input token at `position`.
    pub fn eof(position: u32) -> Self {
        Token::new(TokenKind::Eof, position, "")
    }

    /// Byte offset one past the lexeme (exclusive end).
    #[inline]
    pub fn end(&self) -> u32 {
        self.position
            .saturating_add(u32::try_from(self.text.len()).unwrap_or(u32::MAX))
    }

    /// Check the kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// True for an identifier whose text is exactly `word`.
    #[inline]
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == word
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("end of input"),
            TokenKind::Error => write!(f, "error ({})", self.text),
            TokenKind::Identifier | TokenKind::String | TokenKind::Number => {
                write!(f, "{} `{}`", self.kind.display_name(), self.text)
            }
            kind => f.write_str(kind.display_name()),
        }
    }
}

#[cfg(test)]
mod tests;
