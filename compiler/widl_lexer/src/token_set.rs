//! Bitset of token kinds.

use crate::TokenKind;

// TokenSet uses a u32 bitset, so every discriminant index must fit in 0..32.
const _: () = assert!(
    TokenKind::ALL.len() <= 32,
    "TokenSet uses a u32 bitset; all discriminant indices must be < 32"
);

/// A set of token kinds with O(1) membership testing.
///
/// Each bit corresponds to a [`TokenKind`] discriminant. Sets are `const`
/// constructible so grammar rules can keep them in constants:
///
/// ```
/// use widl_lexer::{TokenKind, TokenSet};
///
/// const CLOSERS: TokenSet = TokenSet::new()
///     .with(TokenKind::RightParen)
///     .with(TokenKind::RightBracket);
///
/// assert!(CLOSERS.contains(TokenKind::RightParen));
/// assert!(!CLOSERS.contains(TokenKind::Comma));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenSet(u32);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single kind.
    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u32 << kind.discriminant_index())
    }

    /// Add a kind (builder form for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u32 << kind.discriminant_index()))
    }

    /// Union of two sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check membership.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u32 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the member kinds in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }

    /// Format the set for an "expected ..." message.
    ///
    /// Returns "`(`" for one kind, "`,` or `)`" for two, and a comma list
    /// ending in "or" for more. An empty set formats as "nothing".
    pub fn format_expected(&self) -> String {
        let names: Vec<&'static str> = self.iter().map(TokenKind::display_name).collect();
        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => (*single).to_string(),
            [first, second] => format!("{first} or {second}"),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        }
    }
}

impl From<TokenKind> for TokenSet {
    fn from(kind: TokenKind) -> Self {
        TokenSet::single(kind)
    }
}

impl<const N: usize> From<[TokenKind; N]> for TokenSet {
    fn from(kinds: [TokenKind; N]) -> Self {
        kinds
            .into_iter()
            .fold(TokenSet::new(), |set, kind| set.with(kind))
    }
}

#[cfg(test)]
mod tests;
