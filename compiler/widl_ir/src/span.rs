//! Source location spans.

use std::fmt;

/// Inclusive byte range `start..=end` in the source text.
///
/// Both offsets point at bytes of the node's first and last token. A node
/// that consumed no tokens collapses to `start..=start`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Dummy span for nodes built outside the parser.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a span from its first and last byte offsets.
    ///
    /// An `end` before `start` (nothing consumed) collapses onto `start`.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        let end = if end < start { start } else { end };
        Span { start, end }
    }

    /// Number of bytes covered (never zero).
    #[inline]
    pub const fn width(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Check if an offset is within this span.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset <= self.end
    }

    /// Check if another span is fully contained within this span.
    #[inline]
    pub const fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The covered source text, or `None` if the span leaves `source` or
    /// splits a character.
    pub fn slice(self, source: &str) -> Option<&str> {
        source.get(self.start as usize..=self.end as usize)
    }

    /// Exclusive byte range, for tooling that wants `Range<usize>`.
    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize + 1
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests;
