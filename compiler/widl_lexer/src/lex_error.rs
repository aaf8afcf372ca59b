//! Lexical diagnostics.
//!
//! A lexical error halts the scanner. The error token carries the rendered
//! message as its text.

use thiserror::Error;

/// Why the scanner stopped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A rune no rule accepts, including a `.` that does not start `...`.
    #[error("unrecognized character at this location: {}", describe_rune(.0))]
    UnrecognizedCharacter(char),
    /// End of input inside a `"` string.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// End of input inside a `/* */` comment.
    #[error("unterminated block comment")]
    UnterminatedComment,
}

/// Render a rune as `U+0040 '@'`.
#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror hands fields to format helpers by reference"
)]
fn describe_rune(c: &char) -> String {
    format!("U+{:04X} {c:?}", u32::from(*c))
}
