//! WIDL Formatter
//!
//! Prints a parsed tree back as canonical WebIDL source.
//!
//! # Layout
//!
//! - Declarations are separated by one blank line.
//! - Bodies are indented by [`INDENT_WIDTH`] spaces, one member per line.
//! - Annotation groups of declarations go on their own line; those of
//!   members and parameters stay inline.
//! - Member modifiers are printed in grammar order. Dictionary members omit
//!   the implicit `attribute`.
//! - Comments attached to declarations and members are re-emitted verbatim
//!   on the lines before them. Comments on nested nodes are dropped.
//! - Declarations that failed to parse print nothing.
//!
//! Formatting a tree without errors and parsing the result gives back the
//! same tree, spans and comments aside.
//!
//! # Modules
//!
//! - [`context`]: output buffer with indentation tracking
//! - [`inline`]: single-line fragments (types, literals, parameter lists,
//!   annotation groups)
//! - `declarations`: the file and declaration printer

pub mod context;
mod declarations;
pub mod inline;

pub use context::{FormatContext, INDENT_WIDTH};
pub use declarations::{format_file, FileFormatter};
