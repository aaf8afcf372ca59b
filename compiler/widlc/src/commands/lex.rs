use std::io::Write;
use std::path::Path;

use super::read_source;
use crate::CliError;

/// Print every token, trivia included, as `Kind @position "text"`.
pub fn lex_path(path: &Path, out: &mut impl Write) -> Result<(), CliError> {
    let source = read_source(path)?;
    for token in widl_lexer::lex(&source.text) {
        writeln!(out, "{:?} @{} {:?}", token.kind, token.position, token.text)?;
    }
    Ok(())
}
