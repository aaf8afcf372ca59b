use std::io::Write;
use std::path::Path;

use super::read_source;
use crate::report::write_errors;
use crate::CliError;

/// Print the canonical form of a file. A file with syntax errors is not
/// formatted; its errors go to `err` instead.
pub fn format_path(
    path: &Path,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let source = read_source(path)?;
    let file = widl_parse::parse(&source.text);
    if file.has_errors() {
        write_errors(err, &source.name(), &source.text, &file)?;
        return Err(CliError::SyntaxErrors { count: 1 });
    }
    write!(out, "{}", widl_fmt::format_file(&file))?;
    Ok(())
}
