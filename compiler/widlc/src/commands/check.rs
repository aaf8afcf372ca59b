use std::io::Write;
use std::path::PathBuf;

use super::read_and_parse;
use crate::report::write_errors;
use crate::CliError;

/// Report every syntax error in `paths`, then a one-line summary.
pub fn check_files(
    paths: &[PathBuf],
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let parsed = read_and_parse(paths)?;
    let mut failed = 0;
    let mut total = 0;

    for (source, file) in &parsed {
        let count = write_errors(err, &source.name(), &source.text, file)?;
        if count > 0 {
            failed += 1;
            total += count;
        }
    }

    writeln!(
        out,
        "checked {} file(s): {total} error(s) in {failed} file(s)",
        parsed.len()
    )?;
    if failed > 0 {
        return Err(CliError::SyntaxErrors { count: failed });
    }
    Ok(())
}
