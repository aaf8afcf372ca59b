use std::io::Write;
use std::path::PathBuf;

use widl_ir::dump::{dump_with, DumpOptions};

use super::read_and_parse;
use crate::CliError;

#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    pub json: bool,
    pub no_spans: bool,
}

/// Dump the tree of each file in argument order. Files with syntax errors
/// are dumped like any other; the errors are part of the tree.
pub fn parse_files(
    paths: &[PathBuf],
    options: ParseOptions,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let dump_options = DumpOptions {
        spans: !options.no_spans,
        comments: true,
    };
    let parsed = read_and_parse(paths)?;
    let headers = parsed.len() > 1;

    for (source, file) in &parsed {
        if headers {
            writeln!(out, "== {} ==", source.name())?;
        }
        if options.json {
            serde_json::to_writer_pretty(&mut *out, file)?;
            writeln!(out)?;
        } else {
            write!(out, "{}", dump_with(file, dump_options))?;
        }
    }
    Ok(())
}
