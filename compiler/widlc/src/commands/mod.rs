//! Command handlers for the `widl` CLI.
//!
//! Each handler writes its regular output to `out` and diagnostics to
//! `err`. Shared helpers like [`read_source`] live here.

mod check;
mod fmt;
mod lex;
mod parse;

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;
use widl_ir::File;

use crate::CliError;

pub use check::check_files;
pub use fmt::format_path;
pub use lex::lex_path;
pub use parse::{parse_files, ParseOptions};

/// A file read from disk.
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    /// Path as shown in output and reports.
    pub fn name(&self) -> String {
        self.path.display().to_string()
    }
}

pub fn read_source(path: &Path) -> Result<SourceFile, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceFile {
        path: path.to_path_buf(),
        text,
    })
}

/// Read every file, then parse them in parallel. Results keep the order of
/// `paths`.
pub fn read_and_parse(paths: &[PathBuf]) -> Result<Vec<(SourceFile, File)>, CliError> {
    let sources = paths
        .iter()
        .map(|path| read_source(path))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(files = sources.len(), "parsing");
    Ok(sources
        .into_par_iter()
        .map(|source| {
            let file = widl_parse::parse(&source.text);
            (source, file)
        })
        .collect())
}
