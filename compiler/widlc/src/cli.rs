//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "widl", version, about = "Parse and inspect WebIDL files")]
pub struct Args {
    /// Render tracing output as an indented tree (needs `RUST_LOG`).
    #[arg(long, global = true)]
    pub trace_tree: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every raw token of a file.
    Lex { file: PathBuf },

    /// Dump the syntax tree of each file.
    Parse {
        /// Print the tree as JSON.
        #[arg(long)]
        json: bool,

        /// Leave spans out of the text dump.
        #[arg(long)]
        no_spans: bool,

        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print a file in canonical layout.
    Fmt { file: PathBuf },

    /// Report syntax errors; exits non-zero if there are any.
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}
