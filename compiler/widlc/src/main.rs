//! WIDL command-line interface.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use widlc::cli::{Args, Command};
use widlc::commands::{check_files, format_path, lex_path, parse_files, ParseOptions};
use widlc::tracing_setup::init_tracing;
use widlc::CliError;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.trace_tree);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let result = run(args.command, &mut out, &mut err);
    let _ = out.flush();
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(err, "error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(command: Command, out: &mut impl Write, err: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Lex { file } => lex_path(&file, out),
        Command::Parse {
            json,
            no_spans,
            files,
        } => parse_files(&files, ParseOptions { json, no_spans }, out),
        Command::Fmt { file } => format_path(&file, out, err),
        Command::Check { files } => check_files(&files, out, err),
    }
}
