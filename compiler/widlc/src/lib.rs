//! WIDL command-line front end.
//!
//! The `widl` binary is a thin shell over this library: argument parsing
//! lives in [`cli`], each subcommand in [`commands`], diagnostics rendering
//! in [`report`]. Commands write to caller-supplied sinks so they can be
//! driven from tests.

pub mod cli;
pub mod commands;
mod error;
pub mod report;
pub mod tracing_setup;

pub use error::CliError;
