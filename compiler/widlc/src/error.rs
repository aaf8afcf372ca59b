use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a command with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    #[error("failed to serialize tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{count} file(s) with syntax errors")]
    SyntaxErrors { count: usize },
}

impl CliError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::SyntaxErrors { .. } => 1,
            CliError::Read { .. } | CliError::Write(_) | CliError::Json(_) => 2,
        }
    }
}
