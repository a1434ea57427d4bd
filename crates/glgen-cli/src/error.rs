use std::io;
use std::path::PathBuf;

/// Errors that end a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to create {}: {source}", path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("invalid descriptor list: {0}")]
    Descriptors(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0} descriptor(s) have no target mapping")]
    Unmapped(usize),
}
