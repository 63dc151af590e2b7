//! Error types for termedit.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for termedit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for termedit operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from terminal operations.
    Io(io::Error),
    /// Writing a buffer back to disk failed.
    Save { path: PathBuf, source: io::Error },
    /// Command-line text outside the command vocabulary.
    UnknownCommand(String),
    /// `:e` given without a path.
    EmptyPath,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Save { path, source } => {
                write!(f, "cannot write {}: {source}", path.display())
            }
            Self::UnknownCommand(s) => write!(f, "unknown command: {s}"),
            Self::EmptyPath => write!(f, "no file name given"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Save { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
