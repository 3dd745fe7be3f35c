use std::fmt;
use std::path::PathBuf;

/// Errors raised while scanning the on-disk library
#[derive(Debug)]
pub enum LibraryError {
    /// A required root directory does not exist or is not a directory
    RootNotFound { path: PathBuf },
    /// IO error during directory enumeration
    Io(std::io::Error),
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::RootNotFound { path } => {
                write!(f, "library directory not found: {}", path.display())
            }
            LibraryError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for LibraryError {}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::Io(err)
    }
}
