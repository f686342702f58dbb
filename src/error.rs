//! Error type for tree walking and rendering

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a traversal.
///
/// Nothing is retried: the first failure ends the walk and is returned to the
/// caller. Lines already written to the output stay written.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    NotFound(PathBuf),
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot open directory '{}': Permission denied", .0.display())]
    PermissionDenied(PathBuf),
    #[error("I/O error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
    #[error("error serializing tree: {0}")]
    Json(#[from] serde_json::Error),
}

impl TreeError {
    /// Classify a filesystem error raised while accessing `path`.
    pub(crate) fn access(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => TreeError::NotFound(path),
            io::ErrorKind::PermissionDenied => TreeError::PermissionDenied(path),
            _ => TreeError::Io { path, source },
        }
    }
}
