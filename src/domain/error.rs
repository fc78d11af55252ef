//! Domain-level errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to scan {path}")]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file name is not valid Unicode: {0}")]
    NonUnicodeName(PathBuf),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
