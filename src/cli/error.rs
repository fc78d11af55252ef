//! CLI-level errors (wraps domain and render errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::render::RenderError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{lists} wordlist(s) contain duplicate entries")]
    DuplicateEntries { lists: usize },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Domain(e) => match e {
                DomainError::NotADirectory(_) => crate::exitcode::NOINPUT,
                DomainError::Scan { .. }
                | DomainError::Read { .. }
                | DomainError::NonUnicodeName(_) => crate::exitcode::IOERR,
            },
            CliError::Render(e) => match e {
                RenderError::Create { .. } => crate::exitcode::CANTCREAT,
                RenderError::Io(_) | RenderError::Json(_) => crate::exitcode::IOERR,
            },
            CliError::DuplicateEntries { .. } => crate::exitcode::DATAERR,
        }
    }
}
