//! Output renderers: one fixed, small set of formats.

pub mod json;
pub mod rant;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;
use tracing::instrument;

use crate::domain::Tree;

/// Selectable output formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Nested JSON objects/arrays
    Json,
    /// Rant module definition
    Rant,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Rant => write!(f, "rant"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot create output file {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize tree")]
    Json(#[from] serde_json::Error),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Summary of a completed render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    /// Wordlists written to the output file
    pub lists: usize,
}

/// Render `tree` to `outpath` in the given format, overwriting any existing
/// file.
#[instrument(level = "debug", skip(tree))]
pub fn render(
    format: OutputFormat,
    tree: &Tree,
    outpath: &Path,
    quiet: bool,
) -> RenderResult<RenderStats> {
    let file = File::create(outpath).map_err(|e| RenderError::Create {
        path: outpath.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    let stats = match format {
        OutputFormat::Json => json::write_json(tree, &mut writer)?,
        OutputFormat::Rant => rant::write_rant(tree, &mut writer, quiet)?,
    };
    writer.flush()?;
    Ok(stats)
}
