//! wlrender: renders a directory tree of `.txt` wordlists into a single file.
//!
//! The `domain` layer scans the filesystem and builds the in-memory tree,
//! `render` turns that tree into an output format, and `cli` wires both to
//! the command line.

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod render;

pub use domain::{Node, Tree, TreeBuilder, WordList};
pub use render::OutputFormat;
