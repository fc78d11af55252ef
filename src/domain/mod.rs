//! Domain layer: the wordlist tree and the builder that scans it from disk.

pub mod builder;
pub mod entities;
pub mod error;

pub use builder::TreeBuilder;
pub use entities::{count_lists, find_duplicates, Node, Tree, WordList};
pub use error::{DomainError, DomainResult};
