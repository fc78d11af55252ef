//! Scans a directory tree into a wordlist [`Tree`].

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::domain::entities::{Node, Tree, WordList};
use crate::domain::error::{DomainError, DomainResult};

const LIST_SUFFIX: &str = ".txt";

/// Builds a [`Tree`] mirroring a directory hierarchy.
///
/// Directories become sub-trees under their literal name, `.txt` files become
/// wordlists under their stem, anything else is skipped silently. Entry order
/// is the filesystem listing order, depth-first.
pub struct TreeBuilder {
    quiet: bool,
}

impl TreeBuilder {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn build(&self, root: &Path) -> DomainResult<Tree> {
        if !root.is_dir() {
            return Err(DomainError::NotADirectory(root.to_path_buf()));
        }

        let mut tree = Tree::new();
        for entry in WalkDir::new(root).min_depth(1) {
            let entry = entry.map_err(|e| DomainError::Scan {
                path: root.to_path_buf(),
                source: e,
            })?;
            let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());

            if entry.file_type().is_dir() {
                let name = entry_key(entry.path(), entry.file_name())?;
                debug!("descending into {}", entry.path().display());
                subtree_mut(&mut tree, rel.parent())?.insert(name, Node::Dir(Tree::new()));
            } else if entry.file_type().is_file() {
                let name = entry_key(entry.path(), entry.file_name())?;
                let Some(stem) = name.strip_suffix(LIST_SUFFIX) else {
                    continue;
                };
                if !self.quiet {
                    println!("reading {}", entry.path().display());
                }
                let content = fs::read_to_string(entry.path()).map_err(|e| DomainError::Read {
                    path: entry.path().to_path_buf(),
                    source: e,
                })?;
                let list = WordList::parse(&content);
                subtree_mut(&mut tree, rel.parent())?
                    .insert(stem.to_string(), Node::List(list));
            }
        }
        Ok(tree)
    }
}

fn entry_key(path: &Path, name: &std::ffi::OsStr) -> DomainResult<String> {
    name.to_str()
        .map(String::from)
        .ok_or_else(|| DomainError::NonUnicodeName(path.to_path_buf()))
}

/// Walk down to the sub-tree for `rel_dir`, relative to the scan root.
///
/// Parent directories are always yielded before their contents, so every
/// ancestor already exists as a `Dir` node.
fn subtree_mut<'a>(tree: &'a mut Tree, rel_dir: Option<&Path>) -> DomainResult<&'a mut Tree> {
    let mut cur = tree;
    let Some(rel_dir) = rel_dir else {
        return Ok(cur);
    };
    for comp in rel_dir.components() {
        let key = comp
            .as_os_str()
            .to_str()
            .ok_or_else(|| DomainError::NonUnicodeName(rel_dir.to_path_buf()))?;
        cur = match cur
            .entry(key.to_string())
            .or_insert_with(|| Node::Dir(Tree::new()))
        {
            Node::Dir(sub) => sub,
            // The walk yields a directory before its contents, so every
            // ancestor is already a Dir node.
            Node::List(_) => return Err(DomainError::NotADirectory(rel_dir.to_path_buf())),
        };
    }
    Ok(cur)
}
