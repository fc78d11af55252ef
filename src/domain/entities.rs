//! Domain entities: the wordlist tree

use indexmap::IndexMap;
use serde::Serialize;

/// One directory level: entry name -> node, in filesystem listing order.
///
/// Insertion order is meaningful and must survive serialization, hence an
/// index map rather than a sorted one.
pub type Tree = IndexMap<String, Node>;

/// A single entry in a [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A `.txt` file, keyed by its stem.
    List(WordList),
    /// A subdirectory, keyed by its literal name.
    Dir(Tree),
}

/// An ordered sequence of words, one per trimmed non-empty line of a source
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse file content into a wordlist.
    ///
    /// Each line is trimmed of leading/trailing whitespace (including the
    /// terminator); lines empty after trimming produce no entry. A final line
    /// without a trailing newline is a regular entry.
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words occurring more than once, in first-occurrence order.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dups = Vec::new();
        for word in &self.words {
            if !seen.insert(word.as_str()) && !dups.contains(&word.as_str()) {
                dups.push(word.as_str());
            }
        }
        dups
    }
}

/// Number of wordlists in the tree, at any depth.
pub fn count_lists(tree: &Tree) -> usize {
    tree.values()
        .map(|node| match node {
            Node::List(_) => 1,
            Node::Dir(sub) => count_lists(sub),
        })
        .sum()
}

/// All wordlists containing duplicate entries, as (slash-joined path,
/// duplicated words) pairs in tree order.
pub fn find_duplicates(tree: &Tree) -> Vec<(String, Vec<String>)> {
    let mut found = Vec::new();
    collect_duplicates(tree, None, &mut found);
    found
}

fn collect_duplicates(tree: &Tree, prefix: Option<&str>, found: &mut Vec<(String, Vec<String>)>) {
    for (key, node) in tree {
        let path = match prefix {
            Some(p) => format!("{}/{}", p, key),
            None => key.clone(),
        };
        match node {
            Node::List(list) => {
                let dups = list.duplicates();
                if !dups.is_empty() {
                    found.push((path, dups.into_iter().map(String::from).collect()));
                }
            }
            Node::Dir(sub) => collect_duplicates(sub, Some(&path), found),
        }
    }
}
