//! JSON renderer: a thin wrapper over serde_json.

use std::io::Write;

use crate::domain::{count_lists, Tree};
use crate::render::{RenderResult, RenderStats};

/// Write `tree` as compact JSON, key order preserved.
pub fn write_json<W: Write>(tree: &Tree, writer: &mut W) -> RenderResult<RenderStats> {
    serde_json::to_writer(writer, tree)?;
    Ok(RenderStats {
        lists: count_lists(tree),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Node, WordList};

    #[test]
    fn given_empty_tree_when_writing_json_then_emits_empty_object() {
        let mut buf = Vec::new();
        let stats = write_json(&Tree::new(), &mut buf).unwrap();
        assert_eq!(buf, b"{}");
        assert_eq!(stats.lists, 0);
    }

    #[test]
    fn given_tree_when_writing_json_then_preserves_insertion_order() {
        let mut tree = Tree::new();
        tree.insert("zeta".into(), Node::List(WordList::parse("z\n")));
        tree.insert("alpha".into(), Node::List(WordList::parse("a\n")));

        let mut buf = Vec::new();
        write_json(&tree, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            r#"{"zeta":["z"],"alpha":["a"]}"#
        );
    }
}
