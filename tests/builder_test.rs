//! Tests for TreeBuilder

use std::path::PathBuf;

use tempfile::TempDir;

use wlrender::domain::{Node, Tree, TreeBuilder};

fn create_list_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    std::fs::write(&path, content).expect("write wordlist file");
    path
}

fn subtree<'a>(tree: &'a Tree, key: &str) -> &'a Tree {
    match tree.get(key) {
        Some(Node::Dir(sub)) => sub,
        other => panic!("expected directory node at {:?}, got {:?}", key, other),
    }
}

fn words<'a>(tree: &'a Tree, key: &str) -> &'a [String] {
    match tree.get(key) {
        Some(Node::List(list)) => list.words(),
        other => panic!("expected wordlist node at {:?}, got {:?}", key, other),
    }
}

#[test]
fn given_nested_directories_when_building_then_mirrors_hierarchy() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_list_file(&temp, "a/one.txt", "alpha\nbeta\n");
    create_list_file(&temp, "a/sub/two.txt", "gamma\n");

    // Act
    let tree = TreeBuilder::new(true).build(temp.path()).unwrap();

    // Assert
    let a = subtree(&tree, "a");
    assert_eq!(words(a, "one"), ["alpha", "beta"]);
    assert_eq!(words(subtree(a, "sub"), "two"), ["gamma"]);
}

#[test]
fn given_non_txt_files_when_building_then_skips_them_silently() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_list_file(&temp, "kept.txt", "word\n");
    create_list_file(&temp, "notes.md", "ignored\n");
    create_list_file(&temp, "README", "ignored\n");

    // Act
    let tree = TreeBuilder::new(true).build(temp.path()).unwrap();

    // Assert
    assert_eq!(tree.len(), 1);
    assert_eq!(words(&tree, "kept"), ["word"]);
}

#[test]
fn given_txt_file_when_building_then_key_is_stem() {
    let temp = TempDir::new().unwrap();
    create_list_file(&temp, "lorem.txt", "x\n");

    let tree = TreeBuilder::new(true).build(temp.path()).unwrap();

    assert!(tree.contains_key("lorem"));
    assert!(!tree.contains_key("lorem.txt"));
}

#[test]
fn given_file_with_padding_and_blank_lines_when_building_then_lines_are_trimmed() {
    let temp = TempDir::new().unwrap();
    create_list_file(&temp, "list.txt", "alpha\n  beta  \n\ngamma\n");

    let tree = TreeBuilder::new(true).build(temp.path()).unwrap();

    assert_eq!(words(&tree, "list"), ["alpha", "beta", "gamma"]);
}

#[test]
fn given_file_without_final_newline_when_building_then_last_line_kept() {
    let temp = TempDir::new().unwrap();
    create_list_file(&temp, "list.txt", "alpha\ngamma");

    let tree = TreeBuilder::new(true).build(temp.path()).unwrap();

    assert_eq!(words(&tree, "list"), ["alpha", "gamma"]);
}

#[test]
fn given_empty_subdirectory_when_building_then_creates_empty_dir_node() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("empty")).unwrap();

    let tree = TreeBuilder::new(true).build(temp.path()).unwrap();

    assert!(subtree(&tree, "empty").is_empty());
}

#[test]
fn given_nonexistent_root_when_building_then_errors() {
    let result = TreeBuilder::new(true).build(std::path::Path::new("/nonexistent/wordlists"));
    assert!(result.is_err());
}

#[test]
fn given_file_as_root_when_building_then_errors() {
    let temp = TempDir::new().unwrap();
    let file = create_list_file(&temp, "list.txt", "x\n");

    let result = TreeBuilder::new(true).build(&file);

    assert!(result.is_err());
}

#[test]
fn given_quiet_or_not_when_building_then_trees_are_identical() {
    let temp = TempDir::new().unwrap();
    create_list_file(&temp, "a/one.txt", "alpha\n");
    create_list_file(&temp, "two.txt", "beta\n");

    let loud = TreeBuilder::new(false).build(temp.path()).unwrap();
    let quiet = TreeBuilder::new(true).build(temp.path()).unwrap();

    assert_eq!(loud, quiet);
}
