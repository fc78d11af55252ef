//! Rant module renderer.
//!
//! Emits a [Rant](https://rant-lang.org/) module definition: one list binding
//! per wordlist, one empty sub-module declaration per directory, depth-first
//! in tree order. Write-only; nothing here re-parses the format.

use std::io::Write;

use itertools::Itertools;
use tracing::debug;

use crate::domain::{Node, Tree};
use crate::render::{RenderResult, RenderStats};

/// Write `tree` as a Rant module definition.
///
/// The file ends with `<module>` and no trailing newline.
pub fn write_rant<W: Write>(tree: &Tree, writer: &mut W, quiet: bool) -> RenderResult<RenderStats> {
    writeln!(writer, "<%module = (::)>")?;
    let mut lists = 0;
    write_level(tree, None, writer, quiet, &mut lists)?;
    write!(writer, "<module>")?;
    Ok(RenderStats { lists })
}

fn write_level<W: Write>(
    tree: &Tree,
    prefix: Option<&str>,
    writer: &mut W,
    quiet: bool,
    lists: &mut usize,
) -> RenderResult<()> {
    for (key, node) in tree {
        let path = match prefix {
            Some(p) => format!("{}/{}", p, key),
            None => key.clone(),
        };
        match node {
            Node::List(list) => {
                if !quiet {
                    println!("rendering wordlist {}", path);
                }
                debug!("rendering wordlist {}", path);
                writeln!(writer, "<module/{} = {}>", path, render_list(list.words()))?;
                *lists += 1;
            }
            Node::Dir(sub) => {
                writeln!(writer, "<module/{} = (::)>", path)?;
                write_level(sub, Some(&path), writer, quiet, lists)?;
            }
        }
    }
    Ok(())
}

// Items are quoted verbatim; embedded quotes pass through unescaped.
fn render_list(words: &[String]) -> String {
    format!(
        "(: {} )",
        words.iter().map(|word| format!("\"{}\"", word)).join("; ")
    )
}
