use std::path::Path;

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::{find_duplicates, Tree, TreeBuilder};
use crate::render;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(outfile) = cli.outfile.as_deref() else {
        // Only reachable with --generate, which main handles before dispatch.
        return Ok(());
    };

    let builder = TreeBuilder::new(cli.quiet);
    let tree = builder.build(&cli.root)?;

    if cli.check {
        check_duplicates(&tree)?;
    }

    render_tree(&tree, cli.output, outfile, cli.quiet)
}

#[instrument(level = "debug", skip(tree))]
fn check_duplicates(tree: &Tree) -> CliResult<()> {
    let offenders = find_duplicates(tree);
    for (path, words) in &offenders {
        output::warning(&format!(
            "duplicate entries in {}: {}",
            path,
            words.join(", ")
        ));
    }
    if offenders.is_empty() {
        Ok(())
    } else {
        Err(CliError::DuplicateEntries {
            lists: offenders.len(),
        })
    }
}

#[instrument(level = "debug", skip(tree))]
fn render_tree(
    tree: &Tree,
    format: render::OutputFormat,
    outfile: &Path,
    quiet: bool,
) -> CliResult<()> {
    debug!("rendering {} to {}", format, outfile.display());
    let stats = render::render(format, tree, outfile, quiet)?;
    if !quiet {
        output::success(&format!(
            "wrote {} ({} wordlists)",
            outfile.display(),
            stats.lists
        ));
    }
    Ok(())
}
