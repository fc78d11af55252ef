//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::render::OutputFormat;

/// Renders single-file versions of wordlist directories
#[derive(Parser, Debug)]
#[command(name = "wlrender")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output file
    #[arg(value_hint = ValueHint::FilePath, required_unless_present = "generator")]
    pub outfile: Option<PathBuf>,

    /// What type of file to render
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory to scan for wordlists
    #[arg(short, long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// Fail if any wordlist contains duplicate entries
    #[arg(short, long)]
    pub check: bool,

    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions and exit
    #[arg(long = "generate", value_enum, value_name = "SHELL")]
    pub generator: Option<clap_complete::Shell>,
}
