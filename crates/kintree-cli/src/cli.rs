//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kintree - Ask how two people in a family tree are related.
#[derive(Debug, Parser)]
#[command(name = "kintree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Tree file to load (`name,gender` and `name1,relation,name2` lines)
    #[arg(short, long, global = true, env = "KINTREE_TREE")]
    pub tree: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (plain records)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find the relation one person has to another
    Relation(RelationArgs),

    /// List everyone in the tree, in alphabetical order
    People,

    /// Save everyone in the tree to a file, in alphabetical order
    Export(ExportArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the relation command.
#[derive(Debug, Parser)]
pub struct RelationArgs {
    /// First person, or both names separated by a comma
    pub first: String,

    /// Second person
    pub second: Option<String>,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// File to write `name,gender` lines to
    pub output: PathBuf,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
