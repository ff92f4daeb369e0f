//! Kintree CLI - Find how two people in a genealogical tree are related.

use clap::Parser;
use kintree_cli::commands;
use kintree_cli::repl;
use kintree_cli::{Cli, CliError, Command, Config, Formatter};
use kintree_store::Registry;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr, RUST_LOG overrides)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> kintree_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // An explicit config file must load; the default one may be absent or broken
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable config, using defaults");
            Config::default()
        }),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let tree = cli.tree.or_else(|| config.settings.tree_file.clone());

    // Handle commands
    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            let registry = match &tree {
                Some(path) => Some(commands::execute_load(path, &formatter)?),
                None => None,
            };
            repl::run_repl(&config, &formatter, registry)?;
        }
        Command::Relation(args) => {
            let registry = required_tree(tree)?;
            commands::execute_relation(args, &registry, &formatter)?;
        }
        Command::People => {
            let registry = required_tree(tree)?;
            commands::execute_people(&registry, &formatter)?;
        }
        Command::Export(args) => {
            let registry = required_tree(tree)?;
            commands::execute_export(args, &registry, &formatter)?;
        }
    }

    Ok(())
}

/// One-shot commands need a tree up front.
fn required_tree(tree: Option<PathBuf>) -> kintree_cli::Result<Registry> {
    let path = tree.ok_or(CliError::NoTree)?;
    commands::load_tree(&path)
}
