//! Load command implementation.

use crate::error::Result;
use crate::output::Formatter;
use kintree_store::Registry;
use std::path::Path;

/// Load a tree file without printing anything.
pub fn load_tree(path: &Path) -> Result<Registry> {
    Ok(Registry::load_from_path(path)?)
}

/// Execute the load command.
///
/// The tree is built from scratch, so a failed load never leaves a
/// half-populated registry behind.
pub fn execute_load(path: &Path, formatter: &Formatter) -> Result<Registry> {
    let registry = load_tree(path)?;
    println!("{}", formatter.tree_loaded(path, registry.len()));
    Ok(registry)
}
