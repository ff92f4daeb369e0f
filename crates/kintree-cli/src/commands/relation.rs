//! Relation command implementation.

use crate::cli::RelationArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kintree_engine::relation_between;
use kintree_store::Registry;

/// Execute the relation command.
pub fn execute_relation(
    args: RelationArgs,
    registry: &Registry,
    formatter: &Formatter,
) -> Result<()> {
    let (first, second) = parse_names(&args.first, args.second.as_deref())?;
    let statement = relation_between(registry, &first, &second)?;
    println!("{}", formatter.format_statement(&statement)?);
    Ok(())
}

/// Split the two names of a relation query.
///
/// With one argument the names must be separated by a comma (`John,Mary`).
fn parse_names(first: &str, second: Option<&str>) -> Result<(String, String)> {
    if let Some(second) = second {
        return Ok((first.trim().to_string(), second.trim().to_string()));
    }

    match first.split(',').collect::<Vec<_>>().as_slice() {
        [a, b] => Ok((a.trim().to_string(), b.trim().to_string())),
        _ => Err(CliError::InvalidInput(
            "Please enter 2 names separated by comma.".to_string(),
        )),
    }
}
