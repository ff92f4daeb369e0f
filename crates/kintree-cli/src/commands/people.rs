//! People command implementation.

use crate::error::Result;
use crate::output::Formatter;
use kintree_store::Registry;

/// Execute the people command.
pub fn execute_people(registry: &Registry, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_people(registry)?);
    Ok(())
}
