//! Export command implementation.

use crate::cli::ExportArgs;
use crate::error::Result;
use crate::output::Formatter;
use kintree_store::{save_people, Registry};

/// Execute the export command.
pub fn execute_export(args: ExportArgs, registry: &Registry, formatter: &Formatter) -> Result<()> {
    let count = save_people(registry, &args.output)?;
    println!("{}", formatter.people_saved(&args.output, count));
    Ok(())
}
