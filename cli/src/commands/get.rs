//! The `get` command - permissive element access.

use crate::cli::GetArgs;
use crate::common::{CliResult, input::read_value};

/// Run the get command.
///
/// Mirrors query-time indexing: anything that does not address an element
/// prints `null` instead of failing.
pub fn run(args: GetArgs) -> CliResult<()> {
    let value = read_value(&args.file)?;
    println!("{}", value.get_index(args.index).to_json()?);
    Ok(())
}
