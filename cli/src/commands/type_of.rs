//! The `type` command - print the type name of a value.

use ferret::Value;

use crate::cli::TypeArgs;
use crate::common::CliResult;

/// Run the type command.
pub fn run(args: TypeArgs) -> CliResult<()> {
    let value = Value::from_json(&args.literal)?;
    println!("{}", value.ty());
    Ok(())
}
