//! The `compare` command - three-way comparison of two values.

use ferret::Value;

use crate::cli::CompareArgs;
use crate::common::CliResult;

/// Run the compare command.
pub fn run(args: CompareArgs) -> CliResult<()> {
    let left = Value::from_json(&args.left)?;
    let right = Value::from_json(&args.right)?;
    println!("{}", left.compare(&right) as i8);
    Ok(())
}
