//! The `fmt` command - re-emit JSON in compact form.

use crate::cli::FmtArgs;
use crate::common::{CliResult, input::read_value};

/// Run the fmt command.
pub fn run(args: FmtArgs) -> CliResult<()> {
    let value = read_value(&args.file)?;
    println!("{}", value.to_json()?);
    Ok(())
}
