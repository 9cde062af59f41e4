//! The `slice` command - print a sub-range of an array.

use ferret::Array;

use crate::cli::SliceArgs;
use crate::common::{CliResult, input::read_array};

/// Run the slice command.
pub fn run(args: SliceArgs) -> CliResult<()> {
    let arr = read_array(&args.file)?;
    let to = args.to.unwrap_or(arr.len());
    let slice = Array::from(arr.slice(args.from, to).to_vec());
    println!("{}", slice.to_json()?);
    Ok(())
}
