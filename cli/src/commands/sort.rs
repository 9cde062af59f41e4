//! The `sort` command - order an array by the universal value ordering.

use tracing::debug;

use crate::cli::SortArgs;
use crate::common::{CliResult, input::read_array};

/// Run the sort command.
pub fn run(args: SortArgs) -> CliResult<()> {
    let mut arr = read_array(&args.file)?;

    if args.reverse {
        arr.sort_by(|a, b| b.compare(a));
    } else {
        arr.sort();
    }

    if args.dedup {
        let before = arr.len();
        arr.dedup();
        debug!(removed = before - arr.len(), "deduplicated");
    }

    println!("{}", arr.to_json()?);
    Ok(())
}
