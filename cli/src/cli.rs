//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Ferret - inspect, compare and reorder query-language values
#[derive(Parser, Debug)]
#[command(name = "ferret", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log filter (e.g. `debug`, `ferret_values=trace`); overrides RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Re-emit a JSON document in compact form
    Fmt(FmtArgs),

    /// Sort a JSON array by the universal value ordering
    Sort(SortArgs),

    /// Compare two JSON values, printing -1, 0 or 1
    Compare(CompareArgs),

    /// Print one element of a JSON array (`null` when out of range)
    Get(GetArgs),

    /// Print a sub-range of a JSON array
    Slice(SliceArgs),

    /// Print the type name of a JSON value
    Type(TypeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `fmt` command.
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Input file (use `-` for stdin)
    #[arg(default_value = "-")]
    pub file: String,
}

/// Arguments for the `sort` command.
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Input file (use `-` for stdin)
    #[arg(default_value = "-")]
    pub file: String,

    /// Drop elements equal to an earlier one
    #[arg(long)]
    pub dedup: bool,

    /// Sort in descending order
    #[arg(long)]
    pub reverse: bool,
}

/// Arguments for the `compare` command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand JSON value
    #[arg(allow_negative_numbers = true)]
    pub left: String,

    /// Right-hand JSON value
    #[arg(allow_negative_numbers = true)]
    pub right: String,
}

/// Arguments for the `get` command.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Input file (use `-` for stdin)
    #[arg(default_value = "-")]
    pub file: String,

    /// Element index; negative or past-the-end indices yield `null`
    #[arg(long, allow_negative_numbers = true)]
    pub index: i64,
}

/// Arguments for the `slice` command.
#[derive(Args, Debug)]
pub struct SliceArgs {
    /// Input file (use `-` for stdin)
    #[arg(default_value = "-")]
    pub file: String,

    /// First index to include
    #[arg(long, default_value_t = 0)]
    pub from: usize,

    /// Index to stop before; clamped to the array length
    #[arg(long)]
    pub to: Option<usize>,
}

/// Arguments for the `type` command.
#[derive(Args, Debug)]
pub struct TypeArgs {
    /// JSON value to inspect
    #[arg(allow_negative_numbers = true)]
    pub literal: String,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
