//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod compare;
pub mod completions;
pub mod fmt;
pub mod get;
pub mod slice;
pub mod sort;
pub mod type_of;
