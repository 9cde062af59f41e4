//! Ferret CLI - inspect, compare and reorder values from JSON input.

mod cli;
mod commands;
mod common;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // --log-level wins over RUST_LOG; default to WARN if neither is set
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level),
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn")),
    }
    .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let result = match cli.command {
        Command::Fmt(args) => commands::fmt::run(args),
        Command::Sort(args) => commands::sort::run(args),
        Command::Compare(args) => commands::compare::run(args),
        Command::Get(args) => commands::get::run(args),
        Command::Slice(args) => commands::slice::run(args),
        Command::Type(args) => commands::type_of::run(args),
        Command::Completions(args) => {
            commands::completions::run(args);
            Ok(())
        }
    };

    if let Err(e) = result {
        common::error::render_and_exit(e);
    }
}
