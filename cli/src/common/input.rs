//! Input utilities.

use std::io::Read;

use ferret::{Array, Value};
use tracing::debug;

use super::{CliError, CliResult};

/// Read input from a file path or stdin if path is "-".
pub fn read_input(path: &str) -> CliResult<String> {
    let io_err = |source: std::io::Error| CliError::Io {
        path: display_name(path).to_string(),
        source,
    };

    let content = if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(io_err)?;
        content
    } else {
        std::fs::read_to_string(path).map_err(io_err)?
    };

    debug!(input = display_name(path), bytes = content.len(), "read input");
    Ok(content)
}

/// Read and parse a JSON value from a file path or stdin.
pub fn read_value(path: &str) -> CliResult<Value> {
    let content = read_input(path)?;
    Ok(Value::from_json(&content)?)
}

/// Read a JSON value that must be an array.
pub fn read_array(path: &str) -> CliResult<Array> {
    match read_value(path)? {
        Value::Array(arr) => Ok(arr),
        other => Err(CliError::NotAnArray(other.ty())),
    }
}

/// Check if the path represents stdin.
pub fn is_stdin(path: &str) -> bool {
    path == "-"
}

fn display_name(path: &str) -> &str {
    if is_stdin(path) { "<stdin>" } else { path }
}
