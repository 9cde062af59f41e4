//! Runtime values for the Ferret query language.
//!
//! Every value the evaluator produces is a [`Value`]: one of a closed set of
//! variants (`None`, booleans, integers, floats, strings, [`Array`] and
//! [`Object`]). All values share a single total ordering, so any two values
//! can be compared, sorted or deduplicated together regardless of variant.
//!
//! Reads are permissive: indexing past the end of an [`Array`] yields the
//! absence value [`NONE`] rather than an error. Only mutations that address a
//! missing slot fail, with [`Error::IndexOutOfRange`].
//!
//! # Example
//!
//! ```
//! use ferret_values::{array, Value, NONE};
//!
//! let mut arr = array![1, 2, 3];
//! arr.push(Value::from("four"));
//!
//! assert_eq!(arr.len(), 4);
//! assert_eq!(arr.get(10), &NONE);
//! assert_eq!(arr.to_json().unwrap(), r#"[1,2,3,"four"]"#);
//! ```

mod array;
mod error;
mod json;
mod macros;
mod object;
mod unwrapped;
mod value;

pub use array::Array;
pub use error::{Error, Result};
pub use ferret_types::Type;
pub use object::Object;
pub use unwrapped::Unwrapped;
pub use value::{EMPTY_STRING, FALSE, NONE, TRUE, Value, ZERO_FLOAT, ZERO_INT};


#[cfg(test)]
pub(crate) mod test_utils {
    /// Route `tracing` events from rejected mutations into captured test output.
    ///
    /// `RUST_LOG` wins when set; otherwise everything at `debug` and above is
    /// shown. Repeated calls are no-ops.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
