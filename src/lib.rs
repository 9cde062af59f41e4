//! Ferret - dynamic values for an embeddable query language
//!
//! # Overview
//!
//! Queries evaluate over heterogeneous, often externally sourced data. This
//! crate exposes the value layer those queries run on:
//!
//! - [`Value`]: the closed set of runtime variants, with one total ordering
//!   across all of them
//! - [`Array`]: the growable, index-addressable sequence value
//! - [`Object`]: the keyed collection value
//! - [`Type`]: variant identities in rank order
//!
//! # Quick Start
//!
//! ```
//! use ferret::{array, Value, NONE};
//!
//! let mut arr = array![3, "b", 1];
//! arr.sort();
//! assert_eq!(arr.to_json().unwrap(), r#"[1,3,"b"]"#);
//!
//! // Out-of-range reads degrade to the absence value.
//! assert_eq!(arr.get(99), &NONE);
//!
//! // Out-of-range writes are reported, and change nothing.
//! assert!(arr.set(99, Value::Int(0)).is_err());
//! assert_eq!(arr.len(), 3);
//! ```

pub use ferret_types::Type;
pub use ferret_values::{
    Array, EMPTY_STRING, Error, FALSE, NONE, Object, Result, TRUE, Unwrapped, Value, ZERO_FLOAT,
    ZERO_INT, array,
};
