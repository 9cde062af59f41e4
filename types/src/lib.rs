//! Type identities for Ferret runtime values.
//!
//! Every runtime value belongs to exactly one [`Type`]. The declaration order
//! of [`Type`] is the universal type rank: when two values of different types
//! are compared, the value whose type ranks lower is the lesser one.
//!
//! # Example
//!
//! ```
//! use ferret_types::Type;
//!
//! assert!(Type::Array > Type::String);
//! assert!(Type::Array < Type::Object);
//! assert_eq!(Type::Array.to_string(), "array");
//! ```

#![no_std]

mod ty;

pub use ty::Type;
