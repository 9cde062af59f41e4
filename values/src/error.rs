//! Errors raised by value operations.

use thiserror::Error;

/// Failure of a value operation.
///
/// Reads never fail; only mutations addressing a missing slot and the JSON
/// boundary produce errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A mutation addressed an index outside the array.
    ///
    /// The array is left exactly as it was before the call.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Malformed JSON input, or a serializer failure.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
