//! Construction macros.

/// Build an [`Array`](crate::Array) from a list of expressions convertible
/// into [`Value`](crate::Value).
///
/// # Example
///
/// ```
/// use ferret_values::{array, Value};
///
/// let arr = array![1, "two", 3.0, true];
/// assert_eq!(arr.len(), 4);
/// assert_eq!(arr.get(1), &Value::from("two"));
///
/// let empty = array![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::Array::from_values([$($crate::Value::from($elem)),+])
    };
}
