use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use ferret_types::Type;

use crate::{Array, Object, Unwrapped};

/// A dynamically typed runtime value.
///
/// Values of different variants compare by [`Type`] rank; values of the same
/// variant compare by content. The resulting order is total, so `Value`
/// implements [`Ord`], [`Eq`] and a [`Hash`] consistent with them.
///
/// # Example
///
/// ```
/// use ferret_values::{array, Object, Value};
///
/// let arr = Value::from(array![0, 0]);
/// assert!(arr > Value::from("zzz"));
/// assert!(arr < Value::from(Object::new()));
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absence value.
    #[default]
    None,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Array),
    Object(Object),
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);

/// The canonical absence value, returned by out-of-range reads.
pub static NONE: Value = Value::None;
pub static TRUE: Value = Value::Boolean(true);
pub static FALSE: Value = Value::Boolean(false);
pub static ZERO_INT: Value = Value::Int(0);
pub static ZERO_FLOAT: Value = Value::Float(0.0);
pub static EMPTY_STRING: Value = Value::String(String::new());

impl Value {
    /// Type identity of this value, used for dispatch and cross-variant ordering.
    pub fn ty(&self) -> Type {
        match self {
            Value::None => Type::None,
            Value::Boolean(_) => Type::Boolean,
            Value::Int(_) => Type::Int,
            Value::Float(_) => Type::Float,
            Value::String(_) => Type::String,
            Value::Array(_) => Type::Array,
            Value::Object(_) => Type::Object,
        }
    }

    /// Three-way comparison against any other value.
    ///
    /// Unlike variants are ordered by type rank. Floats use the IEEE 754 total
    /// order, so `NaN` is comparable and `-0.0 < 0.0`.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::None, Value::None) => Ordering::Equal,
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Array(a), _) => a.compare(other),
            (Value::Object(a), _) => a.compare(other),
            _ => self.ty().compare_rank(other.ty()),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Element access as seen by query expressions.
    ///
    /// The index comes straight from query input: negative indices, indices
    /// past the end and non-array receivers all yield [`NONE`].
    pub fn get_index(&self, index: i64) -> &Value {
        match (self, usize::try_from(index)) {
            (Value::Array(arr), Ok(index)) => arr.get(index),
            _ => &NONE,
        }
    }

    /// Field access as seen by query expressions; [`NONE`] unless `self` is an
    /// object holding `key`.
    pub fn get_field(&self, key: &str) -> &Value {
        match self {
            Value::Object(obj) => obj.get(key),
            _ => &NONE,
        }
    }

    /// Convert into a representation host code can walk without knowing
    /// about `Value`.
    pub fn to_host(&self) -> Unwrapped {
        match self {
            Value::None => Unwrapped::None,
            Value::Boolean(b) => Unwrapped::Bool(*b),
            Value::Int(i) => Unwrapped::Int(*i),
            Value::Float(f) => Unwrapped::Float(*f),
            Value::String(s) => Unwrapped::String(s.clone()),
            Value::Array(arr) => arr.to_host(),
            Value::Object(obj) => obj.to_host(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty().hash(state);
        match self {
            Value::None => {}
            Value::Boolean(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            // total_cmp equality is bit equality.
            Value::Float(f) => f.to_bits().hash(state),
            Value::String(s) => s.hash(state),
            Value::Array(arr) => arr.hash(state),
            Value::Object(obj) => obj.hash(state),
        }
    }
}

/// Scalars print as plain text; arrays and objects print as compact JSON.
///
/// Finite floats use the JSON number form, so `1.0` stays distinct from the
/// integer `1`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("none"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => match serde_json::Number::from_f64(*x) {
                Some(n) => write!(f, "{n}"),
                None => write!(f, "{x}"),
            },
            Value::String(s) => f.write_str(s),
            Value::Array(arr) => fmt::Display::fmt(arr, f),
            Value::Object(obj) => fmt::Display::fmt(obj, f),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(Array::from(values))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}
