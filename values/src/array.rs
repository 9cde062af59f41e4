//! The array value: an ordered, growable sequence of [`Value`]s.
//!
//! Insertion order is the only order; an array is never implicitly sorted.
//! Reads are total: [`Array::get`] returns [`NONE`] for any index outside the
//! array. Mutations that address a missing slot fail with
//! [`Error::IndexOutOfRange`] and leave the array untouched.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use ferret_types::Type;
use hashbrown::HashSet;
use tracing::{debug, trace};

use crate::value::NONE;
use crate::{Error, Result, Unwrapped, Value};

/// Ordered, growable, index-addressable sequence of values.
///
/// # Example
///
/// ```
/// use ferret_values::{array, Value};
///
/// let mut arr = array![0, 1, 2, 3, 4, 5];
/// arr.insert(3, Value::Int(100)).unwrap();
/// assert_eq!(arr.get(3), &Value::Int(100));
/// assert_eq!(arr.get(4), &Value::Int(3));
///
/// let removed = arr.remove_at(0).unwrap();
/// assert_eq!(removed, Value::Int(0));
/// assert_eq!(arr.len(), 6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Array {
    items: Vec<Value>,
}

// --- Construction ---

impl Array {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty array with room for at least `capacity` elements.
    ///
    /// The hint only avoids early reallocation; the array is still empty.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Create an array holding `values` in iteration order.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            items: values.into_iter().collect(),
        }
    }
}

// --- Reads ---

impl Array {
    /// Number of addressable elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Size of the backing storage. Never less than [`len`](Self::len), never
    /// shrinks on removal.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// The element at `index`, or [`NONE`] when `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> &Value {
        self.items.get(index).unwrap_or(&NONE)
    }

    /// Elements in `from..to`, with `to` clamped to `len()`.
    ///
    /// Returns an empty slice when `from` is at or past the clamped end.
    pub fn slice(&self, from: usize, to: usize) -> &[Value] {
        let to = to.min(self.items.len());
        if from >= to {
            return &[];
        }
        &self.items[from..to]
    }

    /// Visit elements in index order until `visitor` returns `false`.
    ///
    /// Returns the number of elements the visitor was called with: `len()`
    /// when iteration ran to the end, otherwise the 1-based position of the
    /// element that stopped it.
    pub fn for_each<F>(&self, mut visitor: F) -> usize
    where
        F: FnMut(&Value, usize) -> bool,
    {
        let mut visited = 0;
        for (index, value) in self.items.iter().enumerate() {
            visited += 1;
            if !visitor(value, index) {
                break;
            }
        }
        visited
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Position of the first element comparing equal to `value`.
    pub fn index_of(&self, value: &Value) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.compare(value) == Ordering::Equal)
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.index_of(value).is_some()
    }

    /// Always [`Type::Array`].
    pub fn ty(&self) -> Type {
        Type::Array
    }

    /// Host-generic list of each element's own unwrapped form.
    pub fn to_host(&self) -> Unwrapped {
        Unwrapped::List(self.items.iter().map(Value::to_host).collect())
    }
}

// --- Mutation ---

impl Array {
    /// Replace the element at `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index >= len()`; the array
    /// is not modified in that case.
    pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => {
                debug!(index, len, "rejected array set");
                Err(Error::IndexOutOfRange { index, len })
            }
        }
    }

    /// Append `value` at index `len()`.
    pub fn push(&mut self, value: Value) {
        if self.items.len() == self.items.capacity() {
            trace!(len = self.items.len(), "array storage full, growing");
        }
        self.items.push(value);
    }

    /// Insert `value` at `index`, shifting elements at `index..` one slot to
    /// the right. `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: Value) -> Result<()> {
        let len = self.items.len();
        if index > len {
            debug!(index, len, "rejected array insert");
            return Err(Error::IndexOutOfRange { index, len });
        }
        self.items.insert(index, value);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting elements after it
    /// one slot to the left. Capacity is kept.
    pub fn remove_at(&mut self, index: usize) -> Result<Value> {
        let len = self.items.len();
        if index >= len {
            debug!(index, len, "rejected array remove");
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Stable sort by the universal value ordering.
    pub fn sort(&mut self) {
        self.items.sort();
    }

    /// Stable sort with a caller comparator.
    ///
    /// `compare` must be a total order; otherwise the sort may panic.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        self.items.sort_by(compare);
    }

    /// Drop every element that compares equal to an earlier one.
    ///
    /// First occurrences keep their relative order.
    pub fn dedup(&mut self) {
        let keep: Vec<bool> = {
            let mut seen = HashSet::with_capacity(self.items.len());
            self.items.iter().map(|item| seen.insert(item)).collect()
        };
        let mut keep = keep.into_iter();
        self.items.retain(|_| keep.next().unwrap_or(true));
    }
}

// --- Comparison ---

impl Array {
    /// Three-way comparison against any value.
    ///
    /// Scalars always rank below arrays and objects always rank above them.
    /// Against another array, see [`compare_array`](Self::compare_array).
    pub fn compare(&self, other: &Value) -> Ordering {
        match other {
            Value::Array(other) => self.compare_array(other),
            other => Type::Array.compare_rank(other.ty()),
        }
    }

    /// Lexicographic comparison: the first differing element decides,
    /// otherwise the shorter array is less.
    pub fn compare_array(&self, other: &Array) -> Ordering {
        for (a, b) in self.items.iter().zip(other.items.iter()) {
            match a.compare(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.items.len().cmp(&other.items.len())
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.compare_array(other) == Ordering::Equal
    }
}

impl Eq for Array {}

impl PartialOrd for Array {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Array {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_array(other)
    }
}

impl Hash for Array {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

/// Compact JSON, e.g. `[0,0]`.
impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

// --- Conversions ---

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl From<Array> for Vec<Value> {
    fn from(arr: Array) -> Self {
        arr.items
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl Extend<Value> for Array {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
