//! The object value: string keys mapped to [`Value`]s.
//!
//! Keys are kept sorted, which makes iteration, comparison and the JSON
//! projection deterministic.

use std::collections::BTreeMap;
use std::collections::btree_map;

use core::cmp::Ordering;
use core::fmt;

use ferret_types::Type;

use crate::value::NONE;
use crate::{Unwrapped, Value};

/// Keyed collection of values.
///
/// Ordering between objects is lexicographic over the sorted `(key, value)`
/// entries, with the entry count as the tiebreaker. Objects rank above every
/// other variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Object {
    entries: BTreeMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value stored under `key`, or [`NONE`].
    pub fn get(&self, key: &str) -> &Value {
        self.entries.get(key).unwrap_or(&NONE)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Store `value` under `key`, returning the value it replaced.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Visit entries in key order until `visitor` returns `false`.
    pub fn for_each<F>(&self, mut visitor: F) -> usize
    where
        F: FnMut(&Value, &str) -> bool,
    {
        let mut visited = 0;
        for (key, value) in &self.entries {
            visited += 1;
            if !visitor(value, key) {
                break;
            }
        }
        visited
    }

    pub fn ty(&self) -> Type {
        Type::Object
    }

    /// Three-way comparison against any value; every other variant is less.
    pub fn compare(&self, other: &Value) -> Ordering {
        match other {
            Value::Object(other) => self.cmp(other),
            other => Type::Object.compare_rank(other.ty()),
        }
    }

    pub fn to_host(&self) -> Unwrapped {
        Unwrapped::Map(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), value.to_host()))
                .collect(),
        )
    }
}

/// Compact JSON with keys in sorted order.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
