//! Host-side view of runtime values.

use std::collections::BTreeMap;

use serde::Serialize;

/// A value stripped of the runtime's own types.
///
/// Produced by `to_host` at the boundary where results are handed back to
/// host code, which can then walk the structure with plain pattern matching.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Unwrapped {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Unwrapped>),
    Map(BTreeMap<String, Unwrapped>),
}

impl Unwrapped {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Unwrapped::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Unwrapped]> {
        match self {
            Unwrapped::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Unwrapped>> {
        match self {
            Unwrapped::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<Unwrapped> for serde_json::Value {
    fn from(value: Unwrapped) -> Self {
        use serde_json::Value as Json;

        match value {
            Unwrapped::None => Json::Null,
            Unwrapped::Bool(b) => Json::Bool(b),
            Unwrapped::Int(i) => Json::from(i),
            // JSON has no NaN or infinities.
            Unwrapped::Float(f) => serde_json::Number::from_f64(f).map_or(Json::Null, Json::Number),
            Unwrapped::String(s) => Json::String(s),
            Unwrapped::List(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Unwrapped::Map(entries) => Json::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Json::from(v)))
                    .collect(),
            ),
        }
    }
}
