//! The execution state threaded through a workflow run.
//!
//! State is deliberately schema-less: a mapping from field name to an
//! arbitrary JSON value. Tools are free to add, remove, or overwrite any key,
//! so a statically-typed record would fight the domain rather than model it.
//! This is a dynamic-typing boundary, not an omission.
//!
//! State has value semantics: each node invocation receives the mapping
//! produced by the previous step and returns the next canonical mapping. The
//! engine clones before/after snapshots for the trace and retains no aliases
//! to intermediate versions.

use serde_json::{Map, Value};

/// A schema-less field-name to JSON-value mapping.
pub type State = Map<String, Value>;

/// Builds a [`State`] from a JSON object literal.
///
/// Any non-object value yields an empty state; callers supplying initial
/// state over the wire go through serde, which enforces the object shape.
#[must_use]
pub fn from_value(value: Value) -> State {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
