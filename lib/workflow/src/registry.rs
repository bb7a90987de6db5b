//! The tool registry.
//!
//! A tool is a named transformation over the execution state. The registry is
//! owned and populated outside the engine and handed to it at construction
//! time (dependency injection); the engine only performs lookups and never
//! mutates it. There is no global mutable registry.

use crate::state::State;
use std::collections::HashMap;
use std::sync::Arc;

/// A state-transforming workflow step.
///
/// Tools receive the current state by value and return the next canonical
/// state. The `Send + Sync` bound encodes the contract that tools must be
/// free of shared mutable state so that independent runs may execute
/// concurrently without coordination.
pub trait Tool: Send + Sync {
    /// Applies the transformation to the given state.
    fn apply(&self, state: State) -> State;
}

impl<F> Tool for F
where
    F: Fn(State) -> State + Send + Sync,
{
    fn apply(&self, state: State) -> State {
        self(state)
    }
}

/// A name-to-tool mapping.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool under the given name.
    ///
    /// Re-registering a name replaces the previous tool.
    pub fn register(&mut self, name: impl Into<String>, tool: impl Tool + 'static) {
        self.tools.insert(name.into(), Arc::new(tool));
    }

    /// Looks up a tool by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Returns true if a tool with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Returns the names of all registered tools.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    /// Returns the number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("ToolRegistry").field("tools", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register("touch", |mut state: State| {
            state.insert("touched".to_string(), json!(true));
            state
        });

        assert!(registry.contains("touch"));
        assert!(!registry.contains("missing"));

        let tool = registry.get("touch").expect("registered tool");
        let out = tool.apply(State::new());
        assert_eq!(out.get("touched"), Some(&json!(true)));
    }

    #[test]
    fn reregistering_replaces_tool() {
        let mut registry = ToolRegistry::new();
        registry.register("t", |mut state: State| {
            state.insert("v".to_string(), json!(1));
            state
        });
        registry.register("t", |mut state: State| {
            state.insert("v".to_string(), json!(2));
            state
        });

        assert_eq!(registry.len(), 1);
        let out = registry.get("t").expect("tool").apply(State::new());
        assert_eq!(out.get("v"), Some(&json!(2)));
    }

    #[test]
    fn empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("anything").is_none());
    }
}
