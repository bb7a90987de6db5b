//! In-memory repositories for graphs and runs.
//!
//! The stores mint identifiers; the engine never does. Records are cloned
//! out so no lock is held across a run. Poisoned locks are recovered by
//! taking the inner value: the stored data is plain and stays consistent
//! even if a panicking thread held the guard.

use std::collections::HashMap;
use std::sync::RwLock;
use waymark_core::{GraphId, RunId};
use waymark_workflow::{GraphDefinition, WorkflowRun};

/// Repository of registered graph definitions.
#[derive(Debug, Default)]
pub struct GraphStore {
    graphs: RwLock<HashMap<GraphId, GraphDefinition>>,
}

impl GraphStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a graph and returns its newly minted identifier.
    pub fn insert(&self, graph: GraphDefinition) -> GraphId {
        let id = GraphId::new();
        self.graphs
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, graph);
        id
    }

    /// Returns a copy of the graph registered under the identifier.
    #[must_use]
    pub fn get(&self, id: GraphId) -> Option<GraphDefinition> {
        self.graphs
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
    }

    /// Returns the number of registered graphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphs.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Returns true if no graphs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Repository of completed workflow runs.
#[derive(Debug, Default)]
pub struct RunStore {
    runs: RwLock<HashMap<RunId, WorkflowRun>>,
}

impl RunStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a run under its own identifier.
    pub fn insert(&self, run: WorkflowRun) {
        self.runs
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(run.id, run);
    }

    /// Returns a copy of the run recorded under the identifier.
    #[must_use]
    pub fn get(&self, id: RunId) -> Option<WorkflowRun> {
        self.runs
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
    }
}
