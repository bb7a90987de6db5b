//! Run records.
//!
//! A run is synchronous from the caller's point of view: the engine walks
//! the graph to completion (or failure) before returning. The record types
//! here exist for the storage layer that persists run outputs; the engine
//! itself holds no state across runs.

use crate::engine::RunOutcome;
use crate::state::State;
use crate::trace::TraceEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use waymark_core::{GraphId, RunId};

/// The state of a workflow run.
///
/// There are only two: the engine is either walking the graph or it has
/// terminated (terminal edge, satisfied loop condition, or step cap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// The engine is walking the graph.
    Running,
    /// The run has terminated.
    Done,
}

impl RunState {
    /// Returns true if this is a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// A record of a single workflow run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRun {
    /// Unique identifier for this run.
    pub id: RunId,
    /// The graph that was executed.
    pub graph_id: GraphId,
    /// Current run state.
    pub state: RunState,
    /// When the run started executing.
    pub started_at: DateTime<Utc>,
    /// When the run finished.
    pub finished_at: Option<DateTime<Utc>>,
    /// The state after the final node execution.
    pub final_state: State,
    /// Ordered record of every node execution.
    pub trace: Vec<TraceEntry>,
    /// Whether the run ended by reaching the step cap.
    pub hit_step_cap: bool,
}

impl WorkflowRun {
    /// Creates a new run record in running state.
    #[must_use]
    pub fn new(graph_id: GraphId) -> Self {
        Self {
            id: RunId::new(),
            graph_id,
            state: RunState::Running,
            started_at: Utc::now(),
            finished_at: None,
            final_state: State::new(),
            trace: Vec::new(),
            hit_step_cap: false,
        }
    }

    /// Marks the run as done with the engine's outcome.
    pub fn complete(&mut self, outcome: RunOutcome) {
        self.state = RunState::Done;
        self.finished_at = Some(Utc::now());
        self.final_state = outcome.final_state;
        self.trace = outcome.trace;
        self.hit_step_cap = outcome.hit_step_cap;
    }

    /// Returns the duration of the run, if it has finished.
    #[must_use]
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|end| end - self.started_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn run_state_terminal() {
        assert!(!RunState::Running.is_terminal());
        assert!(RunState::Done.is_terminal());
    }

    #[test]
    fn run_lifecycle() {
        let graph_id = GraphId::new();
        let mut run = WorkflowRun::new(graph_id);

        assert_eq!(run.state, RunState::Running);
        assert!(run.finished_at.is_none());
        assert!(run.duration().is_none());

        let mut final_state = State::new();
        final_state.insert("final_summary".to_string(), json!("short"));
        run.complete(RunOutcome {
            final_state,
            trace: Vec::new(),
            hit_step_cap: false,
        });

        assert_eq!(run.state, RunState::Done);
        assert!(run.finished_at.is_some());
        assert!(run.duration().is_some());
        assert_eq!(run.final_state.get("final_summary"), Some(&json!("short")));
    }

    #[test]
    fn run_serde_roundtrip() {
        let mut run = WorkflowRun::new(GraphId::new());
        run.complete(RunOutcome {
            final_state: State::new(),
            trace: Vec::new(),
            hit_step_cap: true,
        });

        let json = serde_json::to_string(&run).expect("serialize");
        let parsed: WorkflowRun = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(run, parsed);
    }
}
