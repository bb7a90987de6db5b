//! Request and response payloads.
//!
//! Identifiers travel as display-formatted strings (`graph_...`, `run_...`)
//! so clients never handle raw ULIDs; parsing back is prefix-optional.

use serde::{Deserialize, Serialize};
use waymark_workflow::{State, TraceEntry};

/// Response for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server is up.
    pub status: String,
}

/// Response for `POST /graph/create`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateGraphResponse {
    /// Identifier of the registered graph.
    pub graph_id: String,
}

/// Request body for `POST /graph/run`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunRequest {
    /// Identifier of a previously registered graph.
    pub graph_id: String,
    /// Initial state the run begins from; may be empty.
    #[serde(default)]
    pub initial_state: State,
}

/// Response for `POST /graph/run`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunResponse {
    /// Identifier of the recorded run.
    pub run_id: String,
    /// State after the final node execution.
    pub final_state: State,
    /// Ordered record of every node execution.
    pub trace: Vec<TraceEntry>,
    /// Whether the run ended by reaching the step cap.
    pub hit_step_cap: bool,
}

/// Response for `GET /graph/state/{run_id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunStateResponse {
    /// Identifier of the run.
    pub run_id: String,
    /// The run's final state.
    pub state: State,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn run_request_initial_state_defaults_to_empty() {
        let req: RunRequest =
            serde_json::from_value(json!({"graph_id": "graph_x"})).expect("deserialize");
        assert!(req.initial_state.is_empty());
    }

    #[test]
    fn run_request_accepts_arbitrary_state() {
        let req: RunRequest = serde_json::from_value(json!({
            "graph_id": "graph_x",
            "initial_state": {"text": "hello", "chunk_size": 50}
        }))
        .expect("deserialize");
        assert_eq!(req.initial_state.get("text"), Some(&json!("hello")));
    }
}
