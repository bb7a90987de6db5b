//! HTTP routes and handlers.

use crate::error::ApiError;
use crate::store::{GraphStore, RunStore};
use crate::types::{
    CreateGraphResponse, HealthResponse, RunRequest, RunResponse, RunStateResponse,
};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use waymark_core::{GraphId, RunId};
use waymark_workflow::{Engine, GraphDefinition, WorkflowRun, tools};

/// Shared application state.
///
/// The engine is stateless across runs; the stores hold all registered
/// graphs and recorded runs.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
    pub graphs: Arc<GraphStore>,
    pub runs: Arc<RunStore>,
}

impl AppState {
    /// Creates state with the built-in tool registry and empty stores.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Arc::new(Engine::new(tools::builtin_registry())),
            graphs: Arc::new(GraphStore::new()),
            runs: Arc::new(RunStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/graph/create", post(create_graph))
        .route("/graph/run", post(run_graph))
        .route("/graph/state/{run_id}", get(get_run_state))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn create_graph(
    State(app): State<AppState>,
    Json(graph): Json<GraphDefinition>,
) -> Json<CreateGraphResponse> {
    let node_count = graph.node_count();
    let graph_id = app.graphs.insert(graph);
    tracing::info!(graph_id = %graph_id, node_count, "registered graph");

    Json(CreateGraphResponse {
        graph_id: graph_id.to_string(),
    })
}

async fn run_graph(
    State(app): State<AppState>,
    Json(req): Json<RunRequest>,
) -> Result<Json<RunResponse>, ApiError> {
    let graph_id: GraphId = req.graph_id.parse().map_err(|e: waymark_core::ParseIdError| {
        ApiError::InvalidId {
            id: req.graph_id.clone(),
            reason: e.reason,
        }
    })?;

    let graph = app
        .graphs
        .get(graph_id)
        .ok_or_else(|| ApiError::GraphNotFound {
            id: graph_id.to_string(),
        })?;

    let mut run = WorkflowRun::new(graph_id);
    let outcome = app.engine.run(&graph, req.initial_state)?;
    run.complete(outcome);

    tracing::info!(
        graph_id = %graph_id,
        run_id = %run.id,
        steps = run.trace.len(),
        hit_step_cap = run.hit_step_cap,
        "run finished"
    );

    let response = RunResponse {
        run_id: run.id.to_string(),
        final_state: run.final_state.clone(),
        trace: run.trace.clone(),
        hit_step_cap: run.hit_step_cap,
    };
    app.runs.insert(run);

    Ok(Json(response))
}

async fn get_run_state(
    State(app): State<AppState>,
    Path(run_id): Path<String>,
) -> Result<Json<RunStateResponse>, ApiError> {
    let id: RunId = run_id
        .parse()
        .map_err(|e: waymark_core::ParseIdError| ApiError::InvalidId {
            id: run_id.clone(),
            reason: e.reason,
        })?;

    let run = app.runs.get(id).ok_or_else(|| ApiError::RunNotFound {
        id: id.to_string(),
    })?;

    Ok(Json(RunStateResponse {
        run_id: run.id.to_string(),
        state: run.final_state,
    }))
}
