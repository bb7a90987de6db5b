//! API error types.
//!
//! The "not found" conditions here belong to the storage boundary and are
//! distinct from the engine's own error kinds: a missing graph or run
//! identifier is a 404, while an engine error means the referenced graph is
//! misconfigured (an undefined node or unregistered tool) and maps to a 422.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use waymark_workflow::EngineError;

/// Errors surfaced by the API handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No graph is registered under the given identifier.
    GraphNotFound { id: String },
    /// No run is recorded under the given identifier.
    RunNotFound { id: String },
    /// An identifier could not be parsed.
    InvalidId { id: String, reason: String },
    /// The engine rejected the run.
    Engine(EngineError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GraphNotFound { id } => write!(f, "graph '{id}' not found"),
            Self::RunNotFound { id } => write!(f, "run '{id}' not found"),
            Self::InvalidId { id, reason } => {
                write!(f, "invalid id '{id}': {reason}")
            }
            Self::Engine(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

/// JSON body returned for all error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::GraphNotFound { .. } | Self::RunNotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidId { .. } => StatusCode::BAD_REQUEST,
            Self::Engine(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
