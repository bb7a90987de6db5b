//! HTTP API for the waymark workflow engine.
//!
//! The server is CRUD plumbing around the engine: register a graph
//! definition, execute a graph by identifier against a supplied initial
//! state, and fetch a previously computed final state by run identifier.
//! Graphs and runs live in in-memory stores; durability is out of scope.

pub mod config;
pub mod error;
pub mod routes;
pub mod store;
pub mod types;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::{AppState, router};
pub use store::{GraphStore, RunStore};
