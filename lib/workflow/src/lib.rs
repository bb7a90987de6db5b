//! Workflow engine for the waymark platform.
//!
//! This crate provides the core workflow execution engine, including:
//!
//! - **Graph Model**: Named nodes bound to tools, with a deterministic
//!   next-node edge map and an optional loop-back clause
//! - **Execution State**: A schema-less JSON mapping threaded through every
//!   node invocation
//! - **Tool Registry**: Named state-transforming functions, injected into the
//!   engine at construction time
//! - **Engine**: Sequential, synchronous traversal with a fixed step cap and
//!   a full before/after execution trace
//! - **Run Records**: Lifecycle tracking for persisted runs

pub mod engine;
pub mod error;
pub mod graph;
pub mod registry;
pub mod run;
pub mod state;
pub mod tools;
pub mod trace;

pub use engine::{Engine, MAX_STEPS, RunOutcome};
pub use error::EngineError;
pub use graph::{GraphDefinition, LoopClause, LoopCondition, NodeSpec};
pub use registry::{Tool, ToolRegistry};
pub use run::{RunState, WorkflowRun};
pub use state::State;
pub use trace::TraceEntry;
