//! The execution trace.
//!
//! One entry is appended per node execution, loop iterations included. The
//! before/after snapshots are independent copies of the state; a tool that
//! returns its input unchanged yields equal snapshots.

use crate::state::State;
use serde::{Deserialize, Serialize};

/// A record of a single node execution within a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// The node that executed.
    pub node: String,
    /// The tool the node invoked.
    pub tool: String,
    /// State snapshot before the tool ran.
    pub before: State,
    /// State snapshot after the tool ran.
    pub after: State,
}
