//! The execution engine.
//!
//! Traversal is deterministic, single-threaded, synchronous, and iterative;
//! a run performs its entire walk to completion (or failure) before
//! returning, with no suspension point and no shared state across runs.
//! The only bound on runtime is the fixed step ceiling.
//!
//! ## Loop termination
//!
//! The loop-termination check is evaluated strictly after a node's tool has
//! run and before the edge advance. The node that produces the convergence
//! signal therefore always runs at least once per pass, and a satisfied
//! condition short-circuits the intentionally cyclic edge map an iterative
//! refinement graph constructs.
//!
//! ## Step cap
//!
//! [`MAX_STEPS`] is a blunt safety net, independent of the loop clause,
//! against graphs that would otherwise never terminate: a loop condition
//! that never converges, or a cyclic edge map with no loop clause at all.
//! Reaching it is a silent, successful termination with whatever state and
//! trace have accumulated; partial progress on a runaway workflow is more
//! useful than an exception. [`RunOutcome::hit_step_cap`] reports the cap
//! exit for observability without changing that contract.

use crate::error::EngineError;
use crate::graph::GraphDefinition;
use crate::registry::ToolRegistry;
use crate::state::State;
use crate::trace::TraceEntry;
use serde_json::Value;

/// Hard ceiling on node executions per run.
pub const MAX_STEPS: usize = 100;

/// The result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// The state after the final node execution.
    pub final_state: State,
    /// Ordered record of every node execution.
    pub trace: Vec<TraceEntry>,
    /// True if the run ended because it reached [`MAX_STEPS`].
    pub hit_step_cap: bool,
}

/// The workflow execution engine.
///
/// Holds only the injected tool registry; each `run` invocation allocates
/// its own working state and trace, so independent runs may execute
/// concurrently without coordination.
#[derive(Debug, Clone)]
pub struct Engine {
    tools: ToolRegistry,
}

impl Engine {
    /// Creates an engine over the given tool registry.
    #[must_use]
    pub fn new(tools: ToolRegistry) -> Self {
        Self { tools }
    }

    /// Returns the tool registry the engine dispatches against.
    #[must_use]
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Executes the graph against the given initial state.
    ///
    /// Walks nodes from `graph.start_node`, invoking each node's tool and
    /// threading the returned state into the next step, until a terminal
    /// edge is reached, the loop condition is satisfied, or [`MAX_STEPS`]
    /// node executions have occurred.
    ///
    /// # Errors
    ///
    /// Fails fast with [`EngineError::UndefinedNode`] when traversal reaches
    /// a name absent from `graph.nodes`, or [`EngineError::UnknownTool`]
    /// when a node's tool is not registered.
    pub fn run(
        &self,
        graph: &GraphDefinition,
        initial_state: State,
    ) -> Result<RunOutcome, EngineError> {
        let mut state = initial_state;
        let mut trace = Vec::new();
        let mut current = graph.start_node.as_str();
        let mut steps = 0;
        let mut hit_step_cap = false;

        loop {
            if steps >= MAX_STEPS {
                hit_step_cap = true;
                break;
            }

            let node = graph
                .node(current)
                .ok_or_else(|| EngineError::UndefinedNode {
                    node: current.to_string(),
                })?;

            let tool = self
                .tools
                .get(&node.tool)
                .ok_or_else(|| EngineError::UnknownTool {
                    tool: node.tool.clone(),
                })?;

            let before = state.clone();
            state = tool.apply(state);
            trace.push(TraceEntry {
                node: current.to_string(),
                tool: node.tool.clone(),
                before,
                after: state.clone(),
            });

            if let Some(loop_clause) = &graph.loop_clause
                && loop_clause.node == current
                && loop_condition_met(&state, &loop_clause.condition.key, loop_clause.condition.max_length)
            {
                break;
            }

            match graph.successor(current) {
                Some(next) => current = next,
                None => break,
            }
            steps += 1;
        }

        Ok(RunOutcome {
            final_state: state,
            trace,
            hit_step_cap,
        })
    }
}

/// Evaluates the loop stopping predicate against the current state.
///
/// An absent field is treated as the empty string. A non-textual value never
/// satisfies the condition; traversal simply continues via the normal edge.
/// Length is counted in characters, not bytes.
fn loop_condition_met(state: &State, key: &str, max_length: usize) -> bool {
    match state.get(key) {
        // Empty string: length 0 always satisfies a non-negative bound.
        None => true,
        Some(Value::String(text)) => text.chars().count() <= max_length,
        Some(_) => false,
    }
}
