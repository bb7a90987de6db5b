//! Error types for the workflow crate.
//!
//! Both variants are fail-fast aborts raised synchronously from within a run;
//! the engine performs no retries and no partial recovery. The server
//! boundary translates them into client-facing responses, and keeps its own
//! distinct "graph/run not found" conditions separate from these.
//!
//! Reaching the step safety cap is deliberately not an error: a runaway run
//! returns whatever state and trace have accumulated.

use std::fmt;

/// Errors during graph traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Traversal reached a node name absent from the graph's node mapping.
    UndefinedNode { node: String },
    /// A node's declared tool name is absent from the tool registry.
    UnknownTool { tool: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedNode { node } => {
                write!(f, "node '{node}' is not defined in the graph")
            }
            Self::UnknownTool { tool } => {
                write!(f, "tool '{tool}' is not registered")
            }
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_node_names_the_node() {
        let err = EngineError::UndefinedNode {
            node: "summarize".to_string(),
        };
        assert!(err.to_string().contains("'summarize'"));
    }

    #[test]
    fn unknown_tool_names_the_tool() {
        let err = EngineError::UnknownTool {
            tool: "missing".to_string(),
        };
        assert!(err.to_string().contains("'missing'"));
    }
}
