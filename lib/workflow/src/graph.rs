//! Graph definition types.
//!
//! A graph is a static description of a workflow: named nodes bound to tools,
//! a deterministic next-node edge map, an entry point, and an optional
//! loop-back clause. Definitions are immutable once execution starts.
//!
//! Referential integrity (node exists, tool exists) is validated at traversal
//! time rather than at definition time. This keeps graph authoring cheap and
//! surfaces configuration errors exactly at the point of use, with the
//! precise node or tool name in the error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single step in the workflow graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Name of the registered tool this node invokes.
    pub tool: String,
}

impl NodeSpec {
    /// Creates a node spec bound to the named tool.
    #[must_use]
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }
}

/// The data-dependent stopping predicate of a loop clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopCondition {
    /// The state field the predicate reads.
    pub key: String,
    /// Maximum textual length at which the run terminates.
    pub max_length: usize,
}

/// The single supported cyclic-control construct.
///
/// After the named node executes, the engine reads the condition's state
/// field; a textual value no longer than `max_length` ends the run. This is
/// the success exit for iterative refinement workflows whose edge map
/// intentionally cycles back through the loop node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopClause {
    /// The node after which the stopping predicate is evaluated.
    pub node: String,
    /// The stopping predicate.
    pub condition: LoopCondition,
}

/// A complete, static workflow graph definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDefinition {
    /// Map from node name to its spec. Names are unique by construction.
    pub nodes: HashMap<String, NodeSpec>,
    /// Map from node name to its successor; `None` (or an absent key) marks
    /// the node as terminal.
    pub edges: HashMap<String, Option<String>>,
    /// Name of the node where traversal begins.
    pub start_node: String,
    /// Optional loop-back clause.
    #[serde(rename = "loop", default, skip_serializing_if = "Option::is_none")]
    pub loop_clause: Option<LoopClause>,
}

impl GraphDefinition {
    /// Creates a graph with the given start node and no nodes or edges.
    #[must_use]
    pub fn new(start_node: impl Into<String>) -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
            start_node: start_node.into(),
            loop_clause: None,
        }
    }

    /// Adds a node bound to the named tool.
    #[must_use]
    pub fn with_node(mut self, name: impl Into<String>, tool: impl Into<String>) -> Self {
        self.nodes.insert(name.into(), NodeSpec::new(tool));
        self
    }

    /// Adds an edge from `from` to `to` (`None` marks `from` as terminal).
    #[must_use]
    pub fn with_edge(mut self, from: impl Into<String>, to: Option<&str>) -> Self {
        self.edges.insert(from.into(), to.map(String::from));
        self
    }

    /// Sets the loop clause.
    #[must_use]
    pub fn with_loop(
        mut self,
        node: impl Into<String>,
        key: impl Into<String>,
        max_length: usize,
    ) -> Self {
        self.loop_clause = Some(LoopClause {
            node: node.into(),
            condition: LoopCondition {
                key: key.into(),
                max_length,
            },
        });
        self
    }

    /// Returns the spec for the named node, if present.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&NodeSpec> {
        self.nodes.get(name)
    }

    /// Returns the successor of the named node.
    ///
    /// Both an absent key and an explicit `null` edge map to `None`,
    /// marking the node as terminal.
    #[must_use]
    pub fn successor(&self, name: &str) -> Option<&str> {
        self.edges.get(name).and_then(|next| next.as_deref())
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assembles_graph() {
        let graph = GraphDefinition::new("split")
            .with_node("split", "split_text")
            .with_node("refine", "refine_summary")
            .with_edge("split", Some("refine"))
            .with_edge("refine", None)
            .with_loop("refine", "final_summary", 300);

        assert_eq!(graph.start_node, "split");
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node("split").map(|n| n.tool.as_str()), Some("split_text"));
        assert_eq!(graph.successor("split"), Some("refine"));
        assert_eq!(graph.successor("refine"), None);
        assert_eq!(
            graph.loop_clause.as_ref().map(|l| l.condition.max_length),
            Some(300)
        );
    }

    #[test]
    fn successor_treats_missing_edge_as_terminal() {
        let graph = GraphDefinition::new("a").with_node("a", "id");
        assert_eq!(graph.successor("a"), None);
    }

    #[test]
    fn deserializes_wire_format() {
        let json = serde_json::json!({
            "nodes": {
                "split": {"tool": "split_text"},
                "refine": {"tool": "refine_summary"}
            },
            "edges": {
                "split": "refine",
                "refine": null
            },
            "start_node": "split",
            "loop": {
                "node": "refine",
                "condition": {"key": "final_summary", "max_length": 300}
            }
        });

        let graph: GraphDefinition = serde_json::from_value(json).expect("deserialize");
        assert_eq!(graph.start_node, "split");
        assert_eq!(graph.successor("split"), Some("refine"));
        assert_eq!(graph.successor("refine"), None);
        let loop_clause = graph.loop_clause.expect("loop clause");
        assert_eq!(loop_clause.node, "refine");
        assert_eq!(loop_clause.condition.key, "final_summary");
    }

    #[test]
    fn loop_clause_is_optional_on_the_wire() {
        let json = serde_json::json!({
            "nodes": {"a": {"tool": "id"}},
            "edges": {"a": null},
            "start_node": "a"
        });

        let graph: GraphDefinition = serde_json::from_value(json).expect("deserialize");
        assert!(graph.loop_clause.is_none());
    }

    #[test]
    fn graph_serde_roundtrip() {
        let graph = GraphDefinition::new("a")
            .with_node("a", "id")
            .with_node("b", "id")
            .with_edge("a", Some("b"))
            .with_edge("b", None);

        let json = serde_json::to_string(&graph).expect("serialize");
        let parsed: GraphDefinition = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(graph, parsed);
    }
}
