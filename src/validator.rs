//! The validity gate a graph must pass before it may be simulated.

use serde::Serialize;

use crate::error::ValidationError;
use crate::workflow::{Adjacency, NodeKind, WorkflowGraph};

/// Message reported when a graph passes every rule.
pub const READY_MESSAGE: &str = "Ready to simulate";

/// Checks a graph against the validity rules, returning the first failure.
///
/// Rules are checked in this order:
/// 1. the graph has at least one node;
/// 2. it has at least one `End` node;
/// 3. it has a `Start` node;
/// 4. and 5. walking nodes in order, every non-`Start` node has an incoming edge
///    and every non-`End` node has an outgoing edge (incoming is checked first
///    for each node).
pub fn validate(graph: &WorkflowGraph) -> Result<(), ValidationError> {
    if graph.is_empty() {
        return Err(ValidationError::EmptyGraph);
    }
    if !graph.contains_kind(NodeKind::End) {
        return Err(ValidationError::MissingEndNode);
    }
    if !graph.contains_kind(NodeKind::Start) {
        return Err(ValidationError::MissingStartNode);
    }

    let adjacency = Adjacency::new(graph);
    for node in &graph.nodes {
        let kind = node.kind();
        if kind != NodeKind::Start && !adjacency.has_incoming(&node.id) {
            return Err(ValidationError::NoIncomingConnection {
                node_id: node.id.clone(),
                label: node.label.clone(),
            });
        }
        if kind != NodeKind::End && !adjacency.has_outgoing(&node.id) {
            return Err(ValidationError::NoOutgoingConnection {
                node_id: node.id.clone(),
                label: node.label.clone(),
            });
        }
    }

    Ok(())
}

/// Live validity signal for the editor: a flag plus the message to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validity {
    pub is_valid: bool,
    pub message: String,
}

impl From<Result<(), ValidationError>> for Validity {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Validity {
                is_valid: true,
                message: READY_MESSAGE.to_string(),
            },
            Err(e) => Validity {
                is_valid: false,
                message: e.to_string(),
            },
        }
    }
}

/// Cheap, synchronous validity check suitable for recomputing on every edit.
pub fn check_validity(graph: &WorkflowGraph) -> Validity {
    validate(graph).into()
}
