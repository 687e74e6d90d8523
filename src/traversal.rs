use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;
use tracing::debug;

use crate::workflow::{Adjacency, Node, WorkflowGraph};

/// Orders the nodes reachable from the entry point, breadth first.
///
/// Starts at the first `Start` node in node order and follows outgoing edges in
/// edge-collection order, so the result is identical for identical input.
/// Nodes with no path from the entry point are left out. Edge endpoints that
/// name no node are visited but contribute nothing. Without a `Start` node the
/// result is empty.
pub fn traverse(graph: &WorkflowGraph) -> Vec<&Node> {
    let Some(start) = graph.start_node() else {
        return Vec::new();
    };

    let mut node_map: AHashMap<&str, &Node> = AHashMap::with_capacity(graph.nodes.len());
    for node in &graph.nodes {
        node_map.insert(node.id.as_str(), node);
    }
    let adjacency = Adjacency::new(graph);

    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut frontier: VecDeque<&str> = VecDeque::from([start.id.as_str()]);
    let mut ordered = Vec::new();

    while let Some(current) = frontier.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        if let Some(node) = node_map.get(current) {
            ordered.push(*node);
        }
        for &next in adjacency.downstream(current) {
            if !visited.contains(next) {
                frontier.push_back(next);
            }
        }
    }

    debug!(
        reachable = ordered.len(),
        total = graph.nodes.len(),
        "workflow traversed"
    );
    ordered
}
