use ahash::AHashMap;

use super::definition::WorkflowGraph;

/// Adjacency view over a `WorkflowGraph`, keyed by node id.
///
/// Built straight from the edge list, so ids that do not resolve to a node
/// are still present here. Successor order is edge-collection order.
#[derive(Debug, Clone, Default)]
pub struct Adjacency<'a> {
    downstream: AHashMap<&'a str, Vec<&'a str>>,
    upstream: AHashMap<&'a str, Vec<&'a str>>,
}

impl<'a> Adjacency<'a> {
    pub fn new(graph: &'a WorkflowGraph) -> Self {
        let mut downstream: AHashMap<&str, Vec<&str>> = AHashMap::new();
        let mut upstream: AHashMap<&str, Vec<&str>> = AHashMap::new();

        for edge in &graph.edges {
            downstream
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
            upstream
                .entry(edge.target.as_str())
                .or_default()
                .push(edge.source.as_str());
        }

        Self {
            downstream,
            upstream,
        }
    }

    /// Direct successors of a node, in the order their edges appear.
    pub fn downstream(&self, node_id: &str) -> &[&'a str] {
        self.downstream
            .get(node_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn upstream(&self, node_id: &str) -> &[&'a str] {
        self.upstream
            .get(node_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_incoming(&self, node_id: &str) -> bool {
        !self.upstream(node_id).is_empty()
    }

    pub fn has_outgoing(&self, node_id: &str) -> bool {
        !self.downstream(node_id).is_empty()
    }
}
