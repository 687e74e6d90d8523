//! Tests for the validity gate.
mod common;
use common::*;
use hrflow::prelude::*;

#[test]
fn test_valid_linear_graph() {
    let graph = create_linear_graph();
    assert_eq!(validate(&graph), Ok(()));

    let validity = check_validity(&graph);
    assert!(validity.is_valid);
    assert_eq!(validity.message, "Ready to simulate");
}

#[test]
fn test_empty_graph() {
    let err = validate(&WorkflowGraph::default()).unwrap_err();
    assert_eq!(err, ValidationError::EmptyGraph);
    assert_eq!(err.to_string(), "Add nodes to the canvas");
}

#[test]
fn test_start_only_reports_missing_end() {
    let graph = WorkflowGraph::new(vec![Node::start("S")], vec![]);
    let validity = check_validity(&graph);
    assert!(!validity.is_valid);
    assert_eq!(validity.message, "Add an End node to the workflow");
}

#[test]
fn test_end_without_start() {
    let graph = WorkflowGraph::new(vec![Node::end("E", EndData::default())], vec![]);
    let err = validate(&graph).unwrap_err();
    assert_eq!(err.to_string(), "Add a Start node to the workflow");
}

#[test]
fn test_isolated_task_reports_incoming_first() {
    let mut graph = WorkflowGraph::new(
        vec![Node::start("S"), Node::end("E", EndData::default())],
        vec![Edge::new("S", "E")],
    );
    graph.nodes.push(Node::task("T", TaskData::default()).with_label("Loose task"));

    let err = validate(&graph).unwrap_err();
    assert_eq!(err.to_string(), "\"Loose task\" has no incoming connection");
    assert!(matches!(
        err,
        ValidationError::NoIncomingConnection { ref node_id, .. } if node_id == "T"
    ));
}

#[test]
fn test_dead_end_reports_outgoing() {
    let graph = WorkflowGraph::new(
        vec![
            Node::start("S"),
            Node::approval("A", ApprovalData::default()),
            Node::end("E", EndData::default()),
        ],
        vec![Edge::new("S", "A"), Edge::new("S", "E")],
    );
    let err = validate(&graph).unwrap_err();
    assert_eq!(err.to_string(), "\"Approval Node\" has no outgoing connection");
}

#[test]
fn test_start_without_outgoing_edge() {
    let graph = WorkflowGraph::new(
        vec![Node::start("S"), Node::end("E", EndData::default())],
        vec![],
    );
    // Start is first in node order, so its missing outgoing edge is found
    // before End's missing incoming edge.
    let err = validate(&graph).unwrap_err();
    assert_eq!(err.to_string(), "\"Start Node\" has no outgoing connection");
}

#[test]
fn test_rules_are_checked_per_node_in_order() {
    let graph = WorkflowGraph::new(
        vec![
            Node::start("S"),
            Node::task("T1", TaskData::default()).with_label("First"),
            Node::task("T2", TaskData::default()).with_label("Second"),
            Node::end("E", EndData::default()),
        ],
        // T1 has an incoming edge but no outgoing one; T2 has neither.
        vec![Edge::new("S", "T1"), Edge::new("S", "E")],
    );
    let err = validate(&graph).unwrap_err();
    assert_eq!(err.to_string(), "\"First\" has no outgoing connection");
}

#[test]
fn test_multiple_end_nodes_are_allowed() {
    let graph = WorkflowGraph::new(
        vec![
            Node::start("S"),
            Node::end("E1", EndData::default()),
            Node::end("E2", EndData::default()),
        ],
        vec![Edge::new("S", "E1"), Edge::new("S", "E2")],
    );
    assert!(check_validity(&graph).is_valid);
}

#[test]
fn test_dangling_edges_count_as_connections() {
    // The edge into "ghost" still gives S an outgoing connection.
    let graph = WorkflowGraph::new(
        vec![Node::start("S"), Node::end("E", EndData::default())],
        vec![Edge::new("S", "ghost"), Edge::new("phantom", "E")],
    );
    assert!(validate(&graph).is_ok());
}

#[test]
fn test_adding_end_never_regresses_to_earlier_rule() {
    let before = WorkflowGraph::new(
        vec![Node::start("S"), Node::task("T", TaskData::default())],
        vec![Edge::new("S", "T")],
    );
    let before_err = validate(&before).unwrap_err();
    assert_eq!(before_err, ValidationError::MissingEndNode);

    let mut after = before.clone();
    after.nodes.push(Node::end("E", EndData::default()));
    let after_err = validate(&after).unwrap_err();
    assert!(after_err.rule() > before_err.rule());
    assert_eq!(after_err.to_string(), "\"Task Node\" has no outgoing connection");

    after.edges.push(Edge::new("T", "E"));
    assert!(validate(&after).is_ok());
}

#[test]
fn test_validity_serializes_camel_case() {
    let validity = check_validity(&WorkflowGraph::default());
    let json = serde_json::to_value(&validity).unwrap();
    assert_eq!(json["isValid"], false);
    assert_eq!(json["message"], "Add nodes to the canvas");
}
