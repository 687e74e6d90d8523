//! Unit tests for core hrflow functionality.
mod common;
use common::*;
use hrflow::prelude::*;
use hrflow::registry::default_actions;
use serde_json::json;

#[test]
fn test_node_kind_round_trip() {
    for kind in NodeKind::ALL {
        assert_eq!(kind.as_str().parse::<NodeKind>(), Ok(kind));
        assert_eq!(format!("{}", kind), kind.as_str());
    }
    assert!("Start".parse::<NodeKind>().is_err());
    assert!("webhook".parse::<NodeKind>().is_err());
}

#[test]
fn test_default_labels() {
    assert_eq!(Node::start("s").label, "Start Node");
    assert_eq!(Node::task("t", TaskData::default()).label, "Task Node");
    assert_eq!(Node::approval("a", ApprovalData::default()).label, "Approval Node");
    assert_eq!(Node::automated("x", AutomatedData::default()).label, "Automated Step");
    assert_eq!(Node::end("e", EndData::default()).label, "End Node");
}

#[test]
fn test_node_data_kind_matches_variant() {
    for kind in NodeKind::ALL {
        assert_eq!(NodeData::empty(kind).kind(), kind);
    }
}

#[test]
fn test_graph_helpers() {
    let graph = create_diamond_graph();
    assert_eq!(graph.start_node().map(|n| n.id.as_str()), Some("S"));
    assert!(graph.contains_kind(NodeKind::Approval));
    assert_eq!(graph.find_node("M").map(|n| n.kind()), Some(NodeKind::Automated));
    assert!(graph.find_node("nope").is_none());
}

#[test]
fn test_adjacency_keeps_edge_order() {
    let graph = create_diamond_graph();
    let adjacency = hrflow::workflow::Adjacency::new(&graph);
    assert_eq!(adjacency.downstream("S"), &["A", "B"]);
    assert_eq!(adjacency.upstream("M"), &["A", "B"]);
    assert!(!adjacency.has_incoming("S"));
    assert!(!adjacency.has_outgoing("E"));
    assert!(adjacency.downstream("unknown").is_empty());
}

#[test]
fn test_snapshot_lookup() {
    let snapshot = create_default_snapshot();
    assert_eq!(snapshot.len(), 4);
    assert_eq!(
        snapshot.find("generate_doc").map(|a| a.label.as_str()),
        Some("Generate Document")
    );
    assert!(snapshot.find("unknown").is_none());
    assert_eq!(snapshot.actions(), default_actions().as_slice());
    assert!(RegistrySnapshot::empty().is_empty());
}

#[test]
fn test_snapshot_prefers_first_duplicate() {
    let snapshot = RegistrySnapshot::new(vec![
        AutomationAction::new("dup", "First", &[]),
        AutomationAction::new("dup", "Second", &[]),
    ]);
    assert_eq!(snapshot.find("dup").map(|a| a.label.as_str()), Some("First"));
}

#[test]
fn test_missing_params() {
    let send_email = &default_actions()[0];
    let configured = vec![
        ("to".to_string(), "a@b.com".to_string()),
        ("subject".to_string(), String::new()),
    ];
    assert_eq!(send_email.missing_params(&configured), vec!["subject", "body"]);
    assert!(
        default_actions()[3]
            .missing_params(&[
                ("project".to_string(), "HR".to_string()),
                ("summary".to_string(), "Laptop".to_string()),
            ])
            .is_empty()
    );
}

#[test]
fn test_default_registry_lists_catalog() {
    let registry = InMemoryRegistry::new(default_actions());
    let actions = tokio_test::block_on(registry.list_actions()).unwrap();
    let ids: Vec<&str> = actions.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["send_email", "generate_doc", "slack_notify", "create_jira"]);
}

#[test]
fn test_action_serialization() {
    let json = serde_json::to_value(&default_actions()[2]).unwrap();
    assert_eq!(
        json,
        json!({ "id": "slack_notify", "label": "Slack Notification", "params": ["channel", "message"] })
    );
}

#[test]
fn test_error_display() {
    let err = ValidationError::NoOutgoingConnection {
        node_id: "n1".to_string(),
        label: "Send offer".to_string(),
    };
    assert_eq!(err.to_string(), "\"Send offer\" has no outgoing connection");
    assert_eq!(err.rule(), 5);

    let reg_err = RegistryError::Unavailable("timeout".to_string());
    assert!(reg_err.to_string().contains("timeout"));

    let conv_err = WorkflowConversionError::UnknownNodeType {
        node_id: "n2".to_string(),
        type_name: "webhook".to_string(),
    };
    assert!(conv_err.to_string().contains("n2"));
    assert!(conv_err.to_string().contains("webhook"));
}

#[test]
fn test_trace_formatter_step() {
    let step = SimulationStep {
        step: 2,
        node_id: "T".to_string(),
        node_label: "Screen candidate".to_string(),
        kind: NodeKind::Task,
        status: StepStatus::Completed,
        output: "Task completed: Review resume".to_string(),
        details: json!({ "assignee": "Dana", "hours": 3.0, "urgent": false })
            .as_object()
            .unwrap()
            .clone(),
    };

    let formatted = TraceFormatter::format_step(&step);
    assert_eq!(
        formatted,
        "[2] Screen candidate (task) - completed\n    Task completed: Review resume\n    assignee: Dana\n    hours: 3\n    urgent: false"
    );
}

#[test]
fn test_trace_formatter_validity() {
    let invalid = check_validity(&WorkflowGraph::default());
    assert_eq!(
        TraceFormatter::format_validity(&invalid),
        "Invalid: Add nodes to the canvas"
    );
    let valid = check_validity(&create_linear_graph());
    assert_eq!(TraceFormatter::format_validity(&valid), "OK: Ready to simulate");
}
