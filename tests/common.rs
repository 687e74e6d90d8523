//! Common test utilities for building workflow graphs and registries.
use chrono::{TimeZone, Utc};
use hrflow::prelude::*;
use hrflow::registry::default_actions;
use hrflow::synthesis::FixedClock;
use std::sync::Arc;

/// Creates the canonical three-step workflow.
///
/// Shape: `Start(S) -> Task(T, "Review resume") -> End(E)`
#[allow(dead_code)]
pub fn create_linear_graph() -> WorkflowGraph {
    WorkflowGraph::new(
        vec![
            Node::start("S").with_label("Onboarding"),
            Node::task(
                "T",
                TaskData {
                    description: Some("Review resume".to_string()),
                    ..Default::default()
                },
            )
            .with_label("Screen candidate"),
            Node::end("E", EndData::default()),
        ],
        vec![Edge::new("S", "T"), Edge::new("T", "E")],
    )
}

/// Creates a workflow that forks after Start and merges before End.
///
/// Shape: `S -> A, S -> B, A -> M, B -> M, M -> E`
#[allow(dead_code)]
pub fn create_diamond_graph() -> WorkflowGraph {
    WorkflowGraph::new(
        vec![
            Node::start("S"),
            Node::task("A", TaskData::default()).with_label("Collect documents"),
            Node::approval("B", ApprovalData::default()).with_label("Budget sign-off"),
            Node::automated(
                "M",
                AutomatedData {
                    action_id: Some("slack_notify".to_string()),
                    action_params: vec![("channel".to_string(), "#hr".to_string())],
                },
            ),
            Node::end("E", EndData::default()),
        ],
        vec![
            Edge::new("S", "A"),
            Edge::new("S", "B"),
            Edge::new("A", "M"),
            Edge::new("B", "M"),
            Edge::new("M", "E"),
        ],
    )
}

/// A registry holding the built-in catalog that answers immediately.
#[allow(dead_code)]
pub fn create_instant_registry() -> Arc<InMemoryRegistry> {
    Arc::new(InMemoryRegistry::new(default_actions()))
}

/// A snapshot of the built-in catalog.
#[allow(dead_code)]
pub fn create_default_snapshot() -> RegistrySnapshot {
    RegistrySnapshot::new(default_actions())
}

/// A clock frozen at 2024-05-01T09:30:00Z.
#[allow(dead_code)]
pub fn create_fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap())
}

/// A simulator with no artificial latency and a frozen clock.
#[allow(dead_code)]
pub fn create_test_simulator() -> Simulator {
    Simulator::builder(create_instant_registry())
        .with_latency(std::time::Duration::ZERO)
        .with_clock(Arc::new(create_fixed_clock()))
        .build()
}

/// Collects the ids of a traversal result.
#[allow(dead_code)]
pub fn ids(nodes: &[&Node]) -> Vec<String> {
    nodes.iter().map(|n| n.id.clone()).collect()
}

/// Asserts a value looks like `2024-05-01T09:30:00.000Z`.
#[allow(dead_code)]
pub fn assert_iso_timestamp(value: &serde_json::Value) {
    let text = value.as_str().expect("timestamp should be a string");
    assert!(
        chrono::DateTime::parse_from_rfc3339(text).is_ok(),
        "not an RFC 3339 timestamp: {}",
        text
    );
    assert!(text.ends_with('Z'), "timestamp should be UTC: {}", text);
}
