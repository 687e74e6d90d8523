use serde::{Deserialize, Serialize};

use crate::registry::RegistrySnapshot;
use crate::synthesis::{Clock, Details, StepSynthesizer};
use crate::traversal::traverse;
use crate::workflow::{NodeKind, WorkflowGraph};

mod simulator;

pub use simulator::{Simulator, SimulatorBuilder, SimulatorConfig};

/// Estimated seconds each step contributes to `total_duration`.
pub const DEFAULT_STEP_DURATION_SECS: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Pending,
    Failed,
}

/// One entry of the execution trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStep {
    /// 1-based position in the trace.
    pub step: usize,
    pub node_id: String,
    pub node_label: String,
    pub kind: NodeKind,
    pub status: StepStatus,
    pub output: String,
    pub details: Details,
}

/// The outcome of a mock run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub success: bool,
    pub steps: Vec<SimulationStep>,
    /// Derived estimate such as `"1.5s"`, not measured time.
    pub total_duration: String,
}

/// Formats the duration estimate for `step_count` steps.
pub fn format_total_duration(step_count: usize, step_duration_secs: f64) -> String {
    format!("{:.1}s", step_count as f64 * step_duration_secs)
}

/// Builds the trace for `graph`: traversal order, one synthesized step per node.
///
/// This is the synchronous heart of [`Simulator::simulate`]; it never fails
/// and never looks at whether the graph is valid.
pub fn build_trace(
    graph: &WorkflowGraph,
    registry: &RegistrySnapshot,
    clock: &dyn Clock,
    step_duration_secs: f64,
) -> SimulationResult {
    let synthesizer = StepSynthesizer::new(registry, clock);

    let steps: Vec<SimulationStep> = traverse(graph)
        .into_iter()
        .enumerate()
        .map(|(index, node)| {
            let synthesized = synthesizer.synthesize(node);
            tracing::debug!(
                step = index + 1,
                node_id = %node.id,
                kind = %node.kind(),
                output = %synthesized.output,
                "step synthesized"
            );
            SimulationStep {
                step: index + 1,
                node_id: node.id.clone(),
                node_label: node.label.clone(),
                kind: node.kind(),
                status: StepStatus::Completed,
                output: synthesized.output,
                details: synthesized.details,
            }
        })
        .collect();

    let total_duration = format_total_duration(steps.len(), step_duration_secs);
    SimulationResult {
        success: true,
        steps,
        total_duration,
    }
}
