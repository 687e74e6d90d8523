//! Per-step output synthesis: what each kind of step reports when it "runs".

use itertools::Itertools;
use serde_json::Value;

use crate::registry::RegistrySnapshot;
use crate::workflow::{ApprovalData, AutomatedData, EndData, Node, NodeData, StartData, TaskData};

mod clock;
mod text;

pub use clock::{Clock, FixedClock, SystemClock};
use text::{format_amount, non_empty, truncate_with_ellipsis};

/// Ordered detail mapping attached to a step. Values are strings, numbers,
/// booleans or nested mappings.
pub type Details = serde_json::Map<String, Value>;

/// Longest description excerpt quoted in a task's output.
pub const DESCRIPTION_EXCERPT_LEN: usize = 50;
/// Role reported when an approval step names no approver.
pub const DEFAULT_APPROVER: &str = "Manager";

/// The synthesized description of one executed step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutput {
    pub output: String,
    pub details: Details,
}

/// Produces step outputs against a fixed registry snapshot and clock.
pub struct StepSynthesizer<'a> {
    registry: &'a RegistrySnapshot,
    clock: &'a dyn Clock,
}

impl<'a> StepSynthesizer<'a> {
    pub fn new(registry: &'a RegistrySnapshot, clock: &'a dyn Clock) -> Self {
        Self { registry, clock }
    }

    /// Describes what `node` did. Only the timestamp fields of `Start` and `End`
    /// depend on anything besides the node and the registry snapshot.
    pub fn synthesize(&self, node: &Node) -> StepOutput {
        match &node.data {
            NodeData::Start(data) => self.start(node, data),
            NodeData::Task(data) => self.task(node, data),
            NodeData::Approval(data) => self.approval(data),
            NodeData::Automated(data) => self.automated(data),
            NodeData::End(data) => self.end(data),
        }
    }

    fn start(&self, node: &Node, _data: &StartData) -> StepOutput {
        let mut details = Details::new();
        details.insert("trigger".into(), "Manual".into());
        details.insert("timestamp".into(), self.clock.timestamp().into());
        StepOutput {
            output: format!("Workflow \"{}\" initiated", node.label),
            details,
        }
    }

    fn task(&self, node: &Node, data: &TaskData) -> StepOutput {
        let description = non_empty(&data.description);

        let mut details = Details::new();
        if let Some(assignee) = non_empty(&data.assignee) {
            details.insert("assignee".into(), assignee.into());
        }
        if let Some(due_date) = non_empty(&data.due_date) {
            details.insert("dueDate".into(), due_date.into());
        }
        if let Some(description) = description {
            details.insert("description".into(), description.into());
        }
        if details.is_empty() {
            details.insert("status".into(), "Completed successfully".into());
        }

        let output = match description {
            Some(text) => format!(
                "Task completed: {}",
                truncate_with_ellipsis(text, DESCRIPTION_EXCERPT_LEN)
            ),
            None => format!("Task \"{}\" completed", node.label),
        };
        StepOutput { output, details }
    }

    fn approval(&self, data: &ApprovalData) -> StepOutput {
        let approver = non_empty(&data.approver_role).unwrap_or(DEFAULT_APPROVER);

        let mut details = Details::new();
        details.insert("approvedBy".into(), approver.into());
        details.insert("decision".into(), "Approved".into());
        // A zero threshold is treated as unset.
        if let Some(threshold) = data.auto_approve_threshold.filter(|t| *t != 0.0) {
            details.insert(
                "autoApproveThreshold".into(),
                format!("${}", format_amount(threshold)).into(),
            );
        }

        StepOutput {
            output: format!("Approved by {}", approver),
            details,
        }
    }

    fn automated(&self, data: &AutomatedData) -> StepOutput {
        let action_id = non_empty(&data.action_id);
        let action = action_id.and_then(|id| self.registry.find(id));

        let output = match action {
            Some(action) => {
                let summary = data
                    .action_params
                    .iter()
                    .filter(|(_, value)| !value.is_empty())
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .join(", ");
                if summary.is_empty() {
                    format!("{} executed", action.label)
                } else {
                    format!("{} executed ({})", action.label, summary)
                }
            }
            None => "Automated action executed".to_string(),
        };

        let action_name = action
            .map(|a| a.label.as_str())
            .or(action_id)
            .unwrap_or("Unknown");
        let parameters = if data.action_params.is_empty() {
            Value::from("None configured")
        } else {
            Value::Object(
                data.action_params
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::from(value.as_str())))
                    .collect(),
            )
        };

        let mut details = Details::new();
        details.insert("action".into(), action_name.into());
        details.insert("parameters".into(), parameters);
        StepOutput { output, details }
    }

    fn end(&self, data: &EndData) -> StepOutput {
        let output = non_empty(&data.end_message)
            .unwrap_or("Workflow completed successfully")
            .to_string();

        let mut details = Details::new();
        details.insert("showSummary".into(), data.is_summary.into());
        details.insert("completedAt".into(), self.clock.timestamp().into());
        StepOutput { output, details }
    }
}

/// Synthesizes a single node's output using the system clock.
pub fn synthesize(node: &Node, registry: &RegistrySnapshot) -> StepOutput {
    StepSynthesizer::new(registry, &SystemClock).synthesize(node)
}
