use itertools::Itertools;
use serde_json::Value;

use crate::simulation::{SimulationResult, SimulationStep, StepStatus};
use crate::validator::Validity;

/// Formats simulation traces into human-readable strings
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format a whole simulation result: a header line, then one block per step.
    pub fn format_result(result: &SimulationResult) -> String {
        let header = if result.success {
            format!(
                "Workflow Completed Successfully ({} steps, {})",
                result.steps.len(),
                result.total_duration
            )
        } else {
            format!("Workflow Failed ({} steps)", result.steps.len())
        };

        std::iter::once(header)
            .chain(result.steps.iter().map(Self::format_step))
            .join("\n")
    }

    /// Format a single step, e.g.
    ///
    /// ```text
    /// [2] Screen candidate (task) - completed
    ///     Task completed: Review resume
    ///     assignee: Dana
    /// ```
    pub fn format_step(step: &SimulationStep) -> String {
        let mut lines = vec![
            format!(
                "[{}] {} ({}) - {}",
                step.step,
                step.node_label,
                step.kind,
                Self::format_status(step)
            ),
            format!("    {}", step.output),
        ];
        lines.extend(
            step.details
                .iter()
                .map(|(key, value)| format!("    {}: {}", key, Self::format_value(value))),
        );
        lines.join("\n")
    }

    /// Format a validity check as a single status line.
    pub fn format_validity(validity: &Validity) -> String {
        if validity.is_valid {
            format!("OK: {}", validity.message)
        } else {
            format!("Invalid: {}", validity.message)
        }
    }

    fn format_status(step: &SimulationStep) -> &'static str {
        match step.status {
            StepStatus::Completed => "completed",
            StepStatus::Pending => "pending",
            StepStatus::Failed => "failed",
        }
    }

    /// Strings are shown bare, nested mappings as compact JSON.
    fn format_value(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
                _ => n.to_string(),
            },
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
            other => other.to_string(),
        }
    }
}
