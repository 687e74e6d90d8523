//! The editor's canvas export format and its conversion to and from `WorkflowGraph`.

use ahash::AHashSet;
use serde_json::{Map, Value};

use crate::error::WorkflowConversionError;
use crate::workflow::{
    ApprovalData, Attributes, AutomatedData, Edge, EndData, IntoWorkflow, Node, NodeData,
    NodeKind, StartData, TaskData, WorkflowGraph,
};

mod types;

pub use types::*;

impl UiWorkflow {
    /// Parses a canvas export.
    pub fn from_json(json: &str) -> Result<Self, WorkflowConversionError> {
        serde_json::from_str(json)
            .map_err(|e| WorkflowConversionError::JsonParseError(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, WorkflowConversionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WorkflowConversionError::JsonParseError(e.to_string()))
    }

    /// Builds a canvas export from a graph. Positions are left unset.
    pub fn from_graph(graph: &WorkflowGraph) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .map(|node| UiNode {
                id: node.id.clone(),
                node_type: Some(node.kind().as_str().to_string()),
                position: None,
                data: node_data_to_ui(node),
            })
            .collect();
        let edges = graph
            .edges
            .iter()
            .map(|edge| UiEdge {
                id: Some(edge.id.clone()),
                source: edge.source.clone(),
                target: edge.target.clone(),
            })
            .collect();
        Self { nodes, edges }
    }
}

impl IntoWorkflow for UiWorkflow {
    fn into_workflow(self) -> Result<WorkflowGraph, WorkflowConversionError> {
        let mut seen: AHashSet<String> = AHashSet::with_capacity(self.nodes.len());
        let mut nodes = Vec::with_capacity(self.nodes.len());

        for ui_node in self.nodes {
            if !seen.insert(ui_node.id.clone()) {
                return Err(WorkflowConversionError::DuplicateNodeId(ui_node.id));
            }
            nodes.push(convert_node(ui_node)?);
        }

        let edges = self
            .edges
            .into_iter()
            .map(|ui_edge| {
                let mut edge = Edge::new(ui_edge.source, ui_edge.target);
                if let Some(id) = ui_edge.id {
                    edge.id = id;
                }
                edge
            })
            .collect();

        Ok(WorkflowGraph::new(nodes, edges))
    }
}

fn convert_node(ui_node: UiNode) -> Result<Node, WorkflowConversionError> {
    let type_name = ui_node
        .node_type
        .or_else(|| ui_node.data.node_type.clone())
        .unwrap_or_default();
    let kind: NodeKind = type_name
        .parse()
        .map_err(|_| WorkflowConversionError::UnknownNodeType {
            node_id: ui_node.id.clone(),
            type_name: type_name.clone(),
        })?;

    let data = ui_node.data;
    let label = data
        .label
        .clone()
        .unwrap_or_else(|| kind.default_label().to_string());

    let node_data = match kind {
        NodeKind::Start => NodeData::Start(StartData {
            metadata: stringify_map(data.metadata),
        }),
        NodeKind::Task => NodeData::Task(TaskData {
            description: data.description,
            assignee: data.assignee,
            due_date: data.due_date,
            custom_fields: stringify_map(data.custom_fields),
        }),
        NodeKind::Approval => NodeData::Approval(ApprovalData {
            approver_role: data.approver_role,
            auto_approve_threshold: data.auto_approve_threshold,
        }),
        NodeKind::Automated => NodeData::Automated(AutomatedData {
            action_id: data.action_id,
            action_params: stringify_map(data.action_params),
        }),
        NodeKind::End => NodeData::End(EndData {
            end_message: data.end_message,
            is_summary: data.is_summary.unwrap_or(false),
        }),
    };

    Ok(Node {
        id: ui_node.id,
        label,
        data: node_data,
    })
}

/// Flattens editor values to strings; `null` becomes an empty string.
fn stringify_map(map: Option<Map<String, Value>>) -> Attributes {
    map.unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (key, text)
        })
        .collect()
}

fn attributes_to_map(attributes: &Attributes) -> Option<Map<String, Value>> {
    if attributes.is_empty() {
        return None;
    }
    Some(
        attributes
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect(),
    )
}

fn node_data_to_ui(node: &Node) -> UiNodeData {
    let mut data = UiNodeData {
        label: Some(node.label.clone()),
        node_type: Some(node.kind().as_str().to_string()),
        ..Default::default()
    };
    match &node.data {
        NodeData::Start(start) => {
            data.metadata = attributes_to_map(&start.metadata);
        }
        NodeData::Task(task) => {
            data.description = task.description.clone();
            data.assignee = task.assignee.clone();
            data.due_date = task.due_date.clone();
            data.custom_fields = attributes_to_map(&task.custom_fields);
        }
        NodeData::Approval(approval) => {
            data.approver_role = approval.approver_role.clone();
            data.auto_approve_threshold = approval.auto_approve_threshold;
        }
        NodeData::Automated(automated) => {
            data.action_id = automated.action_id.clone();
            data.action_params = attributes_to_map(&automated.action_params);
        }
        NodeData::End(end) => {
            data.end_message = end.end_message.clone();
            data.is_summary = Some(end.is_summary);
        }
    }
    data
}
