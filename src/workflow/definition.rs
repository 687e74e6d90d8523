use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered string-to-string attribute list. Order is the order the editor produced.
pub type Attributes = Vec<(String, String)>;

/// The closed set of step kinds a workflow can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    Task,
    Approval,
    Automated,
    End,
}

impl NodeKind {
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Start,
        NodeKind::Task,
        NodeKind::Approval,
        NodeKind::Automated,
        NodeKind::End,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::Task => "task",
            NodeKind::Approval => "approval",
            NodeKind::Automated => "automated",
            NodeKind::End => "end",
        }
    }

    /// The placeholder label a freshly dropped node of this kind carries.
    pub fn default_label(&self) -> &'static str {
        match self {
            NodeKind::Start => "Start Node",
            NodeKind::Task => "Task Node",
            NodeKind::Approval => "Approval Node",
            NodeKind::Automated => "Automated Step",
            NodeKind::End => "End Node",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartData {
    pub metadata: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskData {
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
    pub custom_fields: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApprovalData {
    pub approver_role: Option<String>,
    /// Amount under which the request is approved without a reviewer. Unitless.
    pub auto_approve_threshold: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutomatedData {
    /// Id of an entry in the automation registry.
    pub action_id: Option<String>,
    pub action_params: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndData {
    pub end_message: Option<String>,
    pub is_summary: bool,
}

/// Kind-specific attributes of a node. Each variant only carries what its kind uses.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Start(StartData),
    Task(TaskData),
    Approval(ApprovalData),
    Automated(AutomatedData),
    End(EndData),
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Start(_) => NodeKind::Start,
            NodeData::Task(_) => NodeKind::Task,
            NodeData::Approval(_) => NodeKind::Approval,
            NodeData::Automated(_) => NodeKind::Automated,
            NodeData::End(_) => NodeKind::End,
        }
    }

    /// Attribute-free data for the given kind.
    pub fn empty(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Start => NodeData::Start(StartData::default()),
            NodeKind::Task => NodeData::Task(TaskData::default()),
            NodeKind::Approval => NodeData::Approval(ApprovalData::default()),
            NodeKind::Automated => NodeData::Automated(AutomatedData::default()),
            NodeKind::End => NodeData::End(EndData::default()),
        }
    }
}

/// A single step in the workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub data: NodeData,
}

impl Node {
    /// Creates a node labelled with its kind's placeholder.
    pub fn new(id: impl Into<String>, data: NodeData) -> Self {
        let label = data.kind().default_label().to_string();
        Self {
            id: id.into(),
            label,
            data,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn start(id: impl Into<String>) -> Self {
        Self::new(id, NodeData::empty(NodeKind::Start))
    }

    pub fn task(id: impl Into<String>, data: TaskData) -> Self {
        Self::new(id, NodeData::Task(data))
    }

    pub fn approval(id: impl Into<String>, data: ApprovalData) -> Self {
        Self::new(id, NodeData::Approval(data))
    }

    pub fn automated(id: impl Into<String>, data: AutomatedData) -> Self {
        Self::new(id, NodeData::Automated(data))
    }

    pub fn end(id: impl Into<String>, data: EndData) -> Self {
        Self::new(id, NodeData::End(data))
    }

    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("e{}-{}", source, target),
            source,
            target,
        }
    }
}

/// A snapshot of the canvas: nodes plus the edges between them.
///
/// Edge endpoints are not guaranteed to reference existing nodes; consumers
/// treat dangling endpoints as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl WorkflowGraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn find_node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    /// The first `Start` node in node order, which is the traversal entry point.
    pub fn start_node(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.kind() == NodeKind::Start)
    }

    pub fn contains_kind(&self, kind: NodeKind) -> bool {
        self.nodes.iter().any(|n| n.kind() == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
