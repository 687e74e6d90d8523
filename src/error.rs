use thiserror::Error;

/// Reasons a workflow graph is not eligible for simulation.
///
/// The `Display` output of each variant is the user-facing message shown next to the
/// simulate button, so the wording is part of the contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Add nodes to the canvas")]
    EmptyGraph,

    #[error("Add an End node to the workflow")]
    MissingEndNode,

    #[error("Add a Start node to the workflow")]
    MissingStartNode,

    #[error("\"{label}\" has no incoming connection")]
    NoIncomingConnection { node_id: String, label: String },

    #[error("\"{label}\" has no outgoing connection")]
    NoOutgoingConnection { node_id: String, label: String },
}

impl ValidationError {
    /// Position of the rule that produced this failure, in evaluation order.
    pub fn rule(&self) -> u8 {
        match self {
            ValidationError::EmptyGraph => 1,
            ValidationError::MissingEndNode => 2,
            ValidationError::MissingStartNode => 3,
            ValidationError::NoIncomingConnection { .. } => 4,
            ValidationError::NoOutgoingConnection { .. } => 5,
        }
    }
}

/// Errors raised by the simulation entry point before any step runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Workflow must have a Start Node.")]
    MissingStartNode,

    #[error("Workflow must have an End Node.")]
    MissingEndNode,
}

/// Errors that can occur while listing automation actions.
#[derive(Error, Debug, Clone)]
pub enum RegistryError {
    #[error("Automation registry is unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur when converting an external format into a `WorkflowGraph`.
#[derive(Error, Debug, Clone)]
pub enum WorkflowConversionError {
    #[error("Failed to parse workflow JSON: {0}")]
    JsonParseError(String),

    #[error("Node '{node_id}' has an unknown type: '{type_name}'")]
    UnknownNodeType { node_id: String, type_name: String },

    #[error("Node id '{0}' is used by more than one node")]
    DuplicateNodeId(String),
}
