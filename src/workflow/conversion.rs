use super::definition::WorkflowGraph;
use crate::error::WorkflowConversionError;

/// A trait for external workflow formats that can be converted into a `WorkflowGraph`.
///
/// The engine only ever works on `WorkflowGraph`. Implement this on whatever your
/// editor exports (the bundled `ui::UiWorkflow` covers the canvas JSON format).
///
/// # Example
///
/// ```rust,no_run
/// use hrflow::error::WorkflowConversionError;
/// use hrflow::workflow::{Edge, EndData, IntoWorkflow, Node, TaskData, WorkflowGraph};
///
/// struct Checklist { steps: Vec<String> }
///
/// impl IntoWorkflow for Checklist {
///     fn into_workflow(self) -> Result<WorkflowGraph, WorkflowConversionError> {
///         let mut nodes = vec![Node::start("start")];
///         let mut edges = Vec::new();
///         let mut previous = "start".to_string();
///         for (i, step) in self.steps.into_iter().enumerate() {
///             let id = format!("step-{}", i);
///             let data = TaskData { description: Some(step), ..Default::default() };
///             nodes.push(Node::task(id.clone(), data));
///             edges.push(Edge::new(previous, id.clone()));
///             previous = id;
///         }
///         nodes.push(Node::end("end", EndData::default()));
///         edges.push(Edge::new(previous, "end"));
///         Ok(WorkflowGraph::new(nodes, edges))
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a workflow graph snapshot.
    fn into_workflow(self) -> Result<WorkflowGraph, WorkflowConversionError>;
}

impl IntoWorkflow for WorkflowGraph {
    fn into_workflow(self) -> Result<WorkflowGraph, WorkflowConversionError> {
        Ok(self)
    }
}
