//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the hrflow crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use hrflow::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/workflow.json")?;
//! let graph = UiWorkflow::from_json(&json)?.into_workflow()?;
//!
//! validate(&graph)?;
//!
//! let simulator = Simulator::new(Arc::new(InMemoryRegistry::with_default_actions()));
//! let result = simulator.simulate(graph).await;
//! println!("{}", TraceFormatter::format_result(&result));
//! # Ok(())
//! # }
//! ```

// Workflow model
pub use crate::workflow::{
    ApprovalData, AutomatedData, Edge, EndData, IntoWorkflow, Node, NodeData, NodeKind,
    StartData, TaskData, WorkflowGraph,
};

// Engine
pub use crate::simulation::{
    SimulationResult, SimulationStep, Simulator, SimulatorConfig, StepStatus,
};
pub use crate::synthesis::{StepOutput, StepSynthesizer, synthesize};
pub use crate::traversal::traverse;
pub use crate::validator::{Validity, check_validity, validate};

// Automation registry
pub use crate::registry::{
    AutomationAction, AutomationRegistry, InMemoryRegistry, RegistrySnapshot,
};

// Canvas import
pub use crate::ui::UiWorkflow;

// Error types
pub use crate::error::{
    RegistryError, SimulationError, ValidationError, WorkflowConversionError,
};

// Trace formatting
pub use crate::trace::TraceFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
