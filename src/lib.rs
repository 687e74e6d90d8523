//! # hrflow - HR Workflow Validation and Simulation Engine
//!
//! **hrflow** is the engine behind a visual HR workflow designer. Users assemble a
//! process on a canvas as a directed graph of typed steps (start, task, approval,
//! automated action, end); hrflow decides whether that graph is well-formed, orders
//! its steps, and runs a mock execution that reports what each step would have done.
//!
//! ## Core Workflow
//!
//! The engine works on a canonical, read-only snapshot of the canvas, the
//! [`WorkflowGraph`](workflow::WorkflowGraph). The primary workflow is:
//!
//! 1.  **Load the canvas**: Parse the editor's export with [`UiWorkflow`](ui::UiWorkflow), or
//!     implement [`IntoWorkflow`](workflow::IntoWorkflow) for your own format.
//! 2.  **Gate**: Call [`check_validity`](validator::check_validity) whenever the graph changes.
//!     It is cheap and synchronous, and tells the user what to fix.
//! 3.  **Simulate**: Hand an owned copy of the graph to a [`Simulator`](simulation::Simulator).
//!     The simulator lists the automation catalog, walks the graph breadth first from the
//!     `Start` node, and synthesizes one step record per reached node.
//! 4.  **Present**: Render the result with [`TraceFormatter`](trace::TraceFormatter) or
//!     serialize it to JSON.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hrflow::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let graph = WorkflowGraph::new(
//!         vec![
//!             Node::start("start").with_label("Onboarding"),
//!             Node::task(
//!                 "review",
//!                 TaskData {
//!                     description: Some("Review resume".to_string()),
//!                     ..Default::default()
//!                 },
//!             ),
//!             Node::end("end", EndData::default()),
//!         ],
//!         vec![Edge::new("start", "review"), Edge::new("review", "end")],
//!     );
//!
//!     let validity = check_validity(&graph);
//!     if !validity.is_valid {
//!         println!("Cannot simulate: {}", validity.message);
//!         return Ok(());
//!     }
//!
//!     let registry = Arc::new(InMemoryRegistry::with_default_actions());
//!     let simulator = Simulator::new(registry);
//!     let result = simulator.run_simulation(graph).await?;
//!
//!     println!("{}", TraceFormatter::format_result(&result));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod prelude;
pub mod registry;
pub mod simulation;
pub mod synthesis;
pub mod trace;
pub mod traversal;
pub mod ui;
pub mod validator;
pub mod workflow;
