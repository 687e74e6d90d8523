use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use super::{DEFAULT_STEP_DURATION_SECS, SimulationResult, build_trace};
use crate::error::SimulationError;
use crate::registry::{AutomationRegistry, RegistrySnapshot, load_snapshot};
use crate::synthesis::{Clock, SystemClock};
use crate::validator::{Validity, check_validity};
use crate::workflow::{NodeKind, WorkflowGraph};

/// Tunables for a [`Simulator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatorConfig {
    /// Artificial pause before a result is returned.
    pub latency: Duration,
    /// Seconds each step adds to the reported duration estimate.
    pub step_duration_secs: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(1500),
            step_duration_secs: DEFAULT_STEP_DURATION_SECS,
        }
    }
}

/// Runs mock executions of workflow graphs.
///
/// A `Simulator` holds no per-run state, so one instance can serve any number of
/// concurrent simulations.
pub struct Simulator {
    registry: Arc<dyn AutomationRegistry>,
    clock: Arc<dyn Clock>,
    config: SimulatorConfig,
}

pub struct SimulatorBuilder {
    registry: Arc<dyn AutomationRegistry>,
    clock: Arc<dyn Clock>,
    config: SimulatorConfig,
}

impl SimulatorBuilder {
    pub fn new(registry: Arc<dyn AutomationRegistry>) -> Self {
        Self {
            registry,
            clock: Arc::new(SystemClock),
            config: SimulatorConfig::default(),
        }
    }
    pub fn with_config(mut self, config: SimulatorConfig) -> Self {
        self.config = config;
        self
    }
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.config.latency = latency;
        self
    }
    pub fn with_step_duration(mut self, seconds: f64) -> Self {
        self.config.step_duration_secs = seconds;
        self
    }
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
    pub fn build(self) -> Simulator {
        Simulator {
            registry: self.registry,
            clock: self.clock,
            config: self.config,
        }
    }
}

impl Simulator {
    pub fn builder(registry: Arc<dyn AutomationRegistry>) -> SimulatorBuilder {
        SimulatorBuilder::new(registry)
    }

    /// A simulator with the default latency and duration estimate.
    pub fn new(registry: Arc<dyn AutomationRegistry>) -> Self {
        Self::builder(registry).build()
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// The live validity signal for `graph`. Synchronous and side-effect free.
    pub fn check_validity(&self, graph: &WorkflowGraph) -> Validity {
        check_validity(graph)
    }

    /// Guards against missing entry or exit nodes, then simulates.
    ///
    /// This does not apply the full validity rules; callers are expected to gate
    /// on [`Simulator::check_validity`] first.
    pub async fn run_simulation(
        &self,
        graph: WorkflowGraph,
    ) -> Result<SimulationResult, SimulationError> {
        if !graph.contains_kind(NodeKind::Start) {
            return Err(SimulationError::MissingStartNode);
        }
        if !graph.contains_kind(NodeKind::End) {
            return Err(SimulationError::MissingEndNode);
        }
        Ok(self.simulate(graph).await)
    }

    /// Produces the ordered execution trace for `graph`.
    ///
    /// The graph is taken by value, so later edits made by the caller cannot
    /// leak into an in-flight run. Always resolves with `success = true`.
    #[instrument(
        name = "workflow_simulate",
        skip(self, graph),
        fields(nodes = graph.nodes.len(), edges = graph.edges.len())
    )]
    pub async fn simulate(&self, graph: WorkflowGraph) -> SimulationResult {
        info!("simulation_started");

        let registry = self.snapshot().await;
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }

        let result = build_trace(
            &graph,
            &registry,
            self.clock.as_ref(),
            self.config.step_duration_secs,
        );

        info!(
            steps = result.steps.len(),
            total_duration = %result.total_duration,
            "simulation_completed"
        );
        result
    }

    /// Registry listing failures degrade to an empty snapshot; every automated
    /// step then reports the unresolved-action fallback.
    async fn snapshot(&self) -> RegistrySnapshot {
        match load_snapshot(self.registry.as_ref()).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "automation registry unavailable, continuing without it");
                RegistrySnapshot::empty()
            }
        }
    }
}
