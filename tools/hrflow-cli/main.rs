use clap::Parser;
use hrflow::prelude::*;
use hrflow::registry::load_snapshot;
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Validate and simulate an HR workflow exported from the canvas editor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON file (canvas export)
    workflow_path: String,

    /// Only check validity, do not simulate
    #[arg(long)]
    check: bool,

    /// Print the simulation result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Artificial simulation latency in milliseconds
    #[arg(long, default_value_t = 1500)]
    latency_ms: u64,

    /// Artificial automation registry delay in milliseconds
    #[arg(long, default_value_t = 500)]
    registry_delay_ms: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let content = fs::read_to_string(&cli.workflow_path).map_err(|e| {
        format!(
            "Failed to read workflow file '{}': {}",
            cli.workflow_path, e
        )
    })?;
    let graph = UiWorkflow::from_json(&content)?.into_workflow()?;

    let validity = check_validity(&graph);
    println!("{}", TraceFormatter::format_validity(&validity));
    if !validity.is_valid {
        std::process::exit(2);
    }
    if cli.check {
        return Ok(());
    }

    let catalog = InMemoryRegistry::with_default_actions()
        .with_delay(Duration::from_millis(cli.registry_delay_ms));
    let snapshot = match load_snapshot(&catalog).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!(error = %e, "could not list automation actions");
            RegistrySnapshot::empty()
        }
    };
    warn_incomplete_actions(&graph, &snapshot);

    // The trace resolves actions against the catalog the warnings were checked against.
    let registry = Arc::new(InMemoryRegistry::new(snapshot.actions().to_vec()));
    let config = SimulatorConfig {
        latency: Duration::from_millis(cli.latency_ms),
        ..SimulatorConfig::default()
    };
    let simulator = Simulator::builder(registry).with_config(config).build();
    let result = simulator.run_simulation(graph).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", TraceFormatter::format_result(&result));
    }
    Ok(())
}

/// Points out automated steps whose required parameters are not filled in.
fn warn_incomplete_actions(graph: &WorkflowGraph, snapshot: &RegistrySnapshot) {
    for node in &graph.nodes {
        let NodeData::Automated(data) = &node.data else {
            continue;
        };
        let Some(action) = data.action_id.as_deref().and_then(|id| snapshot.find(id)) else {
            tracing::warn!(node_id = %node.id, label = %node.label, "no automation action selected");
            continue;
        };
        let missing = action.missing_params(&data.action_params);
        if !missing.is_empty() {
            tracing::warn!(
                node_id = %node.id,
                action = %action.label,
                missing = ?missing,
                "automated step is missing parameters"
            );
        }
    }
}
