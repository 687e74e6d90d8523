use clap::Parser;
use hrflow::prelude::*;
use hrflow::registry::default_actions;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;

/// A CLI tool to generate random, valid HR workflows in the canvas JSON format
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// Number of steps between Start and End
    #[arg(long, default_value_t = 6)]
    steps: usize,

    /// Probability (0.0 - 1.0) that a step forks into two parallel branches
    #[arg(long, default_value_t = 0.2)]
    branch_chance: f64,
}

const ROLES: &[&str] = &["Manager", "HR Partner", "Director", "Finance"];
const TASKS: &[&str] = &[
    "Collect signed offer letter",
    "Review resume and portfolio",
    "Schedule onboarding session with the new hire and their team lead",
    "Order laptop",
    "Verify identity documents",
];

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.branch_chance) {
        eprintln!(
            "Error: --branch-chance ({}) must be between 0.0 and 1.0",
            cli.branch_chance
        );
        std::process::exit(1);
    }

    println!("Generating workflow with {} steps...", cli.steps);

    let mut rng = rand::rng();
    let graph = generate_graph(&mut rng, cli.steps, cli.branch_chance);

    if let Err(e) = validate(&graph) {
        return Err(format!("generated workflow is invalid: {}", e).into());
    }

    let json_output = UiWorkflow::from_graph(&graph).to_json_pretty()?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved workflow to '{}' ({} nodes, {} edges)",
        cli.output,
        graph.nodes.len(),
        graph.edges.len()
    );

    Ok(())
}

/// Builds a chain from Start to End. Some links fork into two steps that merge again.
fn generate_graph<R: Rng>(rng: &mut R, steps: usize, branch_chance: f64) -> WorkflowGraph {
    let mut nodes = vec![Node::start("start").with_label("Generated Workflow")];
    let mut edges = Vec::new();
    let mut tails = vec!["start".to_string()];

    let mut index = 0;
    while index < steps {
        let fork = index + 1 < steps && rng.random_bool(branch_chance);
        let width = if fork { 2 } else { 1 };

        let mut new_tails = Vec::with_capacity(width);
        for _ in 0..width {
            let id = format!("step-{}", index);
            nodes.push(random_step(rng, &id));
            for tail in &tails {
                edges.push(Edge::new(tail.clone(), id.clone()));
            }
            new_tails.push(id);
            index += 1;
        }
        tails = new_tails;
    }

    nodes.push(Node::end(
        "end",
        EndData {
            end_message: Some("Generated workflow finished".to_string()),
            is_summary: rng.random_bool(0.5),
        },
    ));
    for tail in &tails {
        edges.push(Edge::new(tail.clone(), "end"));
    }

    WorkflowGraph::new(nodes, edges)
}

fn random_step<R: Rng>(rng: &mut R, id: &str) -> Node {
    match rng.random_range(0..3) {
        0 => Node::task(
            id,
            TaskData {
                description: TASKS.choose(rng).map(|s| s.to_string()),
                assignee: Some("hr@example.com".to_string()),
                ..Default::default()
            },
        ),
        1 => Node::approval(
            id,
            ApprovalData {
                approver_role: ROLES.choose(rng).map(|s| s.to_string()),
                auto_approve_threshold: Some(rng.random_range(1..50) as f64 * 100.0),
            },
        ),
        _ => {
            let actions = default_actions();
            let action = &actions[rng.random_range(0..actions.len())];
            let action_params = action
                .params
                .iter()
                .map(|p| (p.clone(), format!("<{}>", p)))
                .collect();
            Node::automated(
                id,
                AutomatedData {
                    action_id: Some(action.id.clone()),
                    action_params,
                },
            )
            .with_label(action.label.clone())
        }
    }
}
