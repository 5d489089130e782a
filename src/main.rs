use anyhow::{Context, Result};
use clap::Parser;
use mpl::boundaries::Boundaries;
use mpl::cli::{self, Cli, OutputFormat, PlannerKind};
use mpl::csv_output::CsvOutput;
use mpl::json_output::JsonPlanReport;
use mpl::optimizer::DefaultOptimizer;
use mpl::planner::{graph, prm::PRM, prm_star::PRMStar, rrt::RRT, Planner};
use mpl::problem::{PlannerConfig, ProblemDefinition};
use mpl::scene::Scene;
use mpl::setup::PlanningSetup;
use mpl::space::Point;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Resolve the planning environment from --scene or --bounds
fn load_scene(args: &Cli) -> Result<Scene> {
    match &args.scene {
        Some(path) => {
            Scene::from_toml(path).with_context(|| format!("failed to load scene '{path}'"))
        }
        None => {
            let (x_lower, x_upper, y_lower, y_upper) = cli::parse_bounds(&args.bounds)?;
            Scene::open_world(Boundaries::new(x_lower, x_upper, y_lower, y_upper))
                .context("invalid --bounds")
        }
    }
}

/// Construct the selected planner wired to the scene's collision checker
fn build_planner(kind: PlannerKind, scene: &Scene, config: PlannerConfig) -> Box<dyn Planner<f64>> {
    let checker = Box::new(scene.collision_checker());
    let optimizer = Box::new(DefaultOptimizer);
    match kind {
        PlannerKind::Prm => Box::new(PRM::new(config, checker, optimizer)),
        PlannerKind::PrmStar => Box::new(PRMStar::new(config, checker, optimizer)),
        PlannerKind::Rrt => Box::new(RRT::new(config, checker, optimizer)),
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.max_nodes < 2 {
        anyhow::bail!(
            "Invalid value for --max-nodes: {} (must be >= 2)",
            args.max_nodes
        );
    }
    if args.k_neighbors < 1 {
        anyhow::bail!("Invalid value for --k-neighbors: must be >= 1");
    }
    if args.batch_size < 1 {
        anyhow::bail!("Invalid value for --batch-size: must be >= 1");
    }
    if args.step_size <= 0.0 {
        anyhow::bail!(
            "Invalid value for --step-size: {} (must be > 0)",
            args.step_size
        );
    }

    init_tracing(args.debug);

    let scene = load_scene(&args)?;
    let (start_x, start_y) = cli::parse_point(&args.start)?;
    let (goal_x, goal_y) = cli::parse_point(&args.goal)?;

    let config = PlannerConfig {
        max_size: args.max_nodes,
        k_nearest_neighbors: args.k_neighbors,
        batch_size: args.batch_size,
        step_size: args.step_size,
        seed: args.seed,
    };

    let planner = build_planner(args.planner, &scene, config);
    let problem = ProblemDefinition::new(Point::new(start_x, start_y), Point::new(goal_x, goal_y));
    let mut setup = PlanningSetup::new(planner, problem, scene.boundaries());

    setup.setup()?;
    let summary = setup.solve()?;

    match args.format {
        OutputFormat::Text => print!("{}", summary.render_text(args.summary)),
        OutputFormat::Json => println!("{}", JsonPlanReport::from_summary(&summary).to_json()?),
        OutputFormat::Csv => print!("{}", CsvOutput::new(args.summary).render(&summary)),
    }

    if let Some(path) = &args.roadmap_dot {
        graph::write_dot(setup.planner.roadmap(), path)
            .with_context(|| format!("failed to write roadmap to '{path}'"))?;
    }
    if let Some(path) = &args.solution_out {
        graph::write_solution_path(&setup.problem.solution, path)
            .with_context(|| format!("failed to write solution path to '{path}'"))?;
    }

    Ok(())
}
