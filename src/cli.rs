//! CLI argument parsing for mpl

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

/// Output format for planning reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

/// Planner selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlannerKind {
    /// Batch-constructing probabilistic roadmap
    Prm,
    /// Incremental roadmap with size-scaled fan-out
    PrmStar,
    /// Rapidly-exploring random tree
    Rrt,
}

#[derive(Parser, Debug)]
#[command(name = "mpl")]
#[command(version)]
#[command(about = "2D sampling-based motion planning", long_about = None)]
pub struct Cli {
    /// Planning algorithm to run
    #[arg(long = "planner", value_enum, default_value = "prm-star")]
    pub planner: PlannerKind,

    /// Start configuration as X,Y
    #[arg(short = 's', long = "start", value_name = "X,Y", default_value = "0,0", allow_hyphen_values = true)]
    pub start: String,

    /// Goal configuration as X,Y
    #[arg(short = 'g', long = "goal", value_name = "X,Y", default_value = "3,3", allow_hyphen_values = true)]
    pub goal: String,

    /// TOML scene file with bounds and obstacles (overrides --bounds)
    #[arg(long = "scene", value_name = "FILE")]
    pub scene: Option<String>,

    /// World boundaries as XL,XU,YL,YU when no scene file is given
    #[arg(
        long = "bounds",
        value_name = "XL,XU,YL,YU",
        default_value = "0,3,0,3",
        allow_hyphen_values = true
    )]
    pub bounds: String,

    /// Roadmap node budget
    #[arg(short = 'n', long = "max-nodes", value_name = "N", default_value = "500")]
    pub max_nodes: usize,

    /// Neighbors considered when connecting a new node
    #[arg(short = 'k', long = "k-neighbors", value_name = "K", default_value = "8")]
    pub k_neighbors: usize,

    /// Nodes inserted per PRM iteration
    #[arg(long = "batch-size", value_name = "B", default_value = "8")]
    pub batch_size: usize,

    /// Maximum RRT extension step in space units
    #[arg(long = "step-size", value_name = "S", default_value = "0.5")]
    pub step_size: f64,

    /// RNG seed for reproducible runs
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the roadmap as a Graphviz DOT file after solving
    #[arg(long = "roadmap-dot", value_name = "FILE")]
    pub roadmap_dot: Option<String>,

    /// Write the solution path to a file after solving
    #[arg(long = "solution-out", value_name = "FILE")]
    pub solution_out: Option<String>,

    /// Show run statistics only, suppress the path listing
    #[arg(short = 'c', long = "summary")]
    pub summary: bool,

    /// Enable debug tracing to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

/// Parse an `X,Y` configuration argument.
pub fn parse_point(arg: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = arg.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        bail!("invalid configuration '{arg}'. Expected format: X,Y");
    }
    let x: f64 = parts[0]
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid coordinate '{}' in '{arg}'", parts[0]))?;
    let y: f64 = parts[1]
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid coordinate '{}' in '{arg}'", parts[1]))?;
    Ok((x, y))
}

/// Parse an `XL,XU,YL,YU` boundaries argument.
pub fn parse_bounds(arg: &str) -> Result<(f64, f64, f64, f64)> {
    let parts: Vec<&str> = arg.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        bail!("invalid bounds '{arg}'. Expected format: XL,XU,YL,YU");
    }
    let mut values = [0f64; 4];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid bound '{part}' in '{arg}'"))?;
    }
    Ok((values[0], values[1], values[2], values[3]))
}
