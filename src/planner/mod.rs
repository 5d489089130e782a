//! Sampling-based planners
//!
//! Every planner implements the [`Planner`] trait and is driven as a trait
//! object by the [`crate::setup::PlanningSetup`] session. Available
//! planners:
//! - [`prm::PRM`]: batch-constructing probabilistic roadmap, multi-query
//! - [`prm_star::PRMStar`]: incremental roadmap with size-scaled fan-out
//! - [`rrt::RRT`]: rapidly-exploring random tree, single-query

pub mod graph;
pub mod prm;
pub mod prm_star;
pub mod roadmap;
pub mod rrt;

use petgraph::graph::Graph;
use petgraph::Undirected;
use thiserror::Error;

use crate::boundaries::Boundaries;
use crate::collision::CollisionChecker;
use crate::space::{Point, SpaceContinuous};

/// Undirected roadmap: configurations on the nodes, motion costs on the
/// edges.
pub type RoadmapGraph<T> = Graph<Point<T>, T, Undirected>;

/// Errors raised while preparing a planner for solving.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("start configuration {0} is outside the planning boundaries")]
    StartOutsideBoundaries(String),

    #[error("goal configuration {0} is outside the planning boundaries")]
    GoalOutsideBoundaries(String),

    #[error("start configuration {0} is in collision")]
    StartInCollision(String),

    #[error("goal configuration {0} is in collision")]
    GoalInCollision(String),

    #[error("collision checker initialization failed: {0}")]
    CollisionCheckerInit(String),

    #[error("optimizer initialization failed: {0}")]
    OptimizerInit(String),

    #[error("planner was not set up before solving")]
    NotReady,
}

/// Common interface of all planners.
///
/// The lifecycle is: configure via the setters, [`Planner::init`] once,
/// then [`Planner::solve`]. Failing to find a path is not an error; it is
/// reported through [`Planner::is_solved`] and a cost of `T::MAX`.
pub trait Planner<T: SpaceContinuous> {
    fn set_start(&mut self, start: Point<T>);
    fn set_goal(&mut self, goal: Point<T>);
    fn set_boundaries(&mut self, boundaries: Boundaries<T>);
    fn set_collision_checker(&mut self, checker: Box<dyn CollisionChecker<T>>);

    /// Validate the problem and seed the roadmap with start and goal.
    fn init(&mut self) -> Result<(), SetupError>;

    /// Run the planning loop until the node budget is exhausted.
    fn solve(&mut self);

    fn is_solved(&self) -> bool;

    /// Cost of the best known solution, `T::MAX` when unsolved.
    fn solution_cost(&self) -> T;

    /// Solution path from start to goal, empty when unsolved.
    fn solution_path(&self) -> Vec<Point<T>>;

    /// The roadmap built so far, for statistics and export.
    fn roadmap(&self) -> &RoadmapGraph<T>;

    /// Short planner name used in reports.
    fn name(&self) -> &'static str;
}
