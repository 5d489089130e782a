//! Incremental probabilistic roadmap planner (PRM*)
//!
//! Inserts one configuration per iteration and scales the connection
//! fan-out logarithmically with the roadmap size, which is what makes the
//! roadmap asymptotically optimal: with `n` nodes, each new configuration
//! is connected to `ceil(K_RRG * ln n)` nearest neighbors (never fewer
//! than the configured `k_nearest_neighbors`).
//!
//! # Properties
//!
//! - probabilistically complete
//! - asymptotically optimal
//! - multi-query
//!
//! # References
//!
//! Karaman, S., & Frazzoli, E. (2011). Sampling-based algorithms for
//! optimal motion planning. The International Journal of Robotics
//! Research, 30(7), 846-894.

use petgraph::algo::astar;
use petgraph::graph::NodeIndex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::boundaries::Boundaries;
use crate::collision::{CollisionChecker, NaiveCollisionChecker};
use crate::optimizer::{DefaultOptimizer, Optimizer};
use crate::problem::PlannerConfig;
use crate::space::{Point, SpaceContinuous};

use super::roadmap::Roadmap;
use super::{Planner, RoadmapGraph, SetupError};

/// Connection constant for 2D: e * (1 + 1/d) with d = 2.
const K_RRG: f64 = 4.077_422_742_688_568;

/// Attempts per requested sample before the planner gives up on finding
/// free space.
const MAX_SAMPLE_ATTEMPTS: usize = 1000;

/// Incremental roadmap planner with size-scaled connection fan-out.
pub struct PRMStar<T: SpaceContinuous> {
    config: PlannerConfig,
    start: Point<T>,
    goal: Point<T>,
    boundaries: Boundaries<T>,
    roadmap: Roadmap<T>,
    collision_checker: Box<dyn CollisionChecker<T>>,
    optimizer: Box<dyn Optimizer<T>>,
    rng: StdRng,
    start_index: Option<NodeIndex>,
    goal_index: Option<NodeIndex>,
    solution: Option<(T, Vec<NodeIndex>)>,
}

impl<T: SpaceContinuous> PRMStar<T> {
    pub fn new(
        config: PlannerConfig,
        collision_checker: Box<dyn CollisionChecker<T>>,
        optimizer: Box<dyn Optimizer<T>>,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        PRMStar {
            config,
            start: Point::default(),
            goal: Point::default(),
            boundaries: Boundaries::default(),
            roadmap: Roadmap::new(),
            collision_checker,
            optimizer,
            rng,
            start_index: None,
            goal_index: None,
            solution: None,
        }
    }

    pub fn config_mut(&mut self) -> &mut PlannerConfig {
        &mut self.config
    }

    /// Fan-out for the current roadmap size.
    fn connection_count(&self) -> usize {
        let n = self.roadmap.node_count().max(2) as f64;
        let scaled = (K_RRG * n.ln()).ceil() as usize;
        scaled.max(self.config.k_nearest_neighbors)
    }

    fn sample_free(&mut self) -> Option<Point<T>> {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let candidate = self.boundaries.sample(&mut self.rng);
            if self.collision_checker.is_node_colliding(&candidate) {
                continue;
            }
            if self.roadmap.contains(&candidate) {
                continue;
            }
            return Some(candidate);
        }
        None
    }

    fn connect_node(&mut self, point: Point<T>, index: NodeIndex) {
        let neighbors = self.roadmap.k_nearest(&point, self.connection_count() + 1);
        for (neighbor_point, neighbor_index) in neighbors {
            if neighbor_index == index {
                continue;
            }
            if self
                .collision_checker
                .is_edge_colliding(&point, &neighbor_point)
            {
                continue;
            }
            let weight = self.optimizer.edge_weight(&point, &neighbor_point);
            self.roadmap.add_edge(index, neighbor_index, weight);
        }
    }

    fn check_solution(&mut self) {
        let (Some(start), Some(goal)) = (self.start_index, self.goal_index) else {
            return;
        };
        self.solution = astar(
            self.roadmap.graph(),
            start,
            |finish| finish == goal,
            |e| *e.weight(),
            |_| T::zero(),
        );
    }

    fn budget_exhausted(&self) -> bool {
        self.roadmap.node_count() >= self.config.max_size
    }
}

impl<T: SpaceContinuous> Planner<T> for PRMStar<T> {
    fn set_start(&mut self, start: Point<T>) {
        self.start = start;
    }

    fn set_goal(&mut self, goal: Point<T>) {
        self.goal = goal;
    }

    fn set_boundaries(&mut self, boundaries: Boundaries<T>) {
        self.boundaries = boundaries;
    }

    fn set_collision_checker(&mut self, checker: Box<dyn CollisionChecker<T>>) {
        self.collision_checker = checker;
    }

    fn init(&mut self) -> Result<(), SetupError> {
        if !self.boundaries.is_inside(&self.start) {
            return Err(SetupError::StartOutsideBoundaries(self.start.to_string()));
        }
        if !self.boundaries.is_inside(&self.goal) {
            return Err(SetupError::GoalOutsideBoundaries(self.goal.to_string()));
        }

        self.collision_checker
            .init()
            .map_err(|e| SetupError::CollisionCheckerInit(e.to_string()))?;

        if self.collision_checker.is_node_colliding(&self.start) {
            return Err(SetupError::StartInCollision(self.start.to_string()));
        }
        if self.collision_checker.is_node_colliding(&self.goal) {
            return Err(SetupError::GoalInCollision(self.goal.to_string()));
        }

        self.optimizer
            .init()
            .map_err(|e| SetupError::OptimizerInit(e.to_string()))?;

        let start = self.start;
        let start_index = self
            .roadmap
            .node_index(&start)
            .unwrap_or_else(|| self.roadmap.add_node(start));
        let goal = self.goal;
        let goal_index = self
            .roadmap
            .node_index(&goal)
            .unwrap_or_else(|| self.roadmap.add_node(goal));
        self.start_index = Some(start_index);
        self.goal_index = Some(goal_index);
        self.solution = None;

        debug!(planner = "prm-star", "setup is ready for planning");
        Ok(())
    }

    fn solve(&mut self) {
        while !self.budget_exhausted() {
            let Some(point) = self.sample_free() else {
                warn!(
                    attempts = MAX_SAMPLE_ATTEMPTS,
                    "sampling stalled, stopping early"
                );
                break;
            };
            let index = self.roadmap.add_node(point);
            self.connect_node(point, index);
            self.check_solution();
        }
        debug!(
            nodes = self.roadmap.node_count(),
            edges = self.roadmap.edge_count(),
            solved = self.is_solved(),
            "planning finished"
        );
    }

    fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    fn solution_cost(&self) -> T {
        match &self.solution {
            Some((cost, _)) => *cost,
            None => T::MAX,
        }
    }

    fn solution_path(&self) -> Vec<Point<T>> {
        match &self.solution {
            Some((_, path)) => path
                .iter()
                .filter_map(|index| self.roadmap.graph().node_weight(*index).copied())
                .collect(),
            None => Vec::new(),
        }
    }

    fn roadmap(&self) -> &RoadmapGraph<T> {
        self.roadmap.graph()
    }

    fn name(&self) -> &'static str {
        "prm-star"
    }
}

impl<T: SpaceContinuous> Default for PRMStar<T> {
    fn default() -> Self {
        PRMStar::new(
            PlannerConfig::default(),
            NaiveCollisionChecker::new_box(),
            DefaultOptimizer::new_box(),
        )
    }
}
