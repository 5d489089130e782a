//! Rapidly-exploring random tree planner (RRT)
//!
//! Grows a tree from the start configuration: every iteration samples the
//! space, steers from the nearest tree node toward the sample by at most
//! `step_size`, and inserts the new configuration when node and motion are
//! collision-free. A new node within one step of the goal is wired to it,
//! which is how the query gets answered.
//!
//! # Properties
//!
//! - probabilistically complete
//! - single-query: the tree is rooted in one start configuration
//!
//! # References
//!
//! LaValle, S. M. (1998). Rapidly-exploring random trees: A new tool for
//! path planning. TR 98-11, Computer Science Department, Iowa State
//! University.

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

/// Consecutive rejected extensions before the planner gives up.
const MAX_STALLED_ITERATIONS: usize = 1000;

/// Tree-growing single-query planner.
pub struct RRT<T: SpaceContinuous> {
    config: PlannerConfig,
    start: Point<T>,
    goal: Point<T>,
    boundaries: Boundaries<T>,
    tree: Roadmap<T>,
    collision_checker: Box<dyn CollisionChecker<T>>,
    optimizer: Box<dyn Optimizer<T>>,
    rng: StdRng,
    start_index: Option<NodeIndex>,
    goal_index: Option<NodeIndex>,
    solution: Option<(T, Vec<NodeIndex>)>,
}

impl<T: SpaceContinuous> RRT<T> {
    pub fn new(
        config: PlannerConfig,
        collision_checker: Box<dyn CollisionChecker<T>>,
        optimizer: Box<dyn Optimizer<T>>,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RRT {
            config,
            start: Point::default(),
            goal: Point::default(),
            boundaries: Boundaries::default(),
            tree: Roadmap::new(),
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

    fn step(&self) -> T {
        T::from(self.config.step_size).unwrap_or_else(T::one)
    }

    /// Move from `from` toward `to`, clamped to one step.
    fn steer(&self, from: &Point<T>, to: &Point<T>) -> Point<T> {
        let distance = from.euclidean_distance(to);
        let step = self.step();
        if distance <= step {
            return *to;
        }
        let scale = step / distance;
        Point::new(
            from.x + (to.x - from.x) * scale,
            from.y + (to.y - from.y) * scale,
        )
    }

    /// One growth iteration. Returns the index of the added node, if any.
    fn extend(&mut self) -> Option<NodeIndex> {
        let sample = self.boundaries.sample(&mut self.rng);
        let (nearest_point, nearest_index) = self.tree.nearest(&sample)?;
        let candidate = self.steer(&nearest_point, &sample);

        if candidate == nearest_point || self.tree.contains(&candidate) {
            return None;
        }
        if self.collision_checker.is_node_colliding(&candidate) {
            return None;
        }
        if self
            .collision_checker
            .is_edge_colliding(&nearest_point, &candidate)
        {
            return None;
        }

        let index = self.tree.add_node(candidate);
        let weight = self.optimizer.edge_weight(&nearest_point, &candidate);
        self.tree.add_edge(nearest_index, index, weight);

        // Wire the new node to the goal when it is within reach; without
        // this the goal component could never join the tree.
        if let Some(goal_index) = self.goal_index {
            let within_step = candidate.euclidean_distance(&self.goal) <= self.step();
            if within_step
                && !self
                    .collision_checker
                    .is_edge_colliding(&candidate, &self.goal)
            {
                let weight = self.optimizer.edge_weight(&candidate, &self.goal);
                self.tree.add_edge(index, goal_index, weight);
            }
        }

        Some(index)
    }

    fn check_solution(&mut self) {
        let (Some(start), Some(goal)) = (self.start_index, self.goal_index) else {
            return;
        };
        self.solution = astar(
            self.tree.graph(),
            start,
            |finish| finish == goal,
            |e| *e.weight(),
            |_| T::zero(),
        );
    }

    fn budget_exhausted(&self) -> bool {
        self.tree.node_count() >= self.config.max_size
    }
}

impl<T: SpaceContinuous> Planner<T> for RRT<T> {
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

        // Single-query: a changed problem means a fresh tree.
        self.tree.clear();
        self.start_index = Some(self.tree.add_node(self.start));
        self.goal_index = Some(self.tree.add_node(self.goal));
        self.solution = None;

        debug!(planner = "rrt", "setup is ready for planning");
        Ok(())
    }

    fn solve(&mut self) {
        let mut stalled = 0usize;
        while !self.budget_exhausted() {
            match self.extend() {
                Some(_) => {
                    stalled = 0;
                    self.check_solution();
                    if self.is_solved() {
                        break;
                    }
                }
                None => {
                    stalled += 1;
                    if stalled >= MAX_STALLED_ITERATIONS {
                        warn!(
                            iterations = MAX_STALLED_ITERATIONS,
                            "tree extension stalled, stopping early"
                        );
                        break;
                    }
                }
            }
        }
        debug!(
            nodes = self.tree.node_count(),
            edges = self.tree.edge_count(),
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
                .filter_map(|index| self.tree.graph().node_weight(*index).copied())
                .collect(),
            None => Vec::new(),
        }
    }

    fn roadmap(&self) -> &RoadmapGraph<T> {
        self.tree.graph()
    }

    fn name(&self) -> &'static str {
        "rrt"
    }
}

impl<T: SpaceContinuous> Default for RRT<T> {
    fn default() -> Self {
        RRT::new(
            PlannerConfig::default(),
            NaiveCollisionChecker::new_box(),
            DefaultOptimizer::new_box(),
        )
    }
}
