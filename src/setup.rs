//! Planning session orchestration
//!
//! [`PlanningSetup`] wires a problem definition, boundaries and a collision
//! checker into a boxed planner, guards the init-before-solve lifecycle,
//! and turns a finished run into a [`PlanSummary`].

use std::time::Instant;

use num_traits::ToPrimitive;

use crate::boundaries::Boundaries;
use crate::collision::CollisionChecker;
use crate::planner::{Planner, SetupError};
use crate::problem::ProblemDefinition;
use crate::space::SpaceContinuous;
use crate::stats::PlanSummary;

/// A planner bound to a concrete problem and environment.
pub struct PlanningSetup<T: SpaceContinuous> {
    pub planner: Box<dyn Planner<T>>,
    pub problem: ProblemDefinition<T>,
    pub boundaries: Boundaries<T>,
    ready: bool,
}

impl<T: SpaceContinuous> PlanningSetup<T> {
    pub fn new(
        planner: Box<dyn Planner<T>>,
        problem: ProblemDefinition<T>,
        boundaries: Boundaries<T>,
    ) -> Self {
        PlanningSetup {
            planner,
            problem,
            boundaries,
            ready: false,
        }
    }

    /// Hand a collision checker to the planner. Optional; planners come
    /// with the checker they were constructed with.
    pub fn set_collision_checker(&mut self, checker: Box<dyn CollisionChecker<T>>) {
        self.planner.set_collision_checker(checker);
        self.ready = false;
    }

    /// Wire the problem into the planner and validate it.
    pub fn setup(&mut self) -> Result<(), SetupError> {
        self.planner.set_start(self.problem.start());
        self.planner.set_goal(self.problem.goal());
        self.planner.set_boundaries(self.boundaries);
        self.planner.init()?;
        self.ready = true;
        Ok(())
    }

    /// Run the planner and summarize the outcome.
    ///
    /// Refuses to run before [`PlanningSetup::setup`]. A run that finds no
    /// path is a successful run with `solved == false`.
    pub fn solve(&mut self) -> Result<PlanSummary, SetupError> {
        if !self.ready {
            return Err(SetupError::NotReady);
        }

        let clock = Instant::now();
        self.planner.solve();
        let duration = clock.elapsed();

        let solved = self.planner.is_solved();
        let path = self.planner.solution_path();
        self.problem.solution = path.clone();

        let summary = PlanSummary {
            planner: self.planner.name().to_string(),
            solved,
            solution_cost: solved
                .then(|| self.planner.solution_cost().to_f64())
                .flatten(),
            path: path
                .iter()
                .filter_map(|p| Some([p.x.to_f64()?, p.y.to_f64()?]))
                .collect(),
            nodes: self.planner.roadmap().node_count(),
            edges: self.planner.roadmap().edge_count(),
            duration_us: duration.as_micros() as u64,
        };
        Ok(summary)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}
