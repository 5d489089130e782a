//! Problem definition and planner parameters

use crate::space::{Point, SpaceContinuous};

/// Start and goal of a planning query, plus the solution once found.
///
/// The problem definition is deliberately planner-agnostic: the same
/// instance can be handed to different planners for comparison.
#[derive(Debug, Clone, Default)]
pub struct ProblemDefinition<T: SpaceContinuous> {
    start: Point<T>,
    goal: Point<T>,
    pub solution: Vec<Point<T>>,
}

impl<T: SpaceContinuous> ProblemDefinition<T> {
    pub fn new(start: Point<T>, goal: Point<T>) -> Self {
        ProblemDefinition {
            start,
            goal,
            solution: Vec::new(),
        }
    }

    pub fn start(&self) -> Point<T> {
        self.start
    }

    pub fn goal(&self) -> Point<T> {
        self.goal
    }

    pub fn set_start(&mut self, start: Point<T>) {
        self.start = start;
    }

    pub fn set_goal(&mut self, goal: Point<T>) {
        self.goal = goal;
    }
}

/// Numeric knobs shared by the planners.
#[derive(Debug, Clone, Copy)]
pub struct PlannerConfig {
    /// Roadmap node budget; planning terminates once the roadmap holds this
    /// many nodes.
    pub max_size: usize,
    /// Connection fan-out for roadmap planners (and the lower bound of the
    /// scaled fan-out in PRM*).
    pub k_nearest_neighbors: usize,
    /// Nodes inserted per PRM iteration before re-running the graph search.
    pub batch_size: usize,
    /// Maximum extension step of the RRT, in space units.
    pub step_size: f64,
    /// RNG seed; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            max_size: 500,
            k_nearest_neighbors: 8,
            batch_size: 8,
            step_size: 0.5,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PlannerConfig, ProblemDefinition};
    use crate::space::Point;

    #[test]
    fn test_default_problem_is_at_origin() {
        let pdef: ProblemDefinition<f64> = ProblemDefinition::default();
        assert_eq!(pdef.start(), Point::default());
        assert_eq!(pdef.goal(), Point::default());
        assert!(pdef.solution.is_empty());
    }

    #[test]
    fn test_custom_start_and_goal() {
        let start: Point<f64> = Point::new(1.0, 2.0);
        let goal: Point<f64> = Point::new(3.0, 4.0);
        let pdef = ProblemDefinition::new(start, goal);
        assert_eq!(pdef.start(), start);
        assert_eq!(pdef.goal(), goal);
    }

    #[test]
    fn test_update_start_and_goal() {
        let mut pdef: ProblemDefinition<f64> = ProblemDefinition::default();
        pdef.set_start(Point::new(1.0, 2.0));
        pdef.set_goal(Point::new(2.0, 2.0));
        assert_eq!(pdef.start(), Point::new(1.0, 2.0));
        assert_eq!(pdef.goal(), Point::new(2.0, 2.0));
    }

    #[test]
    fn test_config_defaults() {
        let config = PlannerConfig::default();
        assert!(config.max_size >= 2);
        assert!(config.k_nearest_neighbors >= 1);
        assert!(config.batch_size >= 1);
        assert!(config.step_size > 0.0);
        assert!(config.seed.is_none());
    }
}
