//! Edge-cost optimizers
//!
//! The weight of a roadmap edge is delegated to an [`Optimizer`] so that
//! cost models other than path length (clearance, energy, terrain) can be
//! swapped in without touching the planners.

use anyhow::Result;

use crate::space::{Point, SpaceContinuous};

/// Cost model for roadmap edges.
pub trait Optimizer<T: SpaceContinuous> {
    /// Setup hook, run once before planning. Optimizers backed by a file or
    /// a database load their data here.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Cost of the straight-line motion between two configurations.
    fn edge_weight(&self, begin: &Point<T>, end: &Point<T>) -> T;
}

/// Default cost model: Euclidean path length.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOptimizer;

impl DefaultOptimizer {
    pub fn new_box<T: SpaceContinuous>() -> Box<dyn Optimizer<T>> {
        Box::new(DefaultOptimizer)
    }
}

impl<T: SpaceContinuous> Optimizer<T> for DefaultOptimizer {
    fn edge_weight(&self, begin: &Point<T>, end: &Point<T>) -> T {
        begin.euclidean_distance(end)
    }
}
