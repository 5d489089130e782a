//! Collision checking for configurations and motions
//!
//! Planners query collisions exclusively through the [`CollisionChecker`]
//! trait so that domain-specific checkers (meshes, occupancy grids, external
//! services) can be plugged in. Two implementations ship with the crate: a
//! checker that reports everything free, and an axis-aligned rectangle
//! checker backing the TOML scene files.

use anyhow::Result;

use crate::space::{Point, SpaceContinuous};

/// Collision oracle for nodes and straight-line edges.
pub trait CollisionChecker<T: SpaceContinuous> {
    /// One-shot setup hook, run once before any query. Checkers backed by a
    /// file or a database load their data here.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Whether a single configuration is in collision.
    fn is_node_colliding(&self, node: &Point<T>) -> bool;

    /// Whether the straight-line motion between two configurations is in
    /// collision.
    fn is_edge_colliding(&self, begin: &Point<T>, end: &Point<T>) -> bool;
}

/// Checker that treats the whole space as free. Used by tests and as the
/// default for open-world problems.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveCollisionChecker;

impl NaiveCollisionChecker {
    pub fn new_box<T: SpaceContinuous>() -> Box<dyn CollisionChecker<T>> {
        Box::new(NaiveCollisionChecker)
    }
}

impl<T: SpaceContinuous> CollisionChecker<T> for NaiveCollisionChecker {
    fn is_node_colliding(&self, _node: &Point<T>) -> bool {
        false
    }

    fn is_edge_colliding(&self, _begin: &Point<T>, _end: &Point<T>) -> bool {
        false
    }
}

/// Axis-aligned rectangle, closed on all four edges.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect<T> {
    pub x_lower: T,
    pub x_upper: T,
    pub y_lower: T,
    pub y_upper: T,
}

impl<T: SpaceContinuous> Rect<T> {
    pub fn new(x_lower: T, x_upper: T, y_lower: T, y_upper: T) -> Self {
        Rect {
            x_lower,
            x_upper,
            y_lower,
            y_upper,
        }
    }

    pub fn contains(&self, point: &Point<T>) -> bool {
        self.x_lower <= point.x
            && point.x <= self.x_upper
            && self.y_lower <= point.y
            && point.y <= self.y_upper
    }

    /// Segment/rectangle overlap test via Liang-Barsky slab clipping: the
    /// parameter interval [0, 1] of the segment is clipped against each of
    /// the four slabs; a surviving interval means the segment enters the
    /// rectangle.
    pub fn intersects_segment(&self, begin: &Point<T>, end: &Point<T>) -> bool {
        let dx = end.x - begin.x;
        let dy = end.y - begin.y;
        let mut t0 = T::zero();
        let mut t1 = T::one();

        let clips = [
            (-dx, begin.x - self.x_lower),
            (dx, self.x_upper - begin.x),
            (-dy, begin.y - self.y_lower),
            (dy, self.y_upper - begin.y),
        ];

        for (p, q) in clips {
            if p == T::zero() {
                // Segment parallel to this slab: outside means no overlap.
                if q < T::zero() {
                    return false;
                }
            } else {
                let r = q / p;
                if p < T::zero() {
                    if r > t1 {
                        return false;
                    }
                    if r > t0 {
                        t0 = r;
                    }
                } else {
                    if r < t0 {
                        return false;
                    }
                    if r < t1 {
                        t1 = r;
                    }
                }
            }
        }

        true
    }
}

/// Collision checker over a set of axis-aligned rectangular obstacles.
#[derive(Debug, Clone, Default)]
pub struct AabbCollisionChecker<T> {
    obstacles: Vec<Rect<T>>,
}

impl<T: SpaceContinuous> AabbCollisionChecker<T> {
    pub fn new(obstacles: Vec<Rect<T>>) -> Self {
        AabbCollisionChecker { obstacles }
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }
}

impl<T: SpaceContinuous> CollisionChecker<T> for AabbCollisionChecker<T> {
    fn is_node_colliding(&self, node: &Point<T>) -> bool {
        self.obstacles.iter().any(|rect| rect.contains(node))
    }

    fn is_edge_colliding(&self, begin: &Point<T>, end: &Point<T>) -> bool {
        self.obstacles
            .iter()
            .any(|rect| rect.intersects_segment(begin, end))
    }
}
