//! Rectangular world boundaries and uniform configuration sampling

use rand::Rng;

use crate::space::{Point, SpaceContinuous};

/// Axis-aligned rectangular limits of the planning space.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Boundaries<T> {
    pub x_lower: T,
    pub x_upper: T,
    pub y_lower: T,
    pub y_upper: T,
}

impl<T: SpaceContinuous> Boundaries<T> {
    pub fn new(x_lower: T, x_upper: T, y_lower: T, y_upper: T) -> Self {
        Boundaries {
            x_lower,
            x_upper,
            y_lower,
            y_upper,
        }
    }

    /// Containment test, inclusive on all four edges so that start or goal
    /// configurations may sit exactly on the boundary.
    pub fn is_inside(&self, point: &Point<T>) -> bool {
        self.x_lower <= point.x
            && point.x <= self.x_upper
            && self.y_lower <= point.y
            && point.y <= self.y_upper
    }

    /// Draw a configuration uniformly at random from the bounded region.
    ///
    /// The RNG is injected so that planning runs are reproducible under a
    /// fixed seed.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Point<T> {
        let x = rng.gen_range(self.x_lower..self.x_upper);
        let y = rng.gen_range(self.y_lower..self.y_upper);
        Point::new(x, y)
    }

    pub fn width(&self) -> T {
        self.x_upper - self.x_lower
    }

    pub fn height(&self) -> T {
        self.y_upper - self.y_lower
    }
}

impl<T: SpaceContinuous> Default for Boundaries<T> {
    fn default() -> Self {
        let three = T::one() + T::one() + T::one();
        Boundaries::new(T::zero(), three, T::zero(), three)
    }
}
