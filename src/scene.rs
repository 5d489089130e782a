//! TOML-defined planning scenes
//!
//! A scene declares the world boundaries and the obstacle set in a TOML
//! file, so environments are user-extensible without recompilation:
//!
//! ```toml
//! [bounds]
//! x_lower = 0.0
//! x_upper = 3.0
//! y_lower = 0.0
//! y_upper = 3.0
//!
//! [[obstacle]]
//! name = "wall"
//! x_lower = 1.2
//! x_upper = 1.8
//! y_lower = 0.0
//! y_upper = 2.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::boundaries::Boundaries;
use crate::collision::{AabbCollisionChecker, Rect};

/// Errors raised while loading or validating a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scene file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("degenerate bounds: {0}")]
    DegenerateBounds(String),

    #[error("obstacle '{0}' is degenerate (lower limit >= upper limit)")]
    DegenerateObstacle(String),

    #[error("obstacle '{0}' lies outside the scene bounds")]
    ObstacleOutsideBounds(String),
}

/// A rectangular obstacle as written in the scene file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Obstacle {
    /// Optional label used in diagnostics.
    pub name: Option<String>,
    pub x_lower: f64,
    pub x_upper: f64,
    pub y_lower: f64,
    pub y_upper: f64,
}

impl Obstacle {
    pub fn rect(&self) -> Rect<f64> {
        Rect::new(self.x_lower, self.x_upper, self.y_lower, self.y_upper)
    }

    fn label(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("#{index}"))
    }
}

#[derive(Debug, Deserialize)]
struct SceneFile {
    bounds: Boundaries<f64>,
    #[serde(default, rename = "obstacle")]
    obstacles: Vec<Obstacle>,
}

/// A validated planning environment: boundaries plus obstacle set.
#[derive(Debug, Clone)]
pub struct Scene {
    boundaries: Boundaries<f64>,
    obstacles: Vec<Obstacle>,
}

impl Scene {
    /// Load a scene from a TOML file and validate it.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| SceneError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a scene from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, SceneError> {
        let file: SceneFile = toml::from_str(content)?;
        Self::validated(file.bounds, file.obstacles)
    }

    /// An obstacle-free scene over the given boundaries.
    pub fn open_world(boundaries: Boundaries<f64>) -> Result<Self, SceneError> {
        Self::validated(boundaries, Vec::new())
    }

    fn validated(
        boundaries: Boundaries<f64>,
        obstacles: Vec<Obstacle>,
    ) -> Result<Self, SceneError> {
        if boundaries.x_lower >= boundaries.x_upper || boundaries.y_lower >= boundaries.y_upper {
            return Err(SceneError::DegenerateBounds(format!(
                "x [{}, {}], y [{}, {}]",
                boundaries.x_lower, boundaries.x_upper, boundaries.y_lower, boundaries.y_upper
            )));
        }

        for (index, obstacle) in obstacles.iter().enumerate() {
            if obstacle.x_lower >= obstacle.x_upper || obstacle.y_lower >= obstacle.y_upper {
                return Err(SceneError::DegenerateObstacle(obstacle.label(index)));
            }
            let rect = obstacle.rect();
            let inside = boundaries.x_lower <= rect.x_lower
                && rect.x_upper <= boundaries.x_upper
                && boundaries.y_lower <= rect.y_lower
                && rect.y_upper <= boundaries.y_upper;
            if !inside {
                return Err(SceneError::ObstacleOutsideBounds(obstacle.label(index)));
            }
        }

        Ok(Scene {
            boundaries,
            obstacles,
        })
    }

    pub fn boundaries(&self) -> Boundaries<f64> {
        self.boundaries
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Build the collision checker for this scene's obstacle set.
    pub fn collision_checker(&self) -> AabbCollisionChecker<f64> {
        AabbCollisionChecker::new(self.obstacles.iter().map(Obstacle::rect).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{Scene, SceneError};
    use crate::boundaries::Boundaries;
    use crate::collision::CollisionChecker;
    use crate::space::Point;

    const WALL_SCENE: &str = r#"
        [bounds]
        x_lower = 0.0
        x_upper = 3.0
        y_lower = 0.0
        y_upper = 3.0

        [[obstacle]]
        name = "wall"
        x_lower = 1.2
        x_upper = 1.8
        y_lower = 0.0
        y_upper = 2.0
    "#;

    #[test]
    fn test_parse_scene_with_obstacle() {
        let scene = Scene::from_toml_str(WALL_SCENE).unwrap();
        assert_eq!(scene.obstacles().len(), 1);
        assert_eq!(scene.obstacles()[0].name.as_deref(), Some("wall"));

        let checker = scene.collision_checker();
        assert!(checker.is_node_colliding(&Point::new(1.5, 1.0)));
        assert!(!checker.is_node_colliding(&Point::new(0.5, 0.5)));
    }

    #[test]
    fn test_scene_without_obstacles() {
        let scene = Scene::from_toml_str(
            r#"
            [bounds]
            x_lower = 0.0
            x_upper = 1.0
            y_lower = 0.0
            y_upper = 1.0
            "#,
        )
        .unwrap();
        assert!(scene.obstacles().is_empty());
        assert_eq!(scene.collision_checker().obstacle_count(), 0);
    }

    #[test]
    fn test_open_world() {
        let scene = Scene::open_world(Boundaries::new(0.0, 3.0, 0.0, 3.0)).unwrap();
        assert!(scene.obstacles().is_empty());
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        let result = Scene::open_world(Boundaries::new(3.0, 0.0, 0.0, 3.0));
        assert!(matches!(result, Err(SceneError::DegenerateBounds(_))));
    }

    #[test]
    fn test_degenerate_obstacle_rejected() {
        let result = Scene::from_toml_str(
            r#"
            [bounds]
            x_lower = 0.0
            x_upper = 3.0
            y_lower = 0.0
            y_upper = 3.0

            [[obstacle]]
            x_lower = 2.0
            x_upper = 1.0
            y_lower = 0.0
            y_upper = 1.0
            "#,
        );
        assert!(matches!(result, Err(SceneError::DegenerateObstacle(_))));
    }

    #[test]
    fn test_obstacle_outside_bounds_rejected() {
        let result = Scene::from_toml_str(
            r#"
            [bounds]
            x_lower = 0.0
            x_upper = 3.0
            y_lower = 0.0
            y_upper = 3.0

            [[obstacle]]
            name = "runaway"
            x_lower = 2.0
            x_upper = 4.0
            y_lower = 0.0
            y_upper = 1.0
            "#,
        );
        assert!(matches!(result, Err(SceneError::ObstacleOutsideBounds(name)) if name == "runaway"));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(matches!(
            Scene::from_toml_str("not a scene"),
            Err(SceneError::Parse(_))
        ));
    }
}
