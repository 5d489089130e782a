//! Roadmap export helpers

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use petgraph::dot::{Config, Dot};

use crate::space::{Point, SpaceContinuous};

use super::RoadmapGraph;

/// Graphviz DOT rendering of a roadmap.
pub fn dot_string<T: SpaceContinuous>(graph: &RoadmapGraph<T>) -> String {
    format!("{:?}", Dot::with_config(graph, &[Config::EdgeNoLabel]))
}

/// Write a roadmap to a Graphviz DOT file.
pub fn write_dot<T: SpaceContinuous, P: AsRef<Path>>(
    graph: &RoadmapGraph<T>,
    path: P,
) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(dot_string(graph).as_bytes())
}

/// Write a solution path as one `x y` pair per line.
pub fn write_solution_path<T: SpaceContinuous, P: AsRef<Path>>(
    solution: &[Point<T>],
    path: P,
) -> io::Result<()> {
    let mut file = File::create(path)?;
    for point in solution {
        writeln!(file, "{} {}", point.x, point.y)?;
    }
    Ok(())
}
