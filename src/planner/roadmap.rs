//! Roadmap storage shared by the planners
//!
//! Couples the petgraph roadmap with an R*-tree over the same
//! configurations. The tree entries carry the graph [`NodeIndex`] as
//! payload, so duplicate detection, nearest-neighbor queries and
//! point-to-node lookup all go through one structure and never scan the
//! whole graph.

use petgraph::graph::NodeIndex;
use rstar::primitives::GeomWithData;
use rstar::RTree;

use crate::space::{Point, SpaceContinuous};

use super::RoadmapGraph;

type IndexedPoint<T> = GeomWithData<[T; 2], NodeIndex>;

/// Growing set of collision-free configurations and motions.
pub struct Roadmap<T: SpaceContinuous> {
    graph: RoadmapGraph<T>,
    tree: RTree<IndexedPoint<T>>,
}

impl<T: SpaceContinuous> Roadmap<T> {
    pub fn new() -> Self {
        Roadmap {
            graph: RoadmapGraph::new_undirected(),
            tree: RTree::new(),
        }
    }

    /// Insert a configuration into graph and spatial index.
    pub fn add_node(&mut self, point: Point<T>) -> NodeIndex {
        let index = self.graph.add_node(point);
        self.tree.insert(GeomWithData::new([point.x, point.y], index));
        index
    }

    /// Exact-point lookup.
    pub fn node_index(&self, point: &Point<T>) -> Option<NodeIndex> {
        self.tree
            .locate_at_point(&[point.x, point.y])
            .map(|entry| entry.data)
    }

    pub fn contains(&self, point: &Point<T>) -> bool {
        self.node_index(point).is_some()
    }

    /// Nearest roadmap node to a query configuration.
    pub fn nearest(&self, point: &Point<T>) -> Option<(Point<T>, NodeIndex)> {
        self.tree
            .nearest_neighbor(&[point.x, point.y])
            .map(|entry| {
                let [x, y] = *entry.geom();
                (Point::new(x, y), entry.data)
            })
    }

    /// The `k` nearest roadmap nodes to a query configuration, closest
    /// first.
    pub fn k_nearest(&self, point: &Point<T>, k: usize) -> Vec<(Point<T>, NodeIndex)> {
        self.tree
            .nearest_neighbor_iter(&[point.x, point.y])
            .take(k)
            .map(|entry| {
                let [x, y] = *entry.geom();
                (Point::new(x, y), entry.data)
            })
            .collect()
    }

    /// Insert an edge unless it would be a self-loop or a parallel edge.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex, weight: T) -> bool {
        if a == b || self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, weight);
        true
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn graph(&self) -> &RoadmapGraph<T> {
        &self.graph
    }

    /// Drop all nodes and edges.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.tree = RTree::new();
    }
}

impl<T: SpaceContinuous> Default for Roadmap<T> {
    fn default() -> Self {
        Roadmap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Roadmap;
    use crate::space::Point;

    #[test]
    fn test_add_node_updates_graph_and_index() {
        let mut roadmap: Roadmap<f64> = Roadmap::new();
        assert_eq!(roadmap.node_count(), 0);

        let p = Point::new(1.8, 2.0);
        let index = roadmap.add_node(p);
        assert_eq!(roadmap.node_count(), 1);
        assert_eq!(roadmap.node_index(&p), Some(index));
        assert!(roadmap.contains(&p));
    }

    #[test]
    fn test_nearest_returns_closest_node() {
        let mut roadmap: Roadmap<f64> = Roadmap::new();
        roadmap.add_node(Point::new(0.0, 0.0));
        let near = roadmap.add_node(Point::new(1.0, 1.0));
        roadmap.add_node(Point::new(5.0, 5.0));

        let (point, index) = roadmap.nearest(&Point::new(1.2, 1.1)).unwrap();
        assert_eq!(index, near);
        assert_eq!(point, Point::new(1.0, 1.0));
    }

    #[test]
    fn test_k_nearest_is_ordered() {
        let mut roadmap: Roadmap<f64> = Roadmap::new();
        let a = roadmap.add_node(Point::new(0.0, 0.0));
        let b = roadmap.add_node(Point::new(2.0, 0.0));
        let c = roadmap.add_node(Point::new(4.0, 0.0));

        let neighbors: Vec<_> = roadmap
            .k_nearest(&Point::new(0.1, 0.0), 3)
            .into_iter()
            .map(|(_, index)| index)
            .collect();
        assert_eq!(neighbors, vec![a, b, c]);
    }

    #[test]
    fn test_no_self_or_parallel_edges() {
        let mut roadmap: Roadmap<f64> = Roadmap::new();
        let a = roadmap.add_node(Point::new(0.0, 0.0));
        let b = roadmap.add_node(Point::new(1.0, 0.0));

        assert!(!roadmap.add_edge(a, a, 0.0));
        assert!(roadmap.add_edge(a, b, 1.0));
        assert!(!roadmap.add_edge(a, b, 1.0));
        assert!(!roadmap.add_edge(b, a, 1.0));
        assert_eq!(roadmap.edge_count(), 1);
    }

    #[test]
    fn test_clear_empties_roadmap() {
        let mut roadmap: Roadmap<f64> = Roadmap::new();
        let p = Point::new(1.0, 1.0);
        roadmap.add_node(p);
        roadmap.clear();
        assert_eq!(roadmap.node_count(), 0);
        assert!(!roadmap.contains(&p));
    }
}
