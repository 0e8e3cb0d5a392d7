//! Explicit undirected graphs over integer grid points.
//!
//! Edges may only join points that are exactly one unit apart. Every edge is
//! stored twice, once in each endpoint's neighbor set; [`GridGraph`] keeps
//! the two records in step and reports a [`SearchError::Inconsistent`] if it
//! ever finds one without the other.

use std::collections::{HashMap, HashSet};

use statespace_core::{Bounds, GridPoint};

use crate::bfs::bfs_path;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::path::Path;
use crate::traits::Pather;

/// The points adjacent to one point.
pub type NeighborSet = HashSet<GridPoint>;

/// An adjacency-set graph over [`GridPoint`]s with unit-length edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridGraph {
    adjacency: HashMap<GridPoint, NeighborSet>,
}

impl GridGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph containing every point of `bounds` not in `excluded`,
    /// with an edge between each pair of horizontally or vertically adjacent
    /// included points.
    pub fn mesh(bounds: Bounds, excluded: &HashSet<GridPoint>) -> Self {
        let mut graph = Self::new();
        for p in bounds.iter() {
            if excluded.contains(&p) {
                continue;
            }
            graph.insert_point(p);
            for q in [p.checked_shift(1, 0), p.checked_shift(0, 1)].into_iter().flatten() {
                if bounds.contains(q) && !excluded.contains(&q) {
                    graph.link(p, q);
                }
            }
        }
        graph
    }

    /// Build a graph over `cells`, joining every pair of cardinal neighbors.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = GridPoint>,
    {
        let cells: HashSet<GridPoint> = cells.into_iter().collect();
        let mut graph = Self::new();
        for &p in &cells {
            graph.insert_point(p);
            for q in p.neighbors_4() {
                if cells.contains(&q) {
                    graph.link(p, q);
                }
            }
        }
        graph
    }

    /// Build the graph traced by a path: its first point plus one edge per
    /// step.
    ///
    /// Fails if two consecutive points are not one unit apart.
    pub fn from_path(path: &Path<GridPoint>) -> Result<Self, SearchError> {
        let mut graph = Self::new();
        if let Some(&start) = path.start() {
            graph.insert_point(start);
        }
        for (&a, &b) in path.edges() {
            graph.insert_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Ensure `p` is a vertex. Existing edges are kept.
    pub fn insert_point(&mut self, p: GridPoint) {
        self.adjacency.entry(p).or_default();
    }

    /// Add an undirected edge between `p1` and `p2`, inserting either point
    /// if needed.
    ///
    /// Fails without modifying the graph unless the points are exactly one
    /// unit apart.
    pub fn insert_edge(&mut self, p1: GridPoint, p2: GridPoint) -> Result<(), SearchError> {
        if !p1.is_unit_step(p2) {
            log::warn!("grid: rejected edge from {p1} to {p2}, points must be 1 unit apart");
            return Err(SearchError::InvalidEdge { from: p1, to: p2 });
        }
        self.link(p1, p2);
        Ok(())
    }

    fn link(&mut self, p1: GridPoint, p2: GridPoint) {
        self.adjacency.entry(p1).or_default().insert(p2);
        self.adjacency.entry(p2).or_default().insert(p1);
    }

    /// Remove the edge between `p1` and `p2`, if present. Both points stay.
    ///
    /// Returns whether an edge was removed.
    pub fn remove_edge(&mut self, p1: GridPoint, p2: GridPoint) -> Result<bool, SearchError> {
        if !self.has_edge(p1, p2)? {
            return Ok(false);
        }
        if let Some(n) = self.adjacency.get_mut(&p1) {
            n.remove(&p2);
        }
        if let Some(n) = self.adjacency.get_mut(&p2) {
            n.remove(&p1);
        }
        Ok(true)
    }

    /// Remove `p` and every edge touching it, if present.
    ///
    /// Returns whether the point existed.
    pub fn remove_point(&mut self, p: GridPoint) -> Result<bool, SearchError> {
        let Some(neighbors) = self.adjacency.get(&p) else {
            return Ok(false);
        };
        let neighbors: Vec<GridPoint> = neighbors.iter().copied().collect();
        for q in neighbors {
            self.remove_edge(q, p)?;
        }
        self.adjacency.remove(&p);
        Ok(true)
    }

    /// Whether `p` is a vertex.
    #[inline]
    pub fn has_point(&self, p: GridPoint) -> bool {
        self.adjacency.contains_key(&p)
    }

    /// Whether `p1` and `p2` are joined by an edge.
    ///
    /// Fails with [`SearchError::Inconsistent`] if only one of the two
    /// points lists the other as a neighbor.
    pub fn has_edge(&self, p1: GridPoint, p2: GridPoint) -> Result<bool, SearchError> {
        let forward = self.lists(p1, p2);
        let backward = self.lists(p2, p1);
        match (forward, backward) {
            (true, true) => Ok(true),
            (false, false) => Ok(false),
            (true, false) => Err(self.inconsistent(p1, p2)),
            (false, true) => Err(self.inconsistent(p2, p1)),
        }
    }

    #[inline]
    fn lists(&self, p: GridPoint, q: GridPoint) -> bool {
        self.adjacency.get(&p).is_some_and(|n| n.contains(&q))
    }

    fn inconsistent(&self, from: GridPoint, to: GridPoint) -> SearchError {
        log::error!("grid: edge {from} to {to} is recorded in only one direction");
        SearchError::Inconsistent { from, to }
    }

    /// Check every stored adjacency for its reverse record.
    pub fn check_consistency(&self) -> Result<(), SearchError> {
        for (&p, neighbors) in &self.adjacency {
            for &q in neighbors {
                if !self.lists(q, p) {
                    return Err(self.inconsistent(p, q));
                }
            }
        }
        Ok(())
    }

    /// The neighbors of `p`, or `None` if `p` is not a vertex.
    #[inline]
    pub fn neighbors_of(&self, p: GridPoint) -> Option<&NeighborSet> {
        self.adjacency.get(&p)
    }

    /// Number of vertices.
    #[inline]
    pub fn count_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges, each counted once.
    pub fn count_edges(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum::<usize>() / 2
    }

    /// Whether the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over the vertices in arbitrary order.
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.adjacency.keys().copied()
    }

    /// Every edge once, as `(lesser, greater)` pairs, sorted.
    pub fn edges(&self) -> Vec<(GridPoint, GridPoint)> {
        let mut edges: Vec<_> = self
            .adjacency
            .iter()
            .flat_map(|(&p, n)| n.iter().filter(move |&&q| p < q).map(move |&q| (p, q)))
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Vertices with no edges, sorted.
    pub fn isolated_points(&self) -> Vec<GridPoint> {
        let mut pts: Vec<_> = self
            .adjacency
            .iter()
            .filter(|(_, n)| n.is_empty())
            .map(|(&p, _)| p)
            .collect();
        pts.sort_unstable();
        pts
    }

    /// Smallest bounds containing every vertex, or `None` for an empty
    /// graph.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.points())
    }

    /// Shortest path from `start` to `goal` with the default grid budget.
    ///
    /// Both points must be vertices. An empty path means the goal is not
    /// reachable within [`GRID_MAX_DIST`](crate::GRID_MAX_DIST) steps.
    pub fn shortest_path(
        &self,
        start: GridPoint,
        goal: GridPoint,
    ) -> Result<Path<GridPoint>, SearchError> {
        bfs_path(self, &start, &goal, &SearchConfig::grid())
    }
}

impl Pather for GridGraph {
    type Vertex = GridPoint;

    fn neighbors(&self, v: &GridPoint, buf: &mut Vec<GridPoint>) {
        if let Some(n) = self.adjacency.get(v) {
            buf.extend(n.iter().copied());
        }
    }

    #[inline]
    fn contains(&self, v: &GridPoint) -> bool {
        self.has_point(*v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::{SearchOutcome, bfs_distances, bfs_search};
    use crate::error::VertexRole;
    use crate::maze::{MAZE_GOAL, MAZE_START, sample_maze};

    fn pt(row: i32, col: i32) -> GridPoint {
        GridPoint::new(row, col)
    }

    fn corner() -> GridGraph {
        let mut g = GridGraph::new();
        g.insert_edge(pt(2, 2), pt(1, 2)).unwrap();
        g.insert_edge(pt(2, 2), pt(2, 1)).unwrap();
        g
    }

    #[test]
    fn insert_point_is_idempotent() {
        let mut g = corner();
        g.insert_point(pt(2, 2));
        assert_eq!(g.count_vertices(), 3);
        assert_eq!(g.count_edges(), 2);
    }

    #[test]
    fn insert_edge_rejects_non_unit_distance() {
        let mut g = corner();
        let before = g.clone();
        for (a, b) in [
            (pt(0, 0), pt(1, 1)),
            (pt(0, 0), pt(0, 2)),
            (pt(5, 5), pt(5, 5)),
            (pt(7, 7), pt(9, 9)),
        ] {
            assert_eq!(
                g.insert_edge(a, b),
                Err(SearchError::InvalidEdge { from: a, to: b })
            );
        }
        assert_eq!(g, before);
        assert!(!g.has_point(pt(7, 7)));
    }

    #[test]
    fn far_apart_points_are_rejected_not_wrapped() {
        let mut g = GridGraph::new();
        let (lo, hi) = (pt(i32::MIN, 0), pt(i32::MAX, 0));
        assert_eq!(
            g.insert_edge(lo, hi),
            Err(SearchError::InvalidEdge { from: lo, to: hi })
        );
        let (a, b) = (pt(i32::MIN, i32::MIN), pt(i32::MAX, i32::MAX));
        assert!(g.insert_edge(a, b).is_err());
        assert!(g.is_empty());

        g.insert_edge(hi, pt(i32::MAX - 1, 0)).unwrap();
        assert_eq!(g.count_edges(), 1);
    }

    #[test]
    fn graphs_at_the_edge_of_the_range() {
        let cells = [
            pt(i32::MIN, 0),
            pt(i32::MIN + 1, 0),
            pt(i32::MAX, i32::MAX),
            pt(i32::MAX, i32::MAX - 1),
        ];
        let g = GridGraph::from_cells(cells);
        assert_eq!(g.count_vertices(), 4);
        assert_eq!(g.count_edges(), 2);
        assert_eq!(
            g.bounds(),
            Some(Bounds::new(i32::MIN, 0, i32::MAX, i32::MAX))
        );

        let corner = Bounds::new(i32::MAX - 1, i32::MAX - 1, i32::MAX, i32::MAX);
        let mesh = GridGraph::mesh(corner, &HashSet::new());
        assert_eq!(mesh.count_vertices(), 4);
        assert_eq!(mesh.count_edges(), 4);
    }

    #[test]
    fn insert_edge_is_order_independent() {
        let mut a = GridGraph::new();
        a.insert_edge(pt(0, 0), pt(0, 1)).unwrap();
        let mut b = GridGraph::new();
        b.insert_edge(pt(0, 1), pt(0, 0)).unwrap();
        assert_eq!(a, b);
        assert!(a.has_edge(pt(0, 1), pt(0, 0)).unwrap());
    }

    #[test]
    fn remove_edge_keeps_points() {
        let mut g = corner();
        assert!(g.remove_edge(pt(2, 2), pt(2, 1)).unwrap());

        let mut expected = GridGraph::new();
        expected.insert_edge(pt(2, 2), pt(1, 2)).unwrap();
        expected.insert_point(pt(2, 1));
        assert_eq!(g, expected);

        // Absent edge: no-op.
        assert!(!g.remove_edge(pt(2, 2), pt(2, 1)).unwrap());
        assert_eq!(g, expected);
    }

    #[test]
    fn remove_point_leaves_no_dangling_neighbors() {
        let mut g = corner();
        assert!(g.remove_point(pt(2, 2)).unwrap());
        assert!(!g.has_point(pt(2, 2)));
        for p in g.points() {
            assert!(!g.neighbors_of(p).unwrap().contains(&pt(2, 2)));
        }

        let mut edgeless = GridGraph::new();
        edgeless.insert_point(pt(1, 2));
        edgeless.insert_point(pt(2, 1));
        assert_eq!(g, edgeless);

        // Absent point: no-op.
        assert!(!g.remove_point(pt(7, 7)).unwrap());
        assert_eq!(g, edgeless);
    }

    #[test]
    fn count_edges_counts_each_edge_once() {
        // An "I" shape.
        let mut g = GridGraph::new();
        for (a, b) in [
            (pt(0, 0), pt(0, 1)),
            (pt(0, 2), pt(0, 1)),
            (pt(0, 1), pt(1, 1)),
            (pt(2, 1), pt(1, 1)),
            (pt(2, 1), pt(3, 1)),
            (pt(3, 0), pt(3, 1)),
            (pt(3, 2), pt(3, 1)),
        ] {
            g.insert_edge(a, b).unwrap();
        }
        assert_eq!(g.count_edges(), 7);
        assert_eq!(g.count_vertices(), 8);
        assert_eq!(g.edges().len(), 7);
    }

    #[test]
    fn one_directional_adjacency_is_reported() {
        let mut g = corner();
        g.adjacency.get_mut(&pt(1, 2)).unwrap().remove(&pt(2, 2));
        assert_eq!(
            g.has_edge(pt(1, 2), pt(2, 2)),
            Err(SearchError::Inconsistent {
                from: pt(2, 2),
                to: pt(1, 2)
            })
        );
        assert!(g.check_consistency().is_err());
        assert!(g.remove_edge(pt(2, 2), pt(1, 2)).is_err());
        assert!(g.remove_point(pt(2, 2)).is_err());
    }

    #[test]
    fn edges_and_isolated_points_are_sorted() {
        let mut g = corner();
        g.insert_point(pt(9, 9));
        g.insert_point(pt(-3, 0));
        assert_eq!(
            g.edges(),
            vec![(pt(1, 2), pt(2, 2)), (pt(2, 1), pt(2, 2))]
        );
        assert_eq!(g.isolated_points(), vec![pt(-3, 0), pt(9, 9)]);
        assert_eq!(g.bounds(), Some(Bounds::new(-3, 0, 9, 9)));
        assert_eq!(GridGraph::new().bounds(), None);
    }

    #[test]
    fn mesh_and_from_cells_agree() {
        let bounds = Bounds::new(0, 0, 2, 3);
        let excluded: HashSet<_> = [pt(1, 1)].into();
        let mesh = GridGraph::mesh(bounds, &excluded);
        let cells = GridGraph::from_cells(bounds.iter().filter(|p| !excluded.contains(p)));
        assert_eq!(mesh, cells);
        assert_eq!(mesh.count_vertices(), 11);
        // 3x4 full mesh has 17 edges; the removed cell had 4.
        assert_eq!(mesh.count_edges(), 13);
        mesh.check_consistency().unwrap();
    }

    #[test]
    fn maze_shortest_path_takes_19_steps() {
        let g = sample_maze(false).unwrap();
        let path = g.shortest_path(MAZE_START, MAZE_GOAL).unwrap();
        assert_eq!(path.steps(), Some(19));
        assert_eq!(path.start(), Some(&MAZE_START));
        assert_eq!(path.goal(), Some(&MAZE_GOAL));
        assert!(path.is_connected_by(|a, b| g.has_edge(*a, *b).unwrap()));

        // The path is no longer than any other route.
        let dist = bfs_distances(&g, &MAZE_START, &SearchConfig::grid()).unwrap();
        assert_eq!(dist[&MAZE_GOAL], 19);
    }

    #[test]
    fn cutting_the_maze_disconnects_start_from_goal() {
        let g = sample_maze(true).unwrap();
        let report = bfs_search(&g, &MAZE_START, &MAZE_GOAL, &SearchConfig::grid()).unwrap();
        assert!(report.path.is_empty());
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
    }

    #[test]
    fn small_budget_is_exceeded_in_the_maze() {
        let g = sample_maze(false).unwrap();
        let cfg = SearchConfig::grid().with_max_dist(10);
        let report = bfs_search(&g, &MAZE_START, &MAZE_GOAL, &cfg).unwrap();
        assert_eq!(report.outcome, SearchOutcome::BudgetExceeded);
        assert!(report.path.is_empty());
    }

    #[test]
    fn start_at_goal_in_the_maze() {
        let g = sample_maze(false).unwrap();
        let path = g.shortest_path(MAZE_START, MAZE_START).unwrap();
        assert_eq!(path.into_vec(), vec![MAZE_START]);
    }

    #[test]
    fn unknown_points_fail_the_search() {
        let g = sample_maze(false).unwrap();
        // (6,0) is excluded from the maze.
        assert!(matches!(
            g.shortest_path(pt(6, 0), MAZE_GOAL),
            Err(SearchError::UnknownVertex {
                role: VertexRole::Start,
                ..
            })
        ));
        assert!(matches!(
            g.shortest_path(MAZE_START, pt(0, 5)),
            Err(SearchError::UnknownVertex {
                role: VertexRole::Goal,
                ..
            })
        ));
    }

    #[test]
    fn from_path_traces_the_route() {
        let g = sample_maze(false).unwrap();
        let path = g.shortest_path(MAZE_START, MAZE_GOAL).unwrap();
        let traced = GridGraph::from_path(&path).unwrap();
        assert_eq!(traced.count_vertices(), 20);
        assert_eq!(traced.count_edges(), 19);
        for (a, b) in traced.edges() {
            assert!(g.has_edge(a, b).unwrap());
        }
    }
}
