//! A small sample maze with a known 19-step solution.
//!
//! The maze is a 7×6 mesh with the corners (6,0) and (0,5) left out and 24
//! walls knocked through it. Removing one more edge, between (0,2) and
//! (0,3), separates [`MAZE_START`] from [`MAZE_GOAL`].

use std::collections::HashSet;

use statespace_core::{Bounds, GridPoint};

use crate::error::SearchError;
use crate::grid::GridGraph;

pub const MAZE_START: GridPoint = GridPoint::new(0, 0);
pub const MAZE_GOAL: GridPoint = GridPoint::new(6, 5);

/// Edges removed from the mesh.
const MAZE_WALLS: [((i32, i32), (i32, i32)); 24] = [
    ((0, 1), (0, 2)),
    ((0, 3), (1, 3)),
    ((1, 1), (2, 1)),
    ((1, 2), (1, 3)),
    ((1, 3), (2, 3)),
    ((1, 4), (2, 4)),
    ((2, 0), (2, 1)),
    ((2, 1), (2, 2)),
    ((2, 2), (2, 3)),
    ((3, 0), (3, 1)),
    ((3, 2), (3, 3)),
    ((3, 2), (4, 2)),
    ((3, 3), (4, 3)),
    ((3, 4), (3, 5)),
    ((4, 0), (4, 1)),
    ((4, 1), (4, 2)),
    ((4, 3), (5, 3)),
    ((4, 4), (4, 5)),
    ((4, 4), (5, 4)),
    ((4, 5), (5, 5)),
    ((5, 1), (5, 2)),
    ((6, 1), (6, 2)),
    ((6, 2), (6, 3)),
    ((6, 4), (6, 5)),
];

const MAZE_BRIDGE: ((i32, i32), (i32, i32)) = ((0, 2), (0, 3));

/// Build the sample maze. With `cut`, the goal is unreachable.
pub fn sample_maze(cut: bool) -> Result<GridGraph, SearchError> {
    let excluded: HashSet<GridPoint> = [GridPoint::new(6, 0), GridPoint::new(0, 5)].into();
    let mut graph = GridGraph::mesh(Bounds::new(0, 0, 6, 5), &excluded);
    let bridge = cut.then_some(MAZE_BRIDGE);
    for (a, b) in MAZE_WALLS.into_iter().chain(bridge) {
        graph.remove_edge(a.into(), b.into())?;
    }
    Ok(graph)
}
