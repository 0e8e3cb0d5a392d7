//! Bounded breadth-first search over explicit and implicit state spaces.
//!
//! One search engine ([`bfs_search`], [`bfs_path`], [`bfs_distances`]) works
//! over anything implementing [`Pather`]. Two state spaces ship with the
//! crate:
//!
//! - **Grid graphs** ([`GridGraph`]): explicit adjacency sets over
//!   [`GridPoint`]s with unit-length edges only.
//! - **The 8-puzzle** ([`PuzzleSpace`]): neighbors of a [`PuzzleState`] are
//!   generated on demand by sliding a tile into the blank.
//!
//! Searches are bounded by a hop budget ([`SearchConfig::max_dist`]).
//! Running out of budget, or exhausting the reachable vertices, yields an
//! empty [`Path`] rather than an error; [`bfs_search`] additionally reports
//! which of the two happened.
//!
//! ```
//! use statespace_search::{GridGraph, GridPoint};
//!
//! let mut g = GridGraph::new();
//! g.insert_edge(GridPoint::new(0, 0), GridPoint::new(0, 1)).unwrap();
//! g.insert_edge(GridPoint::new(0, 1), GridPoint::new(1, 1)).unwrap();
//!
//! let path = g.shortest_path(GridPoint::new(0, 0), GridPoint::new(1, 1)).unwrap();
//! assert_eq!(path.steps(), Some(2));
//! ```

mod bfs;
mod config;
mod error;
mod grid;
mod maze;
mod path;
mod plot;
mod puzzle;
mod record;
mod traits;

pub use bfs::{SearchOutcome, SearchReport, SearchStats, bfs_distances, bfs_path, bfs_search};
pub use config::{GRID_MAX_DIST, PUZZLE_MAX_DIST, PlotConfig, SearchConfig};
pub use error::{SearchError, VertexRole};
pub use grid::{GridGraph, NeighborSet};
pub use maze::{MAZE_GOAL, MAZE_START, sample_maze};
pub use path::Path;
pub use plot::{GraphView, PuzzleView};
pub use puzzle::{BLANK, Direction, ParseStateError, PuzzleSpace, PuzzleState};
pub use statespace_core::{Bounds, GridPoint};
pub use traits::{FnPather, Pather, Vertex};
