//! Error type shared by the grid graph, the puzzle model and the search engine.
//!
//! Running out of hop budget or finding no path are not errors; the engine
//! reports those as an empty [`Path`](crate::Path).

use std::fmt;

use statespace_core::GridPoint;

/// Which endpoint of a search a vertex was supplied as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRole {
    Start,
    Goal,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Fatal conditions raised by graph maintenance and search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An edge was requested between points that are not one unit apart.
    InvalidEdge { from: GridPoint, to: GridPoint },
    /// Puzzle tiles are not a permutation of 1 through 9.
    InvalidState { tiles: [u8; 9] },
    /// The start or goal vertex is not part of the graph being searched.
    UnknownVertex { role: VertexRole, vertex: String },
    /// Adjacency was recorded in only one direction.
    Inconsistent { from: GridPoint, to: GridPoint },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEdge { from, to } => {
                write!(f, "invalid edge from {from} to {to}: points must be 1 unit apart")
            }
            Self::InvalidState { tiles } => {
                write!(f, "invalid puzzle state {tiles:?}: tiles must be a permutation of 1 through 9")
            }
            Self::UnknownVertex { role, vertex } => {
                write!(f, "{role} vertex {vertex} does not exist in the graph")
            }
            Self::Inconsistent { from, to } => {
                write!(f, "edge {from} to {to} is recorded in only one direction")
            }
        }
    }
}

impl std::error::Error for SearchError {}
