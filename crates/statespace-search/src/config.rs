//! Search and presentation settings.

/// Default hop budget for grid searches.
pub const GRID_MAX_DIST: usize = 100;

/// Default hop budget for 8-puzzle searches.
///
/// Every solvable 8-puzzle has an optimal solution of at most 31 moves, so
/// this never cuts off a solvable instance.
pub const PUZZLE_MAX_DIST: usize = 35;

/// Parameters for a single bounded breadth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Largest hop count the search may discover before giving up.
    pub max_dist: usize,
}

impl SearchConfig {
    /// Settings for explicit grid graphs.
    pub const fn grid() -> Self {
        Self {
            max_dist: GRID_MAX_DIST,
        }
    }

    /// Settings for the 8-puzzle.
    pub const fn puzzle() -> Self {
        Self {
            max_dist: PUZZLE_MAX_DIST,
        }
    }

    /// Return a copy with a different hop budget.
    pub const fn with_max_dist(self, max_dist: usize) -> Self {
        Self { max_dist }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::grid()
    }
}

/// How graphs and puzzle boards are rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotConfig {
    /// Draw ASCII diagrams instead of textual descriptions.
    pub plotting: bool,
    /// When not plotting, list every edge and isolated point.
    pub verbose: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            plotting: true,
            verbose: true,
        }
    }
}
