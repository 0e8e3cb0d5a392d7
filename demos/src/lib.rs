//! Shared demo logic for the `statespace` binary.
//!
//! Each runner searches a state space and returns a report; print it with
//! `{}`. The binary only parses arguments and prints.

pub mod logger;

use std::fmt;

use rand::Rng;
use statespace_search::{
    GraphView, GridGraph, GridPoint, MAZE_GOAL, MAZE_START, PlotConfig, PuzzleSpace, PuzzleState,
    PuzzleView, SearchConfig, SearchError, SearchOutcome, SearchReport, bfs_search, sample_maze,
};

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// The sample maze, the search result and, when found, the traced path.
#[derive(Debug, Clone)]
pub struct MazeReport {
    maze: GridGraph,
    report: SearchReport<GridPoint>,
    traced: GridGraph,
    max_dist: usize,
    plot: PlotConfig,
}

/// Solve the sample maze from [`MAZE_START`] to [`MAZE_GOAL`].
pub fn maze_report(
    cut: bool,
    search: &SearchConfig,
    plot: PlotConfig,
) -> Result<MazeReport, SearchError> {
    let maze = sample_maze(cut)?;
    let report = bfs_search(&maze, &MAZE_START, &MAZE_GOAL, search)?;
    let traced = GridGraph::from_path(&report.path)?;
    Ok(MazeReport {
        maze,
        report,
        traced,
        max_dist: search.max_dist,
        plot,
    })
}

impl MazeReport {
    pub fn outcome(&self) -> SearchOutcome {
        self.report.outcome
    }
}

impl fmt::Display for MazeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", GraphView::new(&self.maze, self.plot))?;
        writeln!(f, "Finding the shortest path from {MAZE_START} to {MAZE_GOAL}:")?;
        writeln!(f)?;

        match self.report.outcome {
            SearchOutcome::Found => {
                if self.plot.plotting {
                    writeln!(f, "{}", GraphView::new(&self.traced, self.plot))?;
                } else {
                    for (i, (a, b)) in self.report.path.edges().enumerate() {
                        if i > 0 {
                            f.write_str(" ")?;
                        }
                        write!(f, "[{a} to {b}]")?;
                    }
                    writeln!(f)?;
                }
                writeln!(f, "Steps taken: {}", self.report.path.steps().unwrap_or(0))
            }
            SearchOutcome::Exhausted => {
                writeln!(f, "No path exists from {MAZE_START} to {MAZE_GOAL}.")
            }
            SearchOutcome::BudgetExceeded => writeln!(
                f,
                "No path from {MAZE_START} to {MAZE_GOAL} within {} steps.",
                self.max_dist
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Puzzle
// ---------------------------------------------------------------------------

/// Scramble the solved board by `steps` random moves.
pub fn shuffled(rng: &mut impl Rng, steps: usize) -> PuzzleState {
    PuzzleState::solved().randomize(rng, steps)
}

/// A puzzle search from `start` to `goal`.
#[derive(Debug, Clone)]
pub struct PuzzleReport {
    start: PuzzleState,
    goal: PuzzleState,
    report: SearchReport<PuzzleState>,
    max_dist: usize,
    plot: PlotConfig,
}

/// Solve `start` towards `goal`.
pub fn puzzle_report(
    start: &PuzzleState,
    goal: &PuzzleState,
    search: &SearchConfig,
    plot: PlotConfig,
) -> Result<PuzzleReport, SearchError> {
    let report = bfs_search(&PuzzleSpace, start, goal, search)?;
    Ok(PuzzleReport {
        start: *start,
        goal: *goal,
        report,
        max_dist: search.max_dist,
        plot,
    })
}

impl PuzzleReport {
    pub fn outcome(&self) -> SearchOutcome {
        self.report.outcome
    }
}

impl fmt::Display for PuzzleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Start:\n{}", PuzzleView::new(&self.start, self.plot))?;
        writeln!(f, "Goal:\n{}", PuzzleView::new(&self.goal, self.plot))?;

        let visited = self.report.stats.visited;
        match self.report.outcome {
            SearchOutcome::Found => {
                for (i, state) in self.report.path.iter().enumerate().skip(1) {
                    writeln!(f, "Move {i}:\n{}", PuzzleView::new(state, self.plot))?;
                }
                writeln!(
                    f,
                    "Solved in {} moves ({visited} states visited).",
                    self.report.path.steps().unwrap_or(0)
                )
            }
            SearchOutcome::Exhausted => writeln!(
                f,
                "No solution: the goal is unreachable ({visited} states visited)."
            ),
            SearchOutcome::BudgetExceeded => {
                writeln!(f, "No solution within {} moves.", self.max_dist)
            }
        }
    }
}
