//! Text rendering for grid graphs and puzzle boards.
//!
//! Rendering is configured per view through [`PlotConfig`] rather than
//! through process-wide switches.

use std::fmt::{self, Write};

use statespace_core::GridPoint;

use crate::config::PlotConfig;
use crate::grid::GridGraph;
use crate::puzzle::{BLANK, PuzzleState};

/// Width of one plotted point: ` (r,c) ` for single-digit coordinates.
const CELL: &str = "       ";
const GAP: &str = "    ";

/// A [`GridGraph`] paired with rendering options; print it with `{}`.
#[derive(Debug, Clone, Copy)]
pub struct GraphView<'a> {
    graph: &'a GridGraph,
    config: PlotConfig,
}

impl<'a> GraphView<'a> {
    pub fn new(graph: &'a GridGraph, config: PlotConfig) -> Self {
        Self { graph, config }
    }

    /// Whether `p` has an edge to the point (drow, dcol) away from it.
    fn connected(&self, p: GridPoint, drow: i32, dcol: i32) -> bool {
        p.checked_shift(drow, dcol)
            .is_some_and(|q| matches!(self.graph.has_edge(p, q), Ok(true)))
    }

    /// ASCII diagram: points, `----` for horizontal edges and doubled `|`
    /// rows for vertical edges.
    fn plot(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(b) = self.graph.bounds() else {
            return writeln!(f, "[Empty graph plot]");
        };
        let (min, max) = (b.min, b.max);

        for row in min.row..=max.row {
            let mut under = String::new();
            for col in min.col..=max.col {
                let p = GridPoint::new(row, col);
                if self.graph.has_point(p) {
                    write_padded(f, p)?;
                } else {
                    f.write_str(CELL)?;
                }
                if self.connected(p, 0, 1) {
                    f.write_str("----")?;
                } else if col < max.col {
                    f.write_str(GAP)?;
                }
                if row < max.row {
                    under.push_str(if self.connected(p, 1, 0) {
                        "   |   "
                    } else {
                        CELL
                    });
                    if col < max.col {
                        under.push_str(GAP);
                    }
                }
            }
            writeln!(f)?;
            if row < max.row {
                writeln!(f, "{under}")?;
                writeln!(f, "{under}")?;
            }
        }
        Ok(())
    }

    /// Sorted list of edges followed by isolated points.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.graph.is_empty() {
            return writeln!(f, "The graph is empty.");
        }
        if !self.config.verbose {
            return writeln!(f, "Omitting verbose text description of graph.");
        }

        f.write_str("Edges: ")?;
        let edges = self.graph.edges();
        if edges.is_empty() {
            f.write_str("None.")?;
        }
        for (a, b) in edges {
            write!(f, "[{a} to {b}] ")?;
        }
        writeln!(f)?;

        f.write_str("Isolated points: ")?;
        let isolated = self.graph.isolated_points();
        if isolated.is_empty() {
            f.write_str("None.")?;
        }
        for p in isolated {
            write!(f, "{p} ")?;
        }
        writeln!(f)
    }
}

/// Write `p`, padded with a space on each side whose coordinate is a single
/// non-negative digit, so that grid lines stay aligned.
fn write_padded(f: &mut impl Write, p: GridPoint) -> fmt::Result {
    if (0..10).contains(&p.row) {
        f.write_char(' ')?;
    }
    write!(f, "{p}")?;
    if (0..10).contains(&p.col) {
        f.write_char(' ')?;
    }
    Ok(())
}

impl fmt::Display for GraphView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.config.plotting {
            self.plot(f)
        } else {
            self.describe(f)
        }
    }
}

/// A [`PuzzleState`] paired with rendering options; print it with `{}`.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleView<'a> {
    state: &'a PuzzleState,
    config: PlotConfig,
}

impl<'a> PuzzleView<'a> {
    pub fn new(state: &'a PuzzleState, config: PlotConfig) -> Self {
        Self { state, config }
    }
}

impl fmt::Display for PuzzleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.state)?;
        if !self.config.plotting {
            return Ok(());
        }
        writeln!(f, " -------")?;
        for row in self.state.tiles().chunks(3) {
            f.write_char('|')?;
            for &t in row {
                if t == BLANK {
                    f.write_str("  ")?;
                } else {
                    write!(f, " {t}")?;
                }
            }
            writeln!(f, " |")?;
        }
        writeln!(f, " -------")
    }
}
