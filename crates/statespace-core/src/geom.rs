//! Geometry primitives: [`GridPoint`] and [`Bounds`].
//!
//! Points use matrix coordinates: `row` grows down, `col` grows right. There
//! is no fixed board size, so any `i32` pair is a valid point. Nothing here
//! overflows at the edges of the `i32` range: steps that would leave it
//! simply do not exist.

use std::fmt;

// ---------------------------------------------------------------------------
// GridPoint
// ---------------------------------------------------------------------------

/// A 2D integer point addressed as (row, column).
///
/// Ordering is lexicographic: by row first, then by column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub row: i32,
    pub col: i32,
}

impl GridPoint {
    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The point shifted by (drow, dcol), or `None` if either coordinate
    /// would leave the `i32` range.
    #[inline]
    pub const fn checked_shift(self, drow: i32, dcol: i32) -> Option<Self> {
        match (self.row.checked_add(drow), self.col.checked_add(dcol)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// The cardinal neighbours (up, right, down, left) that exist.
    ///
    /// Points on the edge of the `i32` range have fewer than four.
    pub fn neighbors_4(self) -> impl Iterator<Item = GridPoint> {
        [(-1, 0), (0, 1), (1, 0), (0, -1)]
            .into_iter()
            .filter_map(move |(dr, dc)| self.checked_shift(dr, dc))
    }

    /// Whether `other` is exactly one unit away along a row or a column.
    #[inline]
    pub fn is_unit_step(self, other: GridPoint) -> bool {
        matches!(
            (self.row.abs_diff(other.row), self.col.abs_diff(other.col)),
            (1, 0) | (0, 1)
        )
    }
}

impl From<(i32, i32)> for GridPoint {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A closed rectangle of grid points, `min` and `max` both included.
///
/// Bounds are never empty. Being closed, they can reach `i32::MAX` on either
/// axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: GridPoint,
    pub max: GridPoint,
}

impl Bounds {
    /// Bounds spanning two corners, in either order.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: GridPoint::new(row0.min(row1), col0.min(col1)),
            max: GridPoint::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// Smallest bounds containing every point yielded by `points`, or `None`
    /// when there are no points.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GridPoint>,
    {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self { min: p, max: p },
                Some(b) => Self::new(
                    b.min.row.min(p.row),
                    b.min.col.min(p.col),
                    b.max.row.max(p.row),
                    b.max.col.max(p.col),
                ),
            })
        })
    }

    /// Whether `p` lies inside the bounds, edges included.
    #[inline]
    pub fn contains(self, p: GridPoint) -> bool {
        (self.min.row..=self.max.row).contains(&p.row)
            && (self.min.col..=self.max.col).contains(&p.col)
    }

    /// Every point in the bounds, row by row.
    pub fn iter(self) -> impl Iterator<Item = GridPoint> {
        let (min, max) = (self.min, self.max);
        (min.row..=max.row)
            .flat_map(move |row| (min.col..=max.col).map(move |col| GridPoint::new(row, col)))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.min, self.max)
    }
}
