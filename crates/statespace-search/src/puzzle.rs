//! The 8-puzzle: eight numbered tiles and one blank on a 3×3 board.
//!
//! A [`PuzzleState`] stores the board row-major as the numbers 1 through 9,
//! with [`BLANK`] (9) marking the empty square. Its neighbors are generated
//! on demand by sliding a tile into the blank, so the state space is never
//! materialized.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngExt};

use crate::bfs::bfs_path;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::path::Path;
use crate::traits::Pather;

/// The value standing for the empty square.
pub const BLANK: u8 = 9;

const SOLVED: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// A direction the blank can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order neighbors are generated.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// One arrangement of the 8-puzzle board.
///
/// Always holds a permutation of 1 through 9; every constructor checks it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[u8; 9]", into = "[u8; 9]")
)]
pub struct PuzzleState {
    tiles: [u8; 9],
}

impl PuzzleState {
    /// The goal arrangement `[1,2,3,4,5,6,7,8,9]`, blank in the bottom-right.
    pub const fn solved() -> Self {
        Self { tiles: SOLVED }
    }

    /// Create a state from row-major tiles.
    ///
    /// Fails unless `tiles` is a permutation of 1 through 9.
    pub fn new(tiles: [u8; 9]) -> Result<Self, SearchError> {
        if Self::is_permutation(&tiles) {
            Ok(Self { tiles })
        } else {
            Err(SearchError::InvalidState { tiles })
        }
    }

    /// Whether `tiles` contains each of 1 through 9 exactly once.
    pub fn is_permutation(tiles: &[u8; 9]) -> bool {
        let mut sorted = *tiles;
        sorted.sort_unstable();
        sorted == SOLVED
    }

    /// The row-major tiles.
    #[inline]
    pub fn tiles(&self) -> [u8; 9] {
        self.tiles
    }

    /// Replace the tiles. On failure the state is left unchanged.
    pub fn set_tiles(&mut self, tiles: [u8; 9]) -> Result<(), SearchError> {
        *self = Self::new(tiles)?;
        Ok(())
    }

    /// Board index (0..9, row-major) of the blank.
    ///
    /// Every constructor validates the tiles as a permutation of 1 through
    /// 9, so the blank is always present.
    pub fn blank_index(&self) -> usize {
        self.tiles
            .iter()
            .position(|&t| t == BLANK)
            .expect("validated puzzle state holds the blank")
    }

    /// The state after moving the blank one square in `dir`, or `None` if
    /// the board edge is in the way.
    pub fn moved(&self, dir: Direction) -> Option<Self> {
        let blank = self.blank_index();
        let target = match dir {
            Direction::Up if blank >= 3 => blank - 3,
            Direction::Down if blank < 6 => blank + 3,
            Direction::Left if blank % 3 != 0 => blank - 1,
            Direction::Right if blank % 3 != 2 => blank + 1,
            _ => return None,
        };
        let mut next = *self;
        next.tiles.swap(blank, target);
        Some(next)
    }

    /// Every state one legal move away, in [`Direction::ALL`] order.
    pub fn adjacent_states(&self) -> Vec<Self> {
        Direction::ALL.iter().filter_map(|&d| self.moved(d)).collect()
    }

    /// Whether `other` is one legal move away.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        Direction::ALL.iter().any(|&d| self.moved(d).as_ref() == Some(other))
    }

    /// Number of tile pairs out of order, ignoring the blank.
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != BLANK).collect();
        let mut count = 0;
        for i in 0..tiles.len() {
            for j in i + 1..tiles.len() {
                if tiles[i] > tiles[j] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Whether `other` can be reached from this state by legal moves.
    ///
    /// On a board of odd width every move preserves the parity of the
    /// inversion count, and equal parity is also sufficient.
    pub fn can_reach(&self, other: &Self) -> bool {
        self.inversions() % 2 == other.inversions() % 2
    }

    /// A random neighbor, avoiding `prev` so that a random walk does not
    /// immediately undo its last move.
    pub fn random_move(&self, rng: &mut impl Rng, prev: &Self) -> Self {
        let mut candidates = self.adjacent_states();
        candidates.retain(|s| s != prev);
        // Every square has at least two neighbors, so one always remains.
        let i = rng.random_range(0..candidates.len());
        candidates[i]
    }

    /// Scramble by a random walk of `steps` moves without immediate undos.
    ///
    /// The result is always reachable from `self`.
    pub fn randomize(self, rng: &mut impl Rng, steps: usize) -> Self {
        let mut prev = self;
        let mut cur = self;
        for step in 0..steps {
            let next = cur.random_move(rng, &prev);
            log::trace!("puzzle: shuffle step {step}: {cur} -> {next}");
            prev = cur;
            cur = next;
        }
        cur
    }

    /// Shortest solution from `self` to `goal` within
    /// [`PUZZLE_MAX_DIST`](crate::PUZZLE_MAX_DIST) moves, or an empty path.
    ///
    /// Errors are those of [`bfs_path`]; [`PuzzleSpace`] contains every
    /// valid state, so none are expected.
    pub fn solve(&self, goal: &Self) -> Result<Path<Self>, SearchError> {
        bfs_path(&PuzzleSpace, self, goal, &SearchConfig::puzzle())
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::solved()
    }
}

impl TryFrom<[u8; 9]> for PuzzleState {
    type Error = SearchError;

    fn try_from(tiles: [u8; 9]) -> Result<Self, SearchError> {
        Self::new(tiles)
    }
}

impl From<PuzzleState> for [u8; 9] {
    fn from(state: PuzzleState) -> Self {
        state.tiles
    }
}

impl fmt::Debug for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleState{self}")
    }
}

impl fmt::Display for PuzzleState {
    /// `[1,2,3,4,5,6,7,8,9]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, t) in self.tiles.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{t}")?;
        }
        f.write_str("]")
    }
}

/// Errors from parsing a [`PuzzleState`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStateError {
    /// A token was not a small unsigned number.
    BadTile(String),
    /// The text did not contain exactly nine tiles.
    WrongCount(usize),
    /// Nine tiles were read but they are not a permutation of 1 through 9.
    Invalid(SearchError),
}

impl fmt::Display for ParseStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadTile(s) => write!(f, "puzzle: '{s}' is not a tile number"),
            Self::WrongCount(n) => write!(f, "puzzle: expected 9 tiles, found {n}"),
            Self::Invalid(e) => write!(f, "puzzle: {e}"),
        }
    }
}

impl std::error::Error for ParseStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl FromStr for PuzzleState {
    type Err = ParseStateError;

    /// Accepts `1,2,3,4,5,6,7,8,9`, optionally bracketed, or nine digits
    /// such as `123456789`.
    fn from_str(s: &str) -> Result<Self, ParseStateError> {
        let s = s.trim();
        let s = s.strip_prefix('[').unwrap_or(s);
        let s = s.strip_suffix(']').unwrap_or(s);

        let tokens: Vec<String> = if s.contains(',') {
            s.split(',').map(|t| t.trim().to_string()).collect()
        } else {
            s.chars()
                .filter(|c| !c.is_whitespace())
                .map(String::from)
                .collect()
        };
        if tokens.len() != 9 {
            return Err(ParseStateError::WrongCount(tokens.len()));
        }

        let mut tiles = [0u8; 9];
        for (slot, tok) in tiles.iter_mut().zip(&tokens) {
            *slot = tok
                .parse()
                .map_err(|_| ParseStateError::BadTile(tok.clone()))?;
        }
        Self::new(tiles).map_err(ParseStateError::Invalid)
    }
}

/// The implicit graph of all 8-puzzle states, joined by single moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleSpace;

impl Pather for PuzzleSpace {
    type Vertex = PuzzleState;

    fn neighbors(&self, v: &PuzzleState, buf: &mut Vec<PuzzleState>) {
        buf.extend(Direction::ALL.iter().filter_map(|&d| v.moved(d)));
    }
}
