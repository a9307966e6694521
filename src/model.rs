//! Search states and their legal successors.
//!
//! The mover's future is fully determined by its cell and the *axis* of the
//! straight leg that brought it there: the next leg must run perpendicular to
//! that axis, because continuing straight is subsumed by a longer leg and
//! reversing is illegal. `(row, col, axis)` is therefore the whole
//! deduplication key. Every stored state ends a complete leg of at least
//! `min_run` cells, so every stored state is also a legal stopping point.

use crate::grid::{Cell, Grid};
use crate::limits::RunLimits;

/// Cardinal movement direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The axis this direction travels along.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::East | Direction::West => Axis::Horizontal,
            Direction::North | Direction::South => Axis::Vertical,
        }
    }

    /// The opposite direction, which is never a legal successor heading.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// One-cell displacement from `cell`, or `None` when it would leave a
    /// `rows x cols` grid.
    #[inline]
    pub fn step(self, (row, col): Cell, rows: usize, cols: usize) -> Option<Cell> {
        match self {
            Direction::North => row.checked_sub(1).map(|r| (r, col)),
            Direction::West => col.checked_sub(1).map(|c| (row, c)),
            Direction::South => (row + 1 < rows).then(|| (row + 1, col)),
            Direction::East => (col + 1 < cols).then(|| (row, col + 1)),
        }
    }
}

/// Movement axis. Two opposite directions share one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The other axis.
    #[inline]
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// The two directions running along this axis.
    #[inline]
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Horizontal => [Direction::East, Direction::West],
            Axis::Vertical => [Direction::South, Direction::North],
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }
}

/// One committed straight leg: where it ends, its heading, its length, and
/// the summed cost of the `len` cells it enters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Leg {
    pub to: Cell,
    pub dir: Direction,
    pub len: usize,
    pub cost: u64,
}

/// Push onto `out` every legal leg leaving `from` in direction `dir`.
///
/// Walks cell by cell accumulating entered-cell costs, and emits one leg per
/// length in `[min_run, max_run]` that stays inside the grid. Hitting the
/// border stops the walk; it never wraps or clamps.
pub(crate) fn legs(grid: &Grid, limits: RunLimits, from: Cell, dir: Direction, out: &mut Vec<Leg>) {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut at = from;
    let mut cost = 0u64;
    for len in 1..=limits.max_run() {
        at = match dir.step(at, rows, cols) {
            Some(next) => next,
            None => return,
        };
        cost += u64::from(grid.cost(at.0, at.1).expect("stepped cell is in bounds"));
        if len >= limits.min_run() {
            out.push(Leg {
                to: at,
                dir,
                len,
                cost,
            });
        }
    }
}

/// Push the legal first legs from the origin: East and South only, since the
/// origin sits in the top-left corner and has no arrival heading.
pub(crate) fn initial_legs(grid: &Grid, limits: RunLimits, out: &mut Vec<Leg>) {
    legs(grid, limits, grid.origin(), Direction::East, out);
    legs(grid, limits, grid.origin(), Direction::South, out);
}
