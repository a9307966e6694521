//! Immutable rectangular cost table.
//!
//! A [`Grid`] is built once and then borrowed read-only by every search run
//! on it. Each cell holds the non-negative cost of *entering* that cell; the
//! origin's own cost is never charged. The textual form used by the classic
//! puzzle inputs is one decimal digit per cell, one row per line, and is
//! available through [`str::parse`].

use std::str::FromStr;

use crate::error::Error;

/// A `(row, col)` cell coordinate, zero-based from the top-left corner.
pub type Cell = (usize, usize);

/// Rectangular lookup table of traversal costs.
///
/// # Examples
///
/// ```
/// use runbound::Grid;
///
/// let grid: Grid = "241\n321\n325".parse().unwrap();
/// assert_eq!(grid.rows(), 3);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.cost(0, 1), Some(4));
/// assert_eq!(grid.cost(3, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
    min_cell: u32,
}

impl Grid {
    /// Build a grid from explicit rows of costs.
    ///
    /// Unlike the textual form this accepts arbitrary `u32` costs, including
    /// zero. Fails with [`Error::MalformedGrid`] when the input is empty or
    /// the rows have unequal widths.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, Error> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(Error::MalformedGrid {
                row: 0,
                reason: "grid needs at least one row and one column".into(),
            });
        }
        let cols = rows[0].len();
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::MalformedGrid {
                    row: r,
                    reason: format!("row width {} differs from {}", row.len(), cols),
                });
            }
            cells.extend_from_slice(row);
        }
        let min_cell = cells.iter().copied().min().unwrap_or(0);
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
            min_cell,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cost of entering `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn cost(&self, row: usize, col: usize) -> Option<u32> {
        if self.in_bounds(row, col) {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Whether `(row, col)` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Smallest cost appearing anywhere in the grid.
    ///
    /// This is the per-step floor behind the search heuristic. A grid that
    /// contains a 0-cost cell has a floor of 0, and the heuristic degrades to
    /// plain Dijkstra while staying admissible.
    #[inline]
    pub fn min_cell_cost(&self) -> u32 {
        self.min_cell
    }

    /// Top-left start cell.
    #[inline]
    pub fn origin(&self) -> Cell {
        (0, 0)
    }

    /// Bottom-right target cell.
    #[inline]
    pub fn target(&self) -> Cell {
        (self.rows - 1, self.cols - 1)
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parse one decimal digit per cell, one row per line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (r, line) in s.lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for c in line.chars() {
                match c.to_digit(10) {
                    Some(d) => row.push(d),
                    None => {
                        return Err(Error::MalformedGrid {
                            row: r,
                            reason: format!("invalid cost character {c:?}"),
                        })
                    }
                }
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }
}
