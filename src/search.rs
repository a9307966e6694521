//! Best-first search over leg-expanded states.
//!
//! This is Dijkstra over the `(cell, axis)` state graph defined in
//! [`model`](crate::model), sharpened by an admissible remaining-cost floor:
//! every cell still to be crossed costs at least the grid-wide minimum, so
//! `manhattan_distance * min_cell_cost` never overestimates. The floor is
//! *consistent* (a leg of `k` cells shrinks it by at most `k * min_cell_cost`
//! while costing at least that), which means the first time a state pops from
//! the frontier its cost is final, and the search may stop at the first
//! settled target state.
//!
//! Ties on priority break by insertion order, so runs are fully
//! deterministic: same grid, same limits, same outcome, including the
//! reconstructed path and the expansion count.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::Error;
use crate::grid::{Cell, Grid};
use crate::limits::RunLimits;
use crate::model::{self, Axis, Direction};

const INFINITY: u64 = u64::MAX;
const ROOT: usize = usize::MAX;

/// Parent bookkeeping for one reached state: which state its best-known leg
/// came from, and that leg's heading and length.
#[derive(Copy, Clone)]
struct ParentLeg {
    from: usize,
    dir: Direction,
    len: usize,
}

impl ParentLeg {
    fn unset() -> Self {
        Self {
            from: ROOT,
            dir: Direction::East,
            len: 0,
        }
    }

    fn new(from: usize, dir: Direction, len: usize) -> Self {
        Self { from, dir, len }
    }

    fn is_set(self) -> bool {
        self.len > 0
    }
}

/// Result of a successful search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Minimum total cost of entering cells along the route.
    pub cost: u64,
    /// Every cell on one optimal route, origin first, target last.
    pub path: Vec<Cell>,
    /// Number of states settled before the search concluded.
    pub expanded: u64,
}

/// One run-length-bounded search over a borrowed grid.
///
/// The search borrows its [`Grid`] read-only, so any number of searches may
/// share one grid. Construct directly with [`Search::new`] for the defaults,
/// or through [`SearchBuilder`](crate::SearchBuilder) to set a step budget or
/// disable the heuristic.
///
/// # Examples
///
/// ```
/// use runbound::{Grid, RunLimits, Search};
///
/// let grid: Grid = "241\n321\n325".parse()?;
/// let outcome = Search::new(&grid, RunLimits::crucible()).run()?;
/// assert_eq!(outcome.cost, 11);
/// assert_eq!(outcome.path.first(), Some(&(0, 0)));
/// assert_eq!(outcome.path.last(), Some(&(2, 2)));
/// # Ok::<(), runbound::Error>(())
/// ```
pub struct Search<'g> {
    grid: &'g Grid,
    limits: RunLimits,
    step_budget: Option<u64>,
    use_heuristic: bool,
}

/// Frontier entry, min-ordered on `(priority, seq)`.
///
/// `BinaryHeap` is a max-heap, so the comparison is reversed. `seq` is the
/// insertion sequence number and makes tie-breaks deterministic.
#[derive(Copy, Clone, PartialEq, Eq)]
struct FrontierEntry {
    priority: u64,
    seq: u64,
    cost: u64,
    node: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.priority, other.seq).cmp(&(self.priority, self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'g> Search<'g> {
    /// Search with the default settings: heuristic on, no step budget.
    pub fn new(grid: &'g Grid, limits: RunLimits) -> Self {
        Self {
            grid,
            limits,
            step_budget: None,
            use_heuristic: true,
        }
    }

    pub(crate) fn with_settings(
        grid: &'g Grid,
        limits: RunLimits,
        step_budget: Option<u64>,
        use_heuristic: bool,
    ) -> Self {
        Self {
            grid,
            limits,
            step_budget,
            use_heuristic,
        }
    }

    /// The grid this search runs over.
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// The run limits this search enforces.
    pub fn limits(&self) -> RunLimits {
        self.limits
    }

    /// Run the search to completion.
    ///
    /// Returns the minimum cost, one optimal path, and the expansion count.
    /// Fails with [`Error::NoPathFound`] when the frontier drains without
    /// settling a target state, and with [`Error::Timeout`] when a step
    /// budget is set and more states get settled than it allows. The pop that
    /// settles the target always concludes the search before the budget is
    /// consulted.
    pub fn run(&self) -> Result<Outcome, Error> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "search_run",
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            min_run = self.limits.min_run(),
            max_run = self.limits.max_run()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let target = self.grid.target();
        if self.grid.origin() == target {
            // Already there; no cell is ever entered and no run constraint
            // applies to an empty route.
            return Ok(Outcome {
                cost: 0,
                path: vec![self.grid.origin()],
                expanded: 0,
            });
        }

        let slots = self.grid.rows() * self.grid.cols() * 2;
        let mut best: Vec<u64> = vec![INFINITY; slots];
        let mut parent: Vec<ParentLeg> = vec![ParentLeg::unset(); slots];
        let mut frontier = BinaryHeap::new();
        let mut scratch: Vec<model::Leg> = Vec::new();
        let mut seq = 0u64;
        let mut expanded = 0u64;

        model::initial_legs(self.grid, self.limits, &mut scratch);
        for leg in scratch.drain(..) {
            let node = self.node_index(leg.to, leg.dir.axis());
            if leg.cost < best[node] {
                best[node] = leg.cost;
                parent[node] = ParentLeg::new(ROOT, leg.dir, leg.len);
                frontier.push(FrontierEntry {
                    priority: leg.cost + self.remaining_floor(leg.to),
                    seq,
                    cost: leg.cost,
                    node,
                });
                seq += 1;
            }
        }

        while let Some(entry) = frontier.pop() {
            if entry.cost > best[entry.node] {
                // Stale: a cheaper route settled this state earlier.
                continue;
            }
            expanded += 1;

            let (cell, axis) = self.node_state(entry.node);
            if cell == target {
                let path = self.rebuild_path(&parent, entry.node);
                return Ok(Outcome {
                    cost: entry.cost,
                    path,
                    expanded,
                });
            }
            if let Some(budget) = self.step_budget {
                if expanded > budget {
                    return Err(Error::Timeout { budget });
                }
            }

            for dir in axis.perpendicular().directions() {
                model::legs(self.grid, self.limits, cell, dir, &mut scratch);
                for leg in scratch.drain(..) {
                    let node = self.node_index(leg.to, leg.dir.axis());
                    let cand = entry.cost + leg.cost;
                    if cand < best[node] {
                        best[node] = cand;
                        parent[node] = ParentLeg::new(entry.node, leg.dir, leg.len);
                        frontier.push(FrontierEntry {
                            priority: cand + self.remaining_floor(leg.to),
                            seq,
                            cost: cand,
                            node,
                        });
                        seq += 1;
                    }
                }
            }
        }

        Err(Error::NoPathFound)
    }

    /// Admissible floor on the remaining cost from `cell` to the target.
    #[inline]
    fn remaining_floor(&self, (row, col): Cell) -> u64 {
        if !self.use_heuristic {
            return 0;
        }
        let (tr, tc) = self.grid.target();
        // The target is the bottom-right corner, so it is never above or
        // left of any cell.
        let dist = (tr - row) + (tc - col);
        dist as u64 * u64::from(self.grid.min_cell_cost())
    }

    #[inline]
    fn node_index(&self, (row, col): Cell, axis: Axis) -> usize {
        (row * self.grid.cols() + col) * 2 + axis.index()
    }

    #[inline]
    fn node_state(&self, node: usize) -> (Cell, Axis) {
        let axis = if node % 2 == 0 {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        let flat = node / 2;
        ((flat / self.grid.cols(), flat % self.grid.cols()), axis)
    }

    /// Walk parent legs back from the settled target node and expand each
    /// leg into the cells it entered.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, parent))
    )]
    fn rebuild_path(&self, parent: &[ParentLeg], node: usize) -> Vec<Cell> {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        let mut path = Vec::new();
        let mut current = node;
        loop {
            let leg = parent[current];
            debug_assert!(leg.is_set(), "settled state has a parent leg");
            let (mut cell, _) = self.node_state(current);
            for _ in 0..leg.len {
                path.push(cell);
                cell = leg
                    .dir
                    .reverse()
                    .step(cell, rows, cols)
                    .expect("path cell is in bounds");
            }
            if leg.from == ROOT {
                break;
            }
            current = leg.from;
        }
        path.push(self.grid.origin());
        path.reverse();
        path
    }
}

/// Run two constraint profiles over the same grid.
///
/// The classic puzzle asks for both the crucible and the ultra-crucible
/// answer on one grid; this runs them as independent searches sharing only
/// the read-only grid. With the `parallel` feature the two searches run on
/// rayon worker threads.
#[cfg(feature = "parallel")]
pub fn solve_pair(
    grid: &Grid,
    first: RunLimits,
    second: RunLimits,
) -> (Result<Outcome, Error>, Result<Outcome, Error>) {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("solve_pair", parallel = true);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    rayon::join(
        || Search::new(grid, first).run(),
        || Search::new(grid, second).run(),
    )
}

/// Run two constraint profiles over the same grid.
///
/// The classic puzzle asks for both the crucible and the ultra-crucible
/// answer on one grid; this runs them as independent searches sharing only
/// the read-only grid. With the `parallel` feature the two searches run on
/// rayon worker threads.
#[cfg(not(feature = "parallel"))]
pub fn solve_pair(
    grid: &Grid,
    first: RunLimits,
    second: RunLimits,
) -> (Result<Outcome, Error>, Result<Outcome, Error>) {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("solve_pair", parallel = false);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    (
        Search::new(grid, first).run(),
        Search::new(grid, second).run(),
    )
}
