//! Run-length-bounded minimum-cost routing over weighted grids.
//!
//! Given a rectangular grid of non-negative entry costs, this crate finds
//! the cheapest route from the top-left cell to the bottom-right cell for a
//! mover that must cover between `min_run` and `max_run` consecutive cells
//! in a straight line before every turn or stop, and may never reverse.
//!
//! ## Core idea
//! 1. Model each position together with the *axis* of the straight leg that
//!    reached it; that pair is the entire search state.
//! 2. Expand whole legs at a time: every transition commits to a
//!    perpendicular direction and a length within the run limits, charging
//!    the summed cost of the cells the leg enters.
//! 3. Run best-first search with an admissible remaining-cost floor over
//!    that state graph; the first settled state on the target cell is the
//!    answer.
//!
//! Because every stored state ends a complete leg, every stored state is a
//! legal stopping point, and stopping on the target needs no extra check.
//!
//! ## Quick start
//! ```
//! use runbound::{Grid, RunLimits, Search};
//!
//! let grid: Grid = "241\n321\n325".parse()?;
//! let outcome = Search::new(&grid, RunLimits::crucible()).run()?;
//! assert_eq!(outcome.cost, 11);
//! assert_eq!(outcome.path.first(), Some(&(0, 0)));
//! assert_eq!(outcome.path.last(), Some(&(2, 2)));
//! # Ok::<(), runbound::Error>(())
//! ```
//!
//! ## Constraint profiles
//! [`RunLimits::crucible`] (turn after any cell, forced after three) and
//! [`RunLimits::ultra`] (four cells minimum before a turn or stop, ten
//! maximum) are the two classic profiles; arbitrary bounds go through
//! [`RunLimits::new`]. [`solve_pair`] runs two profiles over one shared
//! grid, on rayon worker threads when the `parallel` feature is enabled.

pub mod builder;
pub mod error;
pub mod grid;
pub mod limits;
pub mod model;
pub mod search;

pub use crate::builder::SearchBuilder;
pub use crate::error::Error;
pub use crate::grid::{Cell, Grid};
pub use crate::limits::RunLimits;
pub use crate::search::{solve_pair, Outcome, Search};
