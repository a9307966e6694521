//! Typed failures for grid construction and search runs.
//!
//! Every failure is reported as a value to the immediate caller; the engine
//! never retries internally, since re-running a deterministic search on the
//! same input cannot change the outcome.

use thiserror::Error;

/// Errors produced while building a [`Grid`](crate::Grid) or running a
/// [`Search`](crate::Search).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The grid input is not a rectangular table of non-negative costs.
    #[error("malformed grid at row {row}: {reason}")]
    MalformedGrid { row: usize, reason: String },

    /// Run limits violate `1 <= min_run <= max_run`.
    #[error("invalid run limits: min_run={min_run}, max_run={max_run}")]
    InvalidConfig { min_run: usize, max_run: usize },

    /// The frontier drained without settling any state on the target cell.
    #[error("no route to the target satisfies the run limits")]
    NoPathFound,

    /// The step budget ran out before the search concluded.
    #[error("search exceeded its budget of {budget} expansions")]
    Timeout { budget: u64 },
}
