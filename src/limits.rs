//! Run-length bounds on straight travel.

use crate::error::Error;

/// Inclusive bounds on how many consecutive cells the mover must and may
/// cover in one straight run before turning or stopping.
///
/// A run shorter than `min_run` may neither turn nor stop; a run reaching
/// `max_run` must turn (or stop, if the target cell has been reached).
///
/// # Examples
///
/// ```
/// use runbound::RunLimits;
///
/// let limits = RunLimits::new(2, 5).unwrap();
/// assert_eq!(limits.min_run(), 2);
/// assert_eq!(limits.max_run(), 5);
/// assert!(RunLimits::new(0, 5).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunLimits {
    min_run: usize,
    max_run: usize,
}

impl RunLimits {
    /// Validate and build run limits.
    ///
    /// Fails with [`Error::InvalidConfig`] unless `1 <= min_run <= max_run`.
    pub fn new(min_run: usize, max_run: usize) -> Result<Self, Error> {
        if min_run < 1 || max_run < min_run {
            return Err(Error::InvalidConfig { min_run, max_run });
        }
        Ok(Self { min_run, max_run })
    }

    /// The standard crucible profile: free to turn after any cell, forced to
    /// turn after three.
    pub fn crucible() -> Self {
        Self {
            min_run: 1,
            max_run: 3,
        }
    }

    /// The ultra crucible profile: four cells minimum before any turn or
    /// stop, ten maximum.
    pub fn ultra() -> Self {
        Self {
            min_run: 4,
            max_run: 10,
        }
    }

    /// Minimum straight run before a turn or stop is legal.
    #[inline]
    pub fn min_run(&self) -> usize {
        self.min_run
    }

    /// Maximum straight run before a turn is forced.
    #[inline]
    pub fn max_run(&self) -> usize {
        self.max_run
    }
}
