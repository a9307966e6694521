use crate::grid::Grid;
use crate::limits::RunLimits;
use crate::search::Search;

/// Configures optional knobs before building a [`Search`]: a step budget
/// and the heuristic toggle. The defaults are no budget, heuristic on.
pub struct SearchBuilder<'g> {
    grid: &'g Grid,
    limits: RunLimits,
    step_budget: Option<u64>,
    use_heuristic: bool,
}

impl<'g> SearchBuilder<'g> {
    pub fn new(grid: &'g Grid, limits: RunLimits) -> Self {
        Self {
            grid,
            limits,
            step_budget: None,
            use_heuristic: true,
        }
    }

    /// Cap the number of settled states; exceeding the cap fails the run
    /// with [`Error::Timeout`](crate::Error::Timeout).
    pub fn with_step_budget(mut self, budget: u64) -> Self {
        self.step_budget = Some(budget);
        self
    }

    /// Disabling the remaining-cost floor turns the search into plain
    /// Dijkstra; answers are identical, only the expansion count changes.
    pub fn with_heuristic(mut self, enabled: bool) -> Self {
        self.use_heuristic = enabled;
        self
    }

    pub fn build(self) -> Search<'g> {
        Search::with_settings(self.grid, self.limits, self.step_budget, self.use_heuristic)
    }
}
