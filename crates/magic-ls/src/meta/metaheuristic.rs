// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Strategy interface for magic square search.
//!
//! A `Metaheuristic` takes ownership of an initial grid and returns the grid
//! it settled on, scored by the supplied evaluator, while reporting progress
//! to a monitor. The iteration budget and the early stop at cost zero are
//! shared by all strategies and checked at the top of every iteration by
//! [`termination_check`].

use crate::{
    eval::CostEvaluator,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    result::{SearchOutcome, SearchTerminationReason},
    stats::SearchStatistics,
};
use magic_model::grid::Grid;

/// Iteration budget used when none is configured.
pub const DEFAULT_ITERATIONS: u64 = 10_000;

/// A search strategy that drives a grid towards cost zero.
pub trait Metaheuristic {
    /// Returns the name of the strategy.
    fn name(&self) -> &str;

    /// Returns the configured iteration budget.
    fn iterations(&self) -> u64;

    /// Runs the search from `initial` and returns the final grid with its cost.
    ///
    /// The returned cost never exceeds the cost of `initial`.
    fn run(
        &mut self,
        initial: Grid,
        evaluator: &dyn CostEvaluator,
        monitor: &mut dyn SearchMonitor,
    ) -> SearchOutcome;
}

impl std::fmt::Debug for dyn Metaheuristic + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Metaheuristic {{ name: {} }}", self.name())
    }
}

impl std::fmt::Display for dyn Metaheuristic + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Metaheuristic: {}", self.name())
    }
}

/// Decides whether a run stops before its next iteration.
///
/// A zero cost wins over an exhausted budget, which wins over a monitor
/// request. The monitor is consulted only when the run would otherwise go on.
#[inline]
pub fn termination_check(
    statistics: &SearchStatistics,
    budget: u64,
    cost: u64,
    stop_at_optimum: bool,
    monitor: &mut dyn SearchMonitor,
) -> Option<SearchTerminationReason> {
    if stop_at_optimum && cost == 0 {
        return Some(SearchTerminationReason::Optimal);
    }

    if statistics.iterations >= budget {
        return Some(SearchTerminationReason::IterationLimit);
    }

    match monitor.search_command(statistics) {
        SearchCommand::Continue => None,
        SearchCommand::Terminate(reason) => Some(SearchTerminationReason::Aborted(reason)),
    }
}

/// Closes a run: stamps the elapsed time, notifies the monitor, and bundles
/// the outcome.
#[inline]
pub(crate) fn finish(
    reason: SearchTerminationReason,
    grid: Grid,
    cost: u64,
    mut statistics: SearchStatistics,
    start_time: std::time::Instant,
    monitor: &mut dyn SearchMonitor,
) -> SearchOutcome {
    statistics.set_total_time(start_time.elapsed());
    monitor.on_end(&grid, cost, &statistics);
    tracing::debug!(
        cost,
        iterations = statistics.iterations,
        reason = %reason,
        "run finished"
    );
    SearchOutcome::new(reason, grid, cost, statistics)
}
