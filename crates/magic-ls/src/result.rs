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

//! Search outcome and termination reporting.
//!
//! `SearchOutcome` is the single transport object a strategy hands back to its
//! caller: the final grid, its cost, the run statistics and the reason the run
//! ended. Termination reasons distinguish an exhausted iteration budget, a
//! zero-cost grid, and an abort requested by a monitor.

use crate::stats::SearchStatistics;
use magic_model::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchTerminationReason {
    /// The iteration budget was used up.
    IterationLimit,

    /// A grid of cost zero was reached.
    Optimal,

    /// A monitor requested termination (time limit, interrupt, ...).
    /// The string contains the monitor's reason.
    Aborted(String),
}

impl std::fmt::Display for SearchTerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchTerminationReason::IterationLimit => write!(f, "Iteration Limit Reached"),
            SearchTerminationReason::Optimal => write!(f, "Magic Square Found"),
            SearchTerminationReason::Aborted(msg) => write!(f, "Aborted: {}", msg),
        }
    }
}

/// Result of a search strategy after termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    termination_reason: SearchTerminationReason,
    grid: Grid,
    cost: u64,
    statistics: SearchStatistics,
}

impl SearchOutcome {
    /// Creates a new outcome.
    #[inline]
    pub fn new(
        termination_reason: SearchTerminationReason,
        grid: Grid,
        cost: u64,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            termination_reason,
            grid,
            cost,
            statistics,
        }
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &SearchTerminationReason {
        &self.termination_reason
    }

    /// Returns the final grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the cost of the final grid.
    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Returns `true` if the final grid has cost zero.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        self.cost == 0
    }

    /// Returns the statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Termination: {}", self.termination_reason)?;
        writeln!(f, "Cost: {}", self.cost)?;
        write!(f, "{}", self.grid)
    }
}
