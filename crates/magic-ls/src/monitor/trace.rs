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

//! Cost trajectory recording.
//!
//! `CostTraceMonitor` keeps the cost the search holds after every iteration,
//! together with the initial and final costs. It is the cheapest way to
//! inspect convergence of a run after the fact.

use crate::{monitor::search_monitor::SearchMonitor, stats::SearchStatistics};
use magic_model::grid::Grid;

/// Records the cost held after every iteration, plus the start and end costs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostTraceMonitor {
    initial_cost: Option<u64>,
    final_cost: Option<u64>,
    trace: Vec<u64>,
    rejected: u64,
}

impl CostTraceMonitor {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cost of the grid the run started from.
    #[inline]
    pub fn initial_cost(&self) -> Option<u64> {
        self.initial_cost
    }

    /// Cost of the grid the run returned.
    #[inline]
    pub fn final_cost(&self) -> Option<u64> {
        self.final_cost
    }

    /// `trace()[i]` is the cost held after iteration `i + 1`.
    #[inline]
    pub fn trace(&self) -> &[u64] {
        &self.trace
    }

    /// Number of rejected perturbations seen.
    #[inline]
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Returns `true` if the recorded costs never increase.
    pub fn is_non_increasing(&self) -> bool {
        let start = self.initial_cost.into_iter();
        let costs: Vec<u64> = start.chain(self.trace.iter().copied()).collect();
        costs.windows(2).all(|w| w[1] <= w[0])
    }
}

impl SearchMonitor for CostTraceMonitor {
    fn name(&self) -> &str {
        "CostTraceMonitor"
    }

    fn on_start(&mut self, _initial: &Grid, cost: u64) {
        self.initial_cost = Some(cost);
        self.final_cost = None;
        self.trace.clear();
        self.rejected = 0;
    }

    fn on_end(&mut self, _best: &Grid, cost: u64, _statistics: &SearchStatistics) {
        self.final_cost = Some(cost);
    }

    fn on_iteration(&mut self, cost: u64, _statistics: &SearchStatistics) {
        self.trace.push(cost);
    }

    fn on_accept(&mut self, _grid: &Grid, _cost: u64, _statistics: &SearchStatistics) {}

    fn on_reject(&mut self, _rejected: &Grid, _cost: u64, _statistics: &SearchStatistics) {
        self.rejected += 1;
    }

    fn on_new_best(&mut self, _grid: &Grid, _cost: u64, _statistics: &SearchStatistics) {}
}
