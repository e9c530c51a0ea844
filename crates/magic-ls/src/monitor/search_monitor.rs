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

//! Monitoring interface for magic square search runs.
//!
//! Monitors observe the lifecycle of a strategy: start and end, every
//! iteration, and each accepted, rejected or improving perturbation.
//! Implementations can stream logs, record trajectories, or stop the run by
//! returning [`SearchCommand::Terminate`] from `search_command`, which the
//! strategies consult once per iteration. The default `search_command`
//! continues, so passive monitors stay lightweight.

use crate::stats::SearchStatistics;
use magic_model::grid::Grid;

/// The instruction a monitor hands back to the search loop.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// A monitor for magic square search strategies.
pub trait SearchMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once before the first iteration with the initial grid and its cost.
    fn on_start(&mut self, initial: &Grid, cost: u64);

    /// Called once after the last iteration with the returned grid and its cost.
    fn on_end(&mut self, best: &Grid, cost: u64, statistics: &SearchStatistics);

    /// Called at the end of every iteration with the cost the search holds.
    fn on_iteration(&mut self, cost: u64, statistics: &SearchStatistics);

    /// Called when a perturbation is kept.
    fn on_accept(&mut self, grid: &Grid, cost: u64, statistics: &SearchStatistics);

    /// Called when a perturbation is about to be undone.
    fn on_reject(&mut self, rejected: &Grid, cost: u64, statistics: &SearchStatistics);

    /// Called when an accepted perturbation strictly lowered the cost.
    fn on_new_best(&mut self, grid: &Grid, cost: u64, statistics: &SearchStatistics);

    /// Determines the command for the next iteration.
    fn search_command(&mut self, _statistics: &SearchStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
}

impl std::fmt::Debug for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor {{ name: {} }}", self.name())
    }
}

impl std::fmt::Display for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor: {}", self.name())
    }
}
