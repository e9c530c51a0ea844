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

//! Time-based termination for search runs.
//!
//! `TimeLimitMonitor` stops a run after a configurable wall-clock duration.
//! Clock reads are throttled with a mask over the iteration counter: only
//! when `iterations & mask == 0` is the clock queried. The default mask of
//! `0x03FF` checks roughly every 1024 iterations. The start time is reset in
//! `on_start`, so one monitor can time several runs.

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::SearchStatistics,
};
use magic_model::grid::Grid;
use std::time::{Duration, Instant};

/// A wall-clock monitor that terminates a search after a fixed duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    start_time: Instant,
    time_limit: Duration,
    clock_check_mask: u64,
}

impl TimeLimitMonitor {
    /// Checks the clock every 1024 iterations.
    const DEFAULT_CLOCK_CHECK_MASK: u64 = 0x03FF;

    /// Creates a new `TimeLimitMonitor` with the specified time limit.
    pub fn new(time_limit: Duration) -> Self {
        Self::with_mask(time_limit, Self::DEFAULT_CLOCK_CHECK_MASK)
    }

    /// Creates a new `TimeLimitMonitor` with a custom clock check mask.
    /// Lower mask values check more often; higher values check less often.
    pub fn with_mask(time_limit: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            time_limit,
            clock_check_mask,
        }
    }

    /// Returns the configured limit.
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl SearchMonitor for TimeLimitMonitor {
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_start(&mut self, _initial: &Grid, _cost: u64) {
        self.start_time = Instant::now();
    }

    fn on_end(&mut self, _best: &Grid, _cost: u64, _statistics: &SearchStatistics) {}
    fn on_iteration(&mut self, _cost: u64, _statistics: &SearchStatistics) {}
    fn on_accept(&mut self, _grid: &Grid, _cost: u64, _statistics: &SearchStatistics) {}
    fn on_reject(&mut self, _rejected: &Grid, _cost: u64, _statistics: &SearchStatistics) {}
    fn on_new_best(&mut self, _grid: &Grid, _cost: u64, _statistics: &SearchStatistics) {}

    fn search_command(&mut self, statistics: &SearchStatistics) -> SearchCommand {
        if (statistics.iterations & self.clock_check_mask) == 0
            && self.start_time.elapsed() >= self.time_limit
        {
            return SearchCommand::Terminate("time limit exceeded".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_terminates_on_checked_iteration() {
        let mut m = TimeLimitMonitor::with_mask(Duration::ZERO, 0x3);
        let g = Grid::sequential(3).unwrap();
        m.on_start(&g, 24);

        let mut stats = SearchStatistics {
            iterations: 1,
            ..Default::default()
        };
        // Masked out: the clock is not consulted.
        assert_eq!(m.search_command(&stats), SearchCommand::Continue);

        stats.iterations = 4;
        assert_eq!(
            m.search_command(&stats),
            SearchCommand::Terminate("time limit exceeded".to_string())
        );
    }

    #[test]
    fn test_generous_limit_continues() {
        let mut m = TimeLimitMonitor::new(Duration::from_secs(3600));
        assert_eq!(m.time_limit(), Duration::from_secs(3600));
        assert_eq!(
            m.search_command(&SearchStatistics::default()),
            SearchCommand::Continue
        );
    }
}
