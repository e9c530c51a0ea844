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

//! Progress logging through `tracing`.
//!
//! `LogMonitor` emits an `info` event when a run starts, periodic progress
//! events while it runs, and a summary when it ends. Progress events are
//! throttled twice: the clock is read only on iterations where
//! `iterations & clock_check_mask == 0`, and an event is emitted only if at
//! least `log_interval` passed since the previous one. New best costs are
//! logged at `debug` level.

use crate::{monitor::search_monitor::SearchMonitor, stats::SearchStatistics};
use magic_model::grid::Grid;
use std::time::{Duration, Instant};

/// A monitor that reports run progress as `tracing` events.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_cost: Option<u64>,
    lines_logged: u64,
}

impl LogMonitor {
    /// Creates a monitor that logs at most once per `log_interval`, reading
    /// the clock only on iterations where `iterations & clock_check_mask == 0`.
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_cost: None,
            lines_logged: 0,
        }
    }

    /// Number of progress events emitted since the last `on_start`.
    #[inline]
    pub fn lines_logged(&self) -> u64 {
        self.lines_logged
    }

    #[inline(always)]
    fn log_line(&mut self, cost: u64, stats: &SearchStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time);

        tracing::info!(
            elapsed = ?elapsed,
            iterations = stats.iterations,
            current_cost = cost,
            best_cost = self.best_cost.unwrap_or(cost),
            accepted = stats.accepted_moves,
            rejected = stats.rejected_moves(),
            "search progress"
        );

        self.last_log_time = now;
        self.lines_logged += 1;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 0x0FFF)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl SearchMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_start(&mut self, initial: &Grid, cost: u64) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_cost = Some(cost);
        self.lines_logged = 0;
        tracing::info!(side = initial.side(), initial_cost = cost, "search started");
    }

    fn on_end(&mut self, _best: &Grid, cost: u64, statistics: &SearchStatistics) {
        tracing::info!(
            cost,
            iterations = statistics.iterations,
            accepted = statistics.accepted_moves,
            improving = statistics.improving_moves,
            elapsed = ?statistics.time_total,
            "search finished"
        );
    }

    fn on_iteration(&mut self, cost: u64, statistics: &SearchStatistics) {
        if (statistics.iterations & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(cost, statistics);
        }
    }

    fn on_accept(&mut self, _grid: &Grid, _cost: u64, _statistics: &SearchStatistics) {}

    fn on_reject(&mut self, _rejected: &Grid, _cost: u64, _statistics: &SearchStatistics) {}

    fn on_new_best(&mut self, _grid: &Grid, cost: u64, statistics: &SearchStatistics) {
        self.best_cost = Some(cost);
        tracing::debug!(cost, iteration = statistics.iterations, "new best");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_logs_on_masked_iterations() {
        let mut m = LogMonitor::new(Duration::ZERO, 0x1);
        let g = Grid::sequential(3).unwrap();
        m.on_start(&g, 24);

        let mut stats = SearchStatistics::default();
        for i in 1..=6 {
            stats.iterations = i;
            m.on_iteration(10, &stats);
        }
        // Iterations 2, 4 and 6 pass the mask.
        assert_eq!(m.lines_logged(), 3);

        m.on_start(&g, 24);
        assert_eq!(m.lines_logged(), 0);
    }

    #[test]
    fn test_long_interval_suppresses_progress() {
        let mut m = LogMonitor::new(Duration::from_secs(3600), 0);
        let g = Grid::sequential(3).unwrap();
        m.on_start(&g, 24);
        let stats = SearchStatistics::default();
        for _ in 0..100 {
            m.on_iteration(10, &stats);
        }
        assert_eq!(m.lines_logged(), 0);
        assert_eq!(m.to_string(), "LogMonitor(log_interval: 3600s, clock_check_mask: 0)");
    }
}
