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

//! Statistics reporting for magic square search runs.
//!
//! A lightweight container for the aggregate metrics of a single run: the
//! number of iterations, how many perturbations were accepted, how many of
//! those strictly lowered the cost, and the total elapsed time. Counters use
//! saturating arithmetic so the hot loop never traps on overflow.

use std::time::Duration;

/// Counters collected during a single search run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchStatistics {
    /// Number of iterations performed.
    pub iterations: u64,

    /// Number of perturbations kept (new cost not worse than the current cost).
    pub accepted_moves: u64,

    /// Number of accepted perturbations that strictly lowered the cost.
    pub improving_moves: u64,

    /// Total time taken by the run.
    pub time_total: Duration,
}

impl SearchStatistics {
    /// Called at each iteration of the search.
    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    /// Called when a perturbation is accepted.
    #[inline]
    pub fn on_accepted_move(&mut self) {
        self.accepted_moves = self.accepted_moves.saturating_add(1);
    }

    /// Called when an accepted perturbation strictly improved the cost.
    #[inline]
    pub fn on_improving_move(&mut self) {
        self.improving_moves = self.improving_moves.saturating_add(1);
    }

    /// Sets the total time taken by the run.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Number of perturbations that were undone.
    #[inline]
    pub fn rejected_moves(&self) -> u64 {
        self.iterations.saturating_sub(self.accepted_moves)
    }

    /// Fraction of iterations whose perturbation was kept, in `[0, 1]`.
    #[inline]
    pub fn acceptance_rate(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.accepted_moves as f64 / self.iterations as f64
        }
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Magic-LS Statistics:")?;
        writeln!(f, "   Iterations:        {}", self.iterations)?;
        writeln!(f, "   Accepted Moves:    {}", self.accepted_moves)?;
        writeln!(f, "   Improving Moves:   {}", self.improving_moves)?;
        writeln!(f, "   Rejected Moves:    {}", self.rejected_moves())?;
        writeln!(f, "   Acceptance Rate:   {:.2}%", self.acceptance_rate() * 100.0)?;
        writeln!(f, "   Total Time:        {:?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SearchStatistics;

    #[test]
    fn test_counters_and_derived_values() {
        let mut s = SearchStatistics::default();
        assert_eq!(s.acceptance_rate(), 0.0);

        for _ in 0..4 {
            s.on_iteration();
        }
        s.on_accepted_move();
        s.on_accepted_move();
        s.on_improving_move();

        assert_eq!(s.iterations, 4);
        assert_eq!(s.accepted_moves, 2);
        assert_eq!(s.improving_moves, 1);
        assert_eq!(s.rejected_moves(), 2);
        assert!((s.acceptance_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_counters_saturate() {
        let mut s = SearchStatistics {
            iterations: u64::MAX,
            ..Default::default()
        };
        s.on_iteration();
        assert_eq!(s.iterations, u64::MAX);
    }

    #[test]
    fn test_display_lists_counters() {
        let s = SearchStatistics {
            iterations: 10,
            accepted_moves: 3,
            improving_moves: 1,
            ..Default::default()
        };
        let text = s.to_string();
        assert!(text.contains("Iterations:        10"));
        assert!(text.contains("Rejected Moves:    7"));
        assert!(text.contains("Acceptance Rate:   30.00%"));
    }
}
