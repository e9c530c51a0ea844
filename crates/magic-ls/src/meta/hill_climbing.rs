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

//! Hill climbing with a single random swap.
//!
//! Each iteration swaps two uniformly drawn cells and rescores the grid. The
//! swap is kept when the cost does not increase; otherwise the same two cells
//! are swapped back. A single swap is its own inverse, so only one grid is
//! ever held.

use crate::{
    eval::CostEvaluator,
    meta::metaheuristic::{DEFAULT_ITERATIONS, Metaheuristic, finish, termination_check},
    monitor::search_monitor::SearchMonitor,
    operator::SwapMove,
    result::SearchOutcome,
    stats::SearchStatistics,
};
use magic_model::grid::Grid;
use rand::Rng;
use std::time::Instant;

/// A hill climber over single random swaps.
///
/// # Attributes
/// * **Move:** one swap of two uniformly drawn cells.
/// * **Acceptance:** not worse (`candidate <= current`).
/// * **Rejection:** swap the same cells back.
/// * **Termination:** iteration budget or a monitor; optionally zero cost.
#[derive(Debug, Clone)]
pub struct HillClimbing<R> {
    rng: R,
    iterations: u64,
    stop_at_optimum: bool,
}

impl<R> HillClimbing<R>
where
    R: Rng,
{
    /// Creates a new hill climber with the default budget.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            iterations: DEFAULT_ITERATIONS,
            stop_at_optimum: false,
        }
    }

    /// Sets the iteration budget.
    #[inline]
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// When `true`, the run ends as soon as the cost reaches zero. Off by
    /// default, so the whole budget is spent.
    #[inline]
    pub fn with_stop_at_optimum(mut self, stop_at_optimum: bool) -> Self {
        self.stop_at_optimum = stop_at_optimum;
        self
    }
}

impl<R> Metaheuristic for HillClimbing<R>
where
    R: Rng,
{
    fn name(&self) -> &str {
        "HillClimbing"
    }

    fn iterations(&self) -> u64 {
        self.iterations
    }

    #[tracing::instrument(
        name = "hill_climbing",
        skip_all,
        fields(side = initial.side(), budget = self.iterations)
    )]
    fn run(
        &mut self,
        initial: Grid,
        evaluator: &dyn CostEvaluator,
        monitor: &mut dyn SearchMonitor,
    ) -> SearchOutcome {
        let start_time = Instant::now();
        let mut stats = SearchStatistics::default();

        let mut grid = initial;
        let mut cost = evaluator.cost(&grid);

        tracing::debug!(initial_cost = cost, "run started");
        monitor.on_start(&grid, cost);

        let reason = loop {
            if let Some(reason) =
                termination_check(&stats, self.iterations, cost, self.stop_at_optimum, monitor)
            {
                break reason;
            }

            stats.on_iteration();

            let mv = SwapMove::random(grid.side(), &mut self.rng);
            mv.apply(&mut grid);
            let new_cost = if mv.is_degenerate() {
                cost
            } else {
                evaluator.cost(&grid)
            };

            if new_cost <= cost {
                let improved = new_cost < cost;
                cost = new_cost;

                stats.on_accepted_move();
                monitor.on_accept(&grid, cost, &stats);

                if improved {
                    stats.on_improving_move();
                    monitor.on_new_best(&grid, cost, &stats);
                }
            } else {
                monitor.on_reject(&grid, new_cost, &stats);
                mv.apply(&mut grid);
            }

            monitor.on_iteration(cost, &stats);
        };

        finish(reason, grid, cost, stats, start_time, monitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        eval::LineDeviationEvaluator,
        monitor::{
            composite::CompositeMonitor, no_op::NoOpMonitor, search_monitor::SearchCommand,
            time_limit::TimeLimitMonitor, trace::CostTraceMonitor,
        },
        result::SearchTerminationReason,
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::{cell::Cell, time::Duration};

    fn hc(seed: u64) -> HillClimbing<ChaCha8Rng> {
        HillClimbing::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Checks after every rejection that the undo restored the accepted cost.
    struct UndoChecker {
        held: Grid,
        cost: u64,
        checks: u64,
    }

    impl SearchMonitor for UndoChecker {
        fn name(&self) -> &str {
            "UndoChecker"
        }
        fn on_start(&mut self, initial: &Grid, cost: u64) {
            self.held = initial.clone();
            self.cost = cost;
        }
        fn on_end(&mut self, best: &Grid, cost: u64, _statistics: &SearchStatistics) {
            assert_eq!(best, &self.held);
            assert_eq!(cost, self.cost);
        }
        fn on_iteration(&mut self, cost: u64, _statistics: &SearchStatistics) {
            assert_eq!(cost, self.cost);
        }
        fn on_accept(&mut self, grid: &Grid, cost: u64, _statistics: &SearchStatistics) {
            self.held = grid.clone();
            self.cost = cost;
        }
        fn on_reject(&mut self, rejected: &Grid, cost: u64, _statistics: &SearchStatistics) {
            assert!(cost > self.cost);
            assert_ne!(rejected, &self.held);
            self.checks += 1;
        }
        fn on_new_best(&mut self, _grid: &Grid, cost: u64, _statistics: &SearchStatistics) {
            assert_eq!(cost, self.cost);
        }
        fn search_command(&mut self, _statistics: &SearchStatistics) -> SearchCommand {
            SearchCommand::Continue
        }
    }

    #[test]
    fn test_name_and_defaults() {
        let h = hc(0);
        assert_eq!(h.name(), "HillClimbing");
        assert_eq!(h.iterations(), DEFAULT_ITERATIONS);
    }

    #[test]
    fn test_cost_is_non_increasing() {
        let mut trace = CostTraceMonitor::new();
        let outcome = hc(3).run(
            Grid::sequential(5).unwrap(),
            &LineDeviationEvaluator,
            &mut trace,
        );

        assert_eq!(trace.trace().len(), DEFAULT_ITERATIONS as usize);
        assert!(trace.is_non_increasing());
        assert_eq!(trace.final_cost(), Some(outcome.cost()));
        assert!(outcome.grid().is_permutation());
    }

    #[test]
    fn test_rejection_restores_accepted_grid() {
        let mut checker = UndoChecker {
            held: Grid::sequential(1).unwrap(),
            cost: 0,
            checks: 0,
        };
        let outcome = hc(17).with_iterations(2_000).run(
            Grid::sequential(4).unwrap(),
            &LineDeviationEvaluator,
            &mut checker,
        );

        assert!(checker.checks > 0);
        assert_eq!(checker.checks, outcome.statistics().rejected_moves());
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let run = |seed| {
            hc(seed).with_iterations(4_000).run(
                Grid::sequential(4).unwrap(),
                &LineDeviationEvaluator,
                &mut NoOpMonitor,
            )
        };
        let a = run(8);
        let b = run(8);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.statistics().iterations, b.statistics().iterations);
    }

    #[test]
    fn test_finds_three_by_three_magic_square() {
        let ev = LineDeviationEvaluator;
        let mut solved = 0;
        for seed in 0..32 {
            let outcome = hc(seed).with_stop_at_optimum(true).run(
                Grid::sequential(3).unwrap(),
                &ev,
                &mut NoOpMonitor,
            );
            assert!(outcome.cost() <= 24);
            assert_eq!(outcome.cost(), ev.cost(outcome.grid()));
            if outcome.is_optimal() {
                assert!(outcome.grid().is_magic());
                solved += 1;
            }
        }
        assert!(solved > 0, "no seed out of 32 reached a magic square");
    }

    #[test]
    fn test_default_keeps_running_after_reaching_zero() {
        let ev = LineDeviationEvaluator;
        for seed in 0..32 {
            let outcome = hc(seed).run(Grid::sequential(3).unwrap(), &ev, &mut NoOpMonitor);
            assert_eq!(outcome.statistics().iterations, DEFAULT_ITERATIONS);
            assert_eq!(
                outcome.termination_reason(),
                &SearchTerminationReason::IterationLimit
            );
        }
    }

    /// Counts how often the grid is scored.
    struct CountingEvaluator {
        calls: Cell<u64>,
    }

    impl CostEvaluator for CountingEvaluator {
        fn name(&self) -> &str {
            "CountingEvaluator"
        }

        fn cost(&self, grid: &Grid) -> u64 {
            self.calls.set(self.calls.get() + 1);
            LineDeviationEvaluator.cost(grid)
        }
    }

    #[test]
    fn test_degenerate_swaps_are_not_rescored() {
        let iterations = 400;
        let ev = CountingEvaluator {
            calls: Cell::new(0),
        };
        let outcome = hc(21).with_iterations(iterations).run(
            Grid::sequential(2).unwrap(),
            &ev,
            &mut NoOpMonitor,
        );
        assert_eq!(outcome.statistics().iterations, iterations);

        // Replay the same stream of draws.
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let degenerate = (0..iterations)
            .filter(|_| SwapMove::random(2, &mut rng).is_degenerate())
            .count() as u64;

        assert!(degenerate > 0);
        assert_eq!(ev.calls.get(), 1 + iterations - degenerate);
        assert_eq!(outcome.cost(), LineDeviationEvaluator.cost(outcome.grid()));
    }

    #[test]
    fn test_zero_budget_returns_initial() {
        let initial = Grid::sequential(3).unwrap();
        let outcome = hc(1)
            .with_iterations(0)
            .run(initial.clone(), &LineDeviationEvaluator, &mut NoOpMonitor);
        assert_eq!(outcome.grid(), &initial);
        assert_eq!(outcome.cost(), 24);
        assert_eq!(
            outcome.termination_reason(),
            &SearchTerminationReason::IterationLimit
        );
    }

    #[test]
    fn test_time_limit_aborts() {
        let mut composite = CompositeMonitor::new();
        composite.add_monitor(TimeLimitMonitor::with_mask(Duration::ZERO, 0));
        let outcome = hc(2).with_iterations(1_000_000).run(
            Grid::sequential(6).unwrap(),
            &LineDeviationEvaluator,
            &mut composite,
        );
        assert_eq!(
            outcome.termination_reason(),
            &SearchTerminationReason::Aborted("time limit exceeded".to_string())
        );
        assert_eq!(outcome.statistics().iterations, 0);
    }
}
