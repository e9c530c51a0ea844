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

//! Simple Random hyper-heuristic (SRHH).
//!
//! Each iteration picks one low-level heuristic uniformly from the catalog,
//! applies it to the working grid and rescores. The perturbed grid is kept
//! when its cost does not exceed the cost of the last accepted grid; the
//! accepted grid is then snapshotted. Otherwise the working grid is restored
//! from the snapshot, discarding the whole perturbation, so heuristics never
//! need an inverse.
//!
//! The snapshot is one `O(n^2)` copy per iteration. The returned grid is
//! always the last accepted one.

use crate::{
    eval::CostEvaluator,
    meta::metaheuristic::{DEFAULT_ITERATIONS, Metaheuristic, finish, termination_check},
    monitor::search_monitor::SearchMonitor,
    operator::HeuristicSet,
    result::SearchOutcome,
    stats::SearchStatistics,
};
use magic_model::grid::Grid;
use rand::Rng;
use std::time::Instant;

/// A hyper-heuristic that selects low-level heuristics uniformly at random.
///
/// # Attributes
/// * **Selection:** uniform over the `HeuristicSet`.
/// * **Acceptance:** not worse (`candidate <= accepted`).
/// * **Rejection:** full restore from the last accepted snapshot.
/// * **Termination:** iteration budget or a monitor; optionally zero cost.
#[derive(Debug)]
pub struct SimpleRandomHyperHeuristic<R> {
    heuristics: HeuristicSet,
    rng: R,
    iterations: u64,
    stop_at_optimum: bool,
}

impl<R> SimpleRandomHyperHeuristic<R>
where
    R: Rng,
{
    /// Creates a new SRHH over the default catalog with the default budget.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self {
            heuristics: HeuristicSet::default(),
            rng,
            iterations: DEFAULT_ITERATIONS,
            stop_at_optimum: false,
        }
    }

    /// Replaces the heuristic catalog.
    #[inline]
    pub fn with_heuristics(mut self, heuristics: HeuristicSet) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Sets the iteration budget.
    #[inline]
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// When `true`, the run ends as soon as the accepted cost reaches zero.
    /// Off by default, so the whole budget is spent and later sideways moves
    /// may still replace the returned square with another one.
    #[inline]
    pub fn with_stop_at_optimum(mut self, stop_at_optimum: bool) -> Self {
        self.stop_at_optimum = stop_at_optimum;
        self
    }

    /// Returns the heuristic catalog.
    #[inline]
    pub fn heuristics(&self) -> &HeuristicSet {
        &self.heuristics
    }
}

impl<R> Metaheuristic for SimpleRandomHyperHeuristic<R>
where
    R: Rng,
{
    fn name(&self) -> &str {
        "SimpleRandomHyperHeuristic"
    }

    fn iterations(&self) -> u64 {
        self.iterations
    }

    #[tracing::instrument(
        name = "srhh",
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

        let mut current = initial;
        let mut best = current.clone();
        let mut best_cost = evaluator.cost(&current);

        tracing::debug!(
            initial_cost = best_cost,
            heuristics = self.heuristics.len(),
            "run started"
        );
        monitor.on_start(&current, best_cost);

        let reason = loop {
            if let Some(reason) = termination_check(
                &stats,
                self.iterations,
                best_cost,
                self.stop_at_optimum,
                monitor,
            ) {
                break reason;
            }

            stats.on_iteration();

            let h = self.heuristics.choose(&mut self.rng);
            self.heuristics.apply(h, &mut current, &mut self.rng);
            let new_cost = evaluator.cost(&current);
            tracing::trace!(
                heuristic = self.heuristics.name_of(h).unwrap_or("unknown"),
                new_cost,
                best_cost,
                "heuristic applied"
            );

            if new_cost <= best_cost {
                let improved = new_cost < best_cost;
                best_cost = new_cost;
                best.clone_from(&current);

                stats.on_accepted_move();
                monitor.on_accept(&best, best_cost, &stats);

                if improved {
                    stats.on_improving_move();
                    monitor.on_new_best(&best, best_cost, &stats);
                }
            } else {
                monitor.on_reject(&current, new_cost, &stats);
                current.clone_from(&best);
            }

            debug_assert_eq!(
                current,
                best,
                "called `SimpleRandomHyperHeuristic::run` and the working grid diverged from the accepted snapshot"
            );

            monitor.on_iteration(best_cost, &stats);
        };

        finish(reason, best, best_cost, stats, start_time, monitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        eval::LineDeviationEvaluator,
        monitor::{interrupt::InterruptMonitor, no_op::NoOpMonitor, trace::CostTraceMonitor},
        operator::{LowLevelHeuristic, RandomSwap},
        result::SearchTerminationReason,
    };
    use rand::{SeedableRng, rngs::StdRng};
    use rand_chacha::ChaCha8Rng;
    use std::sync::atomic::AtomicBool;

    fn srhh(seed: u64) -> SimpleRandomHyperHeuristic<ChaCha8Rng> {
        SimpleRandomHyperHeuristic::new(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_name_and_defaults() {
        let s = srhh(0);
        assert_eq!(s.name(), "SimpleRandomHyperHeuristic");
        assert_eq!(s.iterations(), DEFAULT_ITERATIONS);
        assert_eq!(s.heuristics().len(), 2);
    }

    #[test]
    fn test_best_cost_is_non_increasing() {
        let mut trace = CostTraceMonitor::new();
        let outcome = srhh(11).run(
            Grid::sequential(4).unwrap(),
            &LineDeviationEvaluator,
            &mut trace,
        );

        assert_eq!(trace.trace().len(), DEFAULT_ITERATIONS as usize);
        assert!(trace.is_non_increasing());
        assert_eq!(trace.final_cost(), Some(outcome.cost()));
        assert_eq!(
            outcome.termination_reason(),
            &SearchTerminationReason::IterationLimit
        );
    }

    #[test]
    fn test_outcome_is_consistent_and_not_worse() {
        let ev = LineDeviationEvaluator;
        let initial = Grid::sequential(5).unwrap();
        let initial_cost = ev.cost(&initial);

        let outcome = srhh(5)
            .with_iterations(2_000)
            .run(initial, &ev, &mut NoOpMonitor);

        assert!(outcome.cost() <= initial_cost);
        assert_eq!(outcome.cost(), ev.cost(outcome.grid()));
        assert!(outcome.grid().is_permutation());
        assert_eq!(outcome.statistics().iterations, 2_000);
        assert_eq!(
            outcome.statistics().accepted_moves + outcome.statistics().rejected_moves(),
            2_000
        );
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let run = |seed| {
            srhh(seed).with_iterations(3_000).run(
                Grid::sequential(4).unwrap(),
                &LineDeviationEvaluator,
                &mut NoOpMonitor,
            )
        };
        let a = run(42);
        let b = run(42);

        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.cost(), b.cost());
        assert_eq!(a.statistics().accepted_moves, b.statistics().accepted_moves);
    }

    #[test]
    fn test_finds_three_by_three_magic_square() {
        let ev = LineDeviationEvaluator;
        let mut solved = 0;
        for seed in 0..32 {
            let outcome = srhh(seed).with_stop_at_optimum(true).run(
                Grid::sequential(3).unwrap(),
                &ev,
                &mut NoOpMonitor,
            );
            assert!(outcome.cost() <= 24);
            if outcome.is_optimal() {
                assert!(outcome.grid().is_magic());
                assert_eq!(
                    outcome.termination_reason(),
                    &SearchTerminationReason::Optimal
                );
                solved += 1;
            }
        }
        assert!(solved > 0, "no seed out of 32 reached a magic square");
    }

    #[test]
    fn test_single_cell_is_optimal_immediately() {
        let outcome = srhh(0).with_stop_at_optimum(true).run(
            Grid::sequential(1).unwrap(),
            &LineDeviationEvaluator,
            &mut NoOpMonitor,
        );
        assert_eq!(outcome.cost(), 0);
        assert_eq!(outcome.statistics().iterations, 0);
        assert_eq!(
            outcome.termination_reason(),
            &SearchTerminationReason::Optimal
        );
    }

    #[test]
    fn test_default_spends_whole_budget_at_zero_cost() {
        let outcome = srhh(0).with_iterations(250).run(
            Grid::sequential(1).unwrap(),
            &LineDeviationEvaluator,
            &mut NoOpMonitor,
        );
        assert_eq!(outcome.cost(), 0);
        assert_eq!(outcome.statistics().iterations, 250);
        assert_eq!(outcome.statistics().accepted_moves, 250);
        assert_eq!(
            outcome.termination_reason(),
            &SearchTerminationReason::IterationLimit
        );
    }

    #[test]
    fn test_stop_at_optimum_returns_first_square_reached() {
        // With the flag set, the run ends on the iteration that first reaches
        // zero, so it matches a fixed-budget run cut at that iteration.
        let ev = LineDeviationEvaluator;
        for seed in 0..32 {
            let early = srhh(seed).with_stop_at_optimum(true).run(
                Grid::sequential(3).unwrap(),
                &ev,
                &mut NoOpMonitor,
            );
            if !early.is_optimal() {
                continue;
            }
            let cut = srhh(seed)
                .with_iterations(early.statistics().iterations)
                .run(Grid::sequential(3).unwrap(), &ev, &mut NoOpMonitor);
            assert_eq!(cut.grid(), early.grid());
            assert_eq!(
                cut.termination_reason(),
                &SearchTerminationReason::IterationLimit
            );
            return;
        }
        panic!("no seed out of 32 reached a magic square");
    }

    #[test]
    fn test_interrupt_aborts_before_first_iteration() {
        let flag = AtomicBool::new(true);
        let mut monitor = InterruptMonitor::new(&flag);
        let initial = Grid::sequential(3).unwrap();
        let outcome = srhh(1).run(initial.clone(), &LineDeviationEvaluator, &mut monitor);

        assert_eq!(outcome.grid(), &initial);
        assert_eq!(outcome.statistics().iterations, 0);
        assert!(matches!(
            outcome.termination_reason(),
            SearchTerminationReason::Aborted(_)
        ));
    }

    #[test]
    fn test_custom_catalog_and_rng() {
        let set = HeuristicSet::new(vec![Box::new(RandomSwap) as Box<dyn LowLevelHeuristic>]);
        let outcome = SimpleRandomHyperHeuristic::new(StdRng::seed_from_u64(9))
            .with_heuristics(set)
            .with_iterations(500)
            .run(
                Grid::sequential(4).unwrap(),
                &LineDeviationEvaluator,
                &mut NoOpMonitor,
            );
        assert!(outcome.grid().is_permutation());
        assert!(outcome.statistics().iterations <= 500);
    }
}
