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

//! # Multi-Restart Solver
//!
//! Runs several independent searches for the same grid size in parallel and
//! keeps the best result.
//!
//! ## Highlights
//!
//! - Restart execution:
//!   - Each restart runs on its own thread inside `std::thread::scope`.
//!   - Restart `i` owns a fresh sequential grid and a `ChaCha8Rng` seeded
//!     with `seed + i`, so runs share no mutable state and each one is
//!     reproducible on its own.
//!   - A `CompositeMonitor` per thread stacks an interrupt monitor, an
//!     optional time limit and optional progress logging.
//! - Early stop:
//!   - When stopping at the optimum is enabled, the first restart to reach
//!     cost zero raises a shared `AtomicBool` and its siblings abort.
//! - Outcome:
//!   - The report keeps the lowest-cost run (ties go to the lowest restart
//!     index) together with a summary of every run.

use crate::{
    config::{SolverConfig, StrategyKind},
    error::SolverError,
};
use magic_ls::{
    eval::{LineDeviationEvaluator, LineSums},
    meta::{
        hill_climbing::HillClimbing, hyper_heuristic::SimpleRandomHyperHeuristic,
        metaheuristic::Metaheuristic,
    },
    monitor::{
        composite::CompositeMonitor, interrupt::InterruptMonitor, log::LogMonitor,
        time_limit::TimeLimitMonitor,
    },
    result::{SearchOutcome, SearchTerminationReason},
};
use magic_model::grid::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

/// The result of one restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    restart: usize,
    seed: u64,
    outcome: SearchOutcome,
}

impl RunReport {
    /// Index of the restart.
    #[inline]
    pub fn restart(&self) -> usize {
        self.restart
    }

    /// Seed of the restart's random number generator.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The search outcome of the restart.
    #[inline]
    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }
}

/// The result of a full solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    strategy: StrategyKind,
    base_seed: u64,
    runs: Vec<RunReport>,
    best: usize,
    time_total: Duration,
}

impl SolveReport {
    /// The strategy every restart used.
    #[inline]
    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// The seed restart `0` used; restart `i` used `base_seed + i`.
    #[inline]
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// All runs, ordered by restart index.
    #[inline]
    pub fn runs(&self) -> &[RunReport] {
        &self.runs
    }

    /// The lowest-cost run.
    #[inline]
    pub fn best(&self) -> &RunReport {
        &self.runs[self.best]
    }

    /// Shortcut for the best run's grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        self.best().outcome().grid()
    }

    /// Shortcut for the best run's cost.
    #[inline]
    pub fn cost(&self) -> u64 {
        self.best().outcome().cost()
    }

    /// Wall time of the whole solve.
    #[inline]
    pub fn time_total(&self) -> Duration {
        self.time_total
    }
}

impl std::fmt::Display for SolveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let best = self.best();
        let grid = best.outcome().grid();
        let target = grid.magic_constant();
        let sums = LineSums::of(grid);
        writeln!(f, "Final Solution:")?;
        write!(f, "{}", grid)?;
        writeln!(f, "Cost of the solution: {}", best.outcome().cost())?;
        writeln!(f, "Magic square: {}", grid.is_magic())?;
        writeln!(
            f,
            "Lines at {}: {} of {}",
            target,
            sums.satisfied(target),
            2 * grid.side() + 2
        )?;
        if sums.satisfied(target) < 2 * grid.side() + 2 {
            writeln!(f, "Line sums: {}", sums)?;
        }
        writeln!(f, "Strategy: {}", self.strategy)?;
        writeln!(
            f,
            "Best restart: {} of {} (seed {})",
            best.restart(),
            self.runs.len(),
            best.seed()
        )?;
        writeln!(f, "Termination: {}", best.outcome().termination_reason())?;
        write!(f, "{}", best.outcome().statistics())?;
        writeln!(f, "Solve Time: {:?}", self.time_total)
    }
}

/// Runs one or more independent searches and reports the best.
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first problem found by [`SolverConfig::validate`].
    pub fn new(config: SolverConfig) -> Result<Self, SolverError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs every restart and returns the report.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Grid`] if the grid size cannot be represented
    /// and [`SolverError::WorkerPanicked`] if a restart thread panicked.
    #[tracing::instrument(
        skip(self),
        fields(size = self.config.size, restarts = self.config.restarts)
    )]
    pub fn solve(&self) -> Result<SolveReport, SolverError> {
        let start_time = Instant::now();
        let initial = Grid::sequential(self.config.size)?;
        let base_seed = self
            .config
            .seed
            .unwrap_or_else(|| rand::rng().random::<u64>());

        tracing::info!(
            strategy = %self.config.strategy,
            iterations = self.config.iterations,
            base_seed,
            "solve started"
        );

        let stop_signal = AtomicBool::new(false);
        let runs = self.run_restarts_parallel(&initial, base_seed, &stop_signal)?;

        let best = runs
            .iter()
            .enumerate()
            .min_by_key(|(_, r)| (r.outcome.cost(), r.restart))
            .map(|(i, _)| i)
            .ok_or_else(|| SolverError::InvalidArgument("no restarts were run".to_string()))?;

        let report = SolveReport {
            strategy: self.config.strategy,
            base_seed,
            runs,
            best,
            time_total: start_time.elapsed(),
        };

        tracing::info!(
            cost = report.cost(),
            best_restart = report.best().restart(),
            elapsed = ?report.time_total(),
            "solve finished"
        );

        Ok(report)
    }

    /// Internal helper to spawn one thread per restart and collect results.
    fn run_restarts_parallel(
        &self,
        initial: &Grid,
        base_seed: u64,
        stop_signal: &AtomicBool,
    ) -> Result<Vec<RunReport>, SolverError> {
        let config = &self.config;

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..config.restarts)
                .map(|restart| {
                    let initial = initial.clone();
                    let seed = base_seed.wrapping_add(restart as u64);
                    scope.spawn(move || run_single(config, restart, seed, initial, stop_signal))
                })
                .collect();

            handles
                .into_iter()
                .enumerate()
                .map(|(restart, handle)| {
                    handle
                        .join()
                        .map_err(|_| SolverError::WorkerPanicked { restart })
                })
                .collect()
        })
    }
}

/// Runs restart `restart` to completion on the calling thread.
fn run_single(
    config: &SolverConfig,
    restart: usize,
    seed: u64,
    initial: Grid,
    stop_signal: &AtomicBool,
) -> RunReport {
    let _span = tracing::info_span!("restart", index = restart, seed).entered();

    let mut monitor = CompositeMonitor::with_capacity(3);
    monitor.add_monitor(InterruptMonitor::new(stop_signal));
    if let Some(limit) = config.time_limit {
        monitor.add_monitor(TimeLimitMonitor::new(limit));
    }
    if config.log_progress {
        monitor.add_monitor(LogMonitor::default());
    }

    let rng = ChaCha8Rng::seed_from_u64(seed);
    let evaluator = LineDeviationEvaluator::new();

    let mut strategy: Box<dyn Metaheuristic> = match config.strategy {
        StrategyKind::HyperHeuristic => Box::new(
            SimpleRandomHyperHeuristic::new(rng)
                .with_iterations(config.iterations)
                .with_stop_at_optimum(config.stop_at_optimum),
        ),
        StrategyKind::HillClimbing => Box::new(
            HillClimbing::new(rng)
                .with_iterations(config.iterations)
                .with_stop_at_optimum(config.stop_at_optimum),
        ),
    };

    let outcome = strategy.run(initial, &evaluator, &mut monitor);

    if config.stop_at_optimum
        && matches!(
            outcome.termination_reason(),
            SearchTerminationReason::Optimal
        )
    {
        tracing::info!(
            restart,
            "restart found a magic square, signaling stop to other restarts"
        );
        stop_signal.store(true, Ordering::Relaxed);
    }

    RunReport {
        restart,
        seed,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfigBuilder;

    fn solve(config: SolverConfig) -> SolveReport {
        Solver::new(config).unwrap().solve().unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SolverConfig {
            restarts: 0,
            ..Default::default()
        };
        assert!(matches!(
            Solver::new(config),
            Err(SolverError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_oversized_grid_is_reported() {
        let config = SolverConfig {
            size: 70_000,
            ..Default::default()
        };
        let solver = Solver::new(config).unwrap();
        assert!(matches!(solver.solve(), Err(SolverError::Grid(_))));
    }

    #[test]
    fn test_single_restart_is_reproducible() {
        let config = SolverConfigBuilder::new()
            .with_size(4)
            .with_iterations(3_000)
            .with_seed(99)
            .build()
            .unwrap();

        let a = solve(config.clone());
        let b = solve(config);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.cost(), b.cost());
        assert_eq!(a.base_seed(), 99);
        assert_eq!(a.runs().len(), 1);
        assert_eq!(a.best().seed(), 99);
    }

    #[test]
    fn test_restarts_use_consecutive_seeds_and_best_is_minimal() {
        let config = SolverConfigBuilder::new()
            .with_size(4)
            .with_strategy(StrategyKind::HillClimbing)
            .with_iterations(2_000)
            .with_restarts(4)
            .with_seed(10)
            .with_stop_at_optimum(false)
            .build()
            .unwrap();

        let report = solve(config);
        assert_eq!(report.runs().len(), 4);
        for (i, run) in report.runs().iter().enumerate() {
            assert_eq!(run.restart(), i);
            assert_eq!(run.seed(), 10 + i as u64);
            assert!(run.outcome().cost() >= report.cost());
            assert_eq!(run.outcome().statistics().iterations, 2_000);
        }
        assert!(report.grid().is_permutation());
    }

    #[test]
    fn test_three_by_three_reaches_magic_square_over_restarts() {
        for strategy in [StrategyKind::HyperHeuristic, StrategyKind::HillClimbing] {
            let config = SolverConfigBuilder::new()
                .with_strategy(strategy)
                .with_restarts(32)
                .with_seed(0)
                .build()
                .unwrap();

            let report = solve(config);
            assert_eq!(report.cost(), 0, "{} found no magic square", strategy);
            assert!(report.grid().is_magic());
        }
    }

    #[test]
    fn test_stop_at_optimum_ends_best_run_early() {
        let config = SolverConfigBuilder::new()
            .with_restarts(32)
            .with_seed(0)
            .with_stop_at_optimum(true)
            .build()
            .unwrap();

        let report = solve(config);
        assert_eq!(report.cost(), 0);
        assert_eq!(
            report.best().outcome().termination_reason(),
            &SearchTerminationReason::Optimal
        );
    }

    #[test]
    fn test_report_display_lists_line_sums_when_unsolved() {
        let config = SolverConfigBuilder::new()
            .with_size(4)
            .with_iterations(1)
            .with_seed(3)
            .build()
            .unwrap();
        let report = solve(config);
        let text = report.to_string();
        // One swap cannot balance all four rows of the sequential 4x4 grid.
        assert!(report.cost() > 0);
        assert!(text.contains("Lines at 34: "));
        assert!(text.contains("Line sums: rows: ["));
    }

    #[test]
    fn test_report_display_lists_solution() {
        let config = SolverConfigBuilder::new()
            .with_size(1)
            .with_seed(1)
            .build()
            .unwrap();
        let report = solve(config);
        let text = report.to_string();
        assert!(text.starts_with("Final Solution:\n1\n"));
        assert!(text.contains("Cost of the solution: 0"));
        assert!(text.contains("Magic square: true"));
        assert!(text.contains("Lines at 1: 4 of 4"));
        assert!(!text.contains("Line sums:"));
    }
}
