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

//! Solver configuration.
//!
//! `SolverConfig` gathers every knob of a solve: grid size, strategy,
//! iteration budget, number of independent restarts, random seed, optional
//! wall-clock limit, whether a run stops at the first magic square, and
//! whether progress is logged. Configurations are assembled with
//! `SolverConfigBuilder` and checked by `validate` before any search starts.

use crate::error::SolverError;
use magic_ls::meta::metaheuristic::DEFAULT_ITERATIONS;
use std::time::Duration;

/// Which search strategy a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum StrategyKind {
    /// Simple random hyper-heuristic over the default heuristic catalog.
    #[default]
    HyperHeuristic,
    /// Hill climbing over single random swaps.
    HillClimbing,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::HyperHeuristic => write!(f, "hyper-heuristic"),
            StrategyKind::HillClimbing => write!(f, "hill-climbing"),
        }
    }
}

/// Everything the solver needs to run a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Side length of the grid.
    pub size: usize,
    /// Strategy used by every restart.
    pub strategy: StrategyKind,
    /// Iteration budget per restart.
    pub iterations: u64,
    /// Number of independent runs.
    pub restarts: usize,
    /// Base seed; restart `i` uses `seed + i`. Drawn from the OS when `None`.
    pub seed: Option<u64>,
    /// Wall-clock limit per restart.
    pub time_limit: Option<Duration>,
    /// Stop a run as soon as it reaches cost zero, and stop its siblings too.
    /// Off by default: every restart spends its whole budget.
    pub stop_at_optimum: bool,
    /// Emit periodic progress events.
    pub log_progress: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            size: 3,
            strategy: StrategyKind::default(),
            iterations: DEFAULT_ITERATIONS,
            restarts: 1,
            seed: None,
            time_limit: None,
            stop_at_optimum: false,
            log_progress: false,
        }
    }
}

impl SolverConfig {
    /// Checks that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidArgument`] if the size, the iteration
    /// budget or the number of restarts is zero.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.size == 0 {
            return Err(SolverError::InvalidArgument(
                "grid size must be at least 1".to_string(),
            ));
        }
        if self.iterations == 0 {
            return Err(SolverError::InvalidArgument(
                "iterations must be at least 1".to_string(),
            ));
        }
        if self.restarts == 0 {
            return Err(SolverError::InvalidArgument(
                "restarts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for SolverConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolverConfig(size: {}, strategy: {}, iterations: {}, restarts: {}, seed: {}, time_limit: {}, stop_at_optimum: {})",
            self.size,
            self.strategy,
            self.iterations,
            self.restarts,
            self.seed
                .map_or_else(|| "random".to_string(), |s| s.to_string()),
            self.time_limit
                .map_or_else(|| "none".to_string(), |t| format!("{:?}", t)),
            self.stop_at_optimum
        )
    }
}

/// Builder for [`SolverConfig`].
#[derive(Debug, Clone, Default)]
pub struct SolverConfigBuilder {
    config: SolverConfig,
}

impl SolverConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    #[inline]
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.config.strategy = strategy;
        self
    }

    #[inline]
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.config.iterations = iterations;
        self
    }

    #[inline]
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.config.restarts = restarts;
        self
    }

    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    #[inline]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.config.time_limit = Some(time_limit);
        self
    }

    #[inline]
    pub fn with_stop_at_optimum(mut self, stop_at_optimum: bool) -> Self {
        self.config.stop_at_optimum = stop_at_optimum;
        self
    }

    #[inline]
    pub fn with_progress_logging(mut self, log_progress: bool) -> Self {
        self.config.log_progress = log_progress;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<SolverConfig, SolverError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_run() {
        let c = SolverConfig::default();
        assert_eq!(c.size, 3);
        assert_eq!(c.strategy, StrategyKind::HyperHeuristic);
        assert_eq!(c.iterations, 10_000);
        assert_eq!(c.restarts, 1);
        assert!(!c.stop_at_optimum);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder_sets_fields() {
        let c = SolverConfigBuilder::new()
            .with_size(4)
            .with_strategy(StrategyKind::HillClimbing)
            .with_iterations(500)
            .with_restarts(3)
            .with_seed(7)
            .with_time_limit(Duration::from_secs(2))
            .with_stop_at_optimum(true)
            .with_progress_logging(true)
            .build()
            .unwrap();

        assert_eq!(c.size, 4);
        assert_eq!(c.strategy, StrategyKind::HillClimbing);
        assert_eq!(c.iterations, 500);
        assert_eq!(c.restarts, 3);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.time_limit, Some(Duration::from_secs(2)));
        assert!(c.stop_at_optimum);
        assert!(c.log_progress);
    }

    #[test]
    fn test_builder_rejects_zero_values() {
        for builder in [
            SolverConfigBuilder::new().with_size(0),
            SolverConfigBuilder::new().with_iterations(0),
            SolverConfigBuilder::new().with_restarts(0),
        ] {
            assert!(matches!(
                builder.build(),
                Err(SolverError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(StrategyKind::HyperHeuristic.to_string(), "hyper-heuristic");
        assert_eq!(StrategyKind::HillClimbing.to_string(), "hill-climbing");
    }
}
