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

use clap::Parser;
use magic_ls::meta::metaheuristic::DEFAULT_ITERATIONS;
use magic_solver::{
    config::{SolverConfig, StrategyKind},
    error::SolverError,
    solver::Solver,
};
use std::{process::ExitCode, time::Duration};
use tracing_subscriber::EnvFilter;

/// Searches for an n x n magic square with local search.
#[derive(Debug, Parser)]
#[command(name = "magic", version)]
struct Cli {
    /// Side length of the grid.
    #[arg(short = 'n', long, default_value_t = 3)]
    size: usize,

    /// Search strategy.
    #[arg(long, value_enum, default_value_t = StrategyKind::HyperHeuristic)]
    strategy: StrategyKind,

    /// Iteration budget per restart.
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u64,

    /// Number of independent restarts, run in parallel.
    #[arg(short, long, default_value_t = 1)]
    restarts: usize,

    /// Base seed; restart i uses seed + i.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Wall-clock limit per restart, in seconds.
    #[arg(long, value_name = "SECS")]
    time_limit: Option<f64>,

    /// Stop every restart as soon as one finds a magic square.
    #[arg(long)]
    stop_at_optimum: bool,

    /// Log search progress periodically.
    #[arg(long)]
    progress: bool,
}

impl Cli {
    fn into_config(self) -> Result<SolverConfig, SolverError> {
        let time_limit = self
            .time_limit
            .map(|secs| {
                Duration::try_from_secs_f64(secs).map_err(|e| {
                    SolverError::InvalidArgument(format!("invalid time limit {secs}: {e}"))
                })
            })
            .transpose()?;

        let config = SolverConfig {
            size: self.size,
            strategy: self.strategy,
            iterations: self.iterations,
            restarts: self.restarts,
            seed: self.seed,
            time_limit,
            stop_at_optimum: self.stop_at_optimum,
            log_progress: self.progress,
        };
        config.validate()?;
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<(), SolverError> {
    let config = cli.into_config()?;
    tracing::debug!(%config, "configuration");
    let report = Solver::new(config)?.solve()?;
    print!("{report}");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "solve failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
