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

//! # Magic Square Local Search
//!
//! Perturbation-based search for magic squares. The crate separates scoring
//! (`eval`), perturbation (`operator`), control (`meta`) and observation
//! (`monitor`) so each can be swapped without touching the others.
//!
//! ## Submodules
//!
//! - `eval`: `CostEvaluator` and the line deviation cost.
//! - `operator`: Low-level heuristics and the indexed `HeuristicSet`.
//! - `meta`: The `Metaheuristic` trait, the simple random hyper-heuristic and
//!   hill climbing.
//! - `monitor`: Lifecycle observers, limits and logging.
//! - `result`: `SearchOutcome` and termination reasons.
//! - `stats`: Per-run counters.
//!
//! ## Usage
//!
//! ```rust
//! use magic_ls::eval::LineDeviationEvaluator;
//! use magic_ls::meta::hill_climbing::HillClimbing;
//! use magic_ls::meta::metaheuristic::Metaheuristic;
//! use magic_ls::monitor::no_op::NoOpMonitor;
//! use magic_model::grid::Grid;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut strategy = HillClimbing::new(StdRng::seed_from_u64(7));
//! let outcome = strategy.run(
//!     Grid::sequential(3).unwrap(),
//!     &LineDeviationEvaluator,
//!     &mut NoOpMonitor,
//! );
//! assert!(outcome.cost() <= 24);
//! ```

pub mod eval;
pub mod meta;
pub mod monitor;
pub mod operator;
pub mod result;
pub mod stats;
