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

//! # Magic Square Solver
//!
//! Top-level driver for the magic square search. It turns a
//! [`config::SolverConfig`] into one or more independent local-search runs
//! from `magic_ls` and reports the best grid found.
//!
//! ```
//! use magic_solver::{config::SolverConfigBuilder, solver::Solver};
//!
//! let config = SolverConfigBuilder::new()
//!     .with_size(3)
//!     .with_restarts(2)
//!     .with_seed(7)
//!     .build()
//!     .unwrap();
//!
//! let report = Solver::new(config).unwrap().solve().unwrap();
//! assert!(report.grid().is_permutation());
//! ```

pub mod config;
pub mod error;
pub mod solver;
