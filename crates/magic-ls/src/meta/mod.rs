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

//! Search strategies for magic squares.
//!
//! Both strategies are finite-horizon local searches over a fixed iteration
//! budget with greedy acceptance: a perturbation is kept when it does not
//! increase the cost (`new <= current`), so equal-cost moves are accepted and
//! the search may drift across plateaus. They differ in how they move and
//! how they undo a rejected move:
//!
//! - `hyper_heuristic`: picks a low-level heuristic uniformly at random each
//!   iteration and restores rejected states from a snapshot of the last
//!   accepted grid, which works for composite, non-invertible moves.
//! - `hill_climbing`: uses a single random swap and undoes a rejected move by
//!   swapping the same cells back, avoiding the snapshot copy.
//!
//! Both are deterministic for a fixed random number generator seed.

pub mod hill_climbing;
pub mod hyper_heuristic;
pub mod metaheuristic;
