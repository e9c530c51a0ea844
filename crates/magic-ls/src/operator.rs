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

//! Low-level heuristics and the indexed heuristic catalog.
//!
//! A low-level heuristic (LLH) is a parameterless perturbation of a grid: it
//! draws whatever it needs from the injected random source and mutates the
//! grid in place. Heuristics never inspect the cost; deciding whether a
//! perturbation is kept is the job of the search strategy.
//!
//! The `HeuristicSet` bundles heuristics behind small integer indices so that a
//! hyper-heuristic can pick one uniformly without knowing what it does. The
//! default catalog holds two heuristics:
//!
//! - index `0`: `RandomSwap`, one swap of two uniformly drawn cells.
//! - index `1`: `DoubleRandomSwap`, two independent `RandomSwap`s in sequence.
//!
//! Coordinates are drawn independently, so a heuristic may pick the same cell
//! twice and leave the grid untouched. That is accepted behavior.

use magic_model::grid::Grid;
use rand::{Rng, RngCore};

/// A single perturbation operator over a grid.
pub trait LowLevelHeuristic: Send + Sync {
    /// Returns the name of the heuristic for logging and identification purposes.
    fn name(&self) -> &str;

    /// Perturbs `grid` in place, drawing randomness from `rng`.
    fn apply(&self, grid: &mut Grid, rng: &mut dyn RngCore);
}

impl std::fmt::Debug for dyn LowLevelHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LowLevelHeuristic {{ name: {} }}", self.name())
    }
}

impl std::fmt::Display for dyn LowLevelHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A pair of cells drawn for a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapMove {
    pub r1: usize,
    pub c1: usize,
    pub r2: usize,
    pub c2: usize,
}

impl SwapMove {
    /// Draws `r1`, `c1`, `r2`, `c2` in that order, each uniformly from `0..side`.
    #[inline]
    pub fn random<R>(side: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        debug_assert!(side > 0, "called `SwapMove::random` with a side of zero");

        let r1 = rng.random_range(0..side);
        let c1 = rng.random_range(0..side);
        let r2 = rng.random_range(0..side);
        let c2 = rng.random_range(0..side);
        Self { r1, c1, r2, c2 }
    }

    /// Applies the swap to `grid`. Applying it twice restores the grid.
    #[inline(always)]
    pub fn apply(&self, grid: &mut Grid) {
        grid.swap(self.r1, self.c1, self.r2, self.c2);
    }

    /// Returns `true` if both cells coincide, making the swap a no-op.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.r1 == self.r2 && self.c1 == self.c2
    }
}

impl std::fmt::Display for SwapMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Swap(({}, {}) <-> ({}, {}))",
            self.r1, self.c1, self.r2, self.c2
        )
    }
}

/// Swaps two uniformly random cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RandomSwap;

impl LowLevelHeuristic for RandomSwap {
    fn name(&self) -> &str {
        "RandomSwap"
    }

    #[inline]
    fn apply(&self, grid: &mut Grid, rng: &mut dyn RngCore) {
        SwapMove::random(grid.side(), rng).apply(grid);
    }
}

/// Applies [`RandomSwap`] twice, each time with freshly drawn cells.
///
/// Repeating the composed move does not undo it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DoubleRandomSwap;

impl LowLevelHeuristic for DoubleRandomSwap {
    fn name(&self) -> &str {
        "DoubleRandomSwap"
    }

    #[inline]
    fn apply(&self, grid: &mut Grid, rng: &mut dyn RngCore) {
        RandomSwap.apply(grid, rng);
        RandomSwap.apply(grid, rng);
    }
}

/// An indexed catalog of low-level heuristics.
pub struct HeuristicSet {
    heuristics: Vec<Box<dyn LowLevelHeuristic>>,
}

impl HeuristicSet {
    /// Creates a catalog from the given heuristics; index `i` selects `heuristics[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `heuristics` is empty.
    pub fn new(heuristics: Vec<Box<dyn LowLevelHeuristic>>) -> Self {
        assert!(
            !heuristics.is_empty(),
            "called `HeuristicSet::new` with an empty list of heuristics"
        );
        Self { heuristics }
    }

    /// Returns the number of heuristics in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.heuristics.len()
    }

    /// Always `false`; construction rejects empty catalogs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heuristics.is_empty()
    }

    /// Returns the name of heuristic `index`, if it exists.
    #[inline]
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.heuristics.get(index).map(|h| h.name())
    }

    /// Applies heuristic `index` to `grid`.
    ///
    /// Indices outside the catalog leave the grid untouched.
    #[inline]
    pub fn apply(&self, index: usize, grid: &mut Grid, rng: &mut dyn RngCore) {
        if let Some(h) = self.heuristics.get(index) {
            h.apply(grid, rng);
        }
    }

    /// Draws a heuristic index uniformly from `0..len()`.
    #[inline]
    pub fn choose<R>(&self, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        rng.random_range(0..self.heuristics.len())
    }
}

impl Default for HeuristicSet {
    fn default() -> Self {
        Self::new(vec![Box::new(RandomSwap), Box::new(DoubleRandomSwap)])
    }
}

impl std::fmt::Debug for HeuristicSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.heuristics.iter().map(|h| h.name()))
            .finish()
    }
}
