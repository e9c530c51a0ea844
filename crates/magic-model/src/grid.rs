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

//! Square grid of integers stored in row-major order.
//!
//! A `Grid` is the genotype of the magic square search: an `n x n` matrix
//! whose cells are mutated in place by move operators and snapshotted by the
//! search strategies. The sequential constructor establishes the permutation
//! invariant (every value of `1..=n^2` exactly once); afterwards the only
//! mutation the search applies is [`Grid::swap`], which preserves it. The
//! invariant is not enforced by the type, so grids built from arbitrary rows
//! can be checked with [`Grid::is_permutation`].

use crate::{constant::magic_constant, error::GridError};

/// An `n x n` arrangement of integers.
///
/// Cells are stored in a single flat buffer, row after row, so that row
/// access is a contiguous slice and cloning is a single allocation.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    side: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Creates the sequential grid of side `n`.
    ///
    /// Row `i` holds the values `i * n + 1 ..= i * n + n`, so the grid reads
    /// `1..=n^2` in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if `n` is zero or if `n^2` does not
    /// fit into a `u32`.
    pub fn sequential(n: usize) -> Result<Self, GridError> {
        let len = Self::checked_len(n)?;
        let cells = (1..=len as u32).collect();
        Ok(Self { side: n, cells })
    }

    /// Creates a grid from explicit rows.
    ///
    /// The rows are taken as they are: they need not form a permutation of
    /// `1..=n^2`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if there are no rows and
    /// [`GridError::NotSquare`] if any row's length differs from the number
    /// of rows.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u32]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let side = rows.len();
        let len = Self::checked_len(side)?;

        let mut cells = Vec::with_capacity(len);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != side {
                return Err(GridError::NotSquare {
                    row,
                    expected: side,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self { side, cells })
    }

    #[inline]
    fn checked_len(n: usize) -> Result<usize, GridError> {
        match n.checked_mul(n) {
            Some(len) if n > 0 && len <= u32::MAX as usize => Ok(len),
            _ => Err(GridError::InvalidSize(n)),
        }
    }

    #[inline(always)]
    fn index_of(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.side,
            "called `Grid::index_of` with row out of bounds: the side is {} but the row is {}",
            self.side,
            row
        );
        debug_assert!(
            col < self.side,
            "called `Grid::index_of` with column out of bounds: the side is {} but the column is {}",
            self.side,
            col
        );

        row * self.side + col
    }

    /// Returns the side length `n`.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the magic constant for this grid's side length.
    #[inline]
    pub fn magic_constant(&self) -> u64 {
        // Construction caps `side^2` at `u32::MAX`, so `side <= 65_535` and the
        // constant stays below `2^48`.
        magic_constant(self.side as u32) as u64
    }

    /// Returns the number of cells, `n^2`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the value at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the grid. In debug builds each
    /// coordinate is checked on its own.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[self.index_of(row, col)]
    }

    /// Overwrites the value at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        let index = self.index_of(row, col);
        self.cells[index] = value;
    }

    /// Exchanges the values of two cells in place.
    ///
    /// The two cells may coincide, in which case nothing changes. Applying
    /// the same swap twice restores the grid exactly.
    ///
    /// # Panics
    ///
    /// Panics if either cell lies outside the grid.
    #[inline]
    pub fn swap(&mut self, r1: usize, c1: usize, r2: usize, c2: usize) {
        let a = self.index_of(r1, c1);
        let b = self.index_of(r2, c2);
        self.cells.swap(a, b);
    }

    /// Returns row `row` as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.side;
        &self.cells[start..start + self.side]
    }

    /// Iterates over all rows from top to bottom.
    #[inline]
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u32> {
        self.cells.chunks_exact(self.side)
    }

    /// Returns all cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Copies the grid into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Sum of row `row`.
    #[inline]
    pub fn row_sum(&self, row: usize) -> u64 {
        self.row(row).iter().map(|&v| v as u64).sum()
    }

    /// Sum of column `col`.
    #[inline]
    pub fn column_sum(&self, col: usize) -> u64 {
        (0..self.side).map(|r| self.get(r, col) as u64).sum()
    }

    /// Sum of the diagonal running from the top-left to the bottom-right corner.
    #[inline]
    pub fn main_diagonal_sum(&self) -> u64 {
        (0..self.side).map(|i| self.get(i, i) as u64).sum()
    }

    /// Sum of the diagonal running from the top-right to the bottom-left corner.
    #[inline]
    pub fn anti_diagonal_sum(&self) -> u64 {
        let last = self.side - 1;
        (0..self.side).map(|i| self.get(i, last - i) as u64).sum()
    }

    /// Returns `true` if the grid holds every value of `1..=n^2` exactly once.
    pub fn is_permutation(&self) -> bool {
        let len = self.cells.len();
        let mut seen = vec![false; len];
        for &v in &self.cells {
            let v = v as usize;
            if v == 0 || v > len || seen[v - 1] {
                return false;
            }
            seen[v - 1] = true;
        }
        true
    }

    /// Returns `true` if the grid is a magic square: a permutation of
    /// `1..=n^2` whose rows, columns and both main diagonals all sum to the
    /// magic constant.
    pub fn is_magic(&self) -> bool {
        let target = self.magic_constant();
        self.is_permutation()
            && (0..self.side)
                .all(|i| self.row_sum(i) == target && self.column_sum(i) == target)
            && self.main_diagonal_sum() == target
            && self.anti_diagonal_sum() == target
    }
}

impl Clone for Grid {
    fn clone(&self) -> Self {
        Self {
            side: self.side,
            cells: self.cells.clone(),
        }
    }

    // Reuses the existing buffer; strategies snapshot every iteration.
    fn clone_from(&mut self, source: &Self) {
        self.side = source.side;
        self.cells.clone_from(&source.cells);
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.cells.len().to_string().len();
        for row in self.rows() {
            let mut first = true;
            for v in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", v, width = width)?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
