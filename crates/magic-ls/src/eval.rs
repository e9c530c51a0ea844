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

//! Cost evaluation for magic square search.
//!
//! The cost of a grid measures how far it is from being magic: the sum of the
//! absolute deviations of every row, every column and both main diagonals
//! from the magic constant. A grid costs zero exactly when all `2n + 2` line
//! sums hit the constant. Evaluation is a pure function of the grid contents
//! and runs in `O(n^2)`; the search strategies call it once per iteration, so
//! it dominates their running time.
//!
//! Strategies depend on the `CostEvaluator` trait rather than on a concrete
//! scoring so that alternative objectives can be plugged in without touching
//! the search loops. `LineSums` exposes the individual sums for reporting.

use magic_model::grid::Grid;

/// A trait for scoring grids. Lower is better; zero means solved.
pub trait CostEvaluator {
    /// Returns the name of the evaluator.
    fn name(&self) -> &str;

    /// Computes the cost of `grid`.
    fn cost(&self, grid: &Grid) -> u64;
}

impl std::fmt::Debug for dyn CostEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CostEvaluator {{ name: {} }}", self.name())
    }
}

impl std::fmt::Display for dyn CostEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CostEvaluator: {}", self.name())
    }
}

/// Sums the absolute deviation of each row, column and main diagonal from
/// the magic constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LineDeviationEvaluator;

impl LineDeviationEvaluator {
    /// Creates a new `LineDeviationEvaluator`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl std::fmt::Display for LineDeviationEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LineDeviationEvaluator")
    }
}

impl CostEvaluator for LineDeviationEvaluator {
    fn name(&self) -> &str {
        "LineDeviationEvaluator"
    }

    fn cost(&self, grid: &Grid) -> u64 {
        let n = grid.side();
        let target = grid.magic_constant();

        let rows: u64 = grid
            .rows()
            .map(|row| target.abs_diff(row.iter().map(|&v| v as u64).sum()))
            .sum();

        let columns: u64 = (0..n)
            .map(|c| target.abs_diff(grid.column_sum(c)))
            .sum();

        rows + columns
            + target.abs_diff(grid.main_diagonal_sum())
            + target.abs_diff(grid.anti_diagonal_sum())
    }
}

/// The individual line sums of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineSums {
    /// `rows[i]` is the sum of row `i`.
    pub rows: Vec<u64>,
    /// `columns[j]` is the sum of column `j`.
    pub columns: Vec<u64>,
    /// Top-left to bottom-right.
    pub main_diagonal: u64,
    /// Top-right to bottom-left.
    pub anti_diagonal: u64,
}

impl LineSums {
    /// Collects all line sums of `grid`.
    pub fn of(grid: &Grid) -> Self {
        let n = grid.side();
        Self {
            rows: (0..n).map(|r| grid.row_sum(r)).collect(),
            columns: (0..n).map(|c| grid.column_sum(c)).collect(),
            main_diagonal: grid.main_diagonal_sum(),
            anti_diagonal: grid.anti_diagonal_sum(),
        }
    }

    /// Iterates over every line sum: rows, then columns, then the two diagonals.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.rows
            .iter()
            .chain(self.columns.iter())
            .copied()
            .chain([self.main_diagonal, self.anti_diagonal])
    }

    /// Total absolute deviation of all lines from `target`.
    pub fn deviation(&self, target: u64) -> u64 {
        self.iter().map(|s| target.abs_diff(s)).sum()
    }

    /// Number of lines whose sum equals `target`.
    pub fn satisfied(&self, target: u64) -> usize {
        self.iter().filter(|&s| s == target).count()
    }
}

impl std::fmt::Display for LineSums {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rows: {:?}, columns: {:?}, diagonals: [{}, {}]",
            self.rows, self.columns, self.main_diagonal, self.anti_diagonal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[[u32; 3]]) -> Grid {
        Grid::from_rows(rows.iter()).unwrap()
    }

    #[test]
    fn test_cost_of_sequential_three() {
        // rows 6, 15, 24 -> 9 + 0 + 9
        // cols 12, 15, 18 -> 3 + 0 + 3
        // diagonals 15, 15 -> 0
        let g = Grid::sequential(3).unwrap();
        assert_eq!(LineDeviationEvaluator.cost(&g), 24);
    }

    #[test]
    fn test_cost_of_single_cell_is_zero() {
        let g = Grid::sequential(1).unwrap();
        assert_eq!(LineDeviationEvaluator.cost(&g), 0);
    }

    #[test]
    fn test_cost_of_magic_square_is_zero() {
        let g = grid(&[[2, 7, 6], [9, 5, 1], [4, 3, 8]]);
        assert_eq!(LineDeviationEvaluator.cost(&g), 0);

        let durer = Grid::from_rows([
            [16u32, 3, 2, 13],
            [5, 10, 11, 8],
            [9, 6, 7, 12],
            [4, 15, 14, 1],
        ])
        .unwrap();
        assert_eq!(LineDeviationEvaluator.cost(&durer), 0);
    }

    #[test]
    fn test_cost_positive_when_not_magic() {
        for n in 2..=8 {
            let g = Grid::sequential(n).unwrap();
            assert!(LineDeviationEvaluator.cost(&g) > 0, "n = {}", n);
            assert!(!g.is_magic());
        }
    }

    #[test]
    fn test_cost_is_idempotent() {
        let g = Grid::sequential(5).unwrap();
        let ev = LineDeviationEvaluator::new();
        assert_eq!(ev.cost(&g), ev.cost(&g));
    }

    #[test]
    fn test_cost_matches_line_sums_deviation() {
        let mut g = Grid::sequential(4).unwrap();
        g.swap(0, 1, 3, 2);
        g.swap(2, 2, 1, 0);
        let sums = LineSums::of(&g);
        assert_eq!(
            LineDeviationEvaluator.cost(&g),
            sums.deviation(g.magic_constant())
        );
    }

    #[test]
    fn test_line_sums_of_sequential() {
        let sums = LineSums::of(&Grid::sequential(3).unwrap());
        assert_eq!(sums.rows, vec![6, 15, 24]);
        assert_eq!(sums.columns, vec![12, 15, 18]);
        assert_eq!(sums.main_diagonal, 15);
        assert_eq!(sums.anti_diagonal, 15);
        assert_eq!(sums.iter().count(), 8);
        assert_eq!(sums.satisfied(15), 4);
    }

    #[test]
    fn test_cost_does_not_depend_on_value_order_within_line_sums() {
        // Swapping two cells of the same row keeps every row sum; columns change.
        let mut g = Grid::sequential(3).unwrap();
        let before = LineSums::of(&g);
        g.swap(1, 0, 1, 2);
        let after = LineSums::of(&g);
        assert_eq!(before.rows, after.rows);
        assert_ne!(before.columns, after.columns);
    }
}
