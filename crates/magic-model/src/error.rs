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

//! Error types for grid construction.

/// The error type for building a [`Grid`](crate::grid::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GridError {
    /// The requested side length is zero or too large to number its cells.
    InvalidSize(usize),
    /// A row does not have as many cells as there are rows.
    NotSquare {
        /// The offending row.
        row: usize,
        /// The expected number of cells (the number of rows).
        expected: usize,
        /// The number of cells actually found.
        found: usize,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSize(n) => write!(
                f,
                "Grid side length must be a positive integer whose square fits into u32, got {}",
                n
            ),
            Self::NotSquare {
                row,
                expected,
                found,
            } => write!(
                f,
                "Grid is not square: row {} has {} cells but {} were expected",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for GridError {}
