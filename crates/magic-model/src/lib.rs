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

//! # Magic Square Model
//!
//! The data side of the magic square search. A [`grid::Grid`] stores an
//! `n x n` arrangement of integers in row-major order and offers the cell
//! primitives that move operators build upon, most importantly the
//! self-inverse [`grid::Grid::swap`]. The [`constant::magic_constant`]
//! function yields the common line sum every row, column and main diagonal
//! of a magic square of side `n` must reach.
//!
//! ## Submodules
//!
//! - `constant`: The magic constant `M(n) = n (n^2 + 1) / 2`.
//! - `error`: `GridError`, returned when a grid cannot be constructed.
//! - `grid`: The `Grid` type, its constructors, accessors and validators.

pub mod constant;
pub mod error;
pub mod grid;
