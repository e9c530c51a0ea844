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

/// Returns the magic constant of a magic square with side length `n`.
///
/// Every row, column and both main diagonals of an `n x n` magic square
/// holding `1..=n^2` sum to this value. The product is formed in `u128`,
/// which holds `n (n^2 + 1)` for every `u32` side.
///
/// # Examples
///
/// ```rust
/// # use magic_model::constant::magic_constant;
///
/// assert_eq!(magic_constant(1), 1);
/// assert_eq!(magic_constant(3), 15);
/// assert_eq!(magic_constant(4), 34);
/// ```
#[inline]
pub fn magic_constant(n: u32) -> u128 {
    let n = n as u128;
    n * (n * n + 1) / 2
}
