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


//! # Calculator Float Trait
//!
//! `CalcFloat` collects the bounds generic calculator code needs from a
//! floating-point type: IEEE-754 arithmetic via `num_traits::Float`, the
//! constant traits from [`super::constants`], formatting, and thread safety.
//! Both `f32` and `f64` satisfy it through the blanket implementation.

use crate::num::constants::{MinusOne, PlusOne, Zero};
use num_traits::Float;

/// A trait alias for the floating-point types operators can be applied to.
///
/// # Examples
///
/// ```rust
/// # use simplecalc_core::num::float::CalcFloat;
/// fn halve<T: CalcFloat>(v: T) -> T {
///     v / (T::PLUS_ONE + T::PLUS_ONE)
/// }
///
/// assert_eq!(halve(9.0_f64), 4.5);
/// assert_eq!(halve(3.0_f32), 1.5);
/// ```
pub trait CalcFloat:
    Float
    + MinusOne
    + PlusOne
    + Zero
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
{
}

impl<T> CalcFloat for T where
    T: Float
        + MinusOne
        + PlusOne
        + Zero
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
{
}
