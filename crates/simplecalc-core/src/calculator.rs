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


//! # Calculator
//!
//! A stateless evaluator for the four binary arithmetic operations over
//! `f64`. Every method is a pure function of its operands and follows
//! IEEE-754 double-precision semantics exactly:
//!
//! - No input is rejected. Negative numbers, zeros, infinities and NaN are
//!   all valid operands.
//! - Nothing fails. Division of a positive number by zero yields
//!   `f64::INFINITY`, of a negative number `f64::NEG_INFINITY`, and `0 / 0`
//!   yields NaN. These are ordinary return values.
//!
//! `Calculator` is zero-sized, `Copy`, `Send` and `Sync`; share it freely or
//! construct one wherever it is needed.
//!
//! # Examples
//!
//! ```rust
//! # use simplecalc_core::calculator::Calculator;
//! # use simplecalc_core::operator::Operator;
//! let calc = Calculator::new();
//! assert_eq!(calc.add(2.0, 2.0), 4.0);
//! assert_eq!(calc.div(-100.0, 0.0), f64::NEG_INFINITY);
//! assert_eq!(calc.compute(Operator::Mul, 6.0, 6.0), 36.0);
//! ```

use crate::operator::Operator;

/// Stateless double-precision calculator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Calculator;

impl Calculator {
    /// Creates a new calculator.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Returns `a + b`.
    #[inline(always)]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    /// Returns `a - b`.
    #[inline(always)]
    pub fn sub(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    /// Returns `a * b`.
    #[inline(always)]
    pub fn mul(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Returns `a / b`.
    ///
    /// A zero divisor is not an error: the result is a signed infinity, or
    /// NaN when `a` is also zero.
    #[inline(always)]
    pub fn div(&self, a: f64, b: f64) -> f64 {
        a / b
    }

    /// Evaluates `a <op> b` by dispatching to the matching method.
    pub fn compute(&self, op: Operator, a: f64, b: f64) -> f64 {
        let result = match op {
            Operator::Add => self.add(a, b),
            Operator::Sub => self.sub(a, b),
            Operator::Mul => self.mul(a, b),
            Operator::Div => self.div(a, b),
        };
        tracing::trace!(operator = %op, a, b, result, "computed");
        result
    }
}

impl std::fmt::Display for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Calculator")
    }
}
