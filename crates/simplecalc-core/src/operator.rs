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


//! # Arithmetic Operators
//!
//! `Operator` names one of the four binary operations as a value. Hosts that
//! pick the operation at runtime (one keypad button per operator) select an
//! `Operator` and hand it to [`crate::calculator::Calculator::compute`], or
//! apply it directly to any [`CalcFloat`].
//!
//! Each operator has a canonical ASCII symbol and a stable numeric code. The
//! code is what crosses the C ABI, so existing values must never change.
//!
//! Parsing accepts the ASCII symbol, the keypad glyphs `x`, `×` and `÷`, or the
//! lowercase operation name, surrounded by optional whitespace.

use crate::num::float::CalcFloat;
use std::str::FromStr;

/// One of the four IEEE-754 binary arithmetic operations.
///
/// # Examples
///
/// ```rust
/// # use simplecalc_core::operator::Operator;
/// let op: Operator = "÷".parse().unwrap();
/// assert_eq!(op, Operator::Div);
/// assert_eq!(op.apply(25.0_f64, 0.0), f64::INFINITY);
/// assert_eq!(op.to_string(), "/");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition, `a + b`.
    Add,
    /// Subtraction, `a - b`.
    Sub,
    /// Multiplication, `a * b`.
    Mul,
    /// Division, `a / b`.
    Div,
}

impl Operator {
    /// All operators in code order.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Returns the canonical ASCII symbol.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Returns the lowercase operation name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::Div => "div",
        }
    }

    /// Returns the stable numeric code used across the C ABI.
    #[inline]
    pub const fn code(self) -> u32 {
        match self {
            Operator::Add => 0,
            Operator::Sub => 1,
            Operator::Mul => 2,
            Operator::Div => 3,
        }
    }

    /// Looks up an operator by its numeric code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use simplecalc_core::operator::Operator;
    /// assert_eq!(Operator::from_code(2), Some(Operator::Mul));
    /// assert_eq!(Operator::from_code(4), None);
    /// ```
    #[inline]
    pub const fn from_code(code: u32) -> Option<Operator> {
        match code {
            0 => Some(Operator::Add),
            1 => Some(Operator::Sub),
            2 => Some(Operator::Mul),
            3 => Some(Operator::Div),
            _ => None,
        }
    }

    /// Applies the operator to `a` and `b` with native IEEE-754 semantics.
    ///
    /// Never fails: division by zero yields a signed infinity and `0 / 0`
    /// yields NaN.
    #[inline(always)]
    pub fn apply<T>(self, a: T, b: T) -> T
    where
        T: CalcFloat,
    {
        match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => a / b,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when text does not name an operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid operator `{input}`: expected one of + - * / or add, sub, mul, div")]
pub struct ParseOperatorError {
    input: String,
}

impl ParseOperatorError {
    /// The rejected input, untrimmed.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" | "add" => Ok(Operator::Add),
            "-" | "sub" => Ok(Operator::Sub),
            "*" | "x" | "×" | "mul" => Ok(Operator::Mul),
            "/" | "÷" | "div" => Ok(Operator::Div),
            _ => Err(ParseOperatorError {
                input: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<u32> for Operator {
    type Error = u32;

    /// Converts a numeric code, handing the code back on failure.
    #[inline]
    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Operator::from_code(code).ok_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_f64() {
        assert_eq!(Operator::Add.apply(2.0_f64, 2.0), 4.0);
        assert_eq!(Operator::Sub.apply(4.0_f64, 2.0), 2.0);
        assert_eq!(Operator::Mul.apply(6.0_f64, 6.0), 36.0);
        assert_eq!(Operator::Div.apply(9.0_f64, 3.0), 3.0);
    }

    #[test]
    fn test_apply_f32() {
        assert_eq!(Operator::Add.apply(1.5_f32, 1.5), 3.0_f32);
        assert_eq!(Operator::Sub.apply(-10.0_f32, -5.0), -5.0_f32);
        assert_eq!(Operator::Mul.apply(5.0_f32, 0.0), 0.0_f32);
        assert_eq!(Operator::Div.apply(-100.0_f32, 0.0), f32::NEG_INFINITY);
    }

    #[test]
    fn test_apply_division_by_zero() {
        assert_eq!(Operator::Div.apply(25.0_f64, 0.0), f64::INFINITY);
        assert_eq!(Operator::Div.apply(-100.0_f64, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Div.apply(0.0_f64, 0.0).is_nan());
    }

    #[test]
    fn test_codes_are_stable_and_round_trip() {
        for (expected, op) in Operator::ALL.iter().enumerate() {
            assert_eq!(op.code(), expected as u32);
            assert_eq!(Operator::from_code(op.code()), Some(*op));
            assert_eq!(Operator::try_from(op.code()), Ok(*op));
        }
        assert_eq!(Operator::from_code(4), None);
        assert_eq!(Operator::try_from(u32::MAX), Err(u32::MAX));
    }

    #[test]
    fn test_display_is_symbol() {
        assert_eq!(Operator::Add.to_string(), "+");
        assert_eq!(Operator::Sub.to_string(), "-");
        assert_eq!(Operator::Mul.to_string(), "*");
        assert_eq!(Operator::Div.to_string(), "/");
    }

    #[test]
    fn test_parse_display_round_trip() {
        for op in Operator::ALL {
            assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
            assert_eq!(op.name().parse::<Operator>(), Ok(op));
        }
    }

    #[test]
    fn test_parse_keypad_glyphs_and_whitespace() {
        assert_eq!("×".parse::<Operator>(), Ok(Operator::Mul));
        assert_eq!("x".parse::<Operator>(), Ok(Operator::Mul));
        assert_eq!("÷".parse::<Operator>(), Ok(Operator::Div));
        assert_eq!("  + \n".parse::<Operator>(), Ok(Operator::Add));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "%".parse::<Operator>().unwrap_err();
        assert_eq!(err.input(), "%");
        assert!(err.to_string().contains("`%`"));

        assert!("".parse::<Operator>().is_err());
        assert!("ADD".parse::<Operator>().is_err());
        assert!("++".parse::<Operator>().is_err());
    }

    #[test]
    fn test_parse_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        let err = "mod".parse::<Operator>().unwrap_err();
        takes_error(&err);
    }
}
